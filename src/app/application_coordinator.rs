//! Application-level coordination.
//!
//! Turns panel interactions into state changes and refreshes, and applies
//! finished refreshes to the state.

use std::sync::Arc;

use crate::app::AppState;
use crate::io::{AsyncLoader, LoadResult, TaskSource};
use crate::state::TasksFilter;

/// Coordinates application-level operations.
///
/// Responsible for:
/// - Starting refreshes (from the pull gesture or the header button)
/// - Applying refresh results and errors
/// - Task edits and filter changes
pub struct ApplicationCoordinator;

impl ApplicationCoordinator {
    /// Starts a refresh unless one is already running.
    pub fn request_refresh(
        state: &mut AppState,
        loader: &mut AsyncLoader,
        source: &Arc<dyn TaskSource>,
        ctx: &egui::Context,
    ) {
        if loader.start_refresh(Arc::clone(source), ctx) {
            state.error_message = None;
        }
    }

    /// Applies a finished refresh to the state.
    ///
    /// Called once per frame. Returns true if a refresh completed this frame.
    pub fn check_loading_completion(state: &mut AppState, loader: &mut AsyncLoader) -> bool {
        match loader.check_completion() {
            LoadResult::Success(tasks) => {
                state.tasks.replace(tasks);
                state.error_message = None;
                state.refresh_count += 1;
                true
            }
            LoadResult::Error(error_msg) => {
                // Keep showing the previous tasks
                state.error_message = Some(error_msg);
                true
            }
            LoadResult::None => false,
        }
    }

    pub fn handle_task_toggled(state: &mut AppState, task_id: u64) {
        if !state.tasks.toggle(task_id) {
            tracing::warn!(task_id, "toggled task no longer exists");
        }
    }

    pub fn handle_clear_completed(state: &mut AppState) {
        let removed = state.tasks.clear_completed();
        tracing::info!(removed, "cleared completed tasks");
    }

    pub fn handle_filter_changed(state: &mut AppState, filter: TasksFilter) {
        state.tasks.set_filter(filter);
    }

    pub fn handle_theme_changed(state: &mut AppState, theme_name: &str) {
        if !state.theme.set_theme(theme_name) {
            tracing::warn!(theme = theme_name, "unknown theme requested");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::{FetchError, Task};
    use std::thread;
    use std::time::{Duration, Instant};

    struct Fixed(Vec<Task>);

    impl TaskSource for Fixed {
        fn fetch_tasks(&self) -> Result<Vec<Task>, FetchError> {
            Ok(self.0.clone())
        }
    }

    fn wait_until_applied(state: &mut AppState, loader: &mut AsyncLoader) {
        let deadline = Instant::now() + Duration::from_secs(5);
        while !ApplicationCoordinator::check_loading_completion(state, loader) {
            assert!(Instant::now() < deadline, "refresh did not complete");
            thread::sleep(Duration::from_millis(5));
        }
    }

    #[test]
    fn test_refresh_replaces_tasks() {
        let ctx = egui::Context::default();
        let mut state = AppState::new();
        let mut loader = AsyncLoader::new();
        let source: Arc<dyn TaskSource> = Arc::new(Fixed(vec![Task::new(7, "Buy milk", "")]));

        state.error_message = Some("stale".to_string());
        ApplicationCoordinator::request_refresh(&mut state, &mut loader, &source, &ctx);
        assert!(state.error_message.is_none());

        wait_until_applied(&mut state, &mut loader);
        assert_eq!(state.tasks.visible().map(|t| t.id).collect::<Vec<_>>(), vec![7]);
        assert_eq!(state.refresh_count, 1);
    }

    #[test]
    fn test_failed_refresh_keeps_tasks() {
        struct Down;
        impl TaskSource for Down {
            fn fetch_tasks(&self) -> Result<Vec<Task>, FetchError> {
                Err(FetchError::Unavailable { latency_ms: 0 })
            }
        }

        let ctx = egui::Context::default();
        let mut state = AppState::new();
        state.tasks.replace(vec![Task::new(1, "Buy milk", "")]);
        let mut loader = AsyncLoader::new();
        let source: Arc<dyn TaskSource> = Arc::new(Down);

        ApplicationCoordinator::request_refresh(&mut state, &mut loader, &source, &ctx);
        wait_until_applied(&mut state, &mut loader);

        assert_eq!(state.tasks.visible().count(), 1);
        assert!(state.error_message.as_deref().unwrap_or("").contains("Remote unavailable"));
        assert_eq!(state.refresh_count, 0);
    }
}
