//! Centralized application state for the demo.
//!
//! Composes focused state components, each keeping its own invariants:
//! the task list, the theme, and the pull-to-refresh state of the list.

use loading_content::{PullToRefreshState, RefreshConfig};

use crate::state::{TasksFilter, TasksState, ThemeState};

/// Main application state composed of focused state components.
pub struct AppState {
    /// Tasks as last fetched, plus the active filter
    pub tasks: TasksState,

    /// Theme selection
    pub theme: ThemeState,

    /// Gesture state of the task list's refresh container
    pub pull: PullToRefreshState,

    /// Message from the last failed refresh, if any
    pub error_message: Option<String>,

    /// Number of refreshes that completed successfully
    pub refresh_count: u64,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::with_settings(ThemeState::new().current_theme_name().to_string(), RefreshConfig::default(), TasksFilter::All)
    }

    /// Creates state from settings loaded at startup.
    pub fn with_settings(theme_name: String, refresh_config: RefreshConfig, filter: TasksFilter) -> Self {
        let mut tasks = TasksState::new();
        tasks.set_filter(filter);

        Self {
            tasks,
            theme: ThemeState::with_theme(theme_name),
            pull: PullToRefreshState::with_config(refresh_config),
            error_message: None,
            refresh_count: 0,
        }
    }

    /// Whether the list should show its empty state.
    ///
    /// A list that is still loading is never considered empty, so the
    /// spinner is visible on first load.
    pub fn show_empty(&self, loading: bool) -> bool {
        !loading && !self.tasks.has_visible()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::Task;

    #[test]
    fn test_loading_is_never_empty() {
        let state = AppState::new();
        assert!(!state.show_empty(true));
        assert!(state.show_empty(false));
    }

    #[test]
    fn test_filter_drives_empty() {
        let mut state = AppState::with_settings("Dark".to_string(), RefreshConfig::default(), TasksFilter::Completed);
        state.tasks.replace(vec![Task::new(1, "Buy milk", "")]);
        assert!(state.show_empty(false));

        state.tasks.set_filter(TasksFilter::Active);
        assert!(!state.show_empty(false));
    }
}
