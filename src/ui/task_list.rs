//! Task list rendering
//!
//! The central panel: the task rows inside a `LoadingContent`, so the list
//! can be pulled to refresh and shows a per-filter empty state.

use egui::RichText;
use loading_content::{EmptyState, IndicatorColors, LoadingContent};

use crate::app::AppState;

/// Result of task list interactions that need to be handled by the application.
#[derive(Debug, PartialEq, Eq)]
pub enum TaskListInteraction {
    /// The list was pulled past the threshold and released
    RefreshRequested,
    /// A task's checkbox was clicked
    TaskToggled(u64),
}

/// Renders the task list.
///
/// `indicator_colors` come from the active theme; `loading` is whether a
/// refresh is in flight. A toggle and a completed pull can land in the same
/// frame; both are returned, the toggle first.
pub fn render_task_list(
    ui: &mut egui::Ui,
    state: &mut AppState,
    loading: bool,
    indicator_colors: IndicatorColors,
) -> Vec<TaskListInteraction> {
    let mut refresh_requested = false;
    let mut toggled = None;
    let empty = state.show_empty(loading);
    let filter = state.tasks.filter();
    let tasks = &state.tasks;

    LoadingContent::new(&mut state.pull)
        .id_salt("task_list")
        .loading(loading)
        .empty(empty)
        .colors(indicator_colors)
        .show(
            ui,
            |ui| {
                EmptyState::new(filter.empty_icon(), filter.empty_message())
                    .description("Press Refresh to load tasks")
                    .show(ui)
            },
            || refresh_requested = true,
            |ui| {
                for task in tasks.visible() {
                    let mut completed = task.completed;
                    ui.horizontal(|ui| {
                        if ui.checkbox(&mut completed, "").changed() {
                            toggled = Some(task.id);
                        }
                        let title = RichText::new(&task.title);
                        if task.completed {
                            ui.label(title.strikethrough().weak());
                        } else {
                            ui.label(title);
                        }
                    });
                    ui.label(RichText::new(&task.description).small().weak());
                    ui.separator();
                }
            },
        );

    collect_interactions(toggled, refresh_requested)
}

fn collect_interactions(toggled: Option<u64>, refresh_requested: bool) -> Vec<TaskListInteraction> {
    let mut interactions: Vec<TaskListInteraction> =
        toggled.map(TaskListInteraction::TaskToggled).into_iter().collect();
    if refresh_requested {
        interactions.push(TaskListInteraction::RefreshRequested);
    }
    interactions
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_survives_refresh_in_same_frame() {
        let interactions = collect_interactions(Some(3), true);
        assert_eq!(
            interactions,
            vec![TaskListInteraction::TaskToggled(3), TaskListInteraction::RefreshRequested]
        );
    }

    #[test]
    fn test_quiet_frame_has_no_interactions() {
        assert!(collect_interactions(None, false).is_empty());
        assert_eq!(collect_interactions(None, true), vec![TaskListInteraction::RefreshRequested]);
    }
}
