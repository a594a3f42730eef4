//! Header panel UI rendering
//!
//! Filter selector, refresh and clear-completed buttons, and the theme selector.

use crate::app::AppState;
use crate::state::TasksFilter;

/// Result of user interaction with the header panel
pub enum HeaderInteraction {
    /// User clicked "Refresh"
    RefreshRequested,
    /// User clicked "Clear completed"
    ClearCompletedRequested,
    /// User picked another filter
    FilterChanged(TasksFilter),
    /// User picked another theme
    ThemeChanged(String),
}

/// Renders the header row.
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Reference to application state
/// * `loading` - Whether a refresh is running (disables "Refresh")
pub fn render_header(ui: &mut egui::Ui, state: &AppState, loading: bool) -> Option<HeaderInteraction> {
    let mut interaction = None;

    ui.horizontal(|ui| {
        ui.heading(state.tasks.filter().label());
        ui.separator();

        let mut filter = state.tasks.filter();
        for option in TasksFilter::ALL {
            ui.selectable_value(&mut filter, option, option.label());
        }
        if filter != state.tasks.filter() {
            interaction = Some(HeaderInteraction::FilterChanged(filter));
        }

        ui.separator();

        if ui.add_enabled(!loading, egui::Button::new("⟳ Refresh")).clicked() {
            interaction = Some(HeaderInteraction::RefreshRequested);
        }

        let has_completed = state.tasks.completed_count() > 0;
        if ui.add_enabled(has_completed, egui::Button::new("🗑 Clear completed")).clicked() {
            interaction = Some(HeaderInteraction::ClearCompletedRequested);
        }

        // Push theme selector to the right
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let old_theme = state.theme.current_theme_name();
            let mut current_theme = old_theme.to_string();
            egui::ComboBox::from_id_salt("theme_selector")
                .selected_text(&current_theme)
                .show_ui(ui, |ui| {
                    for theme_name in state.theme.theme_manager().list_themes() {
                        ui.selectable_value(&mut current_theme, theme_name.to_string(), theme_name);
                    }
                });

            if old_theme != current_theme {
                interaction = Some(HeaderInteraction::ThemeChanged(current_theme));
            }

            ui.label("Theme:");
        });
    });

    interaction
}
