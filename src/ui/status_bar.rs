//! Status bar UI rendering

use egui::RichText;

use crate::app::AppState;

/// Renders task counts and the last refresh error.
pub fn render_status_bar(ui: &mut egui::Ui, state: &AppState, loading: bool) {
    ui.horizontal(|ui| {
        ui.label(RichText::new(format!(
            "{} active | {} completed",
            state.tasks.active_count(),
            state.tasks.completed_count()
        )).strong());

        ui.label(RichText::new("|").strong());
        if loading {
            ui.label("Refreshing…");
        } else {
            ui.label(format!("Refreshed {} times", state.refresh_count));
        }

        if let Some(err) = &state.error_message {
            ui.label(RichText::new("|").strong());
            ui.colored_label(ui.visuals().error_fg_color, err);
        }
    });
}
