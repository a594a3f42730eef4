//! Ready-made empty-state view.
//!
//! A centered icon, message and optional description, suitable as the
//! `empty_content` of a [`LoadingContent`](crate::LoadingContent).

use egui::{RichText, Ui};

const ICON_SIZE: f32 = 48.0;
const MESSAGE_SIZE: f32 = 18.0;

/// Placeholder shown when there is nothing to display.
#[derive(Debug, Clone)]
pub struct EmptyState {
    icon: String,
    message: String,
    description: Option<String>,
}

impl EmptyState {
    pub fn new(icon: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            icon: icon.into(),
            message: message.into(),
            description: None,
        }
    }

    /// Adds a line of smaller text below the message
    pub fn description(mut self, text: impl Into<String>) -> Self {
        self.description = Some(text.into());
        self
    }

    /// Renders the empty state centered horizontally, near the top of the
    /// available space.
    pub fn show(self, ui: &mut Ui) {
        let dim = ui.visuals().weak_text_color();

        ui.vertical_centered(|ui| {
            ui.add_space(40.0);
            ui.label(RichText::new(&self.icon).size(ICON_SIZE));
            ui.add_space(15.0);
            ui.label(RichText::new(&self.message).size(MESSAGE_SIZE).color(dim));

            if let Some(desc) = self.description {
                ui.add_space(8.0);
                ui.label(RichText::new(desc).size(14.0).color(dim));
            }

            ui.add_space(40.0);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shown_height(empty: EmptyState) -> f32 {
        let ctx = egui::Context::default();
        let mut height = 0.0;
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                let top = ui.cursor().top();
                empty.clone().show(ui);
                height = ui.cursor().top() - top;
            });
        });
        height
    }

    #[test]
    fn test_description_adds_a_line() {
        let plain = shown_height(EmptyState::new("📋", "You have no tasks!"));
        let described =
            shown_height(EmptyState::new("📋", "You have no tasks!").description("Press Refresh to load tasks"));

        assert!(plain > 80.0);
        assert!(described > plain);
    }
}
