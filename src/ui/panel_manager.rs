//! Panel orchestration and layout management.
//!
//! Lays out the header, status bar and task list, and funnels their
//! interactions into an ordered list of `PanelInteraction`s per frame.

use loading_content::IndicatorColors;

use crate::app::AppState;
use crate::state::TasksFilter;
use crate::ui::{header, status_bar, task_list};

/// Result of panel interactions that need to be handled by the application coordinator.
pub enum PanelInteraction {
    /// Pull gesture or Refresh button
    RefreshRequested,
    ClearCompletedRequested,
    FilterChanged(TasksFilter),
    ThemeChanged(String),
    TaskToggled(u64),
}

/// Manages the layout and rendering of all UI panels.
pub struct PanelManager;

impl PanelManager {
    /// Renders all panels in the application window.
    ///
    /// Called from the eframe::App::update() implementation. Interactions are
    /// returned in the order they should be applied.
    pub fn render_all_panels(
        ctx: &egui::Context,
        state: &mut AppState,
        loading: bool,
    ) -> Vec<PanelInteraction> {
        let mut interactions = Vec::new();

        let indicator_colors = state
            .theme
            .current_theme()
            .map(|theme| theme.colors.indicator)
            .unwrap_or_else(|| IndicatorColors::from_visuals(&ctx.style().visuals));

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            if let Some(header_interaction) = header::render_header(ui, state, loading) {
                interactions.push(match header_interaction {
                    header::HeaderInteraction::RefreshRequested => PanelInteraction::RefreshRequested,
                    header::HeaderInteraction::ClearCompletedRequested => {
                        PanelInteraction::ClearCompletedRequested
                    }
                    header::HeaderInteraction::FilterChanged(filter) => {
                        PanelInteraction::FilterChanged(filter)
                    }
                    header::HeaderInteraction::ThemeChanged(name) => PanelInteraction::ThemeChanged(name),
                });
            }
        });

        egui::TopBottomPanel::bottom("status_panel").show(ctx, |ui| {
            status_bar::render_status_bar(ui, state, loading);
        });

        let list_frame = egui::Frame::default()
            .inner_margin(egui::Margin::same(8))
            .fill(ctx.style().visuals.panel_fill);

        egui::CentralPanel::default().frame(list_frame).show(ctx, |ui| {
            for list_interaction in task_list::render_task_list(ui, state, loading, indicator_colors) {
                interactions.push(match list_interaction {
                    task_list::TaskListInteraction::RefreshRequested => PanelInteraction::RefreshRequested,
                    task_list::TaskListInteraction::TaskToggled(id) => PanelInteraction::TaskToggled(id),
                });
            }
        });

        interactions
    }
}
