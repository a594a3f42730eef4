//! The `LoadingContent` egui widget.
//!
//! Shows an empty state, or the caller's content in a vertically scrolling
//! body with pull-to-refresh. Pulling down while the body is scrolled to its
//! top drags an indicator in from the top edge; releasing past the threshold
//! calls `on_refresh`. While `loading` is set the indicator spins at the top
//! center of the body.
//!
//! ```no_run
//! use loading_content::{LoadingContent, PullToRefreshState};
//!
//! fn tasks_ui(ui: &mut egui::Ui, pull: &mut PullToRefreshState, tasks: &[String], loading: bool) {
//!     LoadingContent::new(pull)
//!         .loading(loading)
//!         .empty(tasks.is_empty() && !loading)
//!         .show(
//!             ui,
//!             |ui| { ui.label("You have no tasks!"); },
//!             || { /* start a reload */ },
//!             |ui| {
//!                 for task in tasks {
//!                     ui.label(task);
//!                 }
//!             },
//!         );
//! }
//! ```

use egui::{Align, Id, Layout, ScrollArea, Ui};

use crate::indicator::{self, IndicatorState};
use crate::input::PullInput;
use crate::pull_state::{PullPhase, PullToRefreshState};
use crate::theme::IndicatorColors;
use crate::view::{self, LoadingProps, VisualTree};

/// Result of showing a [`LoadingContent`].
#[derive(Debug)]
pub struct LoadingContentResponse<E, C> {
    /// Which view was rendered, with the renderers' outputs
    pub tree: VisualTree<E, C>,
    /// A pull gesture completed this frame and `on_refresh` was called
    pub refreshed: bool,
}

/// Empty state or pull-to-refresh content, chosen per frame.
///
/// The gesture state is owned by the caller and borrowed for the frame, so
/// it survives across frames exactly as long as the caller keeps it.
#[must_use = "You should call .show()"]
pub struct LoadingContent<'a> {
    state: &'a mut PullToRefreshState,
    props: LoadingProps,
    id_salt: Id,
    colors: Option<IndicatorColors>,
}

impl<'a> LoadingContent<'a> {
    pub fn new(state: &'a mut PullToRefreshState) -> Self {
        Self {
            state,
            props: LoadingProps::default(),
            id_salt: Id::new("loading_content"),
            colors: None,
        }
    }

    /// Whether a refresh is in flight (shows the spinning indicator).
    pub fn loading(mut self, loading: bool) -> Self {
        self.props.loading = loading;
        self
    }

    /// Whether to show the empty state instead of the content.
    pub fn empty(mut self, empty: bool) -> Self {
        self.props.empty = empty;
        self
    }

    /// Distinguishes several of these widgets in the same `Ui`.
    pub fn id_salt(mut self, id_salt: impl std::hash::Hash) -> Self {
        self.id_salt = Id::new(id_salt);
        self
    }

    /// Overrides the indicator colors (default: derived from the visuals).
    pub fn colors(mut self, colors: IndicatorColors) -> Self {
        self.colors = Some(colors);
        self
    }

    /// Renders one frame.
    ///
    /// `empty_content` runs only when `empty` is set, in which case `loading`
    /// and `on_refresh` are ignored. Otherwise `content` runs inside the
    /// scrolling body, anchored top-left.
    pub fn show<E, C>(
        self,
        ui: &mut Ui,
        empty_content: impl FnOnce(&mut Ui) -> E,
        mut on_refresh: impl FnMut(),
        content: impl FnOnce(&mut Ui) -> C,
    ) -> LoadingContentResponse<E, C> {
        let Self {
            state,
            props,
            id_salt,
            colors,
        } = self;
        let id = ui.make_persistent_id(id_salt);
        let mut refreshed = false;

        let tree = view::compose(ui, props, state, empty_content, |ui, state| {
            let output = ScrollArea::vertical()
                .id_salt(id.with("body"))
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    ui.with_layout(Layout::top_down(Align::Min), content).inner
                });

            let content_at_top = output.state.offset.y <= 0.0;
            let input = PullInput::from_ui(ui, output.inner_rect, content_at_top);
            refreshed = view::drive_refresh(state, &input, props.loading, &mut on_refresh);

            let indicator = IndicatorState::of(props.loading, state);
            let colors = colors.unwrap_or_else(|| IndicatorColors::from_visuals(ui.visuals()));
            indicator::paint(ui, output.inner_rect, indicator, state.distance(), state.config(), &colors);

            if indicator.is_visible() || state.phase() != PullPhase::Idle {
                ui.ctx().request_repaint();
            }

            output.inner
        });

        LoadingContentResponse { tree, refreshed }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_frame(mut add_contents: impl FnMut(&mut Ui)) {
        let ctx = egui::Context::default();
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| add_contents(ui));
        });
    }

    #[test]
    fn test_empty_branch_skips_content() {
        let mut state = PullToRefreshState::new();
        let mut tree = None;
        run_frame(|ui| {
            let response = LoadingContent::new(&mut state)
                .loading(true)
                .empty(true)
                .show(ui, |_| "empty", || panic!("refresh"), |_| panic!("content"));
            tree = Some(response.tree);
        });
        assert_eq!(tree, Some(VisualTree::Empty("empty")));
    }

    #[test]
    fn test_populated_branch_renders_content() {
        let mut state = PullToRefreshState::new();
        let mut tree = None;
        run_frame(|ui| {
            let response = LoadingContent::new(&mut state)
                .loading(true)
                .show(ui, |_| panic!("empty"), || {}, |ui| ui.label("task").clicked());
            assert!(!response.refreshed);
            tree = Some(response.tree);
        });

        let tree = tree.unwrap();
        assert_eq!(tree.body(), Some(&false));
        assert_eq!(tree.indicator(), IndicatorState::Refreshing);
    }

    #[test]
    fn test_idle_populated_has_hidden_indicator() {
        let mut state = PullToRefreshState::new();
        let mut indicator = None;
        run_frame(|ui| {
            let response = LoadingContent::new(&mut state)
                .id_salt("tasks")
                .colors(IndicatorColors::dark())
                .show(ui, |_| (), || {}, |_| ());
            indicator = Some(response.tree.indicator());
        });
        assert_eq!(indicator, Some(IndicatorState::Hidden));
        assert_eq!(state.phase(), PullPhase::Idle);
    }
}
