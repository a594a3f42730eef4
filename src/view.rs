//! The loading content view function.
//!
//! `compose` is the whole decision: show the empty state, or show the content
//! inside a refresh container. It is generic over the render context so the
//! same function backs the egui widget and can be evaluated without a UI.

use egui::Align2;

use crate::indicator::IndicatorState;
use crate::input::PullInput;
use crate::pull_state::PullToRefreshState;

/// Per-frame inputs supplied by the caller's state holder.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadingProps {
    /// A refresh is currently in flight
    pub loading: bool,
    /// Show the empty state instead of the content
    pub empty: bool,
}

/// Which of the two views a render selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Branch {
    Empty,
    Populated,
}

impl Branch {
    pub fn select(empty: bool) -> Self {
        if empty {
            Self::Empty
        } else {
            Self::Populated
        }
    }
}

/// Output of one render: exactly one of the two views.
#[derive(Debug, Clone, PartialEq)]
pub enum VisualTree<E, C> {
    /// Whatever the empty-state renderer produced
    Empty(E),
    /// The content inside a refresh container
    Populated {
        indicator: IndicatorState,
        /// Where the body is anchored inside the container
        alignment: Align2,
        body: C,
    },
}

impl<E, C> VisualTree<E, C> {
    pub fn branch(&self) -> Branch {
        match self {
            Self::Empty(_) => Branch::Empty,
            Self::Populated { .. } => Branch::Populated,
        }
    }

    /// The content output, if the populated view was rendered.
    pub fn body(&self) -> Option<&C> {
        match self {
            Self::Populated { body, .. } => Some(body),
            Self::Empty(_) => None,
        }
    }

    /// The empty-state output, if the empty view was rendered.
    pub fn empty_output(&self) -> Option<&E> {
        match self {
            Self::Empty(out) => Some(out),
            Self::Populated { .. } => None,
        }
    }

    /// The indicator, or `Hidden` for the empty view.
    pub fn indicator(&self) -> IndicatorState {
        match self {
            Self::Populated { indicator, .. } => *indicator,
            Self::Empty(_) => IndicatorState::Hidden,
        }
    }
}

/// Selects and renders one of the two views.
///
/// With `props.empty` set only `empty_content` runs and `state` is left
/// untouched. Otherwise `refresh_container` renders the content and drives
/// the gesture; the indicator is read from `state` after it returns.
pub fn compose<Ctx, E, C>(
    ctx: &mut Ctx,
    props: LoadingProps,
    state: &mut PullToRefreshState,
    empty_content: impl FnOnce(&mut Ctx) -> E,
    refresh_container: impl FnOnce(&mut Ctx, &mut PullToRefreshState) -> C,
) -> VisualTree<E, C>
where
    Ctx: ?Sized,
{
    match Branch::select(props.empty) {
        Branch::Empty => VisualTree::Empty(empty_content(ctx)),
        Branch::Populated => {
            let body = refresh_container(ctx, state);
            VisualTree::Populated {
                indicator: IndicatorState::of(props.loading, state),
                alignment: Align2::LEFT_TOP,
                body,
            }
        }
    }
}

/// Feeds one frame of input to the gesture and settles the indicator.
///
/// Calls `on_refresh` once if this frame completed a gesture, whatever
/// `loading` is. Returns whether it did.
pub fn drive_refresh(
    state: &mut PullToRefreshState,
    input: &PullInput,
    loading: bool,
    on_refresh: &mut impl FnMut(),
) -> bool {
    let completed = state.handle_input(input);
    if completed {
        on_refresh();
    }
    state.settle(input.dt, loading);
    completed
}

/// Renders without a UI: the context-free form of the widget.
///
/// `input` stands in for the pointer activity of this frame.
pub fn render<E, C>(
    props: LoadingProps,
    state: &mut PullToRefreshState,
    input: &PullInput,
    empty_content: impl FnOnce() -> E,
    mut on_refresh: impl FnMut(),
    content: impl FnOnce() -> C,
) -> VisualTree<E, C> {
    compose(
        &mut (),
        props,
        state,
        |_| empty_content(),
        |_, state| {
            drive_refresh(state, input, props.loading, &mut on_refresh);
            content()
        },
    )
}
