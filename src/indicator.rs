//! Refresh indicator state and painting.
//!
//! The indicator is a small filled circle centred horizontally at the top of
//! the container. It slides down with the pull distance, draws a progress arc
//! while being pulled and a spinning arc while a refresh runs.

use std::f32::consts::TAU;

use egui::{pos2, vec2, Pos2, Rect, Shape, Stroke};

use crate::config::RefreshConfig;
use crate::pull_state::PullToRefreshState;
use crate::theme::IndicatorColors;

/// Longest sweep of the progress arc, as a fraction of a full turn.
const MAX_PROGRESS_SWEEP: f32 = 0.8;
/// Segments used to approximate a full circle.
const ARC_SEGMENTS: usize = 48;

/// What the indicator shows this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IndicatorState {
    /// Not visible
    Hidden,
    /// Following a pull; `progress` is the distance fraction (1.0 = armed)
    Pulling { progress: f32 },
    /// A refresh is in flight
    Refreshing,
}

impl IndicatorState {
    /// Derives the indicator from the caller's `loading` flag and the pull state.
    pub fn of(loading: bool, state: &PullToRefreshState) -> Self {
        if loading {
            Self::Refreshing
        } else if state.distance() > 0.0 {
            Self::Pulling {
                progress: state.distance_fraction(),
            }
        } else {
            Self::Hidden
        }
    }

    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::Hidden)
    }
}

/// Center of the indicator for a container whose top edge is at `top`.
///
/// At zero distance the indicator sits just above the container, fully hidden.
pub fn indicator_center(container: Rect, distance: f32, radius: f32) -> Pos2 {
    pos2(container.center().x, container.top() + distance - radius)
}

/// Start and end angles (radians) of the arc drawn for `state` at time `time`.
pub fn arc_angles(state: IndicatorState, time: f64) -> Option<(f32, f32)> {
    match state {
        IndicatorState::Hidden => None,
        IndicatorState::Pulling { progress } => {
            let start = -TAU / 4.0;
            let sweep = progress.clamp(0.0, 1.0) * MAX_PROGRESS_SWEEP * TAU;
            Some((start, start + sweep))
        }
        IndicatorState::Refreshing => {
            let start = (time * TAU as f64) as f32;
            let sweep = (0.15 + 0.5 * (time as f32 * 1.7).sin().abs()) * TAU;
            Some((start, start + sweep))
        }
    }
}

fn arc_points(center: Pos2, radius: f32, start: f32, end: f32) -> Vec<Pos2> {
    let segments = ((ARC_SEGMENTS as f32 * (end - start).abs() / TAU).ceil() as usize).max(2);
    (0..=segments)
        .map(|i| {
            let angle = start + (end - start) * i as f32 / segments as f32;
            center + radius * vec2(angle.cos(), angle.sin())
        })
        .collect()
}

/// Paints the indicator over `container`, clipped to it.
pub fn paint(
    ui: &egui::Ui,
    container: Rect,
    state: IndicatorState,
    distance: f32,
    config: &RefreshConfig,
    colors: &IndicatorColors,
) {
    let time = ui.input(|i| i.time);
    let Some((start, end)) = arc_angles(state, time) else {
        return;
    };

    let radius = config.indicator_radius;
    let center = indicator_center(container, distance, radius);
    let painter = ui.painter_at(container);

    painter.circle_filled(center, radius, colors.container);

    let alpha = match state {
        IndicatorState::Pulling { progress } => progress.clamp(0.3, 1.0),
        _ => 1.0,
    };
    let stroke = Stroke::new(radius * 0.18, colors.spinner.gamma_multiply(alpha));
    painter.add(Shape::line(arc_points(center, radius * 0.55, start, end), stroke));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loading_wins_over_pull() {
        let mut state = PullToRefreshState::new();
        state.drag(40.0, true);
        assert_eq!(IndicatorState::of(true, &state), IndicatorState::Refreshing);
    }

    #[test]
    fn test_hidden_at_rest() {
        let state = PullToRefreshState::new();
        assert_eq!(IndicatorState::of(false, &state), IndicatorState::Hidden);
        assert!(!IndicatorState::of(false, &state).is_visible());
    }

    #[test]
    fn test_pulling_reports_fraction() {
        let mut state = PullToRefreshState::new();
        state.drag(80.0, true);
        assert_eq!(IndicatorState::of(false, &state), IndicatorState::Pulling { progress: 0.5 });
    }

    #[test]
    fn test_center_is_top_center() {
        let container = Rect::from_min_size(pos2(10.0, 20.0), vec2(200.0, 400.0));
        assert_eq!(indicator_center(container, 0.0, 16.0), pos2(110.0, 4.0));
        assert_eq!(indicator_center(container, 80.0, 16.0), pos2(110.0, 84.0));
    }

    #[test]
    fn test_progress_arc_capped() {
        let (start, end) = arc_angles(IndicatorState::Pulling { progress: 3.0 }, 0.0).unwrap();
        assert!((end - start - MAX_PROGRESS_SWEEP * TAU).abs() < 1e-4);
        assert!(arc_angles(IndicatorState::Hidden, 0.0).is_none());
    }

    #[test]
    fn test_arc_points_endpoints() {
        let points = arc_points(Pos2::ZERO, 10.0, 0.0, TAU / 4.0);
        let first = points.first().unwrap();
        let last = points.last().unwrap();
        assert!((first.x - 10.0).abs() < 1e-4 && first.y.abs() < 1e-4);
        assert!(last.x.abs() < 1e-4 && (last.y - 10.0).abs() < 1e-4);
    }
}
