//! Pull-to-refresh gesture and animation state.
//!
//! This module holds the state that a pull-to-refresh container keeps between
//! frames: how far the indicator has been pulled, whether a gesture is in
//! progress, and the settle animation after release. The state is owned by
//! whoever owns the container and is passed to it by mutable reference each
//! frame; dropping it discards any gesture in flight.

use crate::config::RefreshConfig;
use crate::input::PullInput;

/// Distance below which the settle animation snaps to its target.
const SNAP_EPSILON: f32 = 0.5;

/// Where the pull gesture currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PullPhase {
    /// No gesture and no animation
    #[default]
    Idle,
    /// Pointer held, indicator following the drag
    Pulling,
    /// Released, indicator animating to its resting position
    Settling,
}

/// Explicit state object behind a pull-to-refresh container.
///
/// Responsibilities:
/// - Accumulating pull distance while the body is at its top edge
/// - Deciding on release whether the gesture completed
/// - Animating the indicator back to rest, or to the refresh position while
///   a refresh is running
#[derive(Debug, Clone, Default)]
pub struct PullToRefreshState {
    config: RefreshConfig,
    /// Indicator travel in points, always within `[0, max_distance]`
    distance: f32,
    phase: PullPhase,
    /// Number of releases that crossed the threshold
    completed_gestures: u64,
}

impl PullToRefreshState {
    /// Creates an idle state with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an idle state with `config`, or the defaults if it is invalid.
    pub fn with_config(config: RefreshConfig) -> Self {
        Self {
            config: config.or_default(),
            ..Self::default()
        }
    }

    /// Replaces the configuration, keeping the current distance within bounds.
    pub fn set_config(&mut self, config: RefreshConfig) {
        self.config = config.or_default();
        self.distance = self.distance.min(self.config.max_distance);
    }

    // ===== Queries =====

    pub fn config(&self) -> &RefreshConfig {
        &self.config
    }

    /// Current indicator travel in points.
    pub fn distance(&self) -> f32 {
        self.distance
    }

    /// Indicator travel relative to the refresh threshold (1.0 = armed).
    pub fn distance_fraction(&self) -> f32 {
        self.distance / self.config.threshold
    }

    pub fn phase(&self) -> PullPhase {
        self.phase
    }

    /// Returns true while the pointer is pulling the indicator.
    pub fn is_pulling(&self) -> bool {
        self.phase == PullPhase::Pulling
    }

    /// Number of gestures that ended past the threshold.
    pub fn completed_gestures(&self) -> u64 {
        self.completed_gestures
    }

    // ===== Gesture =====

    /// Advances the gesture by one frame of input.
    ///
    /// Returns true only on the frame whose release completes a gesture past
    /// the threshold.
    pub fn handle_input(&mut self, input: &PullInput) -> bool {
        if input.pointer_down {
            if input.drag_delta_y != 0.0 {
                self.drag(input.drag_delta_y, input.content_at_top);
            }
            return false;
        }

        if input.released {
            self.release()
        } else {
            self.cancel();
            false
        }
    }

    /// Applies a vertical drag of `delta_y` points and returns the change in
    /// indicator travel.
    ///
    /// A pull only begins with a downward drag while the body is at its top;
    /// once pulling, upward drags retract the indicator.
    pub fn drag(&mut self, delta_y: f32, content_at_top: bool) -> f32 {
        if self.phase != PullPhase::Pulling {
            if !(delta_y > 0.0 && content_at_top) {
                return 0.0;
            }
            self.transition(PullPhase::Pulling);
        }

        let before = self.distance;
        self.distance = (self.distance + delta_y * self.config.drag_multiplier)
            .clamp(0.0, self.config.max_distance);
        self.distance - before
    }

    /// Ends the gesture. Returns true if the indicator was pulled past the
    /// threshold.
    pub fn release(&mut self) -> bool {
        if self.phase != PullPhase::Pulling {
            return false;
        }

        let completed = self.distance_fraction() >= 1.0;
        self.transition(PullPhase::Settling);
        if completed {
            self.completed_gestures += 1;
            tracing::debug!(
                distance = self.distance,
                gestures = self.completed_gestures,
                "pull gesture completed"
            );
        }
        completed
    }

    /// Ends the gesture without completing it.
    pub fn cancel(&mut self) {
        if self.phase == PullPhase::Pulling {
            self.transition(PullPhase::Settling);
        }
    }

    // ===== Animation =====

    /// Moves the indicator toward its resting position over `dt` seconds.
    ///
    /// While `refreshing` the rest position is the threshold, otherwise the
    /// top edge. Returns true while the indicator is still moving.
    pub fn settle(&mut self, dt: f32, refreshing: bool) -> bool {
        if self.phase == PullPhase::Pulling {
            return false;
        }

        let target = if refreshing { self.config.threshold } else { 0.0 };
        if (self.distance - target).abs() <= SNAP_EPSILON {
            self.distance = target;
            self.transition(PullPhase::Idle);
            return false;
        }

        if self.phase == PullPhase::Idle {
            self.transition(PullPhase::Settling);
        }
        let step = 1.0 - (-self.config.settle_speed * dt.max(0.0)).exp();
        self.distance += (target - self.distance) * step;
        true
    }

    fn transition(&mut self, phase: PullPhase) {
        if self.phase != phase {
            tracing::trace!(from = ?self.phase, to = ?phase, "pull phase");
            self.phase = phase;
        }
    }
}
