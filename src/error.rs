//! Error types for refresh configuration.

/// Reasons a [`RefreshConfig`](crate::RefreshConfig) is rejected.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("Refresh config field {field} must be finite, got {value}")]
    NonFinite { field: &'static str, value: f32 },

    #[error("Refresh threshold must be positive, got {0}")]
    NonPositiveThreshold(f32),

    #[error("Maximum pull distance {max_distance} is below the refresh threshold {threshold}")]
    MaxBelowThreshold { threshold: f32, max_distance: f32 },

    #[error("Drag multiplier must be in (0, 1], got {0}")]
    DragMultiplierOutOfRange(f32),

    #[error("Settle speed must be positive, got {0}")]
    NonPositiveSettleSpeed(f32),

    #[error("Indicator radius must be positive, got {0}")]
    NonPositiveIndicatorRadius(f32),
}
