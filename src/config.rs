//! Tunable constants for the pull-to-refresh gesture.
//!
//! The defaults follow the usual mobile conventions: the gesture arms after
//! 80 points of indicator travel, and the finger moves twice as far as the
//! indicator does.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Gesture and indicator tuning for [`PullToRefreshState`](crate::PullToRefreshState).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RefreshConfig {
    /// Indicator travel (in points) at which a release triggers a refresh
    pub threshold: f32,
    /// Upper bound on indicator travel
    pub max_distance: f32,
    /// Fraction of pointer movement applied to indicator travel
    pub drag_multiplier: f32,
    /// Exponential settle rate per second
    pub settle_speed: f32,
    /// Radius of the circular indicator
    pub indicator_radius: f32,
}

impl Default for RefreshConfig {
    fn default() -> Self {
        Self {
            threshold: 80.0,
            max_distance: 160.0,
            drag_multiplier: 0.5,
            settle_speed: 12.0,
            indicator_radius: 16.0,
        }
    }
}

impl RefreshConfig {
    /// Checks that every field is in range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in self.fields() {
            if value.is_infinite() {
                return Err(ConfigError::NonFinite { field, value });
            }
        }
        if !(self.threshold > 0.0) {
            return Err(ConfigError::NonPositiveThreshold(self.threshold));
        }
        if !(self.max_distance >= self.threshold) {
            return Err(ConfigError::MaxBelowThreshold {
                threshold: self.threshold,
                max_distance: self.max_distance,
            });
        }
        if !(self.drag_multiplier > 0.0 && self.drag_multiplier <= 1.0) {
            return Err(ConfigError::DragMultiplierOutOfRange(self.drag_multiplier));
        }
        if !(self.settle_speed > 0.0) {
            return Err(ConfigError::NonPositiveSettleSpeed(self.settle_speed));
        }
        if !(self.indicator_radius > 0.0) {
            return Err(ConfigError::NonPositiveIndicatorRadius(self.indicator_radius));
        }
        Ok(())
    }

    fn fields(&self) -> [(&'static str, f32); 5] {
        [
            ("threshold", self.threshold),
            ("max_distance", self.max_distance),
            ("drag_multiplier", self.drag_multiplier),
            ("settle_speed", self.settle_speed),
            ("indicator_radius", self.indicator_radius),
        ]
    }

    /// Returns this config if valid, otherwise the defaults.
    pub fn or_default(self) -> Self {
        match self.validate() {
            Ok(()) => self,
            Err(err) => {
                tracing::warn!(%err, "invalid refresh config, falling back to defaults");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert_eq!(RefreshConfig::default().validate(), Ok(()));
    }

    #[test]
    fn test_rejects_max_below_threshold() {
        let config = RefreshConfig {
            threshold: 100.0,
            max_distance: 50.0,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::MaxBelowThreshold { threshold: 100.0, max_distance: 50.0 })
        );
    }

    #[test]
    fn test_rejects_nan_threshold() {
        let config = RefreshConfig {
            threshold: f32::NAN,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::NonPositiveThreshold(_))));
    }

    #[test]
    fn test_rejects_infinite_fields() {
        let config = RefreshConfig {
            threshold: f32::INFINITY,
            max_distance: f32::INFINITY,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::NonFinite { field: "threshold", value: f32::INFINITY })
        );

        let config = RefreshConfig {
            settle_speed: f32::INFINITY,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonFinite { field: "settle_speed", .. })
        ));
    }

    #[test]
    fn test_rejects_multiplier_above_one() {
        let config = RefreshConfig {
            drag_multiplier: 1.5,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::DragMultiplierOutOfRange(1.5)));
    }

    #[test]
    fn test_or_default_replaces_invalid() {
        let config = RefreshConfig {
            settle_speed: 0.0,
            ..Default::default()
        };
        assert_eq!(config.or_default(), RefreshConfig::default());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: RefreshConfig = serde_json::from_str(r#"{"threshold": 64.0}"#).unwrap();
        assert_eq!(config.threshold, 64.0);
        assert_eq!(config.max_distance, RefreshConfig::default().max_distance);
    }
}
