pub mod config;
pub mod empty_state;
pub mod error;
pub mod indicator;
pub mod input;
pub mod loading_content;
pub mod pull_state;
pub mod theme;
pub mod view;

// Export the widget
pub use loading_content::{LoadingContent, LoadingContentResponse};

// Export the view function and its output
pub use view::{compose, drive_refresh, render, Branch, LoadingProps, VisualTree};

// Export gesture state
pub use pull_state::{PullPhase, PullToRefreshState};
pub use input::PullInput;
pub use indicator::IndicatorState;

// Export configuration and errors
pub use config::RefreshConfig;
pub use error::ConfigError;

// Export theme support
pub use theme::{IndicatorColors, Theme, ThemeColors, ThemeManager, PRIMARY_DARK};

pub use empty_state::EmptyState;
