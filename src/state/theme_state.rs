//! Theme selection state.

use loading_content::{Theme, ThemeManager};

const DEFAULT_THEME: &str = "Light";

/// Tracks the built-in themes and which one is active.
pub struct ThemeState {
    theme_manager: ThemeManager,
    current_theme_name: String,
}

impl std::fmt::Debug for ThemeState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeState")
            .field("current_theme_name", &self.current_theme_name)
            .finish_non_exhaustive()
    }
}

impl Default for ThemeState {
    fn default() -> Self {
        Self::new()
    }
}

impl ThemeState {
    pub fn new() -> Self {
        Self::with_theme(DEFAULT_THEME.to_string())
    }

    /// Creates a theme state with `theme_name` active, or the default theme
    /// if no such theme exists.
    pub fn with_theme(theme_name: String) -> Self {
        let theme_manager = ThemeManager::new();
        let current_theme_name = if theme_manager.get_theme(&theme_name).is_some() {
            theme_name
        } else {
            tracing::warn!(theme = %theme_name, "unknown theme, using default");
            DEFAULT_THEME.to_string()
        };

        Self {
            theme_manager,
            current_theme_name,
        }
    }

    pub fn theme_manager(&self) -> &ThemeManager {
        &self.theme_manager
    }

    pub fn current_theme_name(&self) -> &str {
        &self.current_theme_name
    }

    /// The active theme.
    pub fn current_theme(&self) -> Option<&Theme> {
        self.theme_manager.get_theme(&self.current_theme_name)
    }

    /// Activates `theme_name`. Returns false if no such theme exists.
    pub fn set_theme(&mut self, theme_name: &str) -> bool {
        if self.theme_manager.get_theme(theme_name).is_none() {
            return false;
        }
        self.current_theme_name = theme_name.to_string();
        true
    }
}
