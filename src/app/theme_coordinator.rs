//! Theme persistence and application.

use crate::app::AppState;

const THEME_KEY: &str = "theme_preference";
const DEFAULT_THEME: &str = "Light";

/// Coordinates theme management and persistence.
pub struct ThemeCoordinator;

impl ThemeCoordinator {
    /// Loads the theme preference, defaulting to "Light".
    pub fn load_theme_from_storage(storage: Option<&dyn eframe::Storage>) -> String {
        storage
            .and_then(|storage| storage.get_string(THEME_KEY))
            .unwrap_or_else(|| DEFAULT_THEME.to_string())
    }

    pub fn save_theme_to_storage(storage: &mut dyn eframe::Storage, theme_name: &str) {
        storage.set_string(THEME_KEY, theme_name.to_string());
        storage.flush();
    }

    /// Applies the current theme to the egui context.
    ///
    /// Called every frame so a theme change shows immediately.
    pub fn apply_current_theme(ctx: &egui::Context, state: &AppState) {
        if let Some(theme) = state.theme.current_theme() {
            ctx.set_visuals(state.theme.theme_manager().visuals_for(theme));
        }
    }
}
