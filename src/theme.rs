//! Theme support for the loading content widget.
//!
//! Provides the colors the refresh indicator is painted with, plus a small set
//! of complete themes (Light, Dark, Slate) used by the demo application.
//!
//! # Examples
//!
//! ```
//! use loading_content::theme::{ThemeManager, PRIMARY_DARK};
//!
//! let manager = ThemeManager::new();
//! let slate = manager.get_theme("Slate").unwrap();
//! assert_eq!(slate.colors.background, PRIMARY_DARK);
//! ```

use egui::Color32;
use std::collections::HashMap;

/// Primary dark brand color (#263238).
pub const PRIMARY_DARK: Color32 = Color32::from_rgb(0x26, 0x32, 0x38);

/// Colors used to paint the pull-to-refresh indicator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndicatorColors {
    /// Fill of the circular indicator container
    pub container: Color32,
    /// Progress arc and spinner
    pub spinner: Color32,
}

impl IndicatorColors {
    /// Indicator colors for light backgrounds.
    pub fn light() -> Self {
        Self {
            container: Color32::from_rgb(250, 250, 250),
            spinner: PRIMARY_DARK,
        }
    }

    /// Indicator colors for dark backgrounds.
    pub fn dark() -> Self {
        Self {
            container: Color32::from_rgb(55, 71, 79),
            spinner: Color32::from_rgb(128, 203, 196),
        }
    }

    /// Picks light or dark indicator colors to match `visuals`.
    pub fn from_visuals(visuals: &egui::Visuals) -> Self {
        if visuals.dark_mode {
            Self::dark()
        } else {
            Self::light()
        }
    }
}

impl Default for IndicatorColors {
    fn default() -> Self {
        Self::light()
    }
}

/// Palette for a complete screen.
#[derive(Debug, Clone)]
pub struct ThemeColors {
    pub background: Color32,
    pub panel_background: Color32,
    pub text: Color32,
    pub text_dim: Color32,
    pub selection: Color32,
    pub accent: Color32,
    pub error: Color32,
    pub indicator: IndicatorColors,
}

/// A named theme with its palette.
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,
    pub description: String,
    pub dark_mode: bool,
    pub colors: ThemeColors,
}

/// Registry of the built-in themes.
pub struct ThemeManager {
    themes: HashMap<String, Theme>,
}

impl ThemeManager {
    /// Creates a manager holding all built-in themes.
    pub fn new() -> Self {
        let mut themes = HashMap::new();
        for theme in [light_theme(), dark_theme(), slate_theme()] {
            themes.insert(theme.name.clone(), theme);
        }
        Self { themes }
    }

    /// Retrieves a theme by name
    pub fn get_theme(&self, name: &str) -> Option<&Theme> {
        self.themes.get(name)
    }

    /// Returns all theme names, sorted
    pub fn list_themes(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.themes.keys().map(|s| s.as_str()).collect();
        names.sort();
        names
    }

    /// Builds egui visuals for `theme`.
    pub fn visuals_for(&self, theme: &Theme) -> egui::Visuals {
        let mut visuals = if theme.dark_mode {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };
        let colors = &theme.colors;

        visuals.panel_fill = colors.panel_background;
        visuals.window_fill = colors.background;
        visuals.extreme_bg_color = colors.background;
        visuals.override_text_color = Some(colors.text);
        visuals.selection.bg_fill = colors.selection;
        visuals.selection.stroke.color = colors.accent;
        visuals.hyperlink_color = colors.accent;
        visuals.error_fg_color = colors.error;
        visuals
    }
}

impl Default for ThemeManager {
    fn default() -> Self {
        Self::new()
    }
}

fn light_theme() -> Theme {
    Theme {
        name: "Light".to_string(),
        description: "Light theme with egui default colors".to_string(),
        dark_mode: false,
        colors: ThemeColors {
            background: Color32::from_rgb(255, 255, 255),
            panel_background: Color32::from_rgb(248, 248, 248),
            text: Color32::from_rgb(0, 0, 0),
            text_dim: Color32::from_rgb(120, 120, 120),
            selection: Color32::from_rgb(180, 200, 255),
            accent: PRIMARY_DARK,
            error: Color32::from_rgb(200, 40, 40),
            indicator: IndicatorColors::light(),
        },
    }
}

fn dark_theme() -> Theme {
    Theme {
        name: "Dark".to_string(),
        description: "Dark theme with egui default colors".to_string(),
        dark_mode: true,
        colors: ThemeColors {
            background: Color32::from_rgb(16, 16, 16),
            panel_background: Color32::from_rgb(39, 39, 39),
            text: Color32::from_rgb(255, 255, 255),
            text_dim: Color32::from_rgb(160, 160, 160),
            selection: Color32::from_rgb(50, 80, 120),
            accent: Color32::from_rgb(52, 152, 219),
            error: Color32::from_rgb(231, 76, 60),
            indicator: IndicatorColors::dark(),
        },
    }
}

/// Dark theme built around the primary dark color
fn slate_theme() -> Theme {
    Theme {
        name: "Slate".to_string(),
        description: "Blue-grey theme on the primary dark color".to_string(),
        dark_mode: true,
        colors: ThemeColors {
            background: PRIMARY_DARK,
            panel_background: Color32::from_rgb(0x37, 0x47, 0x4f),
            text: Color32::from_rgb(0xec, 0xef, 0xf1),
            text_dim: Color32::from_rgb(0x90, 0xa4, 0xae),
            selection: Color32::from_rgb(0x45, 0x5a, 0x64),
            accent: Color32::from_rgb(0x80, 0xcb, 0xc4),
            error: Color32::from_rgb(0xef, 0x9a, 0x9a),
            indicator: IndicatorColors {
                container: Color32::from_rgb(0x45, 0x5a, 0x64),
                spinner: Color32::from_rgb(0x80, 0xcb, 0xc4),
            },
        },
    }
}
