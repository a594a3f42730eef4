//! Loading Content demo application
//!
//! A to-do list screen built around the `LoadingContent` widget:
//! - Pull the list down past the threshold to refresh it from a simulated remote
//! - The refresh indicator spins at the top of the list while the fetch runs
//! - Per-filter empty states (All / Active / Completed)
//! - Theme and refresh settings persisted between sessions
//!
//! Layout:
//! - `app/` - Application state and coordinators
//! - `io/` - Task source and background loading
//! - `state/` - Task list and theme state
//! - `ui/` - Panel rendering
//!
//! Usage: `loading-content-demo [TASK_COUNT] [FAILURE_RATE]` (defaults 12 and
//! 0.1). Set `RUST_LOG` to adjust logging, e.g. `RUST_LOG=loading_content=trace`.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use std::sync::Arc;

use loading_content::RefreshConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod app;
mod io;
mod state;
mod ui;

use app::{AppState, ApplicationCoordinator, SettingsCoordinator, ThemeCoordinator};
use io::{AsyncLoader, SimulatedRemote, TaskSource};
use state::TasksFilter;
use ui::panel_manager::{PanelInteraction, PanelManager};

const REFRESH_CONFIG_KEY: &str = "refresh_config";
const FILTER_KEY: &str = "tasks_filter";
const DEFAULT_TASK_COUNT: usize = 12;
const DEFAULT_FAILURE_RATE: f64 = 0.1;

/// Parses positional argument `index`, falling back to `default`.
fn parse_arg<T: std::str::FromStr>(index: usize, name: &str, default: T) -> T {
    match std::env::args().nth(index) {
        Some(arg) => arg.parse().unwrap_or_else(|_| {
            tracing::warn!(arg = %arg, "invalid {}, using default", name);
            default
        }),
        None => default,
    }
}

/// Initializes logging and launches the demo window.
fn main() -> eframe::Result {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let task_count = parse_arg(1, "task count", DEFAULT_TASK_COUNT);
    let failure_rate = parse_arg(2, "failure rate", DEFAULT_FAILURE_RATE);
    tracing::info!(task_count, failure_rate, "starting loading content demo");

    let source = SimulatedRemote::new(task_count).with_failure_rate(failure_rate);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([420.0, 720.0])
            .with_title("Tasks"),
        ..Default::default()
    };

    eframe::run_native(
        "Loading Content Demo",
        options,
        Box::new(move |cc| Ok(Box::new(DemoApp::new(cc, Arc::new(source))))),
    )
}

/// The demo application.
///
/// Delegates to coordinators:
/// - `ApplicationCoordinator` handles refreshes and task edits
/// - `ThemeCoordinator` handles theme persistence and application
/// - `PanelManager` handles panel layout and rendering
struct DemoApp {
    state: AppState,
    loader: AsyncLoader,
    source: Arc<dyn TaskSource>,
    /// Start the first refresh on the first frame
    initial_refresh_pending: bool,
}

impl DemoApp {
    /// Creates the app with theme and refresh settings loaded from persistent storage.
    fn new(cc: &eframe::CreationContext, source: Arc<dyn TaskSource>) -> Self {
        let theme_name = ThemeCoordinator::load_theme_from_storage(cc.storage);
        let refresh_config: RefreshConfig =
            SettingsCoordinator::load_setting_or(cc.storage, REFRESH_CONFIG_KEY, RefreshConfig::default());
        let filter = SettingsCoordinator::load_setting_or(cc.storage, FILTER_KEY, TasksFilter::All);

        Self {
            state: AppState::with_settings(theme_name, refresh_config, filter),
            loader: AsyncLoader::new(),
            source,
            initial_refresh_pending: true,
        }
    }

    fn handle_panel_interaction(&mut self, interaction: PanelInteraction, ctx: &egui::Context) {
        match interaction {
            PanelInteraction::RefreshRequested => {
                ApplicationCoordinator::request_refresh(&mut self.state, &mut self.loader, &self.source, ctx);
            }
            PanelInteraction::ClearCompletedRequested => {
                ApplicationCoordinator::handle_clear_completed(&mut self.state);
            }
            PanelInteraction::FilterChanged(filter) => {
                ApplicationCoordinator::handle_filter_changed(&mut self.state, filter);
            }
            PanelInteraction::ThemeChanged(theme_name) => {
                ApplicationCoordinator::handle_theme_changed(&mut self.state, &theme_name);
            }
            PanelInteraction::TaskToggled(task_id) => {
                ApplicationCoordinator::handle_task_toggled(&mut self.state, task_id);
            }
        }
    }
}

impl eframe::App for DemoApp {
    /// Called when the app is being shut down - ensures preferences are saved.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        ThemeCoordinator::save_theme_to_storage(storage, self.state.theme.current_theme_name());
        SettingsCoordinator::save_setting(storage, REFRESH_CONFIG_KEY, self.state.pull.config());
        SettingsCoordinator::save_setting(storage, FILTER_KEY, &self.state.tasks.filter());
    }

    /// Main update loop:
    /// 1. Apply a finished refresh
    /// 2. Apply the theme
    /// 3. Kick off the initial refresh
    /// 4. Render all panels and handle their interactions
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ApplicationCoordinator::check_loading_completion(&mut self.state, &mut self.loader);

        ThemeCoordinator::apply_current_theme(ctx, &self.state);

        if self.initial_refresh_pending {
            self.initial_refresh_pending = false;
            ApplicationCoordinator::request_refresh(&mut self.state, &mut self.loader, &self.source, ctx);
        }

        let loading = self.loader.is_loading();
        for interaction in PanelManager::render_all_panels(ctx, &mut self.state, loading) {
            self.handle_panel_interaction(interaction, ctx);
        }
    }
}
