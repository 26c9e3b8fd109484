use eframe::egui::{self, Rect};
use eframe::Frame;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use crate::config::{CLOCK, PERSISTENCE};
#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;
use crate::data::Datasets;
use crate::domain::{BiasFilter, ViewMode};
use crate::ui::app_async::ExportState;
use crate::ui::utils::setup_custom_visuals;

/// Failures the user needs to see. Everything else is logged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    /// Writing the PNG failed
    ExportFailed(String),
    /// The captured region was empty (window minimised or zero-sized)
    NothingToExport,
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::ExportFailed(msg) => write!(f, "Export failed: {}", msg),
            AppError::NothingToExport => write!(f, "Export failed: nothing on screen to capture"),
        }
    }
}

impl std::error::Error for AppError {}

#[derive(Deserialize, Serialize)]
pub struct TudorDashboardApp {
    // UI state
    #[serde(default)]
    pub(super) view_mode: ViewMode,
    #[serde(default)]
    pub(super) filter: BiasFilter,

    // Loaded documents - never persisted, reloaded from disk on every start
    #[serde(skip)]
    pub(super) datasets: Datasets,

    // Help panel visibility
    #[serde(skip)]
    pub(super) show_help: bool,

    // Screenshot + PNG writer job
    #[serde(skip)]
    pub(super) export: ExportState,
    // Screen area of the dashboard body, used to crop the screenshot
    #[serde(skip)]
    pub(super) export_region: Option<Rect>,
    #[serde(skip)]
    pub(super) last_export: Option<PathBuf>,

    // Shown in a modal alert until dismissed
    #[serde(skip)]
    pub(super) last_error: Option<AppError>,
}

impl TudorDashboardApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        datasets: Datasets,
        initial_view: Option<ViewMode>,
    ) -> Self {
        let mut app: TudorDashboardApp;

        // Attempt to load the persisted state
        if let Some(storage) = cc.storage {
            if let Some(value) = eframe::get_value(storage, PERSISTENCE.app_state_key) {
                #[cfg(debug_assertions)]
                if DEBUG_FLAGS.print_state_serde {
                    log::info!("Successfully loaded persisted state");
                }
                app = value;
            } else {
                #[cfg(debug_assertions)]
                if DEBUG_FLAGS.print_state_serde {
                    log::info!("No persisted dashboard state found. Creating anew.");
                }
                app = TudorDashboardApp::new_with_initial_state();
            }
        } else {
            app = TudorDashboardApp::new_with_initial_state();
        }

        app.datasets = datasets;

        // Command line wins over whatever was persisted
        if let Some(view) = initial_view {
            app.view_mode = view;
        }

        setup_custom_visuals(&cc.egui_ctx);
        app
    }

    pub fn new_with_initial_state() -> Self {
        Self {
            view_mode: ViewMode::default(),
            filter: BiasFilter::default(),
            datasets: Datasets::default(),
            show_help: false,
            export: ExportState::default(),
            export_region: None,
            last_export: None,
            last_error: None,
        }
    }

    pub(super) fn set_view(&mut self, view: ViewMode) {
        if self.view_mode != view {
            #[cfg(debug_assertions)]
            if DEBUG_FLAGS.print_ui_interactions {
                log::info!("View mode: {} -> {}", self.view_mode, view);
            }
            self.view_mode = view;
        }
    }

    pub(super) fn set_filter(&mut self, filter: BiasFilter) {
        if self.filter != filter {
            #[cfg(debug_assertions)]
            if DEBUG_FLAGS.print_ui_interactions {
                log::info!("Bias filter: {} -> {}", self.filter, filter);
            }
            self.filter = filter;
        }
    }
}

impl eframe::App for TudorDashboardApp {
    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        // Drop any in-flight export so its thread is not left writing to a dead channel
        self.export = ExportState::default();

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_shutdown {
            log::info!("Application shutdown complete.");
        }
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, PERSISTENCE.app_state_key, &self);
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        self.handle_screenshot_events(ctx);
        self.poll_export();

        self.handle_global_shortcuts(ctx);

        self.render_top_bar(ctx);
        self.render_footer(ctx);
        self.render_central_panel(ctx);
        if self.show_help {
            self.render_help_panel(ctx);
        }
        self.render_alert(ctx);

        // Keep the clock ticking without input events
        ctx.request_repaint_after(Duration::from_secs(CLOCK.tick_secs));
    }
}
