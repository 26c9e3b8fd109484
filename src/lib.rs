#![allow(clippy::collapsible_if)]
#![allow(clippy::collapsible_else_if)]

// Core modules
pub mod analysis;
pub mod config;
pub mod data;
pub mod domain;
pub mod models;
pub mod report;
pub mod ui;
pub mod utils;

// Re-export commonly used types
pub use data::{Datasets, LoadedDatasets, bundled_datasets, load_datasets};
pub use domain::{BiasFilter, DerivedPair, TradeDirection, ViewMode};
pub use models::{DailyRecapDocument, WeeklyBiasDocument};
pub use report::render_report;
pub use ui::TudorDashboardApp;
pub use utils::app_time;

// CLI argument parsing
use clap::Parser;
use std::path::PathBuf;

use crate::config::PERSISTENCE;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Weekly bias JSON document
    #[arg(long, value_name = "PATH", default_value = PERSISTENCE.datasets.weekly)]
    pub weekly: PathBuf,

    /// Daily recap JSON document
    #[arg(long, value_name = "PATH", default_value = PERSISTENCE.datasets.daily)]
    pub daily: PathBuf,

    /// Print the derived setups as tables and exit instead of opening the window
    #[arg(long, default_value_t = false)]
    pub report: bool,

    /// Start in this view (weekly or daily), overriding the saved one
    #[arg(long, value_name = "VIEW")]
    pub view: Option<ViewMode>,
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(
    cc: &eframe::CreationContext,
    datasets: Datasets,
    initial_view: Option<ViewMode>,
) -> Box<dyn eframe::App> {
    let app = ui::TudorDashboardApp::new(cc, datasets, initial_view);
    Box::new(app)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_defaults_to_configured_dataset_paths() {
        let cli = Cli::parse_from(["tudor-dashboard"]);
        assert_eq!(cli.weekly, PathBuf::from("weekly_bias.json"));
        assert_eq!(cli.daily, PathBuf::from("daily_recap.json"));
        assert!(!cli.report);
        assert_eq!(cli.view, None);
    }

    #[test]
    fn cli_parses_view_and_report() {
        let cli = Cli::parse_from(["tudor-dashboard", "--report", "--view", "weekly"]);
        assert!(cli.report);
        assert_eq!(cli.view, Some(ViewMode::Weekly));
        assert!(Cli::try_parse_from(["tudor-dashboard", "--view", "monthly"]).is_err());
    }
}
