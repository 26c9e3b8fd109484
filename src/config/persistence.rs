//! File persistence and export configuration

use chrono::NaiveDate;

use crate::utils::time_utils::iso_date;

pub struct DatasetPaths {
    /// Weekly bias document, read once at startup
    pub weekly: &'static str,
    /// Daily recap document, read once at startup
    pub daily: &'static str,
}

pub struct ExportConfig {
    pub filename_prefix: &'static str,
    pub extension: &'static str,
}

pub struct PersistenceConfig {
    pub datasets: DatasetPaths,
    pub export: ExportConfig,
    /// eframe key under which the UI state is stored
    pub app_state_key: &'static str,
}

pub const PERSISTENCE: PersistenceConfig = PersistenceConfig {
    datasets: DatasetPaths {
        weekly: "weekly_bias.json",
        daily: "daily_recap.json",
    },
    export: ExportConfig {
        filename_prefix: "TUDOR_DASHBOARD",
        extension: "png",
    },
    app_state_key: eframe::APP_KEY,
};

/// Generate the export filename for a given local date
/// Example: "TUDOR_DASHBOARD_2026-02-10.png"
pub fn export_filename(date: NaiveDate) -> String {
    format!(
        "{}_{}.{}",
        PERSISTENCE.export.filename_prefix,
        iso_date(date),
        PERSISTENCE.export.extension
    )
}

// App state persistence
/// Path for saving/loading application UI state
pub const APP_STATE_PATH: &str = ".states.json";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn export_filename_uses_iso_date() {
        let date = NaiveDate::from_ymd_opt(2026, 2, 10).unwrap();
        assert_eq!(export_filename(date), "TUDOR_DASHBOARD_2026-02-10.png");
    }
}
