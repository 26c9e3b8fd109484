use std::fmt;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;
use crate::models::{DailyRecapDocument, WeeklyBiasDocument};

/// Sample documents compiled into the binary. The browser build has no
/// filesystem, and the native build falls back to these when a file is absent.
const BUNDLED_WEEKLY: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/weekly_bias.json"
));
const BUNDLED_DAILY: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/daily_recap.json"
));

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DatasetSource {
    File(PathBuf),
    Bundled,
}

impl fmt::Display for DatasetSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatasetSource::File(path) => write!(f, "{}", path.display()),
            DatasetSource::Bundled => write!(f, "bundled sample"),
        }
    }
}

/// Both documents, loaded once and never mutated.
#[derive(Clone, Debug, Default)]
pub struct Datasets {
    pub weekly: WeeklyBiasDocument,
    pub daily: DailyRecapDocument,
}

pub struct LoadedDatasets {
    pub datasets: Datasets,
    pub weekly_source: DatasetSource,
    pub daily_source: DatasetSource,
}

fn parse_document<T: DeserializeOwned>(text: &str, label: &str) -> Result<T> {
    serde_json::from_str(text).context(format!("Failed to parse {} document", label))
}

pub fn bundled_datasets() -> Result<Datasets> {
    Ok(Datasets {
        weekly: parse_document(BUNDLED_WEEKLY, "bundled weekly bias")?,
        daily: parse_document(BUNDLED_DAILY, "bundled daily recap")?,
    })
}

/// Read `path` if it exists, otherwise use the bundled text.
/// A file that exists but cannot be read or parsed is an error.
fn load_or_bundled<T: DeserializeOwned>(
    path: &Path,
    bundled: &str,
    label: &str,
) -> Result<(T, DatasetSource)> {
    if !path.exists() {
        log::warn!(
            "{} not found at {}, using bundled sample",
            label,
            path.display()
        );
        return Ok((parse_document(bundled, label)?, DatasetSource::Bundled));
    }

    let text = std::fs::read_to_string(path)
        .context(format!("Failed to read {} file: {}", label, path.display()))?;
    let document = parse_document(&text, label)
        .context(format!("Invalid {} file: {}", label, path.display()))?;
    Ok((document, DatasetSource::File(path.to_path_buf())))
}

pub fn load_datasets(weekly_path: &Path, daily_path: &Path) -> Result<LoadedDatasets> {
    let (weekly, weekly_source): (WeeklyBiasDocument, _) =
        load_or_bundled(weekly_path, BUNDLED_WEEKLY, "weekly bias")?;
    let (daily, daily_source): (DailyRecapDocument, _) =
        load_or_bundled(daily_path, BUNDLED_DAILY, "daily recap")?;

    #[cfg(debug_assertions)]
    if DEBUG_FLAGS.print_data_load {
        log::info!(
            "Loaded weekly bias '{}' ({} currencies) from {}",
            weekly.week,
            weekly.currencies.len(),
            weekly_source
        );
        log::info!(
            "Loaded daily recap '{}' ({} currencies, {} news items) from {}",
            daily.date,
            daily.currencies.len(),
            daily.red_folder_news.len(),
            daily_source
        );
    }

    Ok(LoadedDatasets {
        datasets: Datasets { weekly, daily },
        weekly_source,
        daily_source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_samples_parse() {
        let data = bundled_datasets().expect("bundled documents must parse");
        assert!(!data.weekly.currencies.is_empty());
        assert!(!data.daily.currencies.is_empty());
        assert!(!data.daily.market_focus.headlines.is_empty());
    }

    #[test]
    fn missing_files_fall_back_to_bundled() {
        let missing = Path::new("definitely/not/here.json");
        let loaded = load_datasets(missing, missing).unwrap();
        assert_eq!(loaded.weekly_source, DatasetSource::Bundled);
        assert_eq!(loaded.daily_source, DatasetSource::Bundled);
    }

    #[test]
    fn unreadable_document_is_an_error_with_context() {
        let dir = std::env::temp_dir().join("tudor_dashboard_loader_test");
        std::fs::create_dir_all(&dir).unwrap();
        let bad = dir.join("broken_weekly.json");
        std::fs::write(&bad, "{ not json").unwrap();

        let err = load_datasets(&bad, Path::new("missing_daily.json"))
            .err()
            .expect("broken file must not load");
        assert!(format!("{:#}", err).contains("broken_weekly.json"));
    }
}
