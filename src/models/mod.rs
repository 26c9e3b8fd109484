// Dataset models for the dashboard
// These modules hold plain data; all derivation lives in `analysis`.

pub mod dataset;
pub mod record;

// Re-export key types for convenience
pub use dataset::{
    CurrencyDailyEntry, CurrencyMap, CurrencyWeeklyEntry, DailyRecapDocument, KeyEvent,
    MarketFocus, RedFolderNewsItem, WeeklyBiasDocument,
};
pub use record::CurrencyRecord;
