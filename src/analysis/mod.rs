// Bias alignment, pair generation and the derived dashboard view
pub mod alignment;
pub mod market;
pub mod setups;
pub mod snapshot;

// Re-export commonly used types
pub use alignment::Alignment;
pub use setups::SwingWatchlist;
pub use snapshot::{CurrencyCard, DashboardSnapshot, currency_cards};
