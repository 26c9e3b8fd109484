// Domain types and value objects
pub mod bias;
pub mod currency;
pub mod pair;
pub mod view;

// Re-export commonly used types
pub use bias::BiasDirection;
pub use currency::Currency;
pub use pair::{DerivedPair, TradeDirection, conventional_pair};
pub use view::{BiasFilter, ViewMode};
