use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::currency::code_priority;

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum TradeDirection {
    Long,
    Short,
}

impl TradeDirection {
    pub fn is_long(self) -> bool {
        self == TradeDirection::Long
    }

    /// "Long" / "Short" as used by the intraday list.
    pub fn title_case(self) -> &'static str {
        match self {
            TradeDirection::Long => "Long",
            TradeDirection::Short => "Short",
        }
    }
}

impl fmt::Display for TradeDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TradeDirection::Long => write!(f, "LONG"),
            TradeDirection::Short => write!(f, "SHORT"),
        }
    }
}

/// A suggested FX pair. Computed on demand, never stored.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DerivedPair {
    pub base: String,
    pub quote: String,
    pub direction: TradeDirection,
    pub reason: Option<String>,
}

impl DerivedPair {
    pub fn new(base: &str, quote: &str, direction: TradeDirection) -> Self {
        Self {
            base: base.to_string(),
            quote: quote.to_string(),
            direction,
            reason: None,
        }
    }

    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }

    /// "BASE/QUOTE"
    pub fn pair(&self) -> String {
        format!("{}/{}", self.base, self.quote)
    }
}

impl fmt::Display for DerivedPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{} {}", self.base, self.quote, self.direction)
    }
}

/// Name a pair by FX convention: the higher-priority currency is the base.
/// When `first` wins it is bought (LONG); otherwise `second` is written first
/// and the trade is a SHORT of that pair. Ties (e.g. two unknown codes) go SHORT.
pub fn conventional_pair(first: &str, second: &str) -> DerivedPair {
    if code_priority(first) < code_priority(second) {
        DerivedPair::new(first, second, TradeDirection::Long)
    } else {
        DerivedPair::new(second, first, TradeDirection::Short)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usd_jpy_both_ways() {
        let long = conventional_pair("USD", "JPY");
        assert_eq!(long.pair(), "USD/JPY");
        assert_eq!(long.direction, TradeDirection::Long);

        let short = conventional_pair("JPY", "USD");
        assert_eq!(short.pair(), "USD/JPY");
        assert_eq!(short.direction, TradeDirection::Short);
    }

    #[test]
    fn euro_is_always_base() {
        let p = conventional_pair("CHF", "EUR");
        assert_eq!(p.pair(), "EUR/CHF");
        assert_eq!(p.direction, TradeDirection::Short);
    }

    #[test]
    fn unknown_code_is_quoted_last() {
        let p = conventional_pair("XAU", "JPY");
        assert_eq!(p.pair(), "JPY/XAU");
        assert_eq!(p.direction, TradeDirection::Short);

        let p = conventional_pair("JPY", "XAU");
        assert_eq!(p.pair(), "JPY/XAU");
        assert_eq!(p.direction, TradeDirection::Long);
    }

    #[test]
    fn direction_labels() {
        assert_eq!(TradeDirection::Long.to_string(), "LONG");
        assert_eq!(TradeDirection::Short.title_case(), "Short");
        let p = conventional_pair("GBP", "CAD").with_reason("test");
        assert_eq!(p.to_string(), "GBP/CAD LONG");
        assert_eq!(p.reason.as_deref(), Some("test"));
    }
}
