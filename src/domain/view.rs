use serde::{Deserialize, Serialize};
use std::fmt;
use strum::IntoEnumIterator;

/// Which dataset the card grid is showing.
#[derive(
    Copy, Clone, PartialEq, Eq, Hash, Default, Debug, Serialize, Deserialize, strum_macros::EnumIter,
)]
pub enum ViewMode {
    Weekly,
    #[default]
    Daily,
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ViewMode::Weekly => write!(f, "WEEKLY"),
            ViewMode::Daily => write!(f, "DAILY"),
        }
    }
}

impl std::str::FromStr for ViewMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "weekly" => Ok(ViewMode::Weekly),
            "daily" => Ok(ViewMode::Daily),
            other => Err(format!("unknown view '{}', expected weekly or daily", other)),
        }
    }
}

/// Card grid filter. Matches the label text as-is (case-sensitive substring).
#[derive(
    Copy, Clone, PartialEq, Eq, Hash, Default, Debug, Serialize, Deserialize, strum_macros::EnumIter,
)]
pub enum BiasFilter {
    #[default]
    All,
    Bullish,
    Bearish,
    Neutral,
}

impl BiasFilter {
    pub fn label(self) -> &'static str {
        match self {
            BiasFilter::All => "All",
            BiasFilter::Bullish => "Bullish",
            BiasFilter::Bearish => "Bearish",
            BiasFilter::Neutral => "Neutral",
        }
    }

    pub fn matches(self, bias: &str) -> bool {
        match self {
            BiasFilter::All => true,
            other => bias.contains(other.label()),
        }
    }

    /// Next filter in button order, wrapping around.
    pub fn cycled(self) -> Self {
        let all: Vec<BiasFilter> = BiasFilter::iter().collect();
        let idx = all.iter().position(|f| *f == self).unwrap_or_default();
        all[(idx + 1) % all.len()]
    }
}

impl fmt::Display for BiasFilter {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_is_case_sensitive_substring() {
        assert!(BiasFilter::All.matches("anything"));
        assert!(BiasFilter::Bullish.matches("Strong Bullish"));
        assert!(!BiasFilter::Bullish.matches("strong bullish"));
        assert!(BiasFilter::Neutral.matches("Neutral-Bearish"));
        assert!(BiasFilter::Bearish.matches("Neutral-Bearish"));
    }

    #[test]
    fn filter_cycles_in_button_order() {
        assert_eq!(BiasFilter::All.cycled(), BiasFilter::Bullish);
        assert_eq!(BiasFilter::Neutral.cycled(), BiasFilter::All);
    }

    #[test]
    fn view_mode_defaults_to_daily_and_parses() {
        assert_eq!(ViewMode::default(), ViewMode::Daily);
        assert_eq!("WEEKLY".parse::<ViewMode>(), Ok(ViewMode::Weekly));
        assert!("monthly".parse::<ViewMode>().is_err());
    }
}
