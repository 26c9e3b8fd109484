use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

/// Priority used for currency codes outside the eight majors.
pub const UNKNOWN_PRIORITY: u32 = 999;

/// The eight major currencies, declared in base-currency priority order
/// (EUR > GBP > AUD > NZD > USD > CAD > CHF > JPY).
#[derive(
    Copy,
    Clone,
    PartialEq,
    Eq,
    Hash,
    Debug,
    Serialize,
    Deserialize,
    strum_macros::EnumIter,
    strum_macros::EnumString,
    strum_macros::Display,
)]
#[strum(ascii_case_insensitive)]
pub enum Currency {
    EUR,
    GBP,
    AUD,
    NZD,
    USD,
    CAD,
    CHF,
    JPY,
}

impl Currency {
    pub fn from_code(code: &str) -> Option<Self> {
        code.trim().parse().ok()
    }

    /// FX base-currency priority. Lower number = quoted first.
    pub fn priority(self) -> u32 {
        match self {
            Currency::EUR => 1,
            Currency::GBP => 2,
            Currency::AUD => 3,
            Currency::NZD => 4,
            Currency::USD => 5,
            Currency::CAD => 6,
            Currency::CHF => 7,
            Currency::JPY => 8,
        }
    }

    /// Zero-based position in the fixed universe list.
    pub fn position(self) -> usize {
        Self::iter()
            .position(|c| c == self)
            .unwrap_or_default()
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Currency::EUR => "Euro",
            Currency::GBP => "British Pound",
            Currency::AUD => "Australian Dollar",
            Currency::NZD => "New Zealand Dollar",
            Currency::USD => "US Dollar",
            Currency::CAD => "Canadian Dollar",
            Currency::CHF => "Swiss Franc",
            Currency::JPY => "Japanese Yen",
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
            Currency::AUD => "AUD",
            Currency::NZD => "NZD",
            Currency::USD => "USD",
            Currency::CAD => "CAD",
            Currency::CHF => "CHF",
            Currency::JPY => "JPY",
        }
    }
}

/// Priority for a raw dataset code; unknown codes sort last.
pub fn code_priority(code: &str) -> u32 {
    Currency::from_code(code)
        .map(Currency::priority)
        .unwrap_or(UNKNOWN_PRIORITY)
}

/// Position of a raw dataset code in the universe list, if it belongs to it.
pub fn code_position(code: &str) -> Option<usize> {
    Currency::from_code(code).map(Currency::position)
}

/// Human readable name for a code. Unknown codes are shown as-is.
pub fn display_name_for(code: &str) -> String {
    Currency::from_code(code)
        .map(|c| c.display_name().to_string())
        .unwrap_or_else(|| code.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn universe_order_matches_priority_table() {
        let priorities: Vec<u32> = Currency::iter().map(Currency::priority).collect();
        assert_eq!(priorities, vec![1, 2, 3, 4, 5, 6, 7, 8]);

        for (idx, c) in Currency::iter().enumerate() {
            assert_eq!(c.position(), idx);
            assert_eq!(c.to_string(), c.code());
        }
    }

    #[test]
    fn parses_codes_case_insensitively() {
        assert_eq!(Currency::from_code("jpy"), Some(Currency::JPY));
        assert_eq!(Currency::from_code(" USD "), Some(Currency::USD));
        assert_eq!(Currency::from_code("BTC"), None);
    }

    #[test]
    fn unknown_codes_fall_back() {
        assert_eq!(code_priority("XAU"), UNKNOWN_PRIORITY);
        assert_eq!(code_position("XAU"), None);
        assert_eq!(display_name_for("XAU"), "XAU");
        assert_eq!(display_name_for("NZD"), "New Zealand Dollar");
    }
}
