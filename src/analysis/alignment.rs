use serde::{Deserialize, Serialize};
use std::fmt;

/// Agreement between a currency's weekly and daily bias.
/// `None` (no label) is the common case and is represented by `Option::None`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Alignment {
    Perfect,
    Strong,
    Mismatch,
}

impl Alignment {
    /// Evaluate two raw bias texts. Checked in order Perfect -> Strong -> Mismatch.
    pub fn evaluate(weekly: &str, daily: &str) -> Option<Alignment> {
        let w = weekly.to_lowercase();
        let d = daily.to_lowercase();

        if w == d && !w.contains("neutral") && !w.contains("mixed") {
            return Some(Alignment::Perfect);
        }

        let both_bullish = w.contains("bullish") && d.contains("bullish");
        let both_bearish = w.contains("bearish") && d.contains("bearish");
        if both_bullish || both_bearish {
            return Some(Alignment::Strong);
        }

        if !w.contains(&d) && !d.contains(&w) && !w.contains("neutral") && !d.contains("neutral")
        {
            return Some(Alignment::Mismatch);
        }

        None
    }

    /// Only agreeing labels get a badge on the card.
    pub fn shows_badge(self) -> bool {
        matches!(self, Alignment::Perfect | Alignment::Strong)
    }
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Alignment::Perfect => write!(f, "Perfect"),
            Alignment::Strong => write!(f, "Strong"),
            Alignment::Mismatch => write!(f, "Mismatch"),
        }
    }
}

/// Cross-reference helper used by the cards: no counterpart means no label.
pub fn alignment_against(own_bias: &str, other_bias: Option<&str>) -> Option<Alignment> {
    let other = other_bias?;
    if own_bias.is_empty() || other.is_empty() {
        return None;
    }
    Alignment::evaluate(other, own_bias)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_cases() {
        assert_eq!(
            Alignment::evaluate("Strong Bullish", "Bullish"),
            Some(Alignment::Strong)
        );
        assert_eq!(
            Alignment::evaluate("Bullish", "Bullish"),
            Some(Alignment::Perfect)
        );
        assert_eq!(Alignment::evaluate("Bullish", "Neutral"), None);
        assert_eq!(
            Alignment::evaluate("Bullish", "Bearish"),
            Some(Alignment::Mismatch)
        );
    }

    #[test]
    fn perfect_is_case_insensitive_and_excludes_neutral_and_mixed() {
        assert_eq!(
            Alignment::evaluate("Weak Bearish", "weak bearish"),
            Some(Alignment::Perfect)
        );
        assert_eq!(Alignment::evaluate("Neutral", "Neutral"), None);
        // Identical "Mixed" texts are substrings of each other, so no Mismatch either.
        assert_eq!(Alignment::evaluate("Mixed", "mixed"), None);
    }

    #[test]
    fn substring_relation_suppresses_mismatch() {
        // "mixed" vs "mixed bias": substring, no keyword agreement -> no label
        assert_eq!(Alignment::evaluate("Mixed", "Mixed Bias"), None);
        assert_eq!(
            Alignment::evaluate("Mixed", "Bearish"),
            Some(Alignment::Mismatch)
        );
    }

    #[test]
    fn badge_visibility() {
        assert!(Alignment::Perfect.shows_badge());
        assert!(Alignment::Strong.shows_badge());
        assert!(!Alignment::Mismatch.shows_badge());
    }

    #[test]
    fn missing_counterpart_has_no_label() {
        assert_eq!(alignment_against("Bullish", None), None);
        assert_eq!(alignment_against("", Some("Bullish")), None);
        assert_eq!(
            alignment_against("Bullish", Some("Strong Bullish")),
            Some(Alignment::Strong)
        );
    }
}
