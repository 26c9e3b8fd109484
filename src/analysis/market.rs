//! Daily market context: the red folder calendar and the market focus strip.

use crate::models::{MarketFocus, RedFolderNewsItem};

/// Shown in the focus slot when the recap carries no headlines.
pub const DEFAULT_FOCUS: &str = "Key Market Drivers";

/// Shown in the sentiment slot when the risk environment is blank.
pub const DEFAULT_SENTIMENT: &str = "Neutral";

/// Separator between headlines in the one-line market overview.
pub const HEADLINE_SEPARATOR: &str = " • ";

/// Impact tier of a calendar item, used for badge styling.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum ImpactLevel {
    Critical,
    High,
    Other,
}

impl ImpactLevel {
    pub fn from_text(impact: &str) -> Self {
        match impact {
            "Critical" => ImpactLevel::Critical,
            "High" => ImpactLevel::High,
            _ => ImpactLevel::Other,
        }
    }
}

/// Items scheduled for `day_code` (upper-case "MON".."SUN"), in feed order.
pub fn news_for_day<'a>(items: &'a [RedFolderNewsItem], day_code: &str) -> Vec<&'a RedFolderNewsItem> {
    items.iter().filter(|item| item.day == day_code).collect()
}

/// Tone of the headline risk label. Exact match only; anything else is neutral.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum RiskSentiment {
    RiskOn,
    RiskOff,
    Neutral,
}

impl RiskSentiment {
    pub fn from_environment(environment: &str) -> Self {
        match environment {
            "Risk-On" => RiskSentiment::RiskOn,
            "Risk-Off" => RiskSentiment::RiskOff,
            _ => RiskSentiment::Neutral,
        }
    }
}

/// Severity of the risk environment label. Substring match, Risk-Off first.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum RiskSeverity {
    Elevated,
    Mixed,
    Calm,
}

impl RiskSeverity {
    pub fn from_environment(environment: &str) -> Self {
        if environment.contains("Risk-Off") {
            RiskSeverity::Elevated
        } else if environment.contains("Mixed") {
            RiskSeverity::Mixed
        } else {
            RiskSeverity::Calm
        }
    }
}

pub fn sentiment_label(focus: &MarketFocus) -> &str {
    if focus.risk_environment.is_empty() {
        DEFAULT_SENTIMENT
    } else {
        &focus.risk_environment
    }
}

pub fn focus_headline(focus: &MarketFocus) -> &str {
    focus
        .headlines
        .first()
        .map(String::as_str)
        .unwrap_or(DEFAULT_FOCUS)
}

pub fn overview_text(focus: &MarketFocus) -> String {
    focus.headlines.join(HEADLINE_SEPARATOR)
}

/// "Risk-Off: <first headline>" as used by the risk environment panel.
pub fn risk_summary(focus: &MarketFocus) -> String {
    match focus.headlines.first() {
        Some(headline) => format!("{}: {}", focus.risk_environment, headline),
        None => focus.risk_environment.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(day: &str, currency: &str, impact: &str) -> RedFolderNewsItem {
        RedFolderNewsItem {
            day: day.to_string(),
            time: "14:30".to_string(),
            currency: currency.to_string(),
            event: format!("{} data", currency),
            impact: impact.to_string(),
        }
    }

    #[test]
    fn news_is_filtered_to_exact_day_code() {
        let feed = vec![
            item("TUE", "USD", "High"),
            item("WED", "EUR", "Critical"),
            item("TUE", "GBP", "Critical"),
            item("tue", "JPY", "High"),
        ];
        let today = news_for_day(&feed, "TUE");
        let currencies: Vec<&str> = today.iter().map(|n| n.currency.as_str()).collect();
        assert_eq!(currencies, vec!["USD", "GBP"]);
        assert!(news_for_day(&feed, "SAT").is_empty());
    }

    #[test]
    fn impact_levels() {
        assert_eq!(ImpactLevel::from_text("Critical"), ImpactLevel::Critical);
        assert_eq!(ImpactLevel::from_text("High"), ImpactLevel::High);
        assert_eq!(ImpactLevel::from_text("high"), ImpactLevel::Other);
        assert_eq!(ImpactLevel::from_text("Medium"), ImpactLevel::Other);
    }

    #[test]
    fn risk_labels() {
        assert_eq!(RiskSentiment::from_environment("Risk-On"), RiskSentiment::RiskOn);
        assert_eq!(
            RiskSentiment::from_environment("Risk-Off (tariffs)"),
            RiskSentiment::Neutral
        );
        assert_eq!(
            RiskSeverity::from_environment("Risk-Off (tariffs)"),
            RiskSeverity::Elevated
        );
        assert_eq!(RiskSeverity::from_environment("Mixed"), RiskSeverity::Mixed);
        assert_eq!(RiskSeverity::from_environment("Risk-On"), RiskSeverity::Calm);
    }

    #[test]
    fn focus_strip_fallbacks() {
        let empty = MarketFocus::default();
        assert_eq!(sentiment_label(&empty), "Neutral");
        assert_eq!(focus_headline(&empty), "Key Market Drivers");
        assert_eq!(overview_text(&empty), "");

        let focus = MarketFocus {
            risk_environment: "Mixed".to_string(),
            headlines: vec!["Fed speakers".to_string(), "China PMI".to_string()],
        };
        assert_eq!(sentiment_label(&focus), "Mixed");
        assert_eq!(focus_headline(&focus), "Fed speakers");
        assert_eq!(overview_text(&focus), "Fed speakers • China PMI");
        assert_eq!(risk_summary(&focus), "Mixed: Fed speakers");
    }
}
