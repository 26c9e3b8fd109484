//! Everything the dashboard derives from the two documents for one frame.

use crate::analysis::alignment::{Alignment, alignment_against};
use crate::analysis::setups::{
    SwingWatchlist, high_conviction_setups, intraday_pairs, intraday_sides, swing_watchlist,
};
use crate::domain::{BiasFilter, DerivedPair, ViewMode};
use crate::models::{CurrencyRecord, DailyRecapDocument, WeeklyBiasDocument};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DashboardSnapshot {
    pub high_conviction: Vec<DerivedPair>,
    pub swing: SwingWatchlist,
    pub intraday: Vec<DerivedPair>,
    /// At least one daily bullish and one daily bearish currency exist.
    /// Distinguishes "no divergence" from "every candidate already taken".
    pub intraday_divergence: bool,
}

impl DashboardSnapshot {
    pub fn derive(weekly: &WeeklyBiasDocument, daily: &DailyRecapDocument) -> Self {
        let high_conviction = high_conviction_setups(weekly, daily);
        let intraday = intraday_pairs(daily, &high_conviction);
        let (bullish, bearish) = intraday_sides(daily);

        Self {
            swing: swing_watchlist(weekly),
            intraday,
            intraday_divergence: !bullish.is_empty() && !bearish.is_empty(),
            high_conviction,
        }
    }
}

/// A card in the currency grid: the record plus its alignment against the
/// dataset that is not on screen.
#[derive(Clone, Copy, Debug)]
pub struct CurrencyCard<'a> {
    pub record: CurrencyRecord<'a>,
    pub alignment: Option<Alignment>,
}

/// All records of the active dataset, in document order.
pub fn records_for_view<'a>(
    view: ViewMode,
    weekly: &'a WeeklyBiasDocument,
    daily: &'a DailyRecapDocument,
) -> Vec<CurrencyRecord<'a>> {
    match view {
        ViewMode::Weekly => weekly.currencies.iter().map(CurrencyRecord::Weekly).collect(),
        ViewMode::Daily => daily
            .currencies
            .iter()
            .map(|(code, entry)| CurrencyRecord::Daily { code, entry })
            .collect(),
    }
}

/// Bias text for `code` in the dataset opposite to `view`.
pub fn counterpart_bias<'a>(
    view: ViewMode,
    code: &str,
    weekly: &'a WeeklyBiasDocument,
    daily: &'a DailyRecapDocument,
) -> Option<&'a str> {
    match view {
        ViewMode::Weekly => daily.currencies.get(code).map(|d| d.bias.as_str()),
        ViewMode::Daily => weekly.find(code).map(|w| w.bias.as_str()),
    }
}

/// Filtered card grid for the active view.
pub fn currency_cards<'a>(
    view: ViewMode,
    filter: BiasFilter,
    weekly: &'a WeeklyBiasDocument,
    daily: &'a DailyRecapDocument,
) -> Vec<CurrencyCard<'a>> {
    records_for_view(view, weekly, daily)
        .into_iter()
        .filter(|record| filter.matches(record.bias()))
        .map(|record| CurrencyCard {
            alignment: alignment_against(
                record.bias(),
                counterpart_bias(view, record.code(), weekly, daily),
            ),
            record,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CurrencyDailyEntry, CurrencyWeeklyEntry};

    fn documents() -> (WeeklyBiasDocument, DailyRecapDocument) {
        let weekly = WeeklyBiasDocument {
            week: "Week of Feb 9".to_string(),
            currencies: [("USD", "Bullish"), ("EUR", "Neutral"), ("JPY", "Bearish")]
                .iter()
                .map(|(code, bias)| CurrencyWeeklyEntry {
                    code: code.to_string(),
                    bias: bias.to_string(),
                    ..Default::default()
                })
                .collect(),
        };
        let daily = DailyRecapDocument {
            date: "2026-02-10".to_string(),
            currencies: [("JPY", "Bearish"), ("USD", "Strong Bullish"), ("AUD", "Bullish")]
                .iter()
                .map(|(code, bias)| {
                    (
                        code.to_string(),
                        CurrencyDailyEntry {
                            bias: bias.to_string(),
                            ..Default::default()
                        },
                    )
                })
                .collect(),
            ..Default::default()
        };
        (weekly, daily)
    }

    #[test]
    fn snapshot_bundles_all_generators() {
        let (weekly, daily) = documents();
        let snap = DashboardSnapshot::derive(&weekly, &daily);

        assert_eq!(snap.high_conviction.len(), 1);
        assert_eq!(snap.high_conviction[0].to_string(), "USD/JPY LONG");
        assert_eq!(snap.swing.long.len(), 1);
        assert!(snap.intraday_divergence);
        // USD/JPY is taken by the high-conviction list; AUD/JPY remains.
        let intraday: Vec<String> = snap.intraday.iter().map(|p| p.pair()).collect();
        assert_eq!(intraday, vec!["AUD/JPY"]);
    }

    #[test]
    fn cards_follow_active_view_order() {
        let (weekly, daily) = documents();
        let codes = |view| -> Vec<String> {
            currency_cards(view, BiasFilter::All, &weekly, &daily)
                .iter()
                .map(|c| c.record.code().to_string())
                .collect()
        };
        assert_eq!(codes(ViewMode::Weekly), vec!["USD", "EUR", "JPY"]);
        assert_eq!(codes(ViewMode::Daily), vec!["JPY", "USD", "AUD"]);
    }

    #[test]
    fn alignment_is_taken_against_the_other_dataset() {
        let (weekly, daily) = documents();

        let daily_cards = currency_cards(ViewMode::Daily, BiasFilter::All, &weekly, &daily);
        let by_code = |cards: &[CurrencyCard], code: &str| {
            cards
                .iter()
                .find(|c| c.record.code() == code)
                .and_then(|c| c.alignment)
        };
        assert_eq!(by_code(&daily_cards, "JPY"), Some(Alignment::Perfect));
        assert_eq!(by_code(&daily_cards, "USD"), Some(Alignment::Strong));
        assert_eq!(by_code(&daily_cards, "AUD"), None);

        let weekly_cards = currency_cards(ViewMode::Weekly, BiasFilter::All, &weekly, &daily);
        assert_eq!(by_code(&weekly_cards, "EUR"), None);
        assert_eq!(by_code(&weekly_cards, "USD"), Some(Alignment::Strong));
    }

    #[test]
    fn filter_applies_to_active_dataset_bias() {
        let (weekly, daily) = documents();
        let bullish = currency_cards(ViewMode::Daily, BiasFilter::Bullish, &weekly, &daily);
        let codes: Vec<&str> = bullish.iter().map(|c| c.record.code()).collect();
        assert_eq!(codes, vec!["USD", "AUD"]);

        let neutral = currency_cards(ViewMode::Weekly, BiasFilter::Neutral, &weekly, &daily);
        assert_eq!(neutral.len(), 1);
        assert_eq!(neutral[0].record.code(), "EUR");
    }
}
