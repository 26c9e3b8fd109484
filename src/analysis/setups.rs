//! Trade idea generators.
//!
//! Everything here is a pure function of the two loaded documents. The UI calls
//! these every frame; with at most eight currencies there is nothing to cache.

use itertools::Itertools;

use crate::config::PAIRING;
use crate::domain::currency::code_position;
use crate::domain::{BiasDirection, DerivedPair, TradeDirection, conventional_pair};
use crate::models::{DailyRecapDocument, WeeklyBiasDocument};

/// Weekly-only bullish vs bearish pairs, split by trade direction.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SwingWatchlist {
    pub long: Vec<DerivedPair>,
    pub short: Vec<DerivedPair>,
}

/// Pairs where both legs agree across the weekly and daily horizon.
///
/// Currencies without a daily counterpart are skipped. Neutral, mixed or
/// conflicting horizons exclude a currency entirely, and an empty side yields
/// an empty result rather than weaker ideas.
pub fn high_conviction_setups(
    weekly: &WeeklyBiasDocument,
    daily: &DailyRecapDocument,
) -> Vec<DerivedPair> {
    let mut bullish_aligned: Vec<&str> = Vec::new();
    let mut bearish_aligned: Vec<&str> = Vec::new();

    for entry in &weekly.currencies {
        let Some(daily_entry) = daily.currencies.get(&entry.code) else {
            continue;
        };

        match (
            BiasDirection::classify(&entry.bias),
            BiasDirection::classify(&daily_entry.bias),
        ) {
            (BiasDirection::Bullish, BiasDirection::Bullish) => bullish_aligned.push(&entry.code),
            (BiasDirection::Bearish, BiasDirection::Bearish) => bearish_aligned.push(&entry.code),
            _ => {}
        }
    }

    bullish_aligned
        .iter()
        .cartesian_product(bearish_aligned.iter())
        .map(|(bull, bear)| {
            let pair = conventional_pair(bull, bear);
            let reason = alignment_reason(&pair, bull, bear);
            pair.with_reason(reason)
        })
        .take(PAIRING.high_conviction_limit)
        .collect()
}

fn alignment_reason(pair: &DerivedPair, bull: &str, bear: &str) -> String {
    let base_side = if pair.base == bull { "Bullish" } else { "Bearish" };
    let quote_side = if pair.quote == bear { "Bearish" } else { "Bullish" };
    format!(
        "Strong alignment: Weekly & Daily {} {} vs {} {}",
        base_side, pair.base, quote_side, pair.quote
    )
}

/// Every weekly bullish currency against every weekly bearish one.
/// The product is split by direction and each side is capped independently.
pub fn swing_watchlist(weekly: &WeeklyBiasDocument) -> SwingWatchlist {
    let strong: Vec<&str> = weekly
        .currencies
        .iter()
        .filter(|c| BiasDirection::classify(&c.bias) == BiasDirection::Bullish)
        .map(|c| c.code.as_str())
        .collect();
    let weak: Vec<&str> = weekly
        .currencies
        .iter()
        .filter(|c| BiasDirection::classify(&c.bias) == BiasDirection::Bearish)
        .map(|c| c.code.as_str())
        .collect();

    let (long, short): (Vec<DerivedPair>, Vec<DerivedPair>) = strong
        .iter()
        .cartesian_product(weak.iter())
        .map(|(s, w)| {
            conventional_pair(s, w).with_reason(format!("Weekly Bullish {} vs Bearish {}", s, w))
        })
        .partition(|pair| pair.direction.is_long());

    SwingWatchlist {
        long: long.into_iter().take(PAIRING.swing_list_limit).collect(),
        short: short.into_iter().take(PAIRING.swing_list_limit).collect(),
    }
}

/// Same-day bullish vs bearish pairs.
///
/// Membership is a plain substring test on the daily text, so a label that
/// mentions both words puts the currency on both sides. The written order uses
/// the position in the currency list: the pair flips to `BEAR/BULL Short` only
/// when both codes are in the list and the bullish one sits further down it.
/// Pairs already offered as high-conviction setups are dropped before capping.
pub fn intraday_pairs(
    daily: &DailyRecapDocument,
    high_conviction: &[DerivedPair],
) -> Vec<DerivedPair> {
    let (bullish, bearish) = intraday_sides(daily);
    let taken: Vec<String> = high_conviction.iter().map(DerivedPair::pair).collect();

    bullish
        .iter()
        .cartesian_product(bearish.iter())
        .map(|(bull, bear)| match (code_position(bull), code_position(bear)) {
            (Some(bull_idx), Some(bear_idx)) if bull_idx > bear_idx => {
                DerivedPair::new(bear, bull, TradeDirection::Short)
            }
            _ => DerivedPair::new(bull, bear, TradeDirection::Long),
        })
        .filter(|pair| !taken.contains(&pair.pair()))
        .take(PAIRING.intraday_limit)
        .collect()
}

/// Daily bullish and bearish codes in document order.
pub fn intraday_sides(daily: &DailyRecapDocument) -> (Vec<&str>, Vec<&str>) {
    let mut bullish: Vec<&str> = Vec::new();
    let mut bearish: Vec<&str> = Vec::new();

    for (code, entry) in daily.currencies.iter() {
        let bias = entry.bias.to_lowercase();
        if bias.contains("bullish") {
            bullish.push(code);
        }
        if bias.contains("bearish") {
            bearish.push(code);
        }
    }

    (bullish, bearish)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CurrencyDailyEntry, CurrencyWeeklyEntry};

    fn weekly(entries: &[(&str, &str)]) -> WeeklyBiasDocument {
        WeeklyBiasDocument {
            week: "test week".to_string(),
            currencies: entries
                .iter()
                .map(|(code, bias)| CurrencyWeeklyEntry {
                    code: code.to_string(),
                    name: code.to_string(),
                    bias: bias.to_string(),
                    ..Default::default()
                })
                .collect(),
        }
    }

    fn daily(entries: &[(&str, &str)]) -> DailyRecapDocument {
        DailyRecapDocument {
            date: "test day".to_string(),
            currencies: entries
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
        }
    }

    fn names(pairs: &[DerivedPair]) -> Vec<String> {
        pairs.iter().map(|p| p.to_string()).collect()
    }

    #[test]
    fn single_aligned_pair() {
        let w = weekly(&[("EUR", "Bullish"), ("JPY", "Bearish")]);
        let d = daily(&[("EUR", "Bullish"), ("JPY", "Bearish")]);

        let setups = high_conviction_setups(&w, &d);
        assert_eq!(names(&setups), vec!["EUR/JPY LONG"]);

        let reason = setups[0].reason.as_deref().unwrap();
        assert!(reason.contains("EUR") && reason.contains("JPY"), "{reason}");
        assert_eq!(
            reason,
            "Strong alignment: Weekly & Daily Bullish EUR vs Bearish JPY"
        );
    }

    #[test]
    fn reason_follows_written_order_for_short_setups() {
        let w = weekly(&[("JPY", "Strong Bullish"), ("USD", "Bearish")]);
        let d = daily(&[("USD", "Weak Bearish"), ("JPY", "Bullish")]);

        let setups = high_conviction_setups(&w, &d);
        assert_eq!(names(&setups), vec!["USD/JPY SHORT"]);
        assert_eq!(
            setups[0].reason.as_deref(),
            Some("Strong alignment: Weekly & Daily Bearish USD vs Bullish JPY")
        );
    }

    #[test]
    fn no_alignment_means_no_setups() {
        let w = weekly(&[("EUR", "Bullish"), ("JPY", "Bearish"), ("USD", "Neutral")]);
        let d = daily(&[("EUR", "Bearish"), ("JPY", "Mixed"), ("USD", "Neutral")]);
        assert!(high_conviction_setups(&w, &d).is_empty());

        // One-sided alignment is not padded with anything weaker.
        let d = daily(&[("EUR", "Bullish"), ("JPY", "Neutral")]);
        assert!(high_conviction_setups(&w, &d).is_empty());
    }

    #[test]
    fn missing_daily_counterpart_is_skipped() {
        let w = weekly(&[("EUR", "Bullish"), ("JPY", "Bearish")]);
        let d = daily(&[("EUR", "Bullish")]);
        assert!(high_conviction_setups(&w, &d).is_empty());
    }

    #[test]
    fn high_conviction_is_capped_in_generation_order() {
        let w = weekly(&[
            ("EUR", "Bullish"),
            ("GBP", "Bullish"),
            ("JPY", "Bearish"),
            ("CHF", "Bearish"),
        ]);
        let d = daily(&[
            ("EUR", "Bullish"),
            ("GBP", "Bullish"),
            ("JPY", "Bearish"),
            ("CHF", "Bearish"),
        ]);
        let setups = high_conviction_setups(&w, &d);
        assert_eq!(setups.len(), PAIRING.high_conviction_limit);
        assert_eq!(
            names(&setups),
            vec!["EUR/JPY LONG", "EUR/CHF LONG", "GBP/JPY LONG"]
        );
    }

    #[test]
    fn swing_lists_split_by_direction() {
        let w = weekly(&[
            ("USD", "Bullish"),
            ("EUR", "Bearish"),
            ("JPY", "Weak Bearish"),
            ("CAD", "Neutral"),
        ]);
        let swing = swing_watchlist(&w);
        assert_eq!(names(&swing.long), vec!["USD/JPY LONG"]);
        assert_eq!(names(&swing.short), vec!["EUR/USD SHORT"]);
    }

    #[test]
    fn swing_lists_are_capped_independently() {
        let w = weekly(&[
            ("EUR", "Bullish"),
            ("GBP", "Bullish"),
            ("AUD", "Bullish"),
            ("NZD", "Bearish"),
            ("USD", "Bearish"),
            ("CAD", "Bearish"),
            ("CHF", "Bearish"),
            ("JPY", "Bearish"),
        ]);
        let swing = swing_watchlist(&w);
        // 3 x 5 = 15 candidates, all LONG because every bull outranks every bear.
        assert_eq!(swing.long.len(), PAIRING.swing_list_limit);
        assert!(swing.short.is_empty());
        assert_eq!(swing.long[0].pair(), "EUR/NZD");
        assert_eq!(swing.long[5].pair(), "GBP/NZD");
    }

    #[test]
    fn swing_empty_side_reports_nothing() {
        let w = weekly(&[("EUR", "Bullish"), ("GBP", "Neutral")]);
        assert_eq!(swing_watchlist(&w), SwingWatchlist::default());
    }

    #[test]
    fn intraday_uses_list_position_and_title_case_direction() {
        let d = daily(&[("JPY", "Bullish"), ("AUD", "Bearish"), ("CHF", "Bearish")]);
        let pairs = intraday_pairs(&d, &[]);
        let labels: Vec<String> = pairs
            .iter()
            .map(|p| format!("{} {}", p.pair(), p.direction.title_case()))
            .collect();
        assert_eq!(labels, vec!["AUD/JPY Short", "CHF/JPY Short"]);
    }

    #[test]
    fn intraday_unknown_codes_never_flip() {
        let d = daily(&[("XAU", "Bullish"), ("USD", "Bearish"), ("EUR", "Bullish")]);
        let pairs = intraday_pairs(&d, &[]);
        assert_eq!(names(&pairs), vec!["XAU/USD LONG", "EUR/USD LONG"]);

        let d = daily(&[("JPY", "Bullish"), ("XAG", "Bearish")]);
        assert_eq!(names(&intraday_pairs(&d, &[])), vec!["JPY/XAG LONG"]);
    }

    #[test]
    fn intraday_accepts_currency_on_both_sides() {
        let d = daily(&[("GBP", "Bullish turning Bearish")]);
        let pairs = intraday_pairs(&d, &[]);
        assert_eq!(names(&pairs), vec!["GBP/GBP LONG"]);
    }

    #[test]
    fn intraday_excludes_high_conviction_pairs() {
        let w = weekly(&[("EUR", "Bullish"), ("JPY", "Bearish")]);
        let d = daily(&[
            ("EUR", "Bullish"),
            ("GBP", "Strong Bullish"),
            ("JPY", "Bearish"),
        ]);
        let high = high_conviction_setups(&w, &d);
        let intraday = intraday_pairs(&d, &high);

        assert_eq!(names(&intraday), vec!["GBP/JPY LONG"]);
        for pair in &intraday {
            assert!(!high.iter().any(|h| h.pair() == pair.pair()));
        }
    }

    #[test]
    fn intraday_cap_applies_after_exclusion() {
        let d = daily(&[
            ("EUR", "Bullish"),
            ("GBP", "Bullish"),
            ("AUD", "Bullish"),
            ("USD", "Bearish"),
            ("CAD", "Bearish"),
            ("JPY", "Bearish"),
        ]);
        let excluded = vec![DerivedPair::new("EUR", "USD", TradeDirection::Long)];
        let pairs = intraday_pairs(&d, &excluded);
        assert_eq!(pairs.len(), PAIRING.intraday_limit);
        assert_eq!(pairs[0].pair(), "EUR/CAD");
        assert_eq!(pairs[5].pair(), "AUD/USD");
    }

    #[test]
    fn derivations_are_repeatable() {
        let w = weekly(&[("EUR", "Bullish"), ("USD", "Bearish"), ("JPY", "Bearish")]);
        let d = daily(&[("EUR", "Bullish"), ("USD", "Bearish"), ("JPY", "Bullish")]);
        let first = high_conviction_setups(&w, &d);
        assert_eq!(first, high_conviction_setups(&w, &d));
        assert_eq!(swing_watchlist(&w), swing_watchlist(&w));
        assert_eq!(intraday_pairs(&d, &first), intraday_pairs(&d, &first));
    }
}
