//! Headless text report: the same derived setups the dashboard shows, as tables.

use std::fmt::Write;

use tabled::{Table, Tabled};

use crate::analysis::market::news_for_day;
use crate::analysis::{DashboardSnapshot, currency_cards};
use crate::data::Datasets;
use crate::domain::{BiasFilter, DerivedPair, ViewMode};
use crate::models::RedFolderNewsItem;

#[derive(Tabled)]
struct SetupRow {
    #[tabled(rename = "#")]
    rank: usize,
    #[tabled(rename = "Pair")]
    pair: String,
    #[tabled(rename = "Direction")]
    direction: String,
    #[tabled(rename = "Reason")]
    reason: String,
}

#[derive(Tabled)]
struct AlignmentRow {
    #[tabled(rename = "Currency")]
    code: String,
    #[tabled(rename = "Weekly")]
    weekly: String,
    #[tabled(rename = "Daily")]
    daily: String,
    #[tabled(rename = "Alignment")]
    alignment: String,
}

#[derive(Tabled)]
struct NewsRow {
    #[tabled(rename = "Time")]
    time: String,
    #[tabled(rename = "Currency")]
    currency: String,
    #[tabled(rename = "Event")]
    event: String,
    #[tabled(rename = "Impact")]
    impact: String,
}

fn setup_rows(pairs: &[DerivedPair]) -> Vec<SetupRow> {
    pairs
        .iter()
        .enumerate()
        .map(|(i, p)| SetupRow {
            rank: i + 1,
            pair: p.pair(),
            direction: p.direction.to_string(),
            reason: p.reason.clone().unwrap_or_default(),
        })
        .collect()
}

fn alignment_rows(datasets: &Datasets) -> Vec<AlignmentRow> {
    currency_cards(
        ViewMode::Weekly,
        BiasFilter::All,
        &datasets.weekly,
        &datasets.daily,
    )
    .into_iter()
    .map(|card| {
        let code = card.record.code();
        AlignmentRow {
            code: code.to_string(),
            weekly: card.record.bias().to_string(),
            daily: datasets
                .daily
                .currencies
                .get(code)
                .map(|d| d.bias.clone())
                .unwrap_or_else(|| "-".to_string()),
            alignment: card
                .alignment
                .map(|a| a.to_string())
                .unwrap_or_else(|| "-".to_string()),
        }
    })
    .collect()
}

fn news_rows(items: &[&RedFolderNewsItem]) -> Vec<NewsRow> {
    items
        .iter()
        .map(|item| NewsRow {
            time: item.time.clone(),
            currency: item.currency.clone(),
            event: item.event.clone(),
            impact: item.impact.clone(),
        })
        .collect()
}

fn push_section<T: Tabled>(out: &mut String, title: &str, rows: Vec<T>, empty: &str) {
    let _ = writeln!(out, "== {} ==", title);
    if rows.is_empty() {
        let _ = writeln!(out, "{}", empty);
    } else {
        let _ = writeln!(out, "{}", Table::new(rows));
    }
    out.push('\n');
}

/// Render every derived list for the loaded documents. `day_code` selects
/// which red folder events count as "today" (e.g. "TUE").
pub fn render_report(datasets: &Datasets, day_code: &str) -> String {
    let snapshot = DashboardSnapshot::derive(&datasets.weekly, &datasets.daily);
    let mut out = String::new();

    let _ = writeln!(out, "{}", datasets.weekly.week);
    let _ = writeln!(out, "{}\n", datasets.daily.date);

    push_section(
        &mut out,
        "High Conviction Setups",
        setup_rows(&snapshot.high_conviction),
        "No high conviction setups today.",
    );
    push_section(
        &mut out,
        "Swing Watchlist LONG",
        setup_rows(&snapshot.swing.long),
        "No long setups this week.",
    );
    push_section(
        &mut out,
        "Swing Watchlist SHORT",
        setup_rows(&snapshot.swing.short),
        "No short setups this week.",
    );

    let intraday_empty = if snapshot.intraday_divergence {
        "Every intraday candidate is already a high conviction setup."
    } else {
        "No clear intraday divergence today."
    };
    push_section(
        &mut out,
        "Intraday Pairs",
        setup_rows(&snapshot.intraday),
        intraday_empty,
    );
    push_section(
        &mut out,
        "Weekly vs Daily Alignment",
        alignment_rows(datasets),
        "No currencies loaded.",
    );
    push_section(
        &mut out,
        &format!("Red Folder News ({})", day_code),
        news_rows(&news_for_day(&datasets.daily.red_folder_news, day_code)),
        "No high impact events remaining today.",
    );

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::bundled_datasets;
    use crate::models::{DailyRecapDocument, WeeklyBiasDocument};

    #[test]
    fn report_lists_bundled_setups() {
        let datasets = bundled_datasets().expect("bundled data parses");
        let report = render_report(&datasets, "TUE");

        assert!(report.contains("== High Conviction Setups =="));
        assert!(report.contains("USD/JPY"), "report:\n{}", report);
        assert!(report.contains("Perfect"));
        assert!(report.contains("== Red Folder News (TUE) =="));
    }

    #[test]
    fn empty_documents_print_empty_messages() {
        let datasets = Datasets {
            weekly: WeeklyBiasDocument::default(),
            daily: DailyRecapDocument::default(),
        };
        let report = render_report(&datasets, "MON");

        assert!(report.contains("No high conviction setups today."));
        assert!(report.contains("No clear intraday divergence today."));
        assert!(report.contains("No high impact events remaining today."));
    }
}
