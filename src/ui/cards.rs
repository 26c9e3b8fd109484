use eframe::egui::{Align, Frame, Layout, Margin, RichText, Stroke, Ui};

use crate::analysis::CurrencyCard;
use crate::analysis::market::ImpactLevel;
use crate::domain::DerivedPair;
use crate::models::{KeyEvent, RedFolderNewsItem};
use crate::ui::config::{UI_CONFIG, UI_TEXT};
use crate::ui::styles::UiStyleExt;
use crate::ui::utils::{bias_color, direction_color, impact_color};

/// Trend glyphs for a bias label. Mirrors the label text, so a split label
/// like "Neutral-Bearish" shows two glyphs.
fn trend_glyphs(bias: &str) -> Vec<(&'static str, eframe::egui::Color32)> {
    let mut glyphs = Vec::new();
    if bias.contains("Bullish") {
        glyphs.push(("▲", UI_CONFIG.colors.bullish));
    }
    if bias.contains("Bearish") {
        glyphs.push(("▼", UI_CONFIG.colors.bearish));
    }
    if bias.contains("Neutral") || bias.contains("Mixed") {
        glyphs.push(("▬", UI_CONFIG.colors.muted));
    }
    glyphs
}

pub fn render_bias_card(ui: &mut Ui, card: &CurrencyCard) {
    let record = &card.record;
    let bias = record.bias();
    let color = bias_color(bias);

    Frame::new()
        .fill(UI_CONFIG.colors.panel)
        .stroke(Stroke::new(1.0, color))
        .inner_margin(Margin::same(12))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());

            // Code, name, bias badge, tone
            ui.horizontal(|ui| {
                ui.vertical(|ui| {
                    ui.label(
                        RichText::new(record.code())
                            .size(22.0)
                            .strong()
                            .color(UI_CONFIG.colors.text_strong),
                    );
                    ui.label_subdued(record.name().to_uppercase());
                });
                ui.with_layout(Layout::top_down(Align::Max), |ui| {
                    ui.badge(bias.to_uppercase(), color);
                    if let Some(tone) = record.tone() {
                        ui.label_subdued(format!("◉ {}", tone));
                    }
                });
            });

            ui.add_space(4.0);
            ui.horizontal(|ui| {
                for (glyph, glyph_color) in trend_glyphs(bias) {
                    ui.label(RichText::new(glyph).color(glyph_color));
                }
                ui.label(
                    RichText::new(bias.to_uppercase())
                        .monospace()
                        .strong()
                        .color(color),
                );
                if let Some(alignment) = card.alignment.filter(|a| a.shows_badge()) {
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        ui.badge(
                            format!("🔗 {} {}", alignment, UI_TEXT.alignment_suffix),
                            UI_CONFIG.colors.accent,
                        );
                    });
                }
            });
            ui.separator();

            if let Some(summary) = record.summary() {
                ui.label(
                    RichText::new(summary)
                        .small()
                        .monospace()
                        .color(UI_CONFIG.colors.text),
                );
                ui.add_space(6.0);
            }

            let headlines = record.headlines();
            if !headlines.is_empty() {
                ui.label_subdued(UI_TEXT.top_headlines_label);
                for headline in headlines {
                    ui.label(
                        RichText::new(format!("│ {}", headline))
                            .small()
                            .monospace()
                            .color(UI_CONFIG.colors.text),
                    );
                }
                ui.add_space(6.0);
            }

            if let Some(reaction) = record.reaction() {
                Frame::new()
                    .fill(UI_CONFIG.colors.panel_inset)
                    .stroke(Stroke::new(1.0, UI_CONFIG.colors.border))
                    .inner_margin(Margin::same(6))
                    .show(ui, |ui| {
                        ui.set_width(ui.available_width());
                        ui.label(
                            RichText::new(UI_TEXT.market_reaction_label)
                                .small()
                                .monospace()
                                .color(UI_CONFIG.colors.accent),
                        );
                        ui.label(
                            RichText::new(reaction)
                                .small()
                                .monospace()
                                .color(UI_CONFIG.colors.neutral),
                        );
                    });
                ui.add_space(6.0);
            }

            let drivers = record.drivers();
            if !drivers.is_empty() {
                ui.horizontal_wrapped(|ui| {
                    for driver in drivers {
                        ui.badge(driver.to_uppercase(), UI_CONFIG.colors.neutral);
                    }
                });
            }

            let events = record.events();
            if !events.is_empty() {
                ui.separator();
                ui.label_subdued(UI_TEXT.key_events_label);
                for event in events {
                    render_key_event(ui, event);
                }
            }
        });
}

fn render_key_event(ui: &mut Ui, key_event: &KeyEvent) {
    let impact_color = if key_event.is_high_impact() {
        UI_CONFIG.colors.impact_critical
    } else {
        UI_CONFIG.colors.muted
    };

    ui.horizontal(|ui| match key_event {
        KeyEvent::Detailed { day, event, impact } => {
            ui.label(
                RichText::new(day.to_uppercase())
                    .small()
                    .monospace()
                    .color(UI_CONFIG.colors.accent.gamma_multiply(0.7)),
            );
            ui.label(
                RichText::new(event)
                    .small()
                    .monospace()
                    .color(UI_CONFIG.colors.text),
            );
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                ui.label(
                    RichText::new(impact.to_uppercase())
                        .small()
                        .monospace()
                        .color(impact_color),
                );
            });
        }
        KeyEvent::Note(note) => {
            ui.label(
                RichText::new(note)
                    .small()
                    .monospace()
                    .color(UI_CONFIG.colors.text),
            );
        }
    });
}

/// Numbered high-conviction setup with its reason line.
pub fn render_trade_card(ui: &mut Ui, index: usize, trade: &DerivedPair) {
    let color = direction_color(trade.direction);
    Frame::new()
        .fill(color.gamma_multiply(0.05))
        .stroke(Stroke::new(1.0, color.gamma_multiply(0.3)))
        .inner_margin(Margin::same(8))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.badge((index + 1).to_string(), color);
                ui.vertical(|ui| {
                    ui.horizontal(|ui| {
                        ui.label(
                            RichText::new(trade.pair())
                                .monospace()
                                .strong()
                                .color(UI_CONFIG.colors.text_strong),
                        );
                        ui.badge(trade.direction.to_string(), color);
                    });
                    if let Some(reason) = &trade.reason {
                        ui.label_subdued(reason);
                    }
                });
            });
        });
}

/// One line of a swing watchlist: pair and an upper-case direction tag.
pub fn render_watch_row(ui: &mut Ui, trade: &DerivedPair) {
    let color = direction_color(trade.direction);
    Frame::new()
        .fill(UI_CONFIG.colors.background.gamma_multiply(0.4))
        .stroke(Stroke::new(1.0, UI_CONFIG.colors.border))
        .inner_margin(Margin::same(8))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new(trade.pair())
                        .monospace()
                        .strong()
                        .color(UI_CONFIG.colors.text_strong),
                );
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    ui.badge(trade.direction.to_string(), color);
                });
            });
        });
}

/// Compact intraday line; direction is written in title case.
pub fn render_intraday_row(ui: &mut Ui, trade: &DerivedPair) {
    let color = direction_color(trade.direction);
    let response = Frame::new()
        .fill(UI_CONFIG.colors.panel_inset)
        .stroke(Stroke::new(1.0, UI_CONFIG.colors.border))
        .inner_margin(Margin::symmetric(10, 6))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new(trade.pair())
                        .small()
                        .monospace()
                        .strong()
                        .color(UI_CONFIG.colors.text_strong),
                );
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    ui.label(
                        RichText::new(trade.direction.title_case())
                            .small()
                            .strong()
                            .color(color),
                    );
                });
            });
        });

    let rect = response.response.rect;
    ui.painter().vline(
        rect.left(),
        rect.y_range(),
        Stroke::new(UI_CONFIG.accent_bar_width * 0.7, color),
    );
}

pub fn render_news_row(ui: &mut Ui, item: &RedFolderNewsItem) {
    ui.horizontal(|ui| {
        ui.label(
            RichText::new(&item.time)
                .small()
                .monospace()
                .color(UI_CONFIG.colors.label),
        );
        ui.vertical(|ui| {
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new(&item.currency)
                        .small()
                        .strong()
                        .color(UI_CONFIG.colors.text_strong),
                );
                ui.badge(
                    item.impact.to_uppercase(),
                    impact_color(ImpactLevel::from_text(&item.impact)),
                );
            });
            ui.label(
                RichText::new(&item.event)
                    .small()
                    .monospace()
                    .color(UI_CONFIG.colors.neutral),
            );
        });
    });
    ui.separator();
}
