use eframe::egui::{
    Align, Align2, Button, CentralPanel, Context, Frame, Grid, Layout, Margin, RichText,
    ScrollArea, TopBottomPanel, Ui, Window, vec2,
};

use crate::analysis::market::{
    RiskSentiment, RiskSeverity, focus_headline, news_for_day, overview_text, risk_summary,
    sentiment_label,
};
use crate::analysis::{DashboardSnapshot, currency_cards};
use crate::config::CLOCK;
use crate::domain::{DerivedPair, ViewMode};
use crate::ui::cards::{
    render_bias_card, render_intraday_row, render_news_row, render_trade_card, render_watch_row,
};
use crate::ui::config::{UI_CONFIG, UI_TEXT};
use crate::ui::styles::UiStyleExt;
use crate::ui::ui_panels::{FilterBarPanel, FilterEvent, Panel, ViewEvent, ViewTogglePanel};
use crate::ui::utils::{accent_panel, panel_frame, sentiment_color, severity_color, spaced_separator};
use crate::utils::time_utils::{frankfurt_clock, local_weekday_code, utc_now};

use super::app::TudorDashboardApp;

/// Gap between side-by-side panels
const COLUMN_GAP: f32 = 16.0;

/// Width of one column when `total` is split into `parts` with gaps between them.
fn column_width(total: f32, parts: usize) -> f32 {
    let parts = parts.max(1) as f32;
    ((total - COLUMN_GAP * (parts - 1.0)) / parts).max(0.0)
}

impl TudorDashboardApp {
    pub(super) fn render_top_bar(&mut self, ctx: &Context) {
        let frame = Frame::new()
            .fill(UI_CONFIG.colors.top_bar)
            .inner_margin(Margin::symmetric(12, 6));
        TopBottomPanel::top("top_bar").frame(frame).show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new("▣").color(UI_CONFIG.colors.accent));
                ui.label(
                    RichText::new(UI_TEXT.app_title_prefix)
                        .monospace()
                        .strong()
                        .color(UI_CONFIG.colors.accent),
                );
                ui.add_space(-ui.spacing().item_spacing.x);
                ui.label(
                    RichText::new(UI_TEXT.app_title_suffix)
                        .monospace()
                        .strong()
                        .color(UI_CONFIG.colors.text_strong),
                );
                ui.separator();
                ui.label_subdued(UI_TEXT.app_subtitle);

                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    ui.label_subdued(UI_TEXT.live_indicator);
                    ui.label(RichText::new("●").small().color(UI_CONFIG.colors.live));
                    ui.add_space(8.0);
                    ui.label_subdued(format!("{} {}", CLOCK.label, frankfurt_clock(utc_now())));
                    ui.label(RichText::new("🌐").small().color(UI_CONFIG.colors.accent));
                    ui.separator();

                    let busy = self.export.is_busy();
                    let label = if busy {
                        UI_TEXT.export_busy
                    } else {
                        UI_TEXT.export_button
                    };
                    let button = Button::new(
                        RichText::new(label)
                            .small()
                            .monospace()
                            .color(UI_CONFIG.colors.label),
                    )
                    .frame(false);
                    if ui.add_enabled(!busy, button).clicked() {
                        self.start_export(ctx);
                    }

                    if let Some(path) = &self.last_export {
                        ui.label_subdued(format!(
                            "{} {}",
                            UI_TEXT.export_saved_prefix,
                            path.display()
                        ));
                    }
                });
            });
        });
    }

    pub(super) fn render_footer(&self, ctx: &Context) {
        let frame = Frame::new()
            .fill(UI_CONFIG.colors.top_bar)
            .inner_margin(Margin::symmetric(12, 8));
        TopBottomPanel::bottom("footer").frame(frame).show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.vertical(|ui| {
                    ui.label_subdued(UI_TEXT.footer_copyright);
                    ui.label_subdued(UI_TEXT.footer_sources);
                });
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    ui.label_subdued(UI_TEXT.footer_status);
                    ui.label(RichText::new("●").small().color(UI_CONFIG.colors.live));
                });
            });
        });
    }

    pub(super) fn render_central_panel(&mut self, ctx: &Context) {
        let frame = Frame::new()
            .fill(UI_CONFIG.colors.background)
            .inner_margin(Margin::same(16));
        let response = CentralPanel::default().frame(frame).show(ctx, |ui| {
            ScrollArea::vertical()
                .id_salt("dashboard_scroll")
                .show(ui, |ui| {
                    self.render_header(ui);
                    spaced_separator(ui);

                    let snapshot =
                        DashboardSnapshot::derive(&self.datasets.weekly, &self.datasets.daily);
                    match self.view_mode {
                        ViewMode::Weekly => self.render_weekly_section(ui, &snapshot),
                        ViewMode::Daily => self.render_daily_section(ui, &snapshot),
                    }

                    ui.add_space(16.0);
                    self.render_filter_bar(ui);
                    ui.add_space(12.0);
                    self.render_card_grid(ui);
                });
        });
        self.export_region = Some(response.response.rect);
    }

    fn render_header(&mut self, ui: &mut Ui) {
        let (heading, subtitle) = match self.view_mode {
            ViewMode::Weekly => (UI_TEXT.weekly_heading, self.datasets.weekly.week.clone()),
            ViewMode::Daily => (UI_TEXT.daily_heading, self.datasets.daily.date.clone()),
        };

        let mut events = Vec::new();
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.label(
                    RichText::new(heading)
                        .size(34.0)
                        .strong()
                        .color(UI_CONFIG.colors.text_strong),
                );
                ui.label(
                    RichText::new(subtitle.to_uppercase())
                        .small()
                        .monospace()
                        .color(UI_CONFIG.colors.accent),
                );
            });
            ui.with_layout(Layout::right_to_left(Align::Max), |ui| {
                let mut panel = ViewTogglePanel::new(self.view_mode);
                events = panel.render(ui);
            });
        });

        for event in events {
            match event {
                ViewEvent::Selected(view) => self.set_view(view),
            }
        }
    }

    fn render_weekly_section(&self, ui: &mut Ui, snapshot: &DashboardSnapshot) {
        accent_panel(ui, UI_CONFIG.colors.accent, |ui| {
            ui.set_width(ui.available_width());
            ui.label_header("📈", UI_TEXT.market_overview_heading, UI_CONFIG.colors.accent);
            ui.label(
                RichText::new(UI_TEXT.weekly_overview_blurb)
                    .monospace()
                    .color(UI_CONFIG.colors.text),
            );
        });
        ui.add_space(16.0);

        let width = column_width(ui.available_width(), 2);
        ui.horizontal_top(|ui| {
            ui.spacing_mut().item_spacing.x = COLUMN_GAP;
            ui.allocate_ui_with_layout(vec2(width, 0.0), Layout::top_down(Align::Min), |ui| {
                render_swing_list(
                    ui,
                    UI_TEXT.swing_long_heading,
                    UI_TEXT.swing_long_empty,
                    &snapshot.swing.long,
                    UI_CONFIG.colors.bullish,
                );
            });
            ui.allocate_ui_with_layout(vec2(width, 0.0), Layout::top_down(Align::Min), |ui| {
                render_swing_list(
                    ui,
                    UI_TEXT.swing_short_heading,
                    UI_TEXT.swing_short_empty,
                    &snapshot.swing.short,
                    UI_CONFIG.colors.bearish,
                );
            });
        });
    }

    fn render_daily_section(&self, ui: &mut Ui, snapshot: &DashboardSnapshot) {
        let focus = &self.datasets.daily.market_focus;

        // Status strip
        panel_frame().show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.columns(4, |cols| {
                let sentiment = RiskSentiment::from_environment(&focus.risk_environment);
                cols[0].label_subdued(UI_TEXT.risk_sentiment_label);
                cols[0].horizontal(|ui| {
                    ui.label(RichText::new("📈").color(sentiment_color(sentiment)));
                    ui.label(
                        RichText::new(sentiment_label(focus))
                            .monospace()
                            .strong()
                            .color(UI_CONFIG.colors.text_strong),
                    );
                });

                cols[1].metric(
                    UI_TEXT.focus_label,
                    focus_headline(focus),
                    UI_CONFIG.colors.text_strong,
                );
                cols[2].metric(
                    UI_TEXT.risk_environment_label,
                    &focus.risk_environment,
                    severity_color(RiskSeverity::from_environment(&focus.risk_environment)),
                );
                cols[3].metric(
                    UI_TEXT.next_update_label,
                    CLOCK.next_update,
                    UI_CONFIG.colors.neutral,
                );
            });
        });
        ui.add_space(16.0);

        let total = ui.available_width();
        let quarter = column_width(total, 4);
        let half = quarter * 2.0 + COLUMN_GAP;

        ui.horizontal_top(|ui| {
            ui.spacing_mut().item_spacing.x = COLUMN_GAP;

            // Market context
            ui.allocate_ui_with_layout(vec2(half, 0.0), Layout::top_down(Align::Min), |ui| {
                accent_panel(ui, UI_CONFIG.colors.accent, |ui| {
                    ui.set_width(ui.available_width());
                    ui.label_header("📈", UI_TEXT.market_overview_heading, UI_CONFIG.colors.accent);
                    ui.label(
                        RichText::new(overview_text(focus))
                            .monospace()
                            .color(UI_CONFIG.colors.text),
                    );
                });
                ui.add_space(12.0);
                ui.columns(2, |cols| {
                    panel_frame().show(&mut cols[0], |ui| {
                        ui.set_width(ui.available_width());
                        ui.label_subdued(UI_TEXT.market_focus_heading);
                        ui.separator();
                        for headline in &focus.headlines {
                            ui.horizontal_wrapped(|ui| {
                                ui.label(RichText::new("›").color(UI_CONFIG.colors.accent));
                                ui.label(
                                    RichText::new(headline)
                                        .small()
                                        .monospace()
                                        .color(UI_CONFIG.colors.text),
                                );
                            });
                        }
                    });
                    panel_frame().show(&mut cols[1], |ui| {
                        ui.set_width(ui.available_width());
                        ui.label_subdued(UI_TEXT.risk_environment_label);
                        ui.separator();
                        ui.label(
                            RichText::new(risk_summary(focus))
                                .small()
                                .monospace()
                                .color(UI_CONFIG.colors.text),
                        );
                    });
                });
            });

            // Setups
            ui.allocate_ui_with_layout(vec2(quarter, 0.0), Layout::top_down(Align::Min), |ui| {
                panel_frame().show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.label_header("⚡", UI_TEXT.high_conviction_heading, UI_CONFIG.colors.accent);
                    ui.label_subdued(UI_TEXT.high_conviction_subtitle);
                    ui.add_space(8.0);
                    if snapshot.high_conviction.is_empty() {
                        ui.label_empty(UI_TEXT.high_conviction_empty);
                    } else {
                        for (index, trade) in snapshot.high_conviction.iter().enumerate() {
                            render_trade_card(ui, index, trade);
                        }
                    }
                });
                ui.add_space(12.0);
                panel_frame().show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.horizontal(|ui| {
                        ui.label_header("📊", UI_TEXT.intraday_heading, UI_CONFIG.colors.accent);
                        ui.label_subdued(UI_TEXT.intraday_subtitle);
                    });
                    ui.add_space(8.0);
                    if snapshot.intraday_divergence {
                        for trade in &snapshot.intraday {
                            render_intraday_row(ui, trade);
                        }
                    } else {
                        ui.label_empty(UI_TEXT.intraday_empty);
                    }
                });
            });

            // Red folder news
            ui.allocate_ui_with_layout(vec2(quarter, 0.0), Layout::top_down(Align::Min), |ui| {
                panel_frame().show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.label_header("📅", UI_TEXT.red_folder_heading, UI_CONFIG.colors.bearish);
                    ui.add_space(8.0);
                    let today =
                        news_for_day(&self.datasets.daily.red_folder_news, local_weekday_code());
                    if today.is_empty() {
                        ui.label_empty(UI_TEXT.red_folder_empty);
                    }
                    for item in today {
                        render_news_row(ui, item);
                    }
                });
            });
        });
    }

    fn render_filter_bar(&mut self, ui: &mut Ui) {
        let mut panel = FilterBarPanel::new(self.filter);
        for event in panel.render(ui) {
            match event {
                FilterEvent::Selected(filter) => self.set_filter(filter),
            }
        }
    }

    fn render_card_grid(&self, ui: &mut Ui) {
        let cards = currency_cards(
            self.view_mode,
            self.filter,
            &self.datasets.weekly,
            &self.datasets.daily,
        );
        if cards.is_empty() {
            ui.label_empty(UI_TEXT.no_cards);
            return;
        }

        let fit = (ui.available_width() / UI_CONFIG.min_card_width).floor() as usize;
        let columns = fit.clamp(1, UI_CONFIG.max_grid_columns);
        for row in cards.chunks(columns) {
            ui.columns(columns, |cols| {
                for (col, card) in cols.iter_mut().zip(row) {
                    render_bias_card(col, card);
                }
            });
            ui.add_space(12.0);
        }
    }

    fn render_shortcut_rows(ui: &mut Ui, rows: &[(&str, &str)]) {
        for (key, description) in rows {
            ui.label(RichText::new(*key).monospace().strong());
            ui.label(*description);
            ui.end_row();
        }
    }

    pub(super) fn render_help_panel(&mut self, ctx: &Context) {
        Window::new(UI_TEXT.help_title)
            .open(&mut self.show_help)
            .resizable(false)
            .collapsible(false)
            .default_width(360.0)
            .show(ctx, |ui| {
                ui.label(UI_TEXT.help_intro);
                ui.add_space(5.0);

                let shortcuts = [
                    ("W", UI_TEXT.help_weekly),
                    ("D", UI_TEXT.help_daily),
                    ("F", UI_TEXT.help_filter),
                    ("E", UI_TEXT.help_export),
                    ("H", UI_TEXT.help_toggle),
                ];

                Grid::new("shortcuts_grid")
                    .num_columns(2)
                    .spacing([20.0, 8.0])
                    .striped(true)
                    .show(ui, |ui| {
                        Self::render_shortcut_rows(ui, &shortcuts);
                    });
            });
    }

    pub(super) fn render_alert(&mut self, ctx: &Context) {
        let Some(error) = &self.last_error else {
            return;
        };

        let mut dismissed = false;
        Window::new(UI_TEXT.alert_title)
            .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
            .resizable(false)
            .collapsible(false)
            .show(ctx, |ui| {
                ui.label(RichText::new(error.to_string()).color(UI_CONFIG.colors.bearish));
                ui.add_space(8.0);
                if ui.button(UI_TEXT.alert_dismiss).clicked() {
                    dismissed = true;
                }
            });

        if dismissed {
            self.last_error = None;
        }
    }

    pub(super) fn handle_global_shortcuts(&mut self, ctx: &Context) {
        use eframe::egui::Key;

        // Read everything first; acting inside `ctx.input` would re-enter the context lock.
        let (weekly, daily, filter, export, help, escape) = ctx.input(|i| {
            (
                i.key_pressed(Key::W),
                i.key_pressed(Key::D),
                i.key_pressed(Key::F),
                i.key_pressed(Key::E),
                i.key_pressed(Key::H),
                i.key_pressed(Key::Escape),
            )
        });

        if weekly {
            self.set_view(ViewMode::Weekly);
        }
        if daily {
            self.set_view(ViewMode::Daily);
        }
        if filter {
            self.set_filter(self.filter.cycled());
        }
        if export {
            self.start_export(ctx);
        }
        if help {
            self.show_help = !self.show_help;
        }
        if escape && self.show_help {
            self.show_help = false;
        }
    }
}

fn render_swing_list(
    ui: &mut Ui,
    heading: &str,
    empty: &str,
    pairs: &[DerivedPair],
    accent: eframe::egui::Color32,
) {
    accent_panel(ui, accent, |ui| {
        ui.set_width(ui.available_width());
        ui.label_header("⚡", heading, accent);
        ui.add_space(8.0);
        if pairs.is_empty() {
            ui.label_empty(empty);
        }
        for trade in pairs {
            render_watch_row(ui, trade);
        }
    });
}
