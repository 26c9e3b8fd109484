use eframe::egui::{
    Color32, Context, CornerRadius, Frame, InnerResponse, Margin, Rect, Stroke, Ui, Visuals, pos2,
};

use crate::analysis::market::{ImpactLevel, RiskSentiment, RiskSeverity};
use crate::domain::{BiasDirection, TradeDirection};
use crate::ui::config::UI_CONFIG;

/// Sets up custom visuals for the entire application
pub fn setup_custom_visuals(ctx: &Context) {
    let mut visuals = Visuals::dark();

    visuals.window_fill = UI_CONFIG.colors.panel;
    visuals.panel_fill = UI_CONFIG.colors.background;
    visuals.extreme_bg_color = UI_CONFIG.colors.background;
    visuals.window_corner_radius = CornerRadius::ZERO;
    visuals.selection.bg_fill = UI_CONFIG.colors.accent;
    visuals.selection.stroke = Stroke::new(1.0, Color32::BLACK);

    visuals.widgets.noninteractive.fg_stroke.color = UI_CONFIG.colors.text;
    visuals.widgets.noninteractive.bg_stroke.color = UI_CONFIG.colors.border;
    visuals.widgets.inactive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.inactive.weak_bg_fill = UI_CONFIG.colors.panel;
    visuals.widgets.hovered.fg_stroke.color = UI_CONFIG.colors.accent;
    visuals.widgets.active.fg_stroke.color = UI_CONFIG.colors.accent;

    ctx.set_visuals(visuals);
}

/// Dark bordered panel.
pub fn panel_frame() -> Frame {
    Frame::new()
        .fill(UI_CONFIG.colors.panel)
        .stroke(Stroke::new(1.0, UI_CONFIG.colors.border))
        .inner_margin(Margin::same(14))
}

/// Panel with a coloured bar down its left edge.
pub fn accent_panel<R>(
    ui: &mut Ui,
    accent: Color32,
    add_contents: impl FnOnce(&mut Ui) -> R,
) -> InnerResponse<R> {
    let response = panel_frame().show(ui, add_contents);
    let rect = response.response.rect;
    let bar = Rect::from_min_max(
        rect.left_top(),
        pos2(rect.left() + UI_CONFIG.accent_bar_width, rect.bottom()),
    );
    ui.painter().rect_filled(bar, CornerRadius::ZERO, accent);
    response
}

/// Creates a separator with standard spacing
pub fn spaced_separator(ui: &mut Ui) {
    ui.add_space(8.0);
    ui.separator();
    ui.add_space(8.0);
}

/// Card colour for a free-text bias. Bullish wins over bearish when both appear.
pub fn bias_color(bias: &str) -> Color32 {
    match BiasDirection::classify(bias) {
        BiasDirection::Bullish => UI_CONFIG.colors.bullish,
        BiasDirection::Bearish => UI_CONFIG.colors.bearish,
        _ => UI_CONFIG.colors.neutral,
    }
}

pub fn direction_color(direction: TradeDirection) -> Color32 {
    if direction.is_long() {
        UI_CONFIG.colors.bullish
    } else {
        UI_CONFIG.colors.bearish
    }
}

pub fn impact_color(level: ImpactLevel) -> Color32 {
    match level {
        ImpactLevel::Critical => UI_CONFIG.colors.impact_critical,
        ImpactLevel::High => UI_CONFIG.colors.impact_high,
        ImpactLevel::Other => UI_CONFIG.colors.neutral,
    }
}

pub fn sentiment_color(sentiment: RiskSentiment) -> Color32 {
    match sentiment {
        RiskSentiment::RiskOn => UI_CONFIG.colors.risk_on,
        RiskSentiment::RiskOff => UI_CONFIG.colors.accent,
        RiskSentiment::Neutral => UI_CONFIG.colors.neutral,
    }
}

pub fn severity_color(severity: RiskSeverity) -> Color32 {
    match severity {
        RiskSeverity::Elevated => UI_CONFIG.colors.bearish,
        RiskSeverity::Mixed => UI_CONFIG.colors.accent,
        RiskSeverity::Calm => UI_CONFIG.colors.risk_on,
    }
}
