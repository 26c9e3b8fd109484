use eframe::egui::Color32;

pub use crate::ui::ui_text::{UI_TEXT, UiText};

/// Terminal palette: orange for bullish / long, red for bearish / short,
/// grey for everything neutral.
#[derive(Clone, Copy, Default)]
pub struct UiColors {
    pub background: Color32,
    pub top_bar: Color32,
    pub panel: Color32,
    pub panel_inset: Color32,
    pub border: Color32,
    pub text: Color32,
    pub text_strong: Color32,
    pub label: Color32,
    pub muted: Color32,
    pub accent: Color32,
    pub bullish: Color32,
    pub bearish: Color32,
    pub neutral: Color32,
    pub impact_critical: Color32,
    pub impact_high: Color32,
    pub risk_on: Color32,
    pub live: Color32,
}

/// Main UI configuration struct that holds all UI-related settings
#[derive(Default, Clone, Copy)]
pub struct UiConfig {
    pub colors: UiColors,
    /// Card grid columns at full width; fewer when the window is narrow
    pub max_grid_columns: usize,
    pub min_card_width: f32,
    pub accent_bar_width: f32,
}

/// Global UI configuration instance
pub static UI_CONFIG: UiConfig = UiConfig {
    colors: UiColors {
        background: Color32::BLACK,
        top_bar: Color32::from_rgb(10, 10, 10),
        panel: Color32::from_rgb(18, 18, 18),
        panel_inset: Color32::from_rgb(26, 26, 26),
        border: Color32::from_rgb(31, 41, 55),
        text: Color32::from_rgb(209, 213, 219),
        text_strong: Color32::WHITE,
        label: Color32::from_rgb(107, 114, 128),
        muted: Color32::from_rgb(75, 85, 99),
        accent: Color32::from_rgb(249, 115, 22),
        bullish: Color32::from_rgb(249, 115, 22),
        bearish: Color32::from_rgb(239, 68, 68),
        neutral: Color32::from_rgb(156, 163, 175),
        impact_critical: Color32::from_rgb(239, 68, 68),
        impact_high: Color32::from_rgb(249, 115, 22),
        risk_on: Color32::from_rgb(34, 197, 94),
        live: Color32::from_rgb(34, 197, 94),
    },
    max_grid_columns: 4,
    min_card_width: 260.0,
    accent_bar_width: 3.0,
};
