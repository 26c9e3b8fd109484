use eframe::egui::{Button, Color32, RichText, Stroke, Ui};
use strum::IntoEnumIterator;

use crate::domain::{BiasFilter, ViewMode};
use crate::ui::config::{UI_CONFIG, UI_TEXT};

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

/// Trait for UI panels that can be rendered
pub trait Panel {
    type Event;
    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event>;
}

fn toggle_button(label: &str, selected: bool) -> Button<'static> {
    let (text_color, fill) = if selected {
        (Color32::BLACK, UI_CONFIG.colors.accent)
    } else {
        (UI_CONFIG.colors.label, UI_CONFIG.colors.panel)
    };
    Button::new(
        RichText::new(label.to_uppercase())
            .small()
            .strong()
            .monospace()
            .color(text_color),
    )
    .fill(fill)
    .stroke(Stroke::NONE)
}

/// WEEKLY / DAILY switcher in the page header
pub struct ViewTogglePanel {
    current: ViewMode,
}

impl ViewTogglePanel {
    pub fn new(current: ViewMode) -> Self {
        Self { current }
    }

    fn label(view: ViewMode) -> &'static str {
        match view {
            ViewMode::Weekly => UI_TEXT.weekly_toggle,
            ViewMode::Daily => UI_TEXT.daily_toggle,
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum ViewEvent {
    Selected(ViewMode),
}

impl Panel for ViewTogglePanel {
    type Event = ViewEvent;
    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event> {
        let mut events = Vec::new();
        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 2.0;
            for view in ViewMode::iter() {
                let selected = view == self.current;
                if ui.add(toggle_button(Self::label(view), selected)).clicked() && !selected {
                    #[cfg(debug_assertions)]
                    if DEBUG_FLAGS.print_ui_interactions {
                        log::info!("View switched to {}", view);
                    }
                    self.current = view;
                    events.push(ViewEvent::Selected(view));
                }
            }
        });
        events
    }
}

/// All / Bullish / Bearish / Neutral buttons above the card grid
pub struct FilterBarPanel {
    current: BiasFilter,
}

impl FilterBarPanel {
    pub fn new(current: BiasFilter) -> Self {
        Self { current }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum FilterEvent {
    Selected(BiasFilter),
}

impl Panel for FilterBarPanel {
    type Event = FilterEvent;
    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event> {
        let mut events = Vec::new();
        ui.horizontal_wrapped(|ui| {
            for filter in BiasFilter::iter() {
                let selected = filter == self.current;
                let color = if selected {
                    UI_CONFIG.colors.accent
                } else {
                    UI_CONFIG.colors.label
                };
                let border = if selected {
                    UI_CONFIG.colors.accent
                } else {
                    UI_CONFIG.colors.border
                };
                let button = Button::new(
                    RichText::new(filter.label().to_uppercase())
                        .small()
                        .strong()
                        .monospace()
                        .color(color),
                )
                .fill(UI_CONFIG.colors.background)
                .stroke(Stroke::new(1.0, border));

                if ui.add(button).clicked() && !selected {
                    #[cfg(debug_assertions)]
                    if DEBUG_FLAGS.print_ui_interactions {
                        log::info!("Bias filter set to {}", filter);
                    }
                    self.current = filter;
                    events.push(FilterEvent::Selected(filter));
                }
            }
        });
        events
    }
}
