use eframe::egui::{Color32, CornerRadius, Frame, Margin, RichText, Stroke, Ui};

use crate::ui::config::UI_CONFIG;

/// Extension trait to add semantic styling methods directly to `egui::Ui`.
pub trait UiStyleExt {
    /// Small, grey monospace text (labels like "RISK SENTIMENT").
    fn label_subdued(&mut self, text: impl Into<String>);

    /// Renders a "LABEL / value" pair stacked vertically.
    fn metric(&mut self, label: &str, value: &str, color: Color32);

    /// Panel title in upper case with a coloured leading glyph.
    fn label_header(&mut self, icon: &str, text: impl Into<String>, icon_color: Color32);

    /// Bordered tag used for bias, direction and impact labels.
    fn badge(&mut self, text: impl Into<String>, color: Color32);

    /// Italic placeholder for an empty list.
    fn label_empty(&mut self, text: impl Into<String>);
}

impl UiStyleExt for Ui {
    fn label_subdued(&mut self, text: impl Into<String>) {
        self.label(
            RichText::new(text)
                .small()
                .monospace()
                .color(UI_CONFIG.colors.label),
        );
    }

    fn metric(&mut self, label: &str, value: &str, color: Color32) {
        self.vertical(|ui| {
            ui.spacing_mut().item_spacing.y = 2.0; // Tight spacing
            ui.label_subdued(label);
            ui.label(RichText::new(value).monospace().strong().color(color));
        });
    }

    fn label_header(&mut self, icon: &str, text: impl Into<String>, icon_color: Color32) {
        self.horizontal(|ui| {
            ui.label(RichText::new(icon).color(icon_color));
            ui.label(
                RichText::new(text.into().to_uppercase())
                    .strong()
                    .color(UI_CONFIG.colors.text_strong),
            );
        });
    }

    fn badge(&mut self, text: impl Into<String>, color: Color32) {
        Frame::new()
            .stroke(Stroke::new(1.0, color))
            .fill(Color32::BLACK)
            .inner_margin(Margin::symmetric(4, 1))
            .corner_radius(CornerRadius::ZERO)
            .show(self, |ui| {
                ui.label(RichText::new(text).small().strong().monospace().color(color));
            });
    }

    fn label_empty(&mut self, text: impl Into<String>) {
        self.vertical_centered(|ui| {
            ui.add_space(6.0);
            ui.label(
                RichText::new(text)
                    .small()
                    .italics()
                    .monospace()
                    .color(UI_CONFIG.colors.label),
            );
            ui.add_space(6.0);
        });
    }
}
