//! Theme styling functions.
//!
//! Helpers for applying the light scheme consistently across screens.

use eframe::egui::{self, CornerRadius, Stroke};

use super::colors;

/// Apply the global theme to the egui context
pub fn apply_global_theme(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();

    style.visuals.window_fill = colors::BG_LIGHT;
    style.visuals.window_stroke = Stroke::new(1.0, colors::CARD_BORDER);
    style.visuals.panel_fill = colors::BG_LIGHT;

    style.visuals.widgets.noninteractive.bg_fill = colors::INPUT_BG;
    style.visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, colors::TEXT_PRIMARY);

    style.visuals.widgets.inactive.bg_fill = colors::INPUT_BG;
    style.visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, colors::TEXT_PRIMARY);

    style.visuals.widgets.hovered.bg_fill = colors::BG_LIGHT;
    style.visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, colors::TEXT_PRIMARY);

    style.visuals.widgets.active.bg_fill = colors::PRIMARY;
    style.visuals.widgets.active.fg_stroke = Stroke::new(1.0, colors::TEXT_ON_PRIMARY);

    style.visuals.selection.bg_fill = colors::PRIMARY;
    style.visuals.selection.stroke = Stroke::new(1.0, colors::TEXT_ON_PRIMARY);

    ctx.set_style(style);
}

/// Frame for the red validation/error banner above a form
pub fn error_banner_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(colors::ERROR_BG)
        .stroke(Stroke::new(1.0, colors::ERROR))
        .corner_radius(CornerRadius::same(5))
        .inner_margin(egui::Margin::same(12))
}

/// Frame for a white card section (profile screen)
pub fn card_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(colors::CARD_BG)
        .stroke(Stroke::new(1.0, colors::CARD_BORDER))
        .corner_radius(CornerRadius::same(12))
        .inner_margin(egui::Margin::same(20))
}
