//! Minimal black & white theme for the brush demos

use egui::Color32;

/// Black & white palette; greys carry all the meaning
pub mod colors {
    use super::Color32;

    // === Backgrounds ===
    pub const BG_PRIMARY: Color32 = Color32::from_rgb(0, 0, 0);           // #000000 - pure black
    pub const BG_ELEVATED: Color32 = Color32::from_rgb(12, 12, 12);       // #0C0C0C - cards
    pub const BG_HOVER: Color32 = Color32::from_rgb(24, 24, 24);          // #181818 - hover states

    // === Text ===
    pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(255, 255, 255);   // #FFFFFF
    pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 160, 160); // #A0A0A0
    pub const TEXT_MUTED: Color32 = Color32::from_rgb(80, 80, 80);        // #505050

    pub const BORDER: Color32 = Color32::from_rgb(40, 40, 40);            // #282828

    // === Scatter ===
    pub const DOT: Color32 = Color32::from_rgb(90, 90, 90);
    pub const DOT_SELECTED: Color32 = Color32::from_rgb(255, 255, 255);

    // === Brush ===
    pub const BRUSH_FILL: Color32 = Color32::from_rgba_premultiplied(28, 28, 28, 28);
    pub const BRUSH_STROKE: Color32 = Color32::from_rgb(200, 200, 200);
    pub const HANDLE_FILL: Color32 = Color32::from_rgb(60, 60, 60);
    pub const HANDLE_ACTIVE: Color32 = Color32::from_rgb(160, 160, 160);
}

/// egui Visuals matching the palette
pub fn minimal_visuals() -> egui::Visuals {
    use colors::*;

    let mut visuals = egui::Visuals::dark();

    visuals.panel_fill = BG_PRIMARY;
    visuals.window_fill = BG_PRIMARY;
    visuals.extreme_bg_color = BG_PRIMARY;
    visuals.faint_bg_color = BG_ELEVATED;
    visuals.override_text_color = Some(TEXT_PRIMARY);

    let widgets = &mut visuals.widgets;
    widgets.noninteractive.bg_fill = BG_PRIMARY;
    widgets.noninteractive.fg_stroke = egui::Stroke::new(1.0, TEXT_MUTED);
    widgets.noninteractive.bg_stroke = egui::Stroke::new(1.0, BORDER);

    widgets.inactive.bg_fill = BG_PRIMARY;
    widgets.inactive.weak_bg_fill = BG_PRIMARY;
    widgets.inactive.fg_stroke = egui::Stroke::new(1.0, TEXT_SECONDARY);
    widgets.inactive.bg_stroke = egui::Stroke::new(1.0, BORDER);

    widgets.hovered.bg_fill = BG_ELEVATED;
    widgets.hovered.weak_bg_fill = BG_ELEVATED;
    widgets.hovered.fg_stroke = egui::Stroke::new(1.0, TEXT_PRIMARY);
    widgets.hovered.bg_stroke = egui::Stroke::new(1.0, TEXT_MUTED);

    widgets.active.bg_fill = BG_HOVER;
    widgets.active.weak_bg_fill = BG_HOVER;
    widgets.active.fg_stroke = egui::Stroke::new(1.0, TEXT_PRIMARY);
    widgets.active.bg_stroke = egui::Stroke::new(1.0, TEXT_SECONDARY);

    visuals.selection.bg_fill = Color32::from_rgb(60, 60, 60);
    visuals.selection.stroke = egui::Stroke::new(1.0, TEXT_PRIMARY);

    visuals.window_shadow = egui::Shadow::NONE;
    visuals.popup_shadow = egui::Shadow::NONE;

    visuals
}
