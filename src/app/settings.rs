//! Settings sidebar - tween smoothing, sample regeneration, brush reset

use eframe::egui;
use tracing::{debug, info, warn};
use crate::theme::colors;
use super::BrushApp;

impl BrushApp {
    pub(crate) fn render_settings(&mut self, ctx: &egui::Context) {
        let half_width = ctx.screen_rect().width() * 0.18;
        egui::SidePanel::left("settings")
            .default_width(half_width)
            .min_width(200.0)
            .resizable(true)
            .frame(egui::Frame::new().fill(colors::BG_PRIMARY).inner_margin(8.0))
            .show(ctx, |ui| {
                let group_frame = egui::Frame::new()
                    .stroke(egui::Stroke::new(1.0, colors::TEXT_MUTED.gamma_multiply(0.6)))
                    .corner_radius(4.0)
                    .inner_margin(6.0);

                group_frame.show(ui, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.label(egui::RichText::new("Recenter:").color(colors::TEXT_MUTED));

                    let label = format!("Smoothing: {:.2}", self.smoothing);
                    ui.label(egui::RichText::new(label).color(colors::TEXT_MUTED));
                    let full_width = ui.available_width();
                    ui.spacing_mut().slider_width = full_width;
                    let response = ui.add(
                        egui::Slider::new(&mut self.smoothing, 0.05..=1.0)
                            .clamping(egui::SliderClamping::Always)
                            .show_value(false),
                    );
                    if response.double_clicked() {
                        self.smoothing = self.config.smoothing;
                    }
                    if response.changed() || response.double_clicked() {
                        self.apply_smoothing();
                    }
                    ui.label(
                        egui::RichText::new("  Takes effect on the next frame")
                            .color(colors::TEXT_MUTED)
                            .small(),
                    );
                });

                ui.add_space(8.0);

                group_frame.show(ui, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.label(egui::RichText::new("Data:").color(colors::TEXT_MUTED));

                    if ui.button("Regenerate samples").clicked() {
                        for panel in &mut self.panels {
                            panel.demo.regenerate(None);
                        }
                        info!(panels = self.panels.len(), "Samples regenerated");
                    }
                    let animating = self.any_animating();
                    let reset = ui
                        .add_enabled(!animating, egui::Button::new("Reset brush"))
                        .on_disabled_hover_text("Wait for the brush to settle");
                    if reset.clicked() {
                        let count = self.reset_brushes();
                        info!(reset = count, "Brushes reset");
                    }
                });
            });
    }

    /// Put every brush back at the configured extent; returns how many moved.
    pub(crate) fn reset_brushes(&mut self) -> usize {
        let initial = self.config.initial_extent;
        let mut reset = 0;
        for panel in &mut self.panels {
            if panel.demo.set_extent(initial) {
                reset += 1;
            } else {
                debug!(kind = %panel.demo.kind(), "Reset skipped, tween in flight");
            }
        }
        reset
    }

    fn apply_smoothing(&mut self) {
        for panel in &mut self.panels {
            if let Err(e) = panel.demo.set_smoothing(self.smoothing) {
                warn!(error = %e, smoothing = self.smoothing, "Rejected smoothing factor");
            }
        }
    }
}
