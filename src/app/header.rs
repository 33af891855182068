//! Header bar with settings toggle and status

use eframe::egui;
use crate::theme::colors;
use crate::time::now_seconds;
use super::BrushApp;

impl BrushApp {
    pub(crate) fn render_header(&mut self, ui: &mut egui::Ui) {
        self.fps_counter.tick();

        ui.horizontal(|ui| {
            let settings_text = if self.show_settings { "Settings <<<" } else { "Settings >>>" };
            if ui.button(egui::RichText::new(settings_text)).clicked() {
                self.show_settings = !self.show_settings;
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let samples = self.config.sample_count;
                ui.label(
                    egui::RichText::new(format!("{} samples", samples))
                        .color(colors::TEXT_MUTED),
                );
                ui.label(egui::RichText::new("/").color(colors::TEXT_MUTED));

                ui.label(
                    egui::RichText::new(format!("{:.0} fps", self.fps_counter.fps()))
                        .color(colors::TEXT_SECONDARY),
                );

                ui.add_space(10.0);

                let (status_color, status_text) = if self.any_animating() {
                    (egui::Color32::from_rgb(200, 200, 100), "Centering...")
                } else {
                    (egui::Color32::from_rgb(100, 200, 100), "Idle")
                };
                ui.colored_label(status_color, egui::RichText::new(status_text));
            });
        });
    }
}

/// FPS counter using platform-agnostic time
pub struct FpsCounter {
    frames: Vec<f64>,
}

impl FpsCounter {
    pub fn new() -> Self {
        Self {
            frames: Vec::with_capacity(60),
        }
    }

    pub fn tick(&mut self) {
        self.push(now_seconds());
    }

    fn push(&mut self, seconds: f64) {
        self.frames.push(seconds);
        if self.frames.len() > 60 {
            self.frames.remove(0);
        }
    }

    pub fn fps(&self) -> f64 {
        let (Some(first), Some(last)) = (self.frames.first(), self.frames.last()) else {
            return 0.0;
        };
        let elapsed = last - first;
        if self.frames.len() < 2 || elapsed <= 0.0 {
            return 0.0;
        }
        (self.frames.len() as f64 - 1.0) / elapsed
    }
}

impl Default for FpsCounter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fps_from_even_frames() {
        let mut counter = FpsCounter::new();
        for i in 0..31 {
            counter.push(i as f64 / 30.0);
        }
        assert!((counter.fps() - 30.0).abs() < 1e-9);
    }

    #[test]
    fn fps_needs_two_frames() {
        let mut counter = FpsCounter::new();
        assert_eq!(counter.fps(), 0.0);
        counter.push(1.0);
        assert_eq!(counter.fps(), 0.0);
    }

    #[test]
    fn keeps_last_sixty_frames() {
        let mut counter = FpsCounter::new();
        for i in 0..100 {
            counter.push(i as f64);
        }
        assert_eq!(counter.frames.len(), 60);
        assert_eq!(counter.frames[0], 40.0);
    }
}
