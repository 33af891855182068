//! Shared brush demo app
//!
//! This module contains the egui app that runs on both native and WASM platforms.

mod header;
mod panel;
mod settings;

use eframe::egui;
use tracing::info;

use crate::core::{BrushDemo, DemoConfig, DemoKind, Result};
use crate::theme::{colors, minimal_visuals};

use panel::DemoPanel;

/// Brush demo app - runs on both native and WASM
pub struct BrushApp {
    /// One panel per demo kind, centering first
    pub(crate) panels: Vec<DemoPanel>,
    /// Config the demos were built from (reset target)
    pub(crate) config: DemoConfig,
    /// FPS counter
    pub(crate) fps_counter: header::FpsCounter,
    /// Show settings sidebar
    pub(crate) show_settings: bool,
    /// Smoothing factor edited in the settings sidebar
    pub(crate) smoothing: f64,
}

impl BrushApp {
    /// Create the app with one independent demo per [`DemoKind`].
    pub fn new(cc: &eframe::CreationContext<'_>, config: DemoConfig) -> Result<Self> {
        cc.egui_ctx.set_visuals(minimal_visuals());
        Self::from_config(config)
    }

    fn from_config(config: DemoConfig) -> Result<Self> {
        let panels = DemoKind::ALL
            .iter()
            .map(|&kind| BrushDemo::new(kind, config.clone()).map(DemoPanel::new))
            .collect::<Result<Vec<_>>>()?;

        info!(
            demos = panels.len(),
            samples = config.sample_count,
            seed = ?config.seed,
            "Brush app initialized"
        );

        Ok(Self {
            panels,
            smoothing: config.smoothing,
            config,
            fps_counter: header::FpsCounter::new(),
            show_settings: false,
        })
    }

    pub(crate) fn any_animating(&self) -> bool {
        self.panels.iter().any(|p| p.demo.is_animating())
    }
}

impl eframe::App for BrushApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("header")
            .frame(egui::Frame::new().fill(colors::BG_PRIMARY).inner_margin(4.0))
            .show(ctx, |ui| {
                self.render_header(ui);
            });

        // Settings sidebar (left, must be shown before CentralPanel)
        if self.show_settings {
            self.render_settings(ctx);
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(colors::BG_PRIMARY).inner_margin(12.0))
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    for panel in &mut self.panels {
                        panel.show(ui);
                        ui.add_space(16.0);
                    }
                });
            });

        // Tweens advance once per frame; keep frames coming while one runs
        if self.any_animating() {
            ctx.request_repaint();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_config_builds_one_panel_per_kind() {
        let config = DemoConfig {
            seed: Some(5),
            ..DemoConfig::default()
        };
        let app = BrushApp::from_config(config).unwrap();
        let kinds: Vec<DemoKind> = app.panels.iter().map(|p| p.demo.kind()).collect();
        assert_eq!(kinds, DemoKind::ALL);
        assert!(!app.any_animating());
    }

    #[test]
    fn reset_skips_animating_demo() {
        let config = DemoConfig {
            seed: Some(5),
            ..DemoConfig::default()
        };
        let mut app = BrushApp::from_config(config).unwrap();
        let centering = app
            .panels
            .iter()
            .position(|p| p.demo.kind() == DemoKind::Centering)
            .unwrap();
        app.panels[centering]
            .demo
            .recenter(0.8, crate::core::Motion::Smooth);
        assert!(app.any_animating());

        assert_eq!(app.reset_brushes(), app.panels.len() - 1);
        assert!(app.panels[centering].demo.is_animating());
    }

    #[test]
    fn from_config_rejects_invalid() {
        let config = DemoConfig {
            epsilon: 0.0,
            ..DemoConfig::default()
        };
        assert!(BrushApp::from_config(config).is_err());
    }
}
