//! Native desktop window with both brush demos
//!
//! Run with: cargo run --bin brush-vis --features native

use brush_vis::app::BrushApp;
use brush_vis::core::DemoConfig;
use eframe::egui;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,brush_vis=debug"));
    fmt().with_env_filter(filter).with_target(true).init();

    let config = DemoConfig::from_env()?;
    // room for both cards plus header and status lines
    let size = [
        config.layout.outer_width + 120.0,
        2.0 * (config.layout.outer_height + 90.0) + 60.0,
    ];
    info!(width = size[0], height = size[1], "Opening window");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("brush-vis")
            .with_inner_size(size),
        ..Default::default()
    };

    eframe::run_native(
        "brush-vis",
        options,
        Box::new(move |cc| Ok(Box::new(BrushApp::new(cc, config)?))),
    )?;
    Ok(())
}
