//! brush-vis - interactive 1-D brush demos
//!
//! Two demos share one scatter of random samples on the unit interval:
//! - Static brush: draw, move and resize a selection window
//! - Centering brush: clicking the background glides the window to the pointer
//!
//! `core` is platform-agnostic and used by the CLI; `app` is the egui front-end
//! shared by the native binary and the WASM build.

pub mod core;

#[cfg(feature = "gui")]
pub mod app;
#[cfg(feature = "gui")]
mod theme;
#[cfg(feature = "gui")]
mod time;

#[cfg(all(target_arch = "wasm32", feature = "wasm"))]
mod web {
    use tracing::{info, warn};
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;

    use crate::app::BrushApp;
    use crate::core::DemoConfig;

    /// Canvas element the app mounts on
    const CANVAS_ID: &str = "brush_canvas";

    #[wasm_bindgen(start)]
    pub fn main() {
        console_error_panic_hook::set_once();

        // Initialize tracing for browser console
        tracing_wasm::set_as_global_default();

        let config = page_config();

        wasm_bindgen_futures::spawn_local(async move {
            if let Err(e) = start(config).await {
                tracing::error!(error = ?e, "Failed to start eframe");
            }
        });
    }

    /// Read `window.__brush_vis_config`; anything missing or malformed falls back to defaults.
    fn page_config() -> DemoConfig {
        let Some(json) = js_sys::eval("window.__brush_vis_config")
            .ok()
            .and_then(|v| v.as_string())
        else {
            return DemoConfig::default();
        };

        match DemoConfig::from_json(&json) {
            Ok(config) => {
                info!(samples = config.sample_count, "Using page config");
                config
            }
            Err(e) => {
                warn!(error = %e, "Rejected page config, using defaults");
                DemoConfig::default()
            }
        }
    }

    async fn start(config: DemoConfig) -> Result<(), JsValue> {
        let canvas = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(CANVAS_ID))
            .ok_or_else(|| JsValue::from_str("no brush_canvas element"))?
            .dyn_into::<web_sys::HtmlCanvasElement>()
            .map_err(|_| JsValue::from_str("brush_canvas is not a canvas element"))?;

        eframe::WebRunner::new()
            .start(
                canvas,
                eframe::WebOptions::default(),
                Box::new(move |cc| Ok(Box::new(BrushApp::new(cc, config)?))),
            )
            .await
    }
}
