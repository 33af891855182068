//! Demo configuration - layout constants and tween tuning
//!
//! Every field has a default matching the reference layout, so an empty JSON
//! object (or no config at all) yields the stock demo.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

use super::error::{Error, Result};
use super::extent::Extent;

/// Env var naming a JSON config file (native + CLI)
pub const CONFIG_ENV: &str = "BRUSH_VIS_CONFIG";
/// Env var overriding the RNG seed (native + CLI)
pub const SEED_ENV: &str = "BRUSH_VIS_SEED";

/// Blank space around the plot area, in pixels
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Margins {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Default for Margins {
    fn default() -> Self {
        Self {
            top: 10.0,
            right: 45.0,
            bottom: 20.0,
            left: 45.0,
        }
    }
}

/// Outer canvas size plus margins
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Layout {
    pub margin: Margins,
    pub outer_width: f32,
    pub outer_height: f32,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            margin: Margins::default(),
            outer_width: 700.0,
            outer_height: 80.0,
        }
    }
}

impl Layout {
    /// Width of the plotting band (610 with the defaults)
    pub fn width(&self) -> f32 {
        (self.outer_width - self.margin.left - self.margin.right).max(1.0)
    }

    /// Height of the plotting band (50 with the defaults)
    pub fn height(&self) -> f32 {
        (self.outer_height - self.margin.top - self.margin.bottom).max(1.0)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Number of random points
    pub sample_count: usize,
    /// Brush window at startup
    pub initial_extent: Extent,
    /// Axis domain
    pub domain: Extent,
    /// Tween smoothing factor (alpha)
    pub smoothing: f64,
    /// Tween stops once |center - target| <= epsilon
    pub epsilon: f64,
    pub dot_radius: f32,
    /// Fixed RNG seed; entropy when absent
    pub seed: Option<u64>,
    pub layout: Layout,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            sample_count: 400,
            initial_extent: Extent::spanning(0.3, 0.5),
            domain: Extent::UNIT,
            smoothing: 0.2,
            epsilon: 1e-3,
            dot_radius: 3.5,
            seed: None,
            layout: Layout::default(),
        }
    }
}

impl DemoConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: DemoConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        debug!(path = %path.display(), bytes = json.len(), "Loaded config file");
        Self::from_json(&json)
    }

    /// Resolve config from `BRUSH_VIS_CONFIG` / `BRUSH_VIS_SEED`.
    ///
    /// Missing variables mean defaults; an unreadable or invalid file is an error.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> Result<Self> {
        let mut config = match std::env::var(CONFIG_ENV) {
            Ok(path) => Self::from_file(path)?,
            Err(_) => Self::default(),
        };
        if let Some(seed) = std::env::var(SEED_ENV).ok().and_then(|s| s.parse().ok()) {
            config.seed = Some(seed);
        }
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.domain.width() <= f64::EPSILON {
            return Err(Error::DegenerateDomain {
                lo: self.domain.lo(),
                hi: self.domain.hi(),
            });
        }
        let extent = self.initial_extent;
        if !self.domain.contains(extent.lo()) || !self.domain.contains(extent.hi()) {
            return Err(Error::InvalidExtent {
                lo: extent.lo(),
                hi: extent.hi(),
            });
        }
        if !(self.smoothing > 0.0 && self.smoothing <= 1.0) {
            return Err(Error::InvalidSmoothing(self.smoothing));
        }
        if !(self.epsilon > 0.0) {
            return Err(Error::InvalidEpsilon(self.epsilon));
        }
        Ok(())
    }
}
