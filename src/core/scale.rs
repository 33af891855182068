//! Linear scale between the axis domain and pixel positions
//!
//! The host re-creates the scale whenever the plot frame moves, so the
//! pixel range always matches what is currently on screen.

use super::error::{Error, Result};
use super::extent::Extent;

/// Maps domain values to horizontal pixel positions and back.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    domain: Extent,
    range_min: f32,
    range_max: f32,
}

impl LinearScale {
    /// # Errors
    ///
    /// Returns an error if the domain has zero width.
    pub fn new(domain: Extent, range: (f32, f32)) -> Result<Self> {
        if domain.width() <= f64::EPSILON {
            return Err(Error::DegenerateDomain {
                lo: domain.lo(),
                hi: domain.hi(),
            });
        }

        Ok(Self {
            domain,
            range_min: range.0,
            range_max: range.1,
        })
    }

    /// Domain value to pixel.
    pub fn scale(&self, value: f64) -> f32 {
        let t = (value - self.domain.lo()) / self.domain.width();
        self.range_min + t as f32 * (self.range_max - self.range_min)
    }

    /// Pixel to domain value.
    pub fn invert(&self, px: f32) -> f64 {
        let span = self.range_max - self.range_min;
        if span == 0.0 {
            return self.domain.lo();
        }
        let t = ((px - self.range_min) / span) as f64;
        self.domain.lo() + t * self.domain.width()
    }
}
