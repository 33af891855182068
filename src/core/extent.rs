//! Extent - the (lo, hi) window of a brush selection
//!
//! The same type doubles as the axis domain. Constructors validate
//! `lo <= hi`; the window-moving helpers preserve width and never leave
//! the domain they are given.

use serde::{Deserialize, Serialize};

use super::error::{Error, Result};

/// Closed interval `[lo, hi]` on the axis.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "[f64; 2]", into = "[f64; 2]")]
pub struct Extent {
    lo: f64,
    hi: f64,
}

impl Extent {
    /// Unit domain `[0, 1]`, the range the sample generator draws from.
    pub const UNIT: Extent = Extent { lo: 0.0, hi: 1.0 };

    pub fn new(lo: f64, hi: f64) -> Result<Self> {
        if !lo.is_finite() || !hi.is_finite() || lo > hi {
            return Err(Error::InvalidExtent { lo, hi });
        }
        Ok(Self { lo, hi })
    }

    /// Build an extent from two unordered bounds.
    pub fn spanning(a: f64, b: f64) -> Self {
        Self {
            lo: a.min(b),
            hi: a.max(b),
        }
    }

    /// Zero-width extent at `value`.
    pub fn point(value: f64) -> Self {
        Self { lo: value, hi: value }
    }

    pub fn lo(&self) -> f64 {
        self.lo
    }

    pub fn hi(&self) -> f64 {
        self.hi
    }

    pub fn width(&self) -> f64 {
        self.hi - self.lo
    }

    pub fn center(&self) -> f64 {
        (self.lo + self.hi) / 2.0
    }

    /// True when `lo == hi`; the brush has been cleared.
    pub fn is_empty(&self) -> bool {
        self.lo == self.hi
    }

    /// Inclusive on both ends.
    pub fn contains(&self, value: f64) -> bool {
        self.lo <= value && value <= self.hi
    }

    /// Same width, centered at `center`.
    pub fn recentered(&self, center: f64) -> Self {
        let half = self.width() / 2.0;
        Self {
            lo: center - half,
            hi: center + half,
        }
    }

    /// Shift by `delta`, keeping the width.
    pub fn shifted(&self, delta: f64) -> Self {
        Self {
            lo: self.lo + delta,
            hi: self.hi + delta,
        }
    }

    /// Clamp a scalar into this interval.
    pub fn clamp(&self, value: f64) -> f64 {
        value.max(self.lo).min(self.hi)
    }

    /// Range of centers for which a window of `width` stays inside `self`:
    /// `[lo + width/2, hi - width/2]`.
    ///
    /// A window wider than the domain collapses the range to the domain center.
    pub fn center_bounds(&self, width: f64) -> (f64, f64) {
        let half = width / 2.0;
        let (c0, c1) = (self.lo + half, self.hi - half);
        if c0 > c1 {
            let mid = self.center();
            (mid, mid)
        } else {
            (c0, c1)
        }
    }

    /// Clamp a target center so a window of `width` stays inside `self`.
    pub fn clamp_center(&self, center: f64, width: f64) -> f64 {
        let (c0, c1) = self.center_bounds(width);
        center.max(c0).min(c1)
    }

    /// Translate `window` the least amount needed to fit inside `self`.
    /// Windows wider than the domain are cut to it.
    pub fn fit(&self, window: Extent) -> Extent {
        if window.width() >= self.width() {
            return *self;
        }
        if window.lo < self.lo {
            window.shifted(self.lo - window.lo)
        } else if window.hi > self.hi {
            window.shifted(self.hi - window.hi)
        } else {
            window
        }
    }
}

impl TryFrom<[f64; 2]> for Extent {
    type Error = Error;

    fn try_from([lo, hi]: [f64; 2]) -> Result<Self> {
        Extent::new(lo, hi)
    }
}

impl From<Extent> for [f64; 2] {
    fn from(extent: Extent) -> Self {
        [extent.lo, extent.hi]
    }
}

impl std::fmt::Display for Extent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:.3}, {:.3}]", self.lo, self.hi)
    }
}
