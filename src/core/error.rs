//! Error types for brush construction and configuration

use std::io;
use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while building extents, domains or demo configuration.
///
/// Interaction itself never fails; these only surface at construction time.
#[derive(Error, Debug)]
pub enum Error {
    /// Extent bounds out of order or not finite.
    #[error("invalid extent: lo={lo} hi={hi}")]
    InvalidExtent { lo: f64, hi: f64 },

    /// Axis domain has zero width.
    #[error("degenerate domain: [{lo}, {hi}]")]
    DegenerateDomain { lo: f64, hi: f64 },

    /// Smoothing factor outside (0, 1].
    #[error("smoothing factor must be in (0, 1], got {0}")]
    InvalidSmoothing(f64),

    /// Convergence threshold not strictly positive.
    #[error("convergence epsilon must be positive, got {0}")]
    InvalidEpsilon(f64),

    /// Malformed configuration JSON.
    #[error("config parse error: {0}")]
    Config(#[from] serde_json::Error),

    /// Configuration file could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
