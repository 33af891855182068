//! Platform-agnostic core module - shared between the egui app and the CLI

pub mod brush;
pub mod config;
pub mod demo;
pub mod error;
pub mod extent;
pub mod gesture;
pub mod samples;
pub mod scale;
pub mod selection;
pub mod tween;

pub use brush::{Hit, Pointer, Side};
pub use config::{DemoConfig, Layout};
pub use demo::{BrushDemo, DemoKind};
pub use error::{Error, Result};
pub use extent::Extent;
pub use scale::LinearScale;
pub use selection::Selection;
pub use tween::{FrameDriven, FrameScheduler, Motion, RecenterOutcome, Tick};
