//! Color normalization and ramps.

mod color;
mod ramp;

pub use color::{normalize, Color, ColorLiteral};
pub(crate) use ramp::sample_ramp;
