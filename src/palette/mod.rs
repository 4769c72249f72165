//! Palette binning: evenly spaced bins, color ramp and override categories.

mod bins;
mod options;
mod palette;

pub use bins::Bins;
pub use options::{OutOfRangePolicy, PaletteOptions, COLOR_COUNT_RANGE};
pub use palette::{Palette, Style};
