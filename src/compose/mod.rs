//! Categorical overlay of a palette on a geography, and inset composition.

mod category;
mod geojson;
mod map;
mod overlay;
mod theme;

pub use category::{Category, LegendEntry};
pub use map::{compose, ComposedMap, InsetPlot};
pub use overlay::{PlotData, PlotFeature};
pub use theme::{ComposeOptions, Theme};
