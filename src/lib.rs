#![doc = "EU choropleth composition public API"]
mod color;
mod compose;
mod config;
mod error;
mod geography;
mod palette;
mod reference;

#[doc(inline)]
pub use color::{normalize, Color, ColorLiteral};

#[doc(inline)]
pub use compose::{compose, Category, ComposeOptions, ComposedMap, InsetPlot, LegendEntry, PlotData, PlotFeature, Theme};

#[doc(inline)]
pub use config::MapConfig;

#[doc(inline)]
pub use error::{MapError, Result};

#[doc(inline)]
pub use geography::{
    parse_date, stack_placement, BoundingBox, GeoFeature, Geography, GeographyOptions, Inset, InsetPlacement,
    Membership, ASPECT_RATIO_RANGE, DEFAULT_ZOOM, INSET_ASPECT_RATIO, INSET_ZOOM, ZOOM_RANGE,
};

#[doc(inline)]
pub use palette::{Bins, OutOfRangePolicy, Palette, PaletteOptions, Style, COLOR_COUNT_RANGE};

#[doc(inline)]
pub use reference::{BorderDataset, BorderFeature, ReferenceData, Resolution, Territory, TerritoryTable};
