//! Geography composition: membership, framing, clipping and insets.

mod bbox;
mod clip;
mod geography;
mod inset;
mod membership;
mod options;

pub use bbox::BoundingBox;
pub use clip::GeoFeature;
pub use geography::Geography;
pub use inset::{stack_placement, Inset, InsetPlacement, INSET_ASPECT_RATIO, INSET_ZOOM};
pub use membership::{parse_date, Membership};
pub use options::{GeographyOptions, ASPECT_RATIO_RANGE, DEFAULT_ZOOM, ZOOM_RANGE};
