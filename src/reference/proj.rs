use anyhow::{anyhow, Context, Result};
use geo::{Coord, MapCoords, MultiPolygon};
use proj4rs::{proj::Proj as Proj4, transform::transform};

/// Source CRS of raw border data: WGS84 lon/lat (degrees → radians handled in code).
const WGS84_PROJ4: &str = "+proj=longlat +datum=WGS84 +no_defs +type=crs";

/// ETRS89-LAEA Europe (EPSG:3035), the single equal-area frame used for composition.
pub(crate) const LAEA_EUROPE_PROJ4: &str =
    "+proj=laea +lat_0=52 +lon_0=10 +x_0=4321000 +y_0=3210000 +ellps=GRS80 +units=m +no_defs +type=crs";

/// Reproject shapes from lon/lat degrees to ETRS89-LAEA metres.
pub(crate) fn project_to_equal_area(shapes: &[MultiPolygon<f64>]) -> Result<Vec<MultiPolygon<f64>>> {
    let from = Proj4::from_proj_string(WGS84_PROJ4)
        .with_context(|| anyhow!("failed to build source PROJ.4: {WGS84_PROJ4}"))?;
    let to = Proj4::from_proj_string(LAEA_EUROPE_PROJ4)
        .with_context(|| anyhow!("failed to build target PROJ.4: {LAEA_EUROPE_PROJ4}"))?;

    let (from, to) = (&from, &to);
    shapes.iter()
        .map(|shape| shape.try_map_coords(|coord: Coord<f64>| {
            let mut point = (coord.x.to_radians(), coord.y.to_radians(), 0.0);
            transform(from, to, &mut point)?;
            Ok(Coord { x: point.0, y: point.1 })
        }))
        .collect::<std::result::Result<Vec<_>, proj4rs::errors::Error>>()
        .map_err(|e| anyhow!("[reference] CRS transform failed: {e}"))
}
