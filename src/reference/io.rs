use anyhow::{anyhow, bail, Context, Result};
use geo::{Coord, LineString, MultiPolygon, Polygon};
use serde_json::Value;

use crate::reference::BorderFeature;

/// Read border features from GeoJSON FeatureCollection bytes.
///
/// Each feature needs a `Polygon` or `MultiPolygon` geometry and an `id`
/// (or `CNTR_ID`) property; `name` and `outlying` are optional.
pub(crate) fn read_features_from_geojson_bytes(bytes: &[u8]) -> Result<Vec<BorderFeature>> {
    let value: Value = serde_json::from_slice(bytes).context("Failed to parse GeoJSON bytes")?;
    let features = value["features"].as_array()
        .ok_or_else(|| anyhow!("GeoJSON is not a FeatureCollection"))?;

    features.iter().enumerate()
        .map(|(i, feature)| parse_feature(feature).with_context(|| format!("Invalid feature #{i}")))
        .collect()
}

fn parse_feature(feature: &Value) -> Result<BorderFeature> {
    let properties = &feature["properties"];
    let id = properties["id"].as_str()
        .or_else(|| properties["CNTR_ID"].as_str())
        .or_else(|| feature["id"].as_str())
        .ok_or_else(|| anyhow!("missing territory id"))?;

    let geometry = &feature["geometry"];
    let coords = geometry["coordinates"].as_array()
        .ok_or_else(|| anyhow!("missing coordinates"))?;
    let shape = match geometry["type"].as_str() {
        Some("MultiPolygon") => parse_multipolygon_coords(coords)?,
        Some("Polygon") => MultiPolygon::new(vec![parse_polygon_coords(coords)?]),
        other => bail!("unsupported geometry type {other:?}"),
    };

    let outlying = properties["outlying"].as_bool().unwrap_or(false);
    let feature = BorderFeature::new(id, shape, outlying);

    Ok(match properties["name"].as_str() {
        Some(name) => feature.with_name(name),
        None => feature,
    })
}

/// Parse GeoJSON MultiPolygon coordinates: `[polygon, ...]`.
fn parse_multipolygon_coords(coords: &[Value]) -> Result<MultiPolygon<f64>> {
    coords.iter()
        .map(|polygon| {
            let rings = polygon.as_array()
                .ok_or_else(|| anyhow!("Invalid MultiPolygon: polygon must be an array"))?;
            parse_polygon_coords(rings)
        })
        .collect::<Result<Vec<_>>>()
        .map(MultiPolygon::new)
}

/// Parse GeoJSON Polygon coordinates: `[exterior, hole, hole, ...]`.
fn parse_polygon_coords(rings: &[Value]) -> Result<Polygon<f64>> {
    let mut rings = rings.iter()
        .map(|ring| ring.as_array()
            .ok_or_else(|| anyhow!("Invalid Polygon: ring must be an array"))
            .and_then(|ring| parse_ring_coords(ring)));

    let exterior = rings.next()
        .ok_or_else(|| anyhow!("Invalid Polygon: missing exterior ring"))??;
    let interiors = rings.collect::<Result<Vec<_>>>()?;

    Ok(Polygon::new(exterior, interiors))
}

/// Parse a ring (exterior or interior) from GeoJSON coordinates.
/// Format: [[x, y], [x, y], ...]
fn parse_ring_coords(coords: &[Value]) -> Result<LineString<f64>> {
    let mut points = Vec::with_capacity(coords.len());

    for coord_pair in coords {
        let pair = coord_pair.as_array()
            .filter(|pair| pair.len() >= 2)
            .ok_or_else(|| anyhow!("Invalid coordinate: expected [x, y]"))?;
        let x = pair[0].as_f64()
            .ok_or_else(|| anyhow!("Invalid coordinate: x must be a number"))?;
        let y = pair[1].as_f64()
            .ok_or_else(|| anyhow!("Invalid coordinate: y must be a number"))?;
        points.push(Coord { x, y });
    }

    // Ensure ring is closed (first point == last point)
    if !points.is_empty() && points[0] != points[points.len() - 1] {
        points.push(points[0]);
    }

    Ok(LineString(points))
}
