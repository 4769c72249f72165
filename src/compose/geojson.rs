use std::path::Path;

use anyhow::{Context, Result};
use geo::{LineString, MultiPolygon};
use serde_json::{json, Value};

use crate::{
    compose::{ComposedMap, PlotData},
    geography::BoundingBox,
};

const CRS_NAME: &str = "urn:ogc:def:crs:EPSG::3035";

fn ring_to_geojson(ring: &LineString<f64>) -> Value {
    Value::Array(ring.coords().map(|c| json!([c.x, c.y])).collect())
}

fn multipolygon_to_geojson(mp: &MultiPolygon<f64>) -> Value {
    let polygons = mp.0.iter()
        .map(|polygon| {
            let mut rings = vec![ring_to_geojson(polygon.exterior())];
            rings.extend(polygon.interiors().iter().map(ring_to_geojson));
            Value::Array(rings)
        })
        .collect::<Vec<_>>();

    json!({
        "type": "MultiPolygon",
        "coordinates": polygons,
    })
}

fn bbox_to_geojson(bbox: &BoundingBox) -> Value {
    json!([bbox.xmin, bbox.ymin, bbox.xmax, bbox.ymax])
}

impl PlotData {
    /// Export as a GeoJSON FeatureCollection in projected coordinates, with the
    /// legend and aspect ratio as foreign members.
    pub fn to_geojson(&self) -> Result<Value> {
        let features = self.features().iter()
            .map(|feature| -> Result<Value> {
                Ok(json!({
                    "type": "Feature",
                    "id": feature.territory_id,
                    "geometry": multipolygon_to_geojson(&feature.geometry),
                    "properties": {
                        "id": feature.territory_id,
                        "name": feature.name,
                        "category": serde_json::to_value(feature.category)?,
                        "label": feature.label,
                        "color": feature.color,
                    },
                }))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(json!({
            "type": "FeatureCollection",
            "crs": { "type": "name", "properties": { "name": CRS_NAME } },
            "bbox": bbox_to_geojson(self.bbox()),
            "aspect_ratio": self.aspect_ratio(),
            "legend": serde_json::to_value(self.legend()).context("Failed to serialize legend")?,
            "features": features,
        }))
    }
}

impl ComposedMap {
    /// Export the main map, its insets and the theme as one JSON document.
    pub fn to_geojson(&self) -> Result<Value> {
        let insets = self.insets().iter()
            .map(|inset| -> Result<Value> {
                Ok(json!({
                    "territory": inset.territory(),
                    "placement": serde_json::to_value(inset.placement())?,
                    "map": inset.plot().to_geojson()?,
                }))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(json!({
            "title": self.title(),
            "theme": serde_json::to_value(self.theme()).context("Failed to serialize theme")?,
            "map": self.main().to_geojson()?,
            "insets": insets,
        }))
    }

    pub fn write_geojson(&self, path: &Path) -> Result<()> {
        let bytes = serde_json::to_vec(&self.to_geojson()?)
            .context("Failed to serialize GeoJSON to bytes")?;
        std::fs::write(path, bytes)
            .with_context(|| format!("[compose] Failed to write {}", path.display()))
    }
}
