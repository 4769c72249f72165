use std::{fmt, path::Path, str::FromStr};

use anyhow::{bail, Context, Result};
use geo::{BoundingRect, Coord, MultiPolygon, Rect};
use rstar::{RTree, AABB};
use serde::{Deserialize, Serialize};

use crate::reference::{index::FeatureEnvelope, io::read_features_from_geojson_bytes, proj::project_to_equal_area};

/// Resolution tier of a border dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Resolution {
    #[default]
    High,
    Low,
}

impl Resolution {
    pub fn to_str(&self) -> &'static str {
        match self {
            Resolution::High => "high",
            Resolution::Low => "low",
        }
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.to_str()) }
}

impl FromStr for Resolution {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "high" => Ok(Resolution::High),
            "low" => Ok(Resolution::Low),
            other => bail!("unknown resolution `{other}`, expected `high` or `low`"),
        }
    }
}

/// One border polygon of a territory. A territory may have several features,
/// e.g. a mainland part and outlying parts excluded from framing.
#[derive(Debug, Clone, PartialEq)]
pub struct BorderFeature {
    territory_id: String,
    name: Option<String>,
    geometry: MultiPolygon<f64>,
    outlying: bool,
}

impl BorderFeature {
    pub fn new(territory_id: impl Into<String>, geometry: MultiPolygon<f64>, outlying: bool) -> Self {
        Self { territory_id: territory_id.into(), name: None, geometry, outlying }
    }

    /// Attach a display name, used for territories absent from the membership table.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[inline] pub fn territory_id(&self) -> &str { &self.territory_id }

    #[inline] pub fn name(&self) -> Option<&str> { self.name.as_deref() }

    #[inline] pub fn geometry(&self) -> &MultiPolygon<f64> { &self.geometry }

    #[inline] pub fn is_outlying(&self) -> bool { self.outlying }
}

/// A collection of border features in projected (equal-area) coordinates,
/// indexed by an R-tree over feature envelopes.
#[derive(Debug, Clone)]
pub struct BorderDataset {
    resolution: Resolution,
    features: Vec<BorderFeature>,
    rtree: RTree<FeatureEnvelope>,
}

impl BorderDataset {
    /// Construct a dataset from features already in the equal-area frame.
    pub fn new(resolution: Resolution, features: Vec<BorderFeature>) -> Self {
        Self {
            rtree: RTree::bulk_load(
                features.iter().enumerate()
                    .filter_map(|(i, feature)| feature.geometry.bounding_rect()
                        .map(|bbox| FeatureEnvelope::new(i, bbox, feature.outlying)))
                    .collect()
            ),
            resolution,
            features,
        }
    }

    /// Construct a dataset from features in WGS84 lon/lat, reprojecting them.
    pub fn from_lonlat(resolution: Resolution, features: Vec<BorderFeature>) -> Result<Self> {
        let shapes = features.iter().map(|f| f.geometry.clone()).collect::<Vec<_>>();
        let projected = project_to_equal_area(&shapes)?;

        let features = features.into_iter().zip(projected)
            .map(|(feature, geometry)| BorderFeature { geometry, ..feature })
            .collect();

        Ok(Self::new(resolution, features))
    }

    /// Read a GeoJSON FeatureCollection in lon/lat and reproject it.
    pub fn from_geojson_bytes(resolution: Resolution, bytes: &[u8]) -> Result<Self> {
        Self::from_lonlat(resolution, read_features_from_geojson_bytes(bytes)?)
    }

    pub fn from_geojson_path(resolution: Resolution, path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path)
            .with_context(|| format!("[reference] Failed to read {}", path.display()))?;
        Self::from_geojson_bytes(resolution, &bytes)
            .with_context(|| format!("[reference] Invalid border dataset {}", path.display()))
    }

    #[inline] pub fn resolution(&self) -> Resolution { self.resolution }

    #[inline] pub fn len(&self) -> usize { self.features.len() }

    #[inline] pub fn is_empty(&self) -> bool { self.features.is_empty() }

    #[inline] pub fn features(&self) -> &[BorderFeature] { &self.features }

    /// Indices of features whose envelope intersects `rect`, in dataset order.
    pub(crate) fn query(&self, rect: &Rect<f64>) -> Vec<usize> {
        let envelope = AABB::from_corners(rect.min().into(), rect.max().into());
        let mut indices = self.rtree.locate_in_envelope_intersecting(&envelope)
            .map(FeatureEnvelope::idx)
            .collect::<Vec<_>>();
        indices.sort_unstable();
        indices
    }

    /// Check if a feature's envelope lies entirely inside `rect`.
    pub(crate) fn is_within(&self, idx: usize, rect: &Rect<f64>) -> bool {
        self.features[idx].geometry.bounding_rect().is_some_and(|bbox| {
            bbox.min().x >= rect.min().x && bbox.max().x <= rect.max().x
                && bbox.min().y >= rect.min().y && bbox.max().y <= rect.max().y
        })
    }

    /// Bounding rectangle of all non-outlying features matching `select`.
    pub(crate) fn bounds_where(&self, mut select: impl FnMut(&BorderFeature) -> bool) -> Option<Rect<f64>> {
        self.rtree.iter()
            .filter(|entry| entry.frames() && select(&self.features[entry.idx()]))
            .map(|entry| *entry.bbox())
            .reduce(|a, b| Rect::new(
                Coord {
                    x: a.min().x.min(b.min().x),
                    y: a.min().y.min(b.min().y),
                },
                Coord {
                    x: a.max().x.max(b.max().x),
                    y: a.max().y.max(b.max().y),
                }
            ))
    }
}
