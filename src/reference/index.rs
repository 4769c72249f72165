use geo::Rect;
use rstar::{RTreeObject, AABB};

/// R-tree entry for one border feature: its dataset index, envelope and
/// whether it is an outlying part that framing must ignore.
#[derive(Debug, Clone)]
pub(super) struct FeatureEnvelope {
    idx: usize,
    bbox: Rect<f64>,
    outlying: bool,
}

impl FeatureEnvelope {
    pub(super) fn new(idx: usize, bbox: Rect<f64>, outlying: bool) -> Self {
        Self { idx, bbox, outlying }
    }

    #[inline] pub(super) fn idx(&self) -> usize { self.idx }

    #[inline] pub(super) fn bbox(&self) -> &Rect<f64> { &self.bbox }

    /// Envelopes that may contribute to a framing box.
    #[inline] pub(super) fn frames(&self) -> bool { !self.outlying }
}

impl RTreeObject for FeatureEnvelope {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners(self.bbox.min().into(), self.bbox.max().into())
    }
}
