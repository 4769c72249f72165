use geo::{BooleanOps, MultiPolygon};

use crate::{
    geography::{BoundingBox, Membership},
    reference::{BorderDataset, ReferenceData},
};

/// A border feature selected and clipped for one geography.
#[derive(Debug, Clone, PartialEq)]
pub struct GeoFeature {
    territory_id: String,
    name: String,
    geometry: MultiPolygon<f64>,
    member: bool,
    subset: bool,
}

impl GeoFeature {
    #[inline] pub fn territory_id(&self) -> &str { &self.territory_id }

    #[inline] pub fn name(&self) -> &str { &self.name }

    #[inline] pub fn geometry(&self) -> &MultiPolygon<f64> { &self.geometry }

    /// Active on the reference date and not an outlying part.
    #[inline] pub fn is_member(&self) -> bool { self.member }

    /// Part of the framing subset (all members when no subset was given).
    #[inline] pub fn is_subset(&self) -> bool { self.subset }
}

/// Normalize possibly self-intersecting rings (zero-width buffer equivalent).
fn repair(shape: &MultiPolygon<f64>) -> MultiPolygon<f64> {
    shape.union(&MultiPolygon::new(Vec::new()))
}

/// Select the features of `dataset` touching `bbox`, cut them at the box
/// boundary, and tag them as member/subset.
pub(crate) fn clip_features(
    reference: &ReferenceData,
    dataset: &BorderDataset,
    bbox: &BoundingBox,
    membership: &Membership,
    show_non_member_states: bool,
) -> Vec<GeoFeature> {
    let rect = bbox.to_rect();
    let frame = rect.to_polygon();
    let candidates = dataset.query(&rect);
    let count = candidates.len();

    let mut features = Vec::with_capacity(count);
    for idx in candidates {
        let feature = &dataset.features()[idx];
        let id = feature.territory_id();

        let member = membership.is_member_id(id) && !feature.is_outlying();
        if !member && !show_non_member_states { continue }

        let subset = if membership.has_subset() { membership.is_framing_id(id) } else { member };

        let geometry = if dataset.is_within(idx, &rect) {
            feature.geometry().clone()
        } else {
            repair(feature.geometry()).intersection(&frame)
        };
        if geometry.0.is_empty() { continue }

        features.push(GeoFeature {
            territory_id: id.to_string(),
            name: reference.feature_name(feature).to_string(),
            geometry,
            member,
            subset,
        });
    }

    tracing::debug!(
        resolution = %dataset.resolution(),
        candidates = count,
        kept = features.len(),
        "clipped border features"
    );

    features
}
