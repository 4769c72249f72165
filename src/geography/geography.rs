use chrono::NaiveDate;

use crate::{
    error::{MapError, Result},
    geography::{
        bbox::frame, clip::clip_features, inset::compose_insets, parse_date,
        BoundingBox, GeoFeature, GeographyOptions, Inset, Membership,
    },
    reference::ReferenceData,
};

/// Selected, clipped border features and the frame they are drawn in.
/// Built once per map and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct Geography {
    features: Vec<GeoFeature>,
    bbox: BoundingBox,
    aspect_ratio: f64,
    options: GeographyOptions,
    membership: Membership,
    insets: Vec<Inset>,
}

impl Geography {
    /// Resolve membership, frame the selection, clip borders and build insets.
    pub fn new(reference: &ReferenceData, options: &GeographyOptions) -> Result<Self> {
        let date = parse_date(options.date.as_deref())?;
        options.validate()?;

        let table = reference.territories();
        for name in &options.insets {
            table.require(name)?;
        }

        let mut geography = Self::build(reference, options.clone(), date)?;
        geography.insets = compose_insets(reference, options, date, &geography.membership)?;

        tracing::info!(
            %date,
            features = geography.features.len(),
            insets = geography.insets.len(),
            aspect_ratio = geography.aspect_ratio,
            "built geography"
        );

        Ok(geography)
    }

    /// Run membership, framing and clipping for already validated options.
    pub(crate) fn build(reference: &ReferenceData, options: GeographyOptions, date: NaiveDate) -> Result<Self> {
        let membership = Membership::resolve(reference.territories(), date, options.subset.as_deref())?;
        let dataset = reference.borders(options.resolution);

        let base = dataset.bounds_where(|f| membership.is_framing_id(f.territory_id()))
            .and_then(|rect| BoundingBox::from_rect(&rect))
            .ok_or_else(|| MapError::EmptySelection(format!(
                "framing territories have no {} resolution border geometry", dataset.resolution()
            )))?;

        let (bbox, aspect_ratio) = frame(&base, options.zoom, options.aspect_ratio);
        let features = clip_features(reference, dataset, &bbox, &membership, options.show_non_member_states);

        Ok(Self { features, bbox, aspect_ratio, options, membership, insets: Vec::new() })
    }

    #[inline] pub fn features(&self) -> &[GeoFeature] { &self.features }

    #[inline] pub fn bbox(&self) -> &BoundingBox { &self.bbox }

    /// Requested aspect ratio, or the one read off the zoomed box.
    #[inline] pub fn aspect_ratio(&self) -> f64 { self.aspect_ratio }

    /// The options this geography was built from.
    #[inline] pub fn options(&self) -> &GeographyOptions { &self.options }

    #[inline] pub fn date(&self) -> NaiveDate { self.membership.date() }

    #[inline] pub fn membership(&self) -> &Membership { &self.membership }

    #[inline] pub fn insets(&self) -> &[Inset] { &self.insets }
}
