use geo::MultiPolygon;
use serde::Serialize;

use crate::{
    color::Color,
    compose::{Category, LegendEntry},
    geography::{BoundingBox, GeoFeature, Geography},
    palette::Palette,
};

/// Precedence: non-member > not applicable > missing > assigned bin.
pub(crate) fn categorize(feature: &GeoFeature, palette: &Palette) -> Category {
    if !feature.is_member() {
        Category::NonMember
    } else if palette.is_not_applicable(feature.name()) {
        Category::NotApplicable
    } else {
        palette.bin_of(feature.name()).map_or(Category::Missing, Category::Bin)
    }
}

/// Every bin in order, then each override category present in `categories`.
pub(crate) fn legend(palette: &Palette, categories: impl IntoIterator<Item = Category>) -> Vec<LegendEntry> {
    let mut present = [false; 3];
    for category in categories {
        if let Some(slot) = Category::OVERRIDES.iter().position(|c| *c == category) {
            present[slot] = true;
        }
    }

    (0..palette.labels().len()).map(Category::Bin)
        .chain(Category::OVERRIDES.into_iter().zip(present).filter_map(|(c, p)| p.then_some(c)))
        .map(|category| LegendEntry::new(category, palette))
        .collect()
}

/// A clipped feature with its resolved category, label and fill.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlotFeature {
    pub territory_id: String,
    pub name: String,
    #[serde(skip)]
    pub geometry: MultiPolygon<f64>,
    pub category: Category,
    pub label: String,
    pub color: Color,
}

/// Render-ready fusion of one geography and one palette.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotData {
    features: Vec<PlotFeature>,
    bbox: BoundingBox,
    aspect_ratio: f64,
    legend: Vec<LegendEntry>,
}

impl PlotData {
    pub fn new(geography: &Geography, palette: &Palette) -> Self {
        let features = geography.features().iter()
            .map(|feature| {
                let category = categorize(feature, palette);
                let (label, color) = category.style(palette);
                PlotFeature {
                    territory_id: feature.territory_id().to_string(),
                    name: feature.name().to_string(),
                    geometry: feature.geometry().clone(),
                    category,
                    label: label.to_string(),
                    color,
                }
            })
            .collect::<Vec<_>>();

        let legend = legend(palette, features.iter().map(|f| f.category));

        Self { features, bbox: *geography.bbox(), aspect_ratio: geography.aspect_ratio(), legend }
    }

    #[inline] pub fn features(&self) -> &[PlotFeature] { &self.features }

    #[inline] pub fn bbox(&self) -> &BoundingBox { &self.bbox }

    #[inline] pub fn aspect_ratio(&self) -> f64 { self.aspect_ratio }

    /// Legend entries: all bins, then the override categories actually drawn.
    #[inline] pub fn legend(&self) -> &[LegendEntry] { &self.legend }

    /// Legend colors in order.
    pub fn colors(&self) -> Vec<Color> { self.legend.iter().map(|e| e.color).collect() }

    /// Legend labels in order.
    pub fn labels(&self) -> Vec<&str> { self.legend.iter().map(|e| e.label.as_str()).collect() }
}
