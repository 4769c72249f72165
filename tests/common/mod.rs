#![allow(dead_code)]

use eumap::{BorderDataset, BorderFeature, ReferenceData, Resolution, TerritoryTable};
use geo::{polygon, MultiPolygon};

pub fn square(x: f64, y: f64, size: f64) -> MultiPolygon<f64> {
    MultiPolygon::new(vec![polygon![
        (x: x, y: y), (x: x + size, y: y), (x: x + size, y: y + size), (x: x, y: y + size), (x: x, y: y),
    ]])
}

/// Unit squares in projected units: a 2x2 block of members, a former member
/// to the east, a non-member in between and an outlying French part far away.
pub fn high_borders() -> BorderDataset {
    BorderDataset::new(Resolution::High, vec![
        BorderFeature::new("FR", square(0.0, 0.0, 1.0), false),
        BorderFeature::new("DE", square(1.0, 0.0, 1.0), false),
        BorderFeature::new("ES", square(0.0, -1.0, 1.0), false),
        BorderFeature::new("IT", square(1.0, -1.0, 1.0), false),
        BorderFeature::new("CH", square(2.0, 0.0, 1.0), false).with_name("Switzerland"),
        BorderFeature::new("UK", square(3.0, 0.0, 1.0), false),
        BorderFeature::new("FR", square(10.0, 10.0, 1.0), true),
    ])
}

/// Same territories, with a coarser and larger Italy.
pub fn low_borders() -> BorderDataset {
    BorderDataset::new(Resolution::Low, vec![
        BorderFeature::new("FR", square(0.0, 0.0, 1.0), false),
        BorderFeature::new("DE", square(1.0, 0.0, 1.0), false),
        BorderFeature::new("ES", square(0.0, -1.0, 1.0), false),
        BorderFeature::new("IT", square(1.0, -2.0, 2.0), false),
    ])
}

pub fn reference() -> ReferenceData {
    ReferenceData::new(TerritoryTable::eu(), high_borders(), low_borders())
}

pub fn founders() -> TerritoryTable {
    TerritoryTable::eu()
        .restricted_to(&["Belgium", "France", "Germany", "Italy", "Luxembourg", "Netherlands"])
        .unwrap()
}
