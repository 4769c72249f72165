//! Read-only reference data: the membership table and border datasets.

mod border;
mod index;
mod io;
mod proj;
mod territory;

use std::path::Path;

use anyhow::Result;

pub use border::{BorderDataset, BorderFeature, Resolution};
pub use territory::{Territory, TerritoryTable};

/// Territory table plus high and low resolution border datasets.
/// Loaded once and shared read-only across compositions.
#[derive(Debug, Clone)]
pub struct ReferenceData {
    territories: TerritoryTable,
    high: BorderDataset,
    low: BorderDataset,
}

impl ReferenceData {
    pub fn new(territories: TerritoryTable, high: BorderDataset, low: BorderDataset) -> Self {
        Self { territories, high, low }
    }

    /// Read both GeoJSON border datasets, and the territory table if given
    /// (defaults to the built-in EU table).
    pub fn load(territories: Option<&Path>, high: &Path, low: &Path) -> Result<Self> {
        let territories = match territories {
            Some(path) => TerritoryTable::from_json_path(path)?,
            None => TerritoryTable::eu(),
        };
        let high = BorderDataset::from_geojson_path(Resolution::High, high)?;
        let low = BorderDataset::from_geojson_path(Resolution::Low, low)?;

        tracing::info!(
            territories = territories.len(),
            high = high.len(),
            low = low.len(),
            "loaded reference data"
        );

        Ok(Self::new(territories, high, low))
    }

    #[inline] pub fn territories(&self) -> &TerritoryTable { &self.territories }

    /// Get the border dataset for a resolution tier.
    #[inline]
    pub fn borders(&self, resolution: Resolution) -> &BorderDataset {
        match resolution {
            Resolution::High => &self.high,
            Resolution::Low => &self.low,
        }
    }

    /// Display name of a border feature: table name, else its own name, else its id.
    pub(crate) fn feature_name<'a>(&'a self, feature: &'a BorderFeature) -> &'a str {
        self.territories.by_id(feature.territory_id())
            .map(Territory::name)
            .or(feature.name())
            .unwrap_or(feature.territory_id())
    }
}
