use std::path::Path;

use anyhow::{Context, Result};
use eumap::{compose, Geography, MapConfig, Palette, ReferenceData};
use serde::Deserialize;

/// Values keyed by territory name; `null` marks missing data.
#[derive(Debug, Deserialize)]
struct DataFile {
    names: Vec<String>,
    values: Vec<Option<f64>>,
}

fn read_data(path: &Path) -> Result<DataFile> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("[compose] Failed to read {}", path.display()))?;
    serde_json::from_slice(&bytes)
        .with_context(|| format!("[compose] Invalid data file {}", path.display()))
}

pub fn run(cli: &crate::cli::Cli, args: &crate::cli::ComposeArgs) -> Result<()> {
    let out_path = &args.output.clone().unwrap_or("./map.json".into());

    let mut config = MapConfig::from_path(&args.config)?;
    if let Some(path) = &args.data {
        let data = read_data(path)?;
        config.palette.names = data.names;
        config.palette.values = data.values;
    }

    tracing::info!(high = %args.high.display(), low = %args.low.display(), "loading reference data");
    let reference = ReferenceData::load(cli.territories.as_deref(), &args.high, &args.low)?;

    let geography = Geography::new(&reference, &config.geography)?;
    let palette = Palette::new(reference.territories(), &config.palette)?;
    let map = compose(&geography, &palette, &config.compose_options());

    tracing::info!(output = %out_path.display(), "writing composed map");
    map.write_geojson(out_path)?;

    Ok(())
}
