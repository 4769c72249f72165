use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::{
    compose::{ComposeOptions, Theme},
    geography::GeographyOptions,
    palette::PaletteOptions,
};

/// A complete map description: geography, palette, theme and title.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    pub title: Option<String>,
    pub geography: GeographyOptions,
    pub palette: PaletteOptions,
    pub theme: Theme,
}

impl MapConfig {
    pub fn from_json_bytes(bytes: &[u8]) -> Result<Self> {
        serde_json::from_slice(bytes).context("[config] Failed to parse map config")
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path)
            .with_context(|| format!("[config] Failed to read {}", path.display()))?;
        Self::from_json_bytes(&bytes)
            .with_context(|| format!("[config] Invalid map config {}", path.display()))
    }

    /// Title and theme as compose call inputs.
    pub fn compose_options(&self) -> ComposeOptions {
        ComposeOptions { title: self.title.clone(), theme: self.theme.clone() }
    }
}
