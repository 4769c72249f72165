use serde::{Deserialize, Serialize};

use crate::{error::{MapError, Result}, reference::Resolution};

pub const DEFAULT_ZOOM: f64 = 0.9;
pub const ZOOM_RANGE: (f64, f64) = (0.5, 1.0);
pub const ASPECT_RATIO_RANGE: (f64, f64) = (0.5, 2.0);

/// Inputs of a geography construction call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeographyOptions {
    /// Reference date `YYYY-MM-DD`; today when absent.
    pub date: Option<String>,
    /// Territory names used for framing. Does not restrict what is drawn.
    pub subset: Option<Vec<String>>,
    /// Requested width/height ratio; read off the zoomed box when absent.
    pub aspect_ratio: Option<f64>,
    pub zoom: f64,
    pub show_non_member_states: bool,
    /// Territory names to render as insets, top to bottom.
    pub insets: Vec<String>,
    pub resolution: Resolution,
}

impl Default for GeographyOptions {
    fn default() -> Self {
        Self {
            date: None,
            subset: None,
            aspect_ratio: None,
            zoom: DEFAULT_ZOOM,
            show_non_member_states: true,
            insets: Vec::new(),
            resolution: Resolution::High,
        }
    }
}

impl GeographyOptions {
    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    pub fn with_subset<S: Into<String>>(mut self, names: impl IntoIterator<Item = S>) -> Self {
        self.subset = Some(names.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_aspect_ratio(mut self, aspect_ratio: f64) -> Self {
        self.aspect_ratio = Some(aspect_ratio);
        self
    }

    pub fn with_zoom(mut self, zoom: f64) -> Self {
        self.zoom = zoom;
        self
    }

    pub fn with_non_member_states(mut self, show: bool) -> Self {
        self.show_non_member_states = show;
        self
    }

    pub fn with_insets<S: Into<String>>(mut self, names: impl IntoIterator<Item = S>) -> Self {
        self.insets = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_resolution(mut self, resolution: Resolution) -> Self {
        self.resolution = resolution;
        self
    }

    /// Check numeric ranges of zoom and aspect ratio.
    pub(crate) fn validate(&self) -> Result<()> {
        let (lo, hi) = ZOOM_RANGE;
        if !(lo..=hi).contains(&self.zoom) { return Err(MapError::InvalidZoom(self.zoom)) }

        if let Some(aspect_ratio) = self.aspect_ratio {
            let (lo, hi) = ASPECT_RATIO_RANGE;
            if !(lo..=hi).contains(&aspect_ratio) {
                return Err(MapError::InvalidAspectRatio(aspect_ratio));
            }
        }

        Ok(())
    }
}
