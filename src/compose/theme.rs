use serde::{Deserialize, Serialize};

use crate::color::Color;

/// Cosmetic styling handed to the renderer.
///
/// Only `inset_height` and `inset_gap` are read during composition, both as
/// fractions of the main map height.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub background: Color,
    pub border_color_member: Color,
    pub border_color_non_member: Color,
    pub border_width_member: f64,
    pub border_width_non_member: f64,
    pub inset_border_color: Color,
    pub inset_border_width: f64,
    pub font_family: String,
    pub font_size_title: f64,
    pub font_size_legend: f64,
    pub legend_spacing: f64,
    pub title_spacing: f64,
    pub inset_height: f64,
    pub inset_gap: f64,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: Color::WHITE,
            border_color_member: Color::rgb(0x40, 0x40, 0x40),
            border_color_non_member: Color::rgb(0x9E, 0x9E, 0x9E),
            border_width_member: 0.4,
            border_width_non_member: 0.2,
            inset_border_color: Color::BLACK,
            inset_border_width: 0.5,
            font_family: "sans-serif".to_string(),
            font_size_title: 14.0,
            font_size_legend: 9.0,
            legend_spacing: 0.02,
            title_spacing: 0.03,
            inset_height: 0.18,
            inset_gap: 0.02,
        }
    }
}

/// Inputs of a compose call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComposeOptions {
    pub title: Option<String>,
    pub theme: Theme,
}

impl ComposeOptions {
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }
}
