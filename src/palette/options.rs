use serde::{Deserialize, Serialize};

use crate::color::ColorLiteral;

pub const COLOR_COUNT_RANGE: (usize, usize) = (2, 10);

/// Treatment of data values outside `[value_min, value_max]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutOfRangePolicy {
    /// Fold into the missing category, like absent values.
    #[default]
    Missing,
    /// Fail the palette call with `ValueOutOfRange`.
    Error,
}

/// Inputs of a palette construction call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaletteOptions {
    pub names: Vec<String>,
    pub values: Vec<Option<f64>>,
    pub not_applicable: Option<Vec<String>>,
    pub value_min: f64,
    pub value_max: f64,
    pub count_colors: usize,
    pub color_low: ColorLiteral,
    pub color_high: ColorLiteral,
    pub color_mid: Option<ColorLiteral>,
    pub color_missing: ColorLiteral,
    pub color_not_applicable: ColorLiteral,
    pub color_non_member_state: ColorLiteral,
    pub label_missing: String,
    pub label_not_applicable: String,
    pub label_non_member_state: String,
    /// Replaces the generated interval labels; must have `count_colors` entries.
    pub bin_labels: Option<Vec<String>>,
    pub out_of_range: OutOfRangePolicy,
}

impl Default for PaletteOptions {
    fn default() -> Self {
        Self {
            names: Vec::new(),
            values: Vec::new(),
            not_applicable: None,
            value_min: 0.0,
            value_max: 1.0,
            count_colors: 5,
            color_low: "#DEEBF7".into(),
            color_high: "#08519C".into(),
            color_mid: None,
            color_missing: "#BDBDBD".into(),
            color_not_applicable: "#F0F0F0".into(),
            color_non_member_state: "#FFFFFF".into(),
            label_missing: "Missing".to_string(),
            label_not_applicable: "Not applicable".to_string(),
            label_non_member_state: "Non-member state".to_string(),
            bin_labels: None,
            out_of_range: OutOfRangePolicy::Missing,
        }
    }
}

impl PaletteOptions {
    /// Options for fully present data.
    pub fn new<S: Into<String>>(names: impl IntoIterator<Item = S>, values: impl IntoIterator<Item = f64>) -> Self {
        Self {
            names: names.into_iter().map(Into::into).collect(),
            values: values.into_iter().map(Some).collect(),
            ..Self::default()
        }
    }

    pub fn with_range(mut self, value_min: f64, value_max: f64) -> Self {
        self.value_min = value_min;
        self.value_max = value_max;
        self
    }

    pub fn with_count_colors(mut self, count_colors: usize) -> Self {
        self.count_colors = count_colors;
        self
    }

    pub fn with_colors(mut self, low: impl Into<ColorLiteral>, high: impl Into<ColorLiteral>) -> Self {
        self.color_low = low.into();
        self.color_high = high.into();
        self
    }

    pub fn with_mid_color(mut self, mid: impl Into<ColorLiteral>) -> Self {
        self.color_mid = Some(mid.into());
        self
    }

    pub fn with_not_applicable<S: Into<String>>(mut self, names: impl IntoIterator<Item = S>) -> Self {
        self.not_applicable = Some(names.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_out_of_range(mut self, policy: OutOfRangePolicy) -> Self {
        self.out_of_range = policy;
        self
    }
}
