use serde::Serialize;

use crate::{color::Color, palette::Palette};

/// Legend category of a feature, independent of its display label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Bin(usize),
    Missing,
    NotApplicable,
    NonMember,
}

impl Category {
    /// Override categories in legend order.
    pub const OVERRIDES: [Category; 3] = [Category::Missing, Category::NotApplicable, Category::NonMember];

    #[inline] pub fn is_bin(&self) -> bool { matches!(self, Category::Bin(_)) }

    /// Resolve the display label and color of this category in `palette`.
    pub fn style<'a>(&self, palette: &'a Palette) -> (&'a str, Color) {
        match *self {
            Category::Bin(i) => (palette.labels()[i].as_str(), palette.colors()[i]),
            Category::Missing => (palette.missing().label.as_str(), palette.missing().color),
            Category::NotApplicable => (palette.not_applicable_style().label.as_str(), palette.not_applicable_style().color),
            Category::NonMember => (palette.non_member().label.as_str(), palette.non_member().color),
        }
    }
}

/// One legend line: category, label and fill color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LegendEntry {
    pub category: Category,
    pub label: String,
    pub color: Color,
}

impl LegendEntry {
    pub(crate) fn new(category: Category, palette: &Palette) -> Self {
        let (label, color) = category.style(palette);
        Self { category, label: label.to_string(), color }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bins_sort_before_overrides_in_fixed_order() {
        let mut categories = vec![
            Category::NonMember, Category::Bin(1), Category::NotApplicable, Category::Missing, Category::Bin(0),
        ];
        categories.sort();
        assert_eq!(categories, vec![
            Category::Bin(0), Category::Bin(1), Category::Missing, Category::NotApplicable, Category::NonMember,
        ]);
    }

    #[test]
    fn serializes_snake_case() {
        assert_eq!(serde_json::to_string(&Category::NotApplicable).unwrap(), "\"not_applicable\"");
        assert_eq!(serde_json::to_string(&Category::Bin(3)).unwrap(), "{\"bin\":3}");
    }
}
