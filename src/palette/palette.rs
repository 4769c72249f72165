use ahash::{AHashMap, AHashSet};

use crate::{
    color::{sample_ramp, Color},
    error::{MapError, Result},
    palette::{Bins, OutOfRangePolicy, PaletteOptions, COLOR_COUNT_RANGE},
    reference::TerritoryTable,
};

/// Color and legend label of one override category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Style {
    pub color: Color,
    pub label: String,
}

/// Bin assignment per territory, the color ramp and the override categories.
#[derive(Debug, Clone)]
pub struct Palette {
    bins: Bins,
    labels: Vec<String>,
    colors: Vec<Color>,
    assignments: AHashMap<String, usize>,
    missing: Style,
    not_applicable_style: Style,
    non_member: Style,
    not_applicable: Vec<String>,
}

impl Palette {
    pub fn new(table: &TerritoryTable, options: &PaletteOptions) -> Result<Self> {
        let count = options.count_colors;
        let (lo, hi) = COLOR_COUNT_RANGE;
        if !(lo..=hi).contains(&count) { return Err(MapError::InvalidColorCount(count)) }

        let (min, max) = (options.value_min, options.value_max);
        if !(min.is_finite() && max.is_finite() && min < max) {
            return Err(MapError::InvalidRange { min, max });
        }

        if options.names.len() != options.values.len() {
            return Err(MapError::LengthMismatch {
                what: "values",
                expected: options.names.len(),
                actual: options.values.len(),
            });
        }
        check_unique(&options.names)?;

        let not_applicable = options.not_applicable.clone().unwrap_or_default();
        for name in &not_applicable {
            table.require(name)?;
        }

        let bins = Bins::even(min, max, count);
        let labels = match &options.bin_labels {
            Some(labels) if labels.len() != count => {
                return Err(MapError::LengthMismatch { what: "bin_labels", expected: count, actual: labels.len() });
            }
            Some(labels) => labels.clone(),
            None => bins.labels(),
        };

        let colors = sample_ramp(
            options.color_low.normalize()?,
            options.color_mid.as_ref().map(|c| c.normalize()).transpose()?,
            options.color_high.normalize()?,
            count,
        );

        let mut assignments = AHashMap::with_capacity(options.names.len());
        for (name, value) in options.names.iter().zip(&options.values) {
            let Some(value) = value.filter(|v| v.is_finite()) else { continue };
            match bins.locate(value) {
                Some(bin) => { assignments.insert(name.clone(), bin); }
                None if options.out_of_range == OutOfRangePolicy::Error => {
                    return Err(MapError::ValueOutOfRange { name: name.clone(), value, min, max });
                }
                None => tracing::debug!(territory = %name, value, "value outside range, treated as missing"),
            }
        }

        tracing::info!(
            bins = count,
            assigned = assignments.len(),
            unassigned = options.names.len() - assignments.len(),
            "built palette"
        );

        Ok(Self {
            bins,
            labels,
            colors,
            assignments,
            missing: Style {
                color: options.color_missing.normalize()?,
                label: options.label_missing.clone(),
            },
            not_applicable_style: Style {
                color: options.color_not_applicable.normalize()?,
                label: options.label_not_applicable.clone(),
            },
            non_member: Style {
                color: options.color_non_member_state.normalize()?,
                label: options.label_non_member_state.clone(),
            },
            not_applicable,
        })
    }

    #[inline] pub fn bins(&self) -> &Bins { &self.bins }

    /// Breakpoints including both ends of the value range.
    #[inline] pub fn breakpoints(&self) -> &[f64] { self.bins.breakpoints() }

    #[inline] pub fn interior_breakpoints(&self) -> &[f64] { self.bins.interior_breakpoints() }

    /// Labels of every bin, whether or not any territory falls in it.
    #[inline] pub fn labels(&self) -> &[String] { &self.labels }

    /// Ramp colors, one per bin.
    #[inline] pub fn colors(&self) -> &[Color] { &self.colors }

    /// Bin index assigned to a territory name.
    #[inline] pub fn bin_of(&self, name: &str) -> Option<usize> { self.assignments.get(name).copied() }

    #[inline] pub fn missing(&self) -> &Style { &self.missing }

    #[inline] pub fn not_applicable_style(&self) -> &Style { &self.not_applicable_style }

    #[inline] pub fn non_member(&self) -> &Style { &self.non_member }

    /// Territory names shaded as not applicable.
    #[inline] pub fn not_applicable(&self) -> &[String] { &self.not_applicable }

    #[inline]
    pub fn is_not_applicable(&self, name: &str) -> bool { self.not_applicable.iter().any(|n| n == name) }
}

/// Fail with every repeated name, each listed once in first-repeat order.
fn check_unique(names: &[String]) -> Result<()> {
    let mut seen = AHashSet::with_capacity(names.len());
    let mut duplicates = Vec::new();
    for name in names {
        if !seen.insert(name.as_str()) && !duplicates.contains(name) {
            duplicates.push(name.clone());
        }
    }
    if duplicates.is_empty() { Ok(()) } else { Err(MapError::DuplicateNames(duplicates)) }
}
