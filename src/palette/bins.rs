use serde::Serialize;

/// Equal-width bins over `[min, max]`. Bin `i` is `[b[i], b[i + 1])`, the last one closed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bins {
    breakpoints: Vec<f64>, // count + 1 values, ends included
}

impl Bins {
    /// Split `[min, max]` into `count` bins. Callers guarantee `min < max` and `count >= 1`.
    pub(crate) fn even(min: f64, max: f64, count: usize) -> Self {
        // weighted form stays finite when `max - min` overflows
        let breakpoints = (0..=count)
            .map(|i| {
                let t = i as f64 / count as f64;
                if i == count { max } else { min * (1.0 - t) + max * t }
            })
            .collect();
        Self { breakpoints }
    }

    #[inline] pub fn count(&self) -> usize { self.breakpoints.len() - 1 }

    #[inline] pub fn min(&self) -> f64 { self.breakpoints[0] }

    #[inline] pub fn max(&self) -> f64 { self.breakpoints[self.count()] }

    /// All `count + 1` breakpoints, both ends included.
    #[inline] pub fn breakpoints(&self) -> &[f64] { &self.breakpoints }

    /// The `count - 1` breakpoints strictly inside the range.
    #[inline] pub fn interior_breakpoints(&self) -> &[f64] { &self.breakpoints[1..self.count()] }

    /// Lower and upper bound of bin `i`, or `None` past the last bin.
    #[inline]
    pub fn bounds(&self, i: usize) -> Option<(f64, f64)> {
        Some((*self.breakpoints.get(i)?, *self.breakpoints.get(i + 1)?))
    }

    /// Index of the bin containing `value`, or `None` outside `[min, max]`.
    pub fn locate(&self, value: f64) -> Option<usize> {
        if !value.is_finite() || value < self.min() || value > self.max() { return None }

        let last = self.count() - 1;
        let t = (value - self.min()) / (self.max() - self.min());
        let mut idx = if t.is_finite() { ((t * self.count() as f64).floor() as usize).min(last) } else { 0 };

        // correct float drift so that b[idx] <= value < b[idx + 1]
        while idx > 0 && value < self.breakpoints[idx] { idx -= 1 }
        while idx < last && value >= self.breakpoints[idx + 1] { idx += 1 }

        Some(idx)
    }

    /// Interval labels, `[lo, hi)` for every bin but the last, which is `[lo, hi]`.
    pub fn labels(&self) -> Vec<String> {
        let last = self.count() - 1;
        self.breakpoints.windows(2).enumerate()
            .map(|(i, pair)| {
                let (lo, hi) = (pair[0], pair[1]);
                let close = if i == last { ']' } else { ')' };
                format!("[{}, {}{close}", format_bound(lo), format_bound(hi))
            })
            .collect()
    }
}

/// At most six decimals, trailing zeros dropped. Huge magnitudes use exponent notation.
fn format_bound(x: f64) -> String {
    if x.abs() >= 1e15 { return format!("{x:e}") }
    let rounded = (x * 1e6).round() / 1e6;
    if rounded == 0.0 { "0".to_string() } else { format!("{rounded}") }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_bins_over_unit_range() {
        let bins = Bins::even(0.0, 1.0, 2);
        assert_eq!(bins.breakpoints(), &[0.0, 0.5, 1.0]);
        assert_eq!(bins.interior_breakpoints(), &[0.5]);
        assert_eq!(bins.locate(0.1), Some(0));
        assert_eq!(bins.locate(0.9), Some(1));
        assert_eq!(bins.locate(0.5), Some(1));
        assert_eq!(bins.labels(), vec!["[0, 0.5)", "[0.5, 1]"]);
    }

    #[test]
    fn breakpoints_are_even_and_strictly_increasing() {
        for count in 2..=10 {
            let bins = Bins::even(-3.0, 7.5, count);
            assert_eq!(bins.count(), count);
            assert_eq!(bins.breakpoints().len(), count + 1);
            assert_eq!(bins.interior_breakpoints().len(), count - 1);
            assert_eq!(bins.labels().len(), count);

            let step = 10.5 / count as f64;
            for (i, pair) in bins.breakpoints().windows(2).enumerate() {
                assert!(pair[0] < pair[1]);
                assert!((pair[1] - pair[0] - step).abs() < 1e-9, "bin {i} of {count}");
            }
            for &b in bins.interior_breakpoints() {
                assert!(b > -3.0 && b < 7.5);
            }
        }
    }

    #[test]
    fn every_value_in_range_has_a_containing_bin() {
        for count in 2..=10 {
            let bins = Bins::even(0.1, 0.7, count);
            for step in 0..=600 {
                let value = 0.1 + 0.6 * step as f64 / 600.0;
                let value = value.min(0.7);
                let idx = bins.locate(value).unwrap();
                let (lo, hi) = bins.bounds(idx).unwrap();
                assert!(lo <= value && value <= hi, "{value} in [{lo}, {hi}]");
                if idx + 1 < count { assert!(value < hi) }
            }
        }
    }

    #[test]
    fn ends_are_inclusive_and_outside_is_unassigned() {
        let bins = Bins::even(0.0, 10.0, 5);
        assert_eq!(bins.locate(0.0), Some(0));
        assert_eq!(bins.locate(10.0), Some(4));
        assert_eq!(bins.locate(-0.001), None);
        assert_eq!(bins.locate(10.001), None);
        assert_eq!(bins.locate(f64::NAN), None);
    }

    #[test]
    fn range_wider_than_f64_max_stays_finite() {
        let bins = Bins::even(-1e308, 1e308, 2);
        assert_eq!(bins.breakpoints(), &[-1e308, 0.0, 1e308]);
        assert!(bins.breakpoints().windows(2).all(|pair| pair[0] < pair[1]));
        assert_eq!(bins.labels(), vec!["[-1e308, 0)", "[0, 1e308]"]);
        assert_eq!(bins.locate(-1e308), Some(0));
        assert_eq!(bins.locate(5e307), Some(1));
        assert_eq!(bins.locate(1e308), Some(1));

        let bins = Bins::even(-f64::MAX, f64::MAX, 10);
        assert!(bins.breakpoints().iter().all(|b| b.is_finite()));
        assert!(bins.breakpoints().windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn bounds_past_the_last_bin_is_none() {
        let bins = Bins::even(0.0, 1.0, 2);
        assert_eq!(bins.bounds(1), Some((0.5, 1.0)));
        assert_eq!(bins.bounds(2), None);
    }

    #[test]
    fn labels_trim_float_noise() {
        let bins = Bins::even(0.0, 0.3, 3);
        assert_eq!(bins.labels(), vec!["[0, 0.1)", "[0.1, 0.2)", "[0.2, 0.3]"]);
        let bins = Bins::even(-1.0, 1.0, 2);
        assert_eq!(bins.labels(), vec!["[-1, 0)", "[0, 1]"]);
    }
}
