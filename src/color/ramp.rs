//! Interpolated color ramps for binned palettes.

use crate::color::Color;

/// Sample `count` evenly spaced colors from `low` through optional `mid` to `high`.
///
/// With a mid color the ramp is two linear segments meeting at t = 0.5.
/// Interpolation happens in output (sRGB) channel space.
pub(crate) fn sample_ramp(low: Color, mid: Option<Color>, high: Color, count: usize) -> Vec<Color> {
    match count {
        0 => Vec::new(),
        1 => vec![low],
        _ => (0..count)
            .map(|i| ramp_at(low, mid, high, i as f64 / (count - 1) as f64))
            .collect(),
    }
}

fn ramp_at(low: Color, mid: Option<Color>, high: Color, t: f64) -> Color {
    match mid {
        None => low.lerp(&high, t),
        Some(mid) if t <= 0.5 => low.lerp(&mid, t * 2.0),
        Some(mid) => mid.lerp(&high, (t - 0.5) * 2.0),
    }
}
