//! Canonical color representation and literal normalization.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::{MapError, Result};

/// RGBA color with 8-bit channels. Displays as `#RRGGBBAA`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "ColorLiteral", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);

    /// Opaque color from 8-bit channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self { Self { r, g, b, a: 255 } }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self { Self { r, g, b, a } }

    /// Canonical `#RRGGBBAA` string.
    pub fn to_hex(&self) -> String { self.to_string() }

    /// Linear interpolation in sRGB channel space, `t` clamped to [0, 1].
    pub fn lerp(&self, other: &Color, t: f64) -> Color {
        let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };
        let mix = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
        Color {
            r: mix(self.r, other.r),
            g: mix(self.g, other.g),
            b: mix(self.b, other.b),
            a: mix(self.a, other.a),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", hex::encode_upper([self.r, self.g, self.b, self.a]))
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self { color.to_hex() }
}

impl FromStr for Color {
    type Err = MapError;

    fn from_str(s: &str) -> Result<Self> { parse_hex(s) }
}

/// Any accepted color input: RGB/RGBA channels on a [0, 1] or [0, 255] scale, or hex.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorLiteral {
    Rgb([f64; 3]),
    Rgba([f64; 4]),
    Hex(String),
}

impl ColorLiteral {
    /// Canonicalize to a [`Color`].
    pub fn normalize(&self) -> Result<Color> {
        match self {
            ColorLiteral::Rgb([r, g, b]) => from_channels(&[*r, *g, *b]),
            ColorLiteral::Rgba([r, g, b, a]) => from_channels(&[*r, *g, *b, *a]),
            ColorLiteral::Hex(s) => parse_hex(s),
        }
    }
}

impl TryFrom<ColorLiteral> for Color {
    type Error = MapError;

    fn try_from(literal: ColorLiteral) -> Result<Self> { literal.normalize() }
}

impl From<Color> for ColorLiteral {
    fn from(color: Color) -> Self { ColorLiteral::Hex(color.to_hex()) }
}

impl From<&str> for ColorLiteral {
    fn from(s: &str) -> Self { ColorLiteral::Hex(s.to_string()) }
}

impl From<String> for ColorLiteral {
    fn from(s: String) -> Self { ColorLiteral::Hex(s) }
}

impl From<[f64; 3]> for ColorLiteral {
    fn from(c: [f64; 3]) -> Self { ColorLiteral::Rgb(c) }
}

impl From<[f64; 4]> for ColorLiteral {
    fn from(c: [f64; 4]) -> Self { ColorLiteral::Rgba(c) }
}

/// Canonicalize any accepted color representation.
pub fn normalize(literal: impl Into<ColorLiteral>) -> Result<Color> {
    literal.into().normalize()
}

/// Channels are on the unit scale iff every channel (alpha included) is <= 1.
fn from_channels(channels: &[f64]) -> Result<Color> {
    if let Some(bad) = channels.iter().find(|c| !c.is_finite() || **c < 0.0 || **c > 255.0) {
        return Err(MapError::InvalidColor(format!("channel {bad} outside [0, 255]")));
    }

    let scale = if channels.iter().all(|&c| c <= 1.0) { 255.0 } else { 1.0 };
    let q = |c: f64| (c * scale).round() as u8;

    Ok(match *channels {
        [r, g, b] => Color::rgb(q(r), q(g), q(b)),
        [r, g, b, a] => Color::rgba(q(r), q(g), q(b), q(a)),
        _ => return Err(MapError::InvalidColor(format!("expected 3 or 4 channels, got {}", channels.len()))),
    })
}

fn parse_hex(s: &str) -> Result<Color> {
    let digits = s.trim().strip_prefix('#').unwrap_or(s.trim());
    if digits.len() != 6 && digits.len() != 8 {
        return Err(MapError::InvalidColor(format!("`{s}` must have 6 or 8 hex digits")));
    }

    let bytes = hex::decode(digits)
        .map_err(|e| MapError::InvalidColor(format!("`{s}`: {e}")))?;

    Ok(match bytes[..] {
        [r, g, b] => Color::rgb(r, g, b),
        [r, g, b, a] => Color::rgba(r, g, b, a),
        _ => return Err(MapError::InvalidColor(format!("`{s}` must have 6 or 8 hex digits"))),
    })
}
