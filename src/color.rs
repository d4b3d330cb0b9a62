//! RGBA8 color values and color-string parsing.
//!
//! Fill colors arrive either as explicit channel values or as a CSS color
//! string taken from a drawing surface. Strict parsing accepts everything
//! `csscolorparser` does: hex forms, `rgb()`/`rgba()`, `hsl()`/`hsla()`,
//! `hwb()`, space-separated syntax and the full CSS named-color table.

use std::str::FromStr;

use thiserror::Error;

/// A single RGBA pixel value, 8 bits per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    #[error("empty color string")]
    EmptyInput,
    #[error("invalid color {input:?}: {reason}")]
    Invalid { input: String, reason: String },
}

impl Color {
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const GREEN: Color = Color::rgb(0, 128, 0);
    pub const LIME: Color = Color::rgb(0, 255, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Read the pixel starting at `px[0]`. `px` must hold at least 4 bytes.
    #[inline]
    pub fn from_pixel(px: &[u8]) -> Self {
        Self { r: px[0], g: px[1], b: px[2], a: px[3] }
    }

    #[inline]
    pub fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Parse a color string, never failing.
    ///
    /// Unrecognised strings become [`Color::TRANSPARENT`]. A malformed
    /// `rgb()`/`rgba()` string keeps the channels that parse as numbers and
    /// sets every other channel, alpha included, to 0.
    pub fn parse_lenient(input: &str) -> Self {
        if let Ok(color) = input.parse() {
            return color;
        }
        match functional_args(input.trim()) {
            Some(args) => {
                let mut channels = [0u8; 4];
                for (i, arg) in args.iter().take(4).enumerate() {
                    channels[i] = if i == 3 {
                        parse_alpha(arg).unwrap_or(0)
                    } else {
                        parse_channel(arg).unwrap_or(0)
                    };
                }
                Color::from(channels)
            }
            None => Color::TRANSPARENT,
        }
    }
}

impl From<[u8; 4]> for Color {
    fn from([r, g, b, a]: [u8; 4]) -> Self {
        Color::rgba(r, g, b, a)
    }
}

impl From<(u8, u8, u8, u8)> for Color {
    fn from((r, g, b, a): (u8, u8, u8, u8)) -> Self {
        Color::rgba(r, g, b, a)
    }
}

impl From<csscolorparser::Color> for Color {
    fn from(c: csscolorparser::Color) -> Self {
        Color::rgba(unit_to_u8(c.r), unit_to_u8(c.g), unit_to_u8(c.b), unit_to_u8(c.a))
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ColorParseError::EmptyInput);
        }
        csscolorparser::parse(s)
            .map(Color::from)
            .map_err(|e| ColorParseError::Invalid { input: s.to_string(), reason: e.to_string() })
    }
}

#[inline]
fn unit_to_u8(v: impl Into<f64>) -> u8 {
    (v.into() * 255.0).round().clamp(0.0, 255.0) as u8
}

/// Arguments of an `rgb(...)` / `rgba(...)` string, comma or space separated.
fn functional_args(s: &str) -> Option<Vec<&str>> {
    let open = s.find('(')?;
    let body = s[open + 1..].strip_suffix(')')?;
    let func = s[..open].trim().to_ascii_lowercase();
    if func != "rgb" && func != "rgba" {
        return None;
    }
    Some(
        body.split(|c: char| c == ',' || c == '/' || c.is_whitespace())
            .filter(|arg| !arg.is_empty())
            .collect(),
    )
}

/// Color channel: number 0-255 or a percentage, clamped.
fn parse_channel(arg: &str) -> Option<u8> {
    let value = match arg.strip_suffix('%') {
        Some(pct) => pct.parse::<f64>().ok()? * 2.55,
        None => arg.parse::<f64>().ok()?,
    };
    if value.is_nan() {
        return None;
    }
    Some(value.round().clamp(0.0, 255.0) as u8)
}

/// Alpha given as a 0.0-1.0 fraction, scaled to 0-255.
fn parse_alpha(arg: &str) -> Option<u8> {
    let value = arg.parse::<f64>().ok()?;
    if value.is_nan() {
        return None;
    }
    Some(unit_to_u8(value.clamp(0.0, 1.0)))
}
