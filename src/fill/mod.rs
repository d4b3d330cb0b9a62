//! Tolerance-based flood fill over RGBA8 buffers.
//!
//! [`fill`] is the validated entry point: it checks the buffer shape and the
//! seed coordinate, normalises the tolerance and then runs the scanline
//! traversal in [`scanline::flood`]. The traversal itself never fails; a seed
//! that already looks like the fill color yields [`FillOutcome::Unchanged`].
//!
//! Callers that share a buffer across threads must serialise access
//! themselves; the `&mut [u8]` borrow makes each call exclusive.

pub mod predicate;
pub mod scanline;

pub use predicate::{is_fillable, try_fill};
pub use scanline::flood;

use crate::color::Color;
use crate::diagnostics::{Diagnostic, DiagnosticSink, LogSink};
use crate::error::{check_dimensions, check_shape, Axis, FillError, FillResult};

/// Per-channel color tolerance, always within 0-254.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Tolerance(u8);

impl Tolerance {
    pub const MAX: Tolerance = Tolerance(254);

    /// Clamp an integer tolerance into range.
    pub fn new(value: u8) -> Self {
        Tolerance(value.min(Self::MAX.0))
    }

    /// Normalise a loosely typed tolerance.
    ///
    /// Missing or NaN values become 0; anything else is rounded (half up),
    /// made absolute and clamped to 254.
    pub fn normalize(value: Option<f64>) -> Self {
        match value {
            Some(v) if !v.is_nan() => {
                let rounded = (v + 0.5).floor().abs();
                Tolerance(rounded.min(Self::MAX.0 as f64) as u8)
            }
            _ => Tolerance(0),
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl From<u8> for Tolerance {
    fn from(value: u8) -> Self {
        Tolerance::new(value)
    }
}

/// Result of a fill that passed validation.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillOutcome {
    /// The region was painted; `pixels` counts the pixels written.
    Filled { pixels: usize },
    /// The seed already matches the fill color; the buffer is untouched.
    Unchanged,
}

impl FillOutcome {
    pub fn is_filled(self) -> bool {
        matches!(self, FillOutcome::Filled { .. })
    }
}

/// Flood fill an RGBA buffer in place, reporting diagnostics through `log`.
///
/// # Arguments
/// * `data` - RGBA buffer (length = width * height * 4)
/// * `x`, `y` - Seed coordinate; fractional values are truncated
/// * `color` - Fill color
/// * `tolerance` - Optional tolerance, normalised by [`Tolerance::normalize`]
/// * `width`, `height` - Image dimensions in pixels
pub fn fill(
    data: &mut [u8],
    x: f64,
    y: f64,
    color: Color,
    tolerance: Option<f64>,
    width: usize,
    height: usize,
) -> FillResult<FillOutcome> {
    fill_with_sink(data, x, y, color, tolerance, width, height, &mut LogSink)
}

/// Same as [`fill`], sending diagnostics to `sink`.
#[allow(clippy::too_many_arguments)]
pub fn fill_with_sink(
    data: &mut [u8],
    x: f64,
    y: f64,
    color: Color,
    tolerance: Option<f64>,
    width: usize,
    height: usize,
    sink: &mut impl DiagnosticSink,
) -> FillResult<FillOutcome> {
    check_dimensions(width, height)?;
    check_seed_axis(Axis::X, x)?;
    check_seed_axis(Axis::Y, y)?;
    check_shape(data.len(), width, height)?;

    let xi = truncate(Axis::X, x, sink);
    let yi = truncate(Axis::Y, y, sink);
    if xi >= width {
        return Err(FillError::InvalidCoordinate { axis: Axis::X, value: x });
    }
    if yi >= height {
        return Err(FillError::InvalidCoordinate { axis: Axis::Y, value: y });
    }

    let tolerance = Tolerance::normalize(tolerance);
    Ok(match flood(data, xi, yi, color, tolerance.get(), width) {
        Some(pixels) => FillOutcome::Filled { pixels },
        None => FillOutcome::Unchanged,
    })
}

fn check_seed_axis(axis: Axis, value: f64) -> FillResult<()> {
    if value.is_nan() || value < 0.0 {
        return Err(FillError::InvalidCoordinate { axis, value });
    }
    Ok(())
}

fn truncate(axis: Axis, value: f64, sink: &mut impl DiagnosticSink) -> usize {
    // Saturating cast; huge values fail the bounds check afterwards
    let truncated = value.floor() as usize;
    if truncated as f64 != value {
        sink.report(&Diagnostic::CoordinateTruncated { axis, from: value, to: truncated });
    }
    truncated
}
