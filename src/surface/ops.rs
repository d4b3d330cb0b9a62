//! Surface-level operations: paint bucket, edge softening and HSL jitter.
//!
//! Each operation snapshots a region of the surface, runs the matching
//! buffer-level function and writes the snapshot back. Nothing is stored
//! between calls.

use rand::Rng;

use crate::color::Color;
use crate::diagnostics::DiagnosticSink;
use crate::error::FillResult;
use crate::fill::{fill_with_sink, FillOutcome};
use crate::filters::edge_soften::soften_edges;
use crate::filters::hsl_jitter::{random_hsl_buffer, HslFactors, HslJitter};
use crate::surface::{Rect, Surface};

/// Part of the surface a fill may touch.
///
/// `left`/`top` place the snapshot; `width`/`height` size it, the same way
/// a canvas `getImageData(left, top, width, height)` call does. `None` (or 0)
/// means the full surface size. The result is clamped to the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Region {
    pub left: usize,
    pub top: usize,
    pub width: Option<usize>,
    pub height: Option<usize>,
}

impl Region {
    pub fn new(left: usize, top: usize, width: usize, height: usize) -> Self {
        Self { left, top, width: Some(width), height: Some(height) }
    }

    /// Resolve against a `width` x `height` surface.
    pub fn rect(&self, width: usize, height: usize) -> Rect {
        let size = |extent: Option<usize>, full: usize| match extent {
            Some(e) if e > 0 => e,
            _ => full,
        };
        Rect::new(self.left, self.top, size(self.width, width), size(self.height, height))
            .clamp_to(width, height)
    }
}

/// Options for [`fill_flood`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FillOptions {
    /// Tolerance before normalisation; `None` means exact matching.
    pub tolerance: Option<f64>,
    pub region: Region,
}

impl FillOptions {
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = Some(tolerance);
        self
    }

    pub fn with_region(mut self, region: Region) -> Self {
        self.region = region;
        self
    }
}

/// Paint-bucket fill using the surface's current fill style.
///
/// The seed `(x, y)` is relative to the top-left corner of the region. The
/// surface is only written when the fill changed something.
pub fn fill_flood<S: Surface + ?Sized>(
    surface: &mut S,
    x: f64,
    y: f64,
    options: &FillOptions,
    sink: &mut impl DiagnosticSink,
) -> FillResult<FillOutcome> {
    let color = Color::parse_lenient(surface.fill_style());
    let (width, height) = surface.dimensions();
    let rect = options.region.rect(width, height);
    if rect.is_empty() {
        return Ok(FillOutcome::Unchanged);
    }

    let mut image = surface.get_image_data(rect);
    let outcome = fill_with_sink(
        &mut image.data,
        x,
        y,
        color,
        options.tolerance,
        image.width,
        image.height,
        sink,
    )?;
    if outcome.is_filled() {
        surface.put_image_data(&image, rect.left, rect.top);
    }
    Ok(outcome)
}

/// Fade the alpha of every pixel bordering full transparency.
///
/// # Returns
/// Number of softened edge pixels
pub fn blur_edges<S: Surface + ?Sized>(surface: &mut S, amount: f32) -> FillResult<usize> {
    let (width, height) = surface.dimensions();
    let rect = Rect::new(0, 0, width, height);
    if rect.is_empty() {
        return Ok(0);
    }

    let mut image = surface.get_image_data(rect);
    let edges = soften_edges(&mut image.data, image.width, image.height, amount)?;
    surface.put_image_data(&image, 0, 0);
    Ok(edges)
}

/// Shift hue, saturation and lightness of the whole surface by random factors.
pub fn random_hsl<S: Surface + ?Sized, R: Rng>(
    surface: &mut S,
    jitter: &HslJitter,
    rng: &mut R,
) -> FillResult<HslFactors> {
    let (width, height) = surface.dimensions();
    if width == 0 || height == 0 {
        return Ok(HslFactors::default());
    }

    let mut image = surface.get_image_data(Rect::new(0, 0, width, height));
    let factors = random_hsl_buffer(&mut image.data, image.width, image.height, jitter, rng)?;
    surface.put_image_data(&image, 0, 0);
    Ok(factors)
}
