//! WebAssembly exports.
//!
//! Buffers are flat RGBA bytes (length = width * height * 4). Mutating
//! functions take `&mut [u8]`, which wasm-bindgen copies back into the
//! caller's `Uint8Array` / `Uint8ClampedArray` when the call returns.

use rand::rngs::StdRng;
use rand::SeedableRng;
use wasm_bindgen::prelude::*;

use crate::color::Color;
use crate::fill::fill;
use crate::filters::{random_hsl_buffer, soften_edges, HslJitter};

// ============================================================================
// Flood Fill
// ============================================================================

/// Flood fill in place.
///
/// # Arguments
/// * `data` - Flat array of RGBA bytes (length = width * height * 4)
/// * `x`, `y` - Seed coordinate (fractional values are truncated)
/// * `r`, `g`, `b`, `a` - Fill color
/// * `tolerance` - Optional tolerance (0-254)
/// * `width`, `height` - Image size in pixels
///
/// # Returns
/// `true` if pixels were painted, `false` if the seed already matched the fill color
#[wasm_bindgen]
#[allow(clippy::too_many_arguments)]
pub fn flood_fill_wasm(
    data: &mut [u8],
    x: f64,
    y: f64,
    r: u8,
    g: u8,
    b: u8,
    a: u8,
    tolerance: Option<f64>,
    width: usize,
    height: usize,
) -> Result<bool, JsError> {
    let outcome = fill(data, x, y, Color::rgba(r, g, b, a), tolerance, width, height)?;
    Ok(outcome.is_filled())
}

/// Flood fill with a CSS color string such as `"#ff0000"` or `"rgba(0,0,255,1)"`.
#[wasm_bindgen]
pub fn flood_fill_style_wasm(
    data: &mut [u8],
    x: f64,
    y: f64,
    style: &str,
    tolerance: Option<f64>,
    width: usize,
    height: usize,
) -> Result<bool, JsError> {
    let color = Color::parse_lenient(style);
    let outcome = fill(data, x, y, color, tolerance, width, height)?;
    Ok(outcome.is_filled())
}

// ============================================================================
// Auxiliary Transforms
// ============================================================================

/// Fade alpha next to fully transparent pixels. Returns the edge pixel count.
#[wasm_bindgen]
pub fn soften_edges_wasm(
    data: &mut [u8],
    width: usize,
    height: usize,
    amount: f32,
) -> Result<usize, JsError> {
    Ok(soften_edges(data, width, height, amount)?)
}

/// Random hue/saturation/lightness jitter, deterministic for a given seed.
#[wasm_bindgen]
pub fn random_hsl_wasm(
    data: &mut [u8],
    width: usize,
    height: usize,
    hue: f32,
    saturation: f32,
    lightness: f32,
    seed: u64,
) -> Result<(), JsError> {
    let jitter = HslJitter::new(hue, saturation, lightness);
    let mut rng = StdRng::seed_from_u64(seed);
    random_hsl_buffer(data, width, height, &jitter, &mut rng)?;
    Ok(())
}
