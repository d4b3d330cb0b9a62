//! Random hue/saturation/lightness jitter.
//!
//! One random factor per component is drawn for the whole call and applied
//! to every visible pixel, so the image shifts as a whole rather than
//! becoming noisy. Fully transparent pixels and all alpha values are kept.

use rand::Rng;
use rayon::prelude::*;

use crate::error::{check_shape, FillResult};
use crate::CHANNELS;

// ============================================================================
// Color Space Conversion
// ============================================================================

/// Convert RGB to HSL.
/// Input: r, g, b in 0.0-1.0
/// Output: (h, s, l), all in 0.0-1.0
#[inline]
pub fn rgb_to_hsl(r: f32, g: f32, b: f32) -> (f32, f32, f32) {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if max == min {
        return (0.0, 0.0, l);
    }

    let d = max - min;
    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };

    let h = if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };

    (h / 6.0, s, l)
}

/// Convert HSL to RGB.
/// Input: h, s, l in 0.0-1.0
/// Output: (r, g, b) in 0.0-1.0
#[inline]
pub fn hsl_to_rgb(h: f32, s: f32, l: f32) -> (f32, f32, f32) {
    if s == 0.0 {
        return (l, l, l);
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;

    fn hue_to_rgb(p: f32, q: f32, mut t: f32) -> f32 {
        if t < 0.0 { t += 1.0; }
        if t > 1.0 { t -= 1.0; }
        if t < 1.0 / 6.0 { return p + (q - p) * 6.0 * t; }
        if t < 0.5 { return q; }
        if t < 2.0 / 3.0 { return p + (q - p) * (2.0 / 3.0 - t) * 6.0; }
        p
    }

    (
        hue_to_rgb(p, q, h + 1.0 / 3.0),
        hue_to_rgb(p, q, h),
        hue_to_rgb(p, q, h - 1.0 / 3.0),
    )
}

#[inline]
fn to_channel(v: f32) -> u8 {
    (v * 255.0).round_ties_even().clamp(0.0, 255.0) as u8
}

// ============================================================================
// Jitter
// ============================================================================

/// Maximum relative change per HSL component.
///
/// An amount of 0.2 scales the component by a random factor in [0.8, 1.2).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HslJitter {
    pub hue: f32,
    pub saturation: f32,
    pub lightness: f32,
}

/// Multipliers applied to every visible pixel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HslFactors {
    pub hue: f32,
    pub saturation: f32,
    pub lightness: f32,
}

impl Default for HslFactors {
    fn default() -> Self {
        Self { hue: 1.0, saturation: 1.0, lightness: 1.0 }
    }
}

impl HslJitter {
    pub fn new(hue: f32, saturation: f32, lightness: f32) -> Self {
        Self { hue, saturation, lightness }
    }

    /// Draw one factor per component, uniform in `[1 - amount, 1 + amount)`.
    pub fn factors<R: Rng>(&self, rng: &mut R) -> HslFactors {
        let mut factor = |amount: f32| 1.0 + (rng.random::<f32>() * amount * 2.0 - amount);
        HslFactors {
            hue: factor(self.hue),
            saturation: factor(self.saturation),
            lightness: factor(self.lightness),
        }
    }
}

/// Jitter an RGBA buffer in place with factors drawn from `rng`.
///
/// # Returns
/// The factors that were applied
pub fn random_hsl_buffer<R: Rng>(
    data: &mut [u8],
    width: usize,
    height: usize,
    jitter: &HslJitter,
    rng: &mut R,
) -> FillResult<HslFactors> {
    check_shape(data.len(), width, height)?;
    let factors = jitter.factors(rng);
    apply_hsl_factors(data, width, height, factors)?;
    Ok(factors)
}

/// Scale hue, saturation and lightness of every visible pixel.
///
/// Hue wraps around; saturation and lightness are clamped to 0.0-1.0.
pub fn apply_hsl_factors(
    data: &mut [u8],
    width: usize,
    height: usize,
    factors: HslFactors,
) -> FillResult<()> {
    check_shape(data.len(), width, height)?;

    data.par_chunks_exact_mut(CHANNELS)
        .filter(|px| px[3] != 0)
        .for_each(|px| {
            let (h, s, l) = rgb_to_hsl(
                px[0] as f32 / 255.0,
                px[1] as f32 / 255.0,
                px[2] as f32 / 255.0,
            );

            let h = (h * factors.hue).rem_euclid(1.0);
            let s = (s * factors.saturation).clamp(0.0, 1.0);
            let l = (l * factors.lightness).clamp(0.0, 1.0);

            let (r, g, b) = hsl_to_rgb(h, s, l);
            px[0] = to_channel(r);
            px[1] = to_channel(g);
            px[2] = to_channel(b);
        });

    Ok(())
}
