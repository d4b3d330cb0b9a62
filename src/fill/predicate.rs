//! Pixel similarity predicate and the compare-and-commit write.
//!
//! The rules are evaluated in a fixed order and the first one that applies
//! decides. The order matters: "target already equals fill" must run before
//! the match rules so that a seed which already looks like the fill color
//! aborts the whole fill instead of flooding the image.

use crate::color::Color;
use crate::CHANNELS;

#[inline]
fn within(a: u8, b: u8, limit: u8) -> bool {
    a.abs_diff(b) <= limit
}

/// Decide whether the pixel at channel offset `offset` belongs to the region.
///
/// # Arguments
/// * `data` - RGBA buffer (4 bytes per pixel)
/// * `offset` - Offset of the pixel's red channel
/// * `target` - Color sampled at the seed before any mutation
/// * `fill` - Color being painted
/// * `tolerance` - Per-channel tolerance (0-254)
pub fn is_fillable(data: &[u8], offset: usize, target: Color, fill: Color, tolerance: u8) -> bool {
    // 1. Out of bounds
    let Some(px) = offset
        .checked_add(CHANNELS)
        .and_then(|end| data.get(offset..end))
    else {
        return false;
    };
    let surface = Color::from_pixel(px);

    // 2. Invisible surface under a visible fill always matches
    if surface.a == 0 && fill.a > 0 {
        return true;
    }

    // 3. Target is already the fill color: nothing to do
    if within(target.a, fill.a, tolerance)
        && within(target.r, fill.r, tolerance)
        && within(target.g, fill.g, tolerance)
        && within(target.b, fill.b, tolerance)
    {
        return false;
    }

    // 4. Exact match
    if surface == target {
        return true;
    }

    // 5. Within tolerance; alpha slack shrinks as color tolerance grows
    within(target.a, surface.a, 255 - tolerance)
        && within(target.r, surface.r, tolerance)
        && within(target.g, surface.g, tolerance)
        && within(target.b, surface.b, tolerance)
}

/// Paint the pixel at `offset` with `fill` if it is fillable.
///
/// This is the only place the engine writes pixels, so a pixel is only ever
/// set to exactly `fill`.
#[inline]
pub fn try_fill(data: &mut [u8], offset: usize, target: Color, fill: Color, tolerance: u8) -> bool {
    if !is_fillable(data, offset, target, fill, tolerance) {
        return false;
    }
    data[offset..offset + CHANNELS].copy_from_slice(&fill.to_rgba());
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Color = Color::rgb(255, 0, 0);
    const BLUE: Color = Color::rgb(0, 0, 255);

    fn pixel(c: Color) -> Vec<u8> {
        c.to_rgba().to_vec()
    }

    #[test]
    fn test_out_of_bounds_is_not_fillable() {
        let data = pixel(RED);
        assert!(!is_fillable(&data, 4, RED, BLUE, 0));
        assert!(!is_fillable(&data, usize::MAX, RED, BLUE, 0));
    }

    #[test]
    fn test_transparent_surface_matches_any_rgb() {
        // Garbage RGB under zero alpha
        let data: Vec<u8> = vec![17, 201, 99, 0];
        assert!(is_fillable(&data, 0, RED, BLUE, 0));
        // Even when target equals fill
        assert!(is_fillable(&data, 0, BLUE, BLUE, 0));
    }

    #[test]
    fn test_transparent_surface_needs_visible_fill() {
        let data: Vec<u8> = vec![17, 201, 99, 0];
        let clear_fill = Color::rgba(0, 0, 255, 0);
        assert!(!is_fillable(&data, 0, RED, clear_fill, 0));
    }

    #[test]
    fn test_target_equal_to_fill_rejects_exact_match() {
        let data = pixel(RED);
        assert!(!is_fillable(&data, 0, RED, RED, 0));
        // Within tolerance counts as equal
        let near_red = Color::rgb(250, 3, 0);
        assert!(!is_fillable(&data, 0, RED, near_red, 5));
        assert!(is_fillable(&data, 0, RED, near_red, 4));
    }

    #[test]
    fn test_exact_match() {
        let data = pixel(Color::rgba(10, 20, 30, 40));
        assert!(is_fillable(&data, 0, Color::rgba(10, 20, 30, 40), BLUE, 0));
    }

    #[test]
    fn test_tolerance_band_rgb() {
        let data = pixel(Color::rgb(240, 10, 0));
        assert!(!is_fillable(&data, 0, RED, BLUE, 14));
        assert!(is_fillable(&data, 0, RED, BLUE, 15));
    }

    #[test]
    fn test_alpha_slack_is_inverse_of_tolerance() {
        let faded_red = Color::rgba(255, 0, 0, 55);
        let data = pixel(faded_red);
        // Alpha differs by 200: allowed while tolerance <= 55
        assert!(is_fillable(&data, 0, RED, BLUE, 0));
        assert!(is_fillable(&data, 0, RED, BLUE, 55));
        assert!(!is_fillable(&data, 0, RED, BLUE, 56));
    }

    #[test]
    fn test_pixel_holding_fill_passes_band() {
        // Fill differs from target only by alpha; the predicate alone keeps
        // accepting it, the traversal's visited mask stops repeats
        let fill = Color::rgba(255, 0, 0, 100);
        let data = pixel(fill);
        assert!(is_fillable(&data, 0, RED, fill, 0));
    }

    #[test]
    fn test_try_fill_writes_exact_fill() {
        let mut data = pixel(Color::rgb(250, 5, 5));
        assert!(try_fill(&mut data, 0, RED, BLUE, 10));
        assert_eq!(data, pixel(BLUE));
        // Second attempt is a no-op
        assert!(!try_fill(&mut data, 0, RED, BLUE, 10));
    }

    #[test]
    fn test_try_fill_leaves_unmatched_pixel() {
        let mut data = pixel(Color::rgb(0, 255, 0));
        assert!(!try_fill(&mut data, 0, RED, BLUE, 0));
        assert_eq!(data, pixel(Color::rgb(0, 255, 0)));
    }
}
