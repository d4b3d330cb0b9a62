//! Edge softening: fade the alpha of pixels bordering transparency.
//!
//! A pixel is an edge pixel when one of its four direct neighbours (inside
//! the image, rows do not wrap) is fully transparent. Edge pixels keep their
//! color; only alpha is scaled.

use ndarray::{Array2, ArrayView3};
use rayon::prelude::*;

use crate::error::{check_shape, FillError, FillResult};
use crate::CHANNELS;

/// Scale alpha of every edge pixel by `1 - amount`.
///
/// # Arguments
/// * `data` - RGBA buffer (length = width * height * 4)
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
/// * `amount` - Fade amount, 0.0 = no change, 1.0 = edges become transparent
///
/// # Returns
/// Number of edge pixels found
pub fn soften_edges(data: &mut [u8], width: usize, height: usize, amount: f32) -> FillResult<usize> {
    check_shape(data.len(), width, height)?;

    let image = ArrayView3::from_shape((height, width, CHANNELS), &*data).map_err(|_| {
        FillError::ShapeMismatch { expected: width * height * CHANNELS, actual: data.len() }
    })?;
    let (mask, _) = edge_mask(&image).into_raw_vec_and_offset();
    let edges = mask.iter().filter(|&&e| e).count();

    let mult = 1.0 - amount;
    data.par_chunks_exact_mut(CHANNELS)
        .zip(mask.par_iter())
        .filter(|(_, is_edge)| **is_edge)
        .for_each(|(px, _)| {
            px[3] = (px[3] as f32 * mult).round_ties_even().clamp(0.0, 255.0) as u8;
        });

    Ok(edges)
}

/// Mark the 4-neighbours of every fully transparent pixel.
fn edge_mask(image: &ArrayView3<u8>) -> Array2<bool> {
    let (height, width, _) = image.dim();
    let mut mask = Array2::<bool>::from_elem((height, width), false);

    for y in 0..height {
        for x in 0..width {
            if image[[y, x, 3]] != 0 {
                continue;
            }
            if x > 0 {
                mask[[y, x - 1]] = true;
            }
            if x + 1 < width {
                mask[[y, x + 1]] = true;
            }
            if y > 0 {
                mask[[y - 1, x]] = true;
            }
            if y + 1 < height {
                mask[[y + 1, x]] = true;
            }
        }
    }

    mask
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opaque(width: usize, height: usize) -> Vec<u8> {
        [10u8, 20, 30, 200].repeat(width * height)
    }

    fn alpha(data: &[u8], width: usize, x: usize, y: usize) -> u8 {
        data[(y * width + x) * CHANNELS + 3]
    }

    #[test]
    fn test_neighbours_of_hole_are_faded() {
        let mut data = opaque(3, 3);
        data[4 * CHANNELS + 3] = 0;

        let edges = soften_edges(&mut data, 3, 3, 0.5).unwrap();
        assert_eq!(edges, 4);

        assert_eq!(alpha(&data, 3, 1, 0), 100);
        assert_eq!(alpha(&data, 3, 0, 1), 100);
        assert_eq!(alpha(&data, 3, 2, 1), 100);
        assert_eq!(alpha(&data, 3, 1, 2), 100);
        // Diagonals and the hole itself
        assert_eq!(alpha(&data, 3, 0, 0), 200);
        assert_eq!(alpha(&data, 3, 2, 2), 200);
        assert_eq!(alpha(&data, 3, 1, 1), 0);
        // Color untouched
        assert_eq!(&data[4..7], &[10, 20, 30]);
    }

    #[test]
    fn test_edges_do_not_wrap_rows() {
        let mut data = opaque(3, 2);
        // Last pixel of row 0
        data[2 * CHANNELS + 3] = 0;

        soften_edges(&mut data, 3, 2, 1.0).unwrap();
        assert_eq!(alpha(&data, 3, 1, 0), 0);
        assert_eq!(alpha(&data, 3, 2, 1), 0);
        // First pixel of row 1 is adjacent in memory only
        assert_eq!(alpha(&data, 3, 0, 1), 200);
    }

    #[test]
    fn test_rounding_is_half_even() {
        let mut data = opaque(2, 1);
        data[3] = 0;
        data[7] = 5;
        // 5 * 0.5 = 2.5 -> 2
        soften_edges(&mut data, 2, 1, 0.5).unwrap();
        assert_eq!(data[7], 2);
    }

    #[test]
    fn test_fully_opaque_image_is_untouched() {
        let mut data = opaque(4, 4);
        let before = data.clone();
        assert_eq!(soften_edges(&mut data, 4, 4, 0.9).unwrap(), 0);
        assert_eq!(data, before);
    }

    #[test]
    fn test_shape_mismatch() {
        let mut data = opaque(2, 2);
        assert!(matches!(
            soften_edges(&mut data, 3, 2, 0.5),
            Err(FillError::ShapeMismatch { .. })
        ));
    }
}
