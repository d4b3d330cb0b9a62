//! Scanline flood fill driven by an explicit stack.
//!
//! Each popped seed is painted and widened into a horizontal run; the rows
//! directly above and below every pixel of that run are then checked and
//! pushed when fillable. A visited mask (one flag per pixel) makes every
//! pixel eligible for painting once, so the loop ends even when painted
//! pixels still satisfy the predicate.

use crate::color::Color;
use crate::fill::predicate::{is_fillable, try_fill};
use crate::CHANNELS;

/// Traversal state shared by the run expansion and the neighbour checks.
struct Scan<'a> {
    data: &'a mut [u8],
    visited: Vec<bool>,
    target: Color,
    fill: Color,
    tolerance: u8,
}

impl Scan<'_> {
    #[inline]
    fn fillable(&self, offset: usize) -> bool {
        self.visited.get(offset / CHANNELS) == Some(&false)
            && is_fillable(&*self.data, offset, self.target, self.fill, self.tolerance)
    }

    /// Paint `offset` if it is unvisited and fillable.
    #[inline]
    fn claim(&mut self, offset: usize) -> bool {
        if self.visited.get(offset / CHANNELS) != Some(&false) {
            return false;
        }
        if !try_fill(&mut *self.data, offset, self.target, self.fill, self.tolerance) {
            return false;
        }
        self.visited[offset / CHANNELS] = true;
        true
    }
}

/// Flood fill from `(x, y)` in place.
///
/// `data` is a row-major RGBA buffer `width` pixels wide.
///
/// # Returns
/// `Some(pixel_count)` with the number of painted pixels, or `None` when the
/// seed lies outside the buffer or is not fillable (the buffer is left
/// untouched).
pub fn flood(
    data: &mut [u8],
    x: usize,
    y: usize,
    fill: Color,
    tolerance: u8,
    width: usize,
) -> Option<usize> {
    if x >= width {
        return None;
    }
    let row_len = width.checked_mul(CHANNELS)?;
    let seed = y.checked_mul(width)?.checked_add(x)?.checked_mul(CHANNELS)?;
    let target = Color::from_pixel(data.get(seed..seed.checked_add(CHANNELS)?)?);

    if !is_fillable(data, seed, target, fill, tolerance) {
        return None;
    }

    let mut scan = Scan {
        visited: vec![false; data.len() / CHANNELS],
        data,
        target,
        fill,
        tolerance,
    };
    let mut stack = vec![seed];
    let mut painted = 0usize;

    while let Some(offset) = stack.pop() {
        // Stale entry: painted by an earlier run
        if !scan.claim(offset) {
            continue;
        }

        let row_start = offset - offset % row_len;
        let row_end = row_start + row_len;

        let mut west = offset;
        while west > row_start && scan.claim(west - CHANNELS) {
            west -= CHANNELS;
        }
        let mut east = offset;
        while east + CHANNELS < row_end && scan.claim(east + CHANNELS) {
            east += CHANNELS;
        }
        painted += (east - west) / CHANNELS + 1;

        for column in (west..=east).step_by(CHANNELS) {
            if let Some(above) = column.checked_sub(row_len) {
                if scan.fillable(above) {
                    stack.push(above);
                }
            }
            let below = column + row_len;
            if scan.fillable(below) {
                stack.push(below);
            }
        }
    }

    log::debug!(
        "flood fill from ({x}, {y}) painted {painted} pixels with {:?}",
        fill.to_rgba()
    );
    Some(painted)
}
