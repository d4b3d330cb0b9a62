//! Drawing-surface integration.
//!
//! A [`Surface`] hands out rectangular RGBA snapshots and accepts them back.
//! The operations in [`ops`] take the surface as an explicit argument, take a
//! snapshot, run a buffer-level operation on it and write the result back.
//!
//! [`Canvas`] is an in-memory surface backed by an `(height, width, 4)` array.

pub mod ops;

pub use ops::{blur_edges, fill_flood, random_hsl, FillOptions, Region};

use ndarray::{s, Array3, ArrayView3};

use crate::color::Color;
use crate::error::{check_shape, FillResult};
use crate::CHANNELS;

/// Pixel rectangle in surface coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub left: usize,
    pub top: usize,
    pub width: usize,
    pub height: usize,
}

impl Rect {
    pub fn new(left: usize, top: usize, width: usize, height: usize) -> Self {
        Self { left, top, width, height }
    }

    /// Intersect with a `width` x `height` surface.
    pub fn clamp_to(self, width: usize, height: usize) -> Self {
        let left = self.left.min(width);
        let top = self.top.min(height);
        Self {
            left,
            top,
            width: self.width.min(width - left),
            height: self.height.min(height - top),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Owned RGBA snapshot of a surface region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageData {
    pub data: Vec<u8>,
    pub width: usize,
    pub height: usize,
}

impl ImageData {
    pub fn new(width: usize, height: usize) -> Self {
        Self { data: vec![0; width * height * CHANNELS], width, height }
    }

    pub fn from_vec(data: Vec<u8>, width: usize, height: usize) -> FillResult<Self> {
        check_shape(data.len(), width, height)?;
        Ok(Self { data, width, height })
    }

    /// Array view of the snapshot, `None` if the public fields disagree.
    pub fn view(&self) -> Option<ArrayView3<'_, u8>> {
        ArrayView3::from_shape((self.height, self.width, CHANNELS), &self.data[..]).ok()
    }
}

pub trait Surface {
    /// Surface size as `(width, height)`.
    fn dimensions(&self) -> (usize, usize);

    /// Current fill style as a color string.
    fn fill_style(&self) -> &str;

    /// Copy `rect` (already clamped to the surface) into a new snapshot.
    fn get_image_data(&self, rect: Rect) -> ImageData;

    /// Write `image` back with its top-left corner at `(left, top)`.
    /// Parts falling outside the surface are dropped.
    fn put_image_data(&mut self, image: &ImageData, left: usize, top: usize);
}

/// In-memory RGBA surface.
#[derive(Debug, Clone)]
pub struct Canvas {
    pixels: Array3<u8>,
    pub fill_style: String,
}

impl Canvas {
    /// Fully transparent canvas with a black fill style.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            pixels: Array3::zeros((height, width, CHANNELS)),
            fill_style: String::from("#000000"),
        }
    }

    pub fn filled(width: usize, height: usize, color: Color) -> Self {
        let mut canvas = Self::new(width, height);
        canvas.fill_rect(Rect::new(0, 0, width, height), color);
        canvas
    }

    pub fn pixels(&self) -> ArrayView3<'_, u8> {
        self.pixels.view()
    }

    pub fn pixel(&self, x: usize, y: usize) -> Color {
        let px = self.pixels.slice(s![y, x, ..]);
        Color::rgba(px[0], px[1], px[2], px[3])
    }

    pub fn set_pixel(&mut self, x: usize, y: usize, color: Color) {
        for (c, v) in color.to_rgba().into_iter().enumerate() {
            self.pixels[[y, x, c]] = v;
        }
    }

    /// Paint a solid rectangle, clamped to the canvas.
    pub fn fill_rect(&mut self, rect: Rect, color: Color) {
        let (width, height) = self.dimensions();
        let rect = rect.clamp_to(width, height);
        for y in rect.top..rect.top + rect.height {
            for x in rect.left..rect.left + rect.width {
                self.set_pixel(x, y, color);
            }
        }
    }
}

impl Surface for Canvas {
    fn dimensions(&self) -> (usize, usize) {
        let (height, width, _) = self.pixels.dim();
        (width, height)
    }

    fn fill_style(&self) -> &str {
        &self.fill_style
    }

    fn get_image_data(&self, rect: Rect) -> ImageData {
        let (width, height) = self.dimensions();
        let rect = rect.clamp_to(width, height);
        let region = self.pixels.slice(s![
            rect.top..rect.top + rect.height,
            rect.left..rect.left + rect.width,
            ..
        ]);
        ImageData {
            data: region.iter().copied().collect(),
            width: rect.width,
            height: rect.height,
        }
    }

    fn put_image_data(&mut self, image: &ImageData, left: usize, top: usize) {
        let (width, height) = self.dimensions();
        let target = Rect::new(left, top, image.width, image.height).clamp_to(width, height);
        let Some(source) = image.view() else {
            return;
        };
        if target.is_empty() {
            return;
        }
        self.pixels
            .slice_mut(s![
                target.top..target.top + target.height,
                target.left..target.left + target.width,
                ..
            ])
            .assign(&source.slice(s![..target.height, ..target.width, ..]));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_clamp() {
        assert_eq!(Rect::new(2, 1, 10, 10).clamp_to(5, 4), Rect::new(2, 1, 3, 3));
        assert_eq!(Rect::new(9, 9, 3, 3).clamp_to(5, 4), Rect::new(5, 4, 0, 0));
        assert!(Rect::new(9, 9, 3, 3).clamp_to(5, 4).is_empty());
    }

    #[test]
    fn test_snapshot_roundtrip() {
        let mut canvas = Canvas::new(4, 3);
        canvas.set_pixel(1, 1, Color::RED);
        canvas.set_pixel(3, 2, Color::BLUE);

        let image = canvas.get_image_data(Rect::new(1, 1, 3, 2));
        assert_eq!((image.width, image.height), (3, 2));
        assert_eq!(&image.data[..4], &Color::RED.to_rgba());
        assert_eq!(&image.data[20..24], &Color::BLUE.to_rgba());

        let mut other = Canvas::new(4, 3);
        other.put_image_data(&image, 1, 1);
        assert_eq!(other.pixel(1, 1), Color::RED);
        assert_eq!(other.pixel(3, 2), Color::BLUE);
        assert_eq!(other.pixel(0, 0), Color::TRANSPARENT);
    }

    #[test]
    fn test_snapshot_is_clamped() {
        let canvas = Canvas::filled(3, 3, Color::WHITE);
        let image = canvas.get_image_data(Rect::new(2, 0, 5, 9));
        assert_eq!((image.width, image.height), (1, 3));
        assert_eq!(image.data.len(), 12);
    }

    #[test]
    fn test_put_drops_overflow() {
        let mut canvas = Canvas::new(2, 2);
        let image = ImageData::from_vec(Color::GREEN.to_rgba().repeat(9), 3, 3).unwrap();
        canvas.put_image_data(&image, 1, 1);
        assert_eq!(canvas.pixel(1, 1), Color::GREEN);
        assert_eq!(canvas.pixel(0, 0), Color::TRANSPARENT);
        assert_eq!(canvas.pixel(1, 0), Color::TRANSPARENT);
    }

    #[test]
    fn test_image_data_shape_checked() {
        assert!(ImageData::from_vec(vec![0; 7], 1, 2).is_err());
        assert_eq!(ImageData::new(2, 2).data.len(), 16);
    }
}
