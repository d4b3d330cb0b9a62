//! Tolerance-based flood fill ("paint bucket") for RGBA8 images.
//!
//! Recolors the contiguous region around a seed pixel in place, matching
//! pixels by approximate color similarity, with Python bindings via PyO3
//! and WASM bindings for JavaScript.
//!
//! ## Image Format
//! All operations work on flat, row-major RGBA8 buffers:
//! - 4 bytes per pixel (R, G, B, A), 0-255
//! - length = width * height * 4
//! - pixel `(x, y)` starts at byte `(x + y * width) * 4`
//!
//! ## Layout
//! - [`fill`]: similarity predicate, scanline traversal and the validated
//!   [`fill::fill`] entry point
//! - [`filters`]: edge softening and HSL jitter on the same buffer layout
//! - [`surface`]: snapshot/write-back integration with a drawing surface
//! - [`color`]: RGBA colors and CSS-style color strings

pub mod color;
pub mod diagnostics;
pub mod error;
pub mod fill;
pub mod filters;
pub mod surface;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use color::Color;
pub use diagnostics::{Diagnostic, DiagnosticSink, LogSink};
pub use error::{Axis, FillError, FillResult};
pub use fill::{fill, fill_with_sink, FillOutcome, Tolerance};
pub use surface::{Canvas, ImageData, Rect, Surface};

/// Channels per pixel (R, G, B, A).
pub const CHANNELS: usize = 4;

// Python bindings (only when python feature is enabled)
#[cfg(feature = "python")]
mod python {
    use ndarray::Array3;
    use numpy::{IntoPyArray, PyArray3, PyReadonlyArray3, PyReadwriteArray3};
    use pyo3::exceptions::PyValueError;
    use pyo3::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use crate::color::Color;
    use crate::error::FillError;
    use crate::fill::fill;
    use crate::filters::{random_hsl_buffer, soften_edges as soften_edges_impl, HslJitter};
    use crate::CHANNELS;

    fn value_error(err: FillError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }

    /// Copy an `(H, W, 4)` array into a row-major buffer.
    fn rgba_buffer(image: &PyReadonlyArray3<'_, u8>) -> PyResult<(Vec<u8>, usize, usize)> {
        let view = image.as_array();
        let (height, width, channels) = view.dim();
        if channels != CHANNELS {
            return Err(PyValueError::new_err(format!(
                "expected an RGBA image with 4 channels, got {channels}"
            )));
        }
        Ok((view.iter().copied().collect(), width, height))
    }

    fn into_image(py: Python<'_>, data: Vec<u8>, width: usize, height: usize) -> PyResult<Bound<'_, PyArray3<u8>>> {
        let array = Array3::from_shape_vec((height, width, CHANNELS), data)
            .map_err(|e| PyValueError::new_err(e.to_string()))?;
        Ok(array.into_pyarray(py))
    }

    // ========================================================================
    // Flood Fill
    // ========================================================================

    /// Flood fill an RGBA u8 image in place.
    ///
    /// Returns True if pixels were painted, False if the seed already
    /// matched the fill color.
    #[pyfunction]
    #[pyo3(signature = (image, x, y, color, tolerance=None))]
    pub fn flood_fill(
        mut image: PyReadwriteArray3<'_, u8>,
        x: f64,
        y: f64,
        color: (u8, u8, u8, u8),
        tolerance: Option<f64>,
    ) -> PyResult<bool> {
        let (height, width, channels) = image.as_array().dim();
        if channels != CHANNELS {
            return Err(PyValueError::new_err(format!(
                "expected an RGBA image with 4 channels, got {channels}"
            )));
        }
        let data = image
            .as_slice_mut()
            .map_err(|_| PyValueError::new_err("image must be C-contiguous"))?;
        let outcome = fill(data, x, y, Color::from(color), tolerance, width, height)
            .map_err(value_error)?;
        Ok(outcome.is_filled())
    }

    /// Parse a CSS color string into an (r, g, b, a) tuple.
    #[pyfunction]
    pub fn parse_color(style: &str) -> (u8, u8, u8, u8) {
        let c = Color::parse_lenient(style);
        (c.r, c.g, c.b, c.a)
    }

    // ========================================================================
    // Auxiliary Transforms
    // ========================================================================

    #[pyfunction]
    pub fn soften_edges<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, u8>,
        amount: f32,
    ) -> PyResult<Bound<'py, PyArray3<u8>>> {
        let (mut data, width, height) = rgba_buffer(&image)?;
        soften_edges_impl(&mut data, width, height, amount).map_err(value_error)?;
        into_image(py, data, width, height)
    }

    #[pyfunction]
    #[pyo3(signature = (image, hue, saturation, lightness, seed=0))]
    pub fn random_hsl<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, u8>,
        hue: f32,
        saturation: f32,
        lightness: f32,
        seed: u64,
    ) -> PyResult<Bound<'py, PyArray3<u8>>> {
        let (mut data, width, height) = rgba_buffer(&image)?;
        let jitter = HslJitter::new(hue, saturation, lightness);
        let mut rng = StdRng::seed_from_u64(seed);
        random_hsl_buffer(&mut data, width, height, &jitter, &mut rng).map_err(value_error)?;
        into_image(py, data, width, height)
    }

    /// Flood fill Rust extension module
    #[pymodule]
    pub fn floodfill_rust(m: &Bound<'_, PyModule>) -> PyResult<()> {
        m.add_function(wrap_pyfunction!(flood_fill, m)?)?;
        m.add_function(wrap_pyfunction!(parse_color, m)?)?;
        m.add_function(wrap_pyfunction!(soften_edges, m)?)?;
        m.add_function(wrap_pyfunction!(random_hsl, m)?)?;
        Ok(())
    }
}

#[cfg(feature = "python")]
pub use python::floodfill_rust;
