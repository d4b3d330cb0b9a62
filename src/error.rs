//! Error types for buffer validation.
//!
//! Every error here is raised before any pixel is touched, so a failed call
//! never leaves a partially filled buffer behind.

use std::fmt;

use thiserror::Error;

/// Image axis, used to name the offending coordinate or dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => f.write_str("x"),
            Axis::Y => f.write_str("y"),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum FillError {
    #[error("buffer holds {actual} bytes but width and height require {expected}")]
    ShapeMismatch { expected: usize, actual: usize },
    #[error("{name} must be a positive integer, got {value}")]
    InvalidDimension { name: &'static str, value: usize },
    #[error("{axis} coordinate must be a non-negative position inside the image, got {value}")]
    InvalidCoordinate { axis: Axis, value: f64 },
}

pub type FillResult<T> = std::result::Result<T, FillError>;

/// Both dimensions must be at least 1.
pub(crate) fn check_dimensions(width: usize, height: usize) -> FillResult<()> {
    if width == 0 {
        return Err(FillError::InvalidDimension { name: "width", value: width });
    }
    if height == 0 {
        return Err(FillError::InvalidDimension { name: "height", value: height });
    }
    Ok(())
}

/// Check that `len` bytes describe a `width` x `height` RGBA image.
pub(crate) fn check_shape(len: usize, width: usize, height: usize) -> FillResult<()> {
    check_dimensions(width, height)?;

    // An overflowing product can never match a real slice length.
    let expected = width
        .checked_mul(height)
        .and_then(|px| px.checked_mul(crate::CHANNELS))
        .unwrap_or(usize::MAX);
    if expected != len {
        return Err(FillError::ShapeMismatch { expected, actual: len });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_shape_accepts_exact_length() {
        assert_eq!(check_shape(3 * 2 * 4, 3, 2), Ok(()));
    }

    #[test]
    fn test_check_shape_rejects_zero_dimensions() {
        assert_eq!(
            check_shape(0, 0, 5),
            Err(FillError::InvalidDimension { name: "width", value: 0 })
        );
        assert_eq!(
            check_shape(0, 5, 0),
            Err(FillError::InvalidDimension { name: "height", value: 0 })
        );
    }

    #[test]
    fn test_check_dimensions_ignores_length() {
        assert_eq!(check_dimensions(3, 2), Ok(()));
        assert_eq!(
            check_dimensions(3, 0),
            Err(FillError::InvalidDimension { name: "height", value: 0 })
        );
    }

    #[test]
    fn test_check_shape_rejects_wrong_length() {
        assert_eq!(
            check_shape(10, 2, 2),
            Err(FillError::ShapeMismatch { expected: 16, actual: 10 })
        );
    }

    #[test]
    fn test_check_shape_overflow_is_mismatch() {
        let err = check_shape(16, usize::MAX, 2).unwrap_err();
        assert!(matches!(err, FillError::ShapeMismatch { actual: 16, .. }));
    }

    #[test]
    fn test_error_messages() {
        let err = FillError::InvalidCoordinate { axis: Axis::Y, value: -1.0 };
        assert!(err.to_string().starts_with("y coordinate"));
    }
}
