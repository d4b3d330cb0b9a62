//! Whole-image pixel transforms that share the fill's buffer contract.
//!
//! Both transforms take a flat RGBA8 buffer plus its width and height, the
//! same layout [`crate::fill::fill`] works on:
//!
//! | Transform | Touches | Skips |
//! |-----------|---------|-------|
//! | `soften_edges` | alpha of pixels next to full transparency | RGB |
//! | `apply_hsl_factors` | RGB of visible pixels | alpha, transparent pixels |
//!
//! Neither depends on the flood-fill traversal. Pixels are processed in
//! parallel with rayon.

pub mod edge_soften;
pub mod hsl_jitter;

pub use edge_soften::soften_edges;
pub use hsl_jitter::{apply_hsl_factors, random_hsl_buffer, HslFactors, HslJitter};
