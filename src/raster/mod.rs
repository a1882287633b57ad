//! Two-level raster data model
//!
//! This module contains the image representation shared by the scheme:
//! - Black and white pixels with their overlay algebra
//! - The 2x2 sub-pixel blocks and the two canonical patterns
//! - Validated rasters and their dimensions

/// Sub-pixel blocks and canonical patterns
pub mod block;
/// Validated two-level rasters
pub mod grid;
/// Two-valued pixels
pub mod pixel;

pub use block::SubPixelBlock;
pub use grid::{BinaryRaster, Dimensions};
pub use pixel::BinaryPixel;
