//! Reconstruction by overlaying two shares

use crate::io::error::{Result, ShareError};
use crate::raster::BinaryRaster;
use ndarray::Zip;

/// Stack two rasters as transparencies, pixel by pixel
///
/// Each output pixel is black if it is black on either input. The inputs
/// are not modified and the result depends on nothing else.
///
/// # Errors
///
/// Returns `DimensionMismatch` if the rasters differ in width or height
pub fn overlay(first: &BinaryRaster, second: &BinaryRaster) -> Result<BinaryRaster> {
    if first.dimensions() != second.dimensions() {
        return Err(ShareError::DimensionMismatch {
            first: first.dimensions(),
            second: second.dimensions(),
        });
    }
    Ok(overlay_matching(first, second))
}

// Both rasters must already have identical dimensions
pub(crate) fn overlay_matching(first: &BinaryRaster, second: &BinaryRaster) -> BinaryRaster {
    let pixels = Zip::from(first.pixels())
        .and(second.pixels())
        .map_collect(|&a, &b| a & b);
    BinaryRaster::from_array_unchecked(pixels)
}
