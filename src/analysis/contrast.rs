//! Contrast and balance measurements over shares and reconstructions

use crate::io::error::{Result, ShareError, invalid_input};
use crate::raster::block::BLOCK_SIZE;
use crate::raster::{BinaryPixel, BinaryRaster};

/// Density of reconstructed blocks, split by the color of their source pixel
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContrastReport {
    /// Number of black source pixels
    pub black_pixels: usize,
    /// Number of white source pixels
    pub white_pixels: usize,
    /// Mean black fraction of blocks reconstructed from black pixels
    pub black_source_density: f64,
    /// Mean black fraction of blocks reconstructed from white pixels
    pub white_source_density: f64,
    /// Difference between the two densities
    pub contrast: f64,
}

impl ContrastReport {
    /// Black pixels came back fully black and white pixels half black
    ///
    /// A color absent from the source is not held against the report.
    pub fn is_faithful(&self) -> bool {
        let black_ok =
            self.black_pixels == 0 || (self.black_source_density - 1.0).abs() < f64::EPSILON;
        let white_ok =
            self.white_pixels == 0 || (self.white_source_density - 0.5).abs() < f64::EPSILON;
        black_ok && white_ok
    }
}

/// Compare a reconstruction against the source it was generated from
///
/// # Errors
///
/// Returns `DimensionMismatch` if the reconstruction is not exactly twice
/// the source in each direction
pub fn measure_contrast(
    source: &BinaryRaster,
    reconstructed: &BinaryRaster,
) -> Result<ContrastReport> {
    let expected = source.dimensions().expanded();
    if reconstructed.dimensions() != expected {
        return Err(ShareError::DimensionMismatch {
            first: expected,
            second: reconstructed.dimensions(),
        });
    }

    let mut counts = [0usize; 2];
    let mut black_subpixels = [0usize; 2];
    for ((row, col), block) in reconstructed.blocks() {
        let slot = match source.get(row, col) {
            Some(BinaryPixel::Black) => 0,
            Some(BinaryPixel::White) => 1,
            None => continue,
        };
        if let (Some(count), Some(black)) = (counts.get_mut(slot), black_subpixels.get_mut(slot)) {
            *count += 1;
            *black += block.black_count();
        }
    }

    let density = |black: usize, count: usize| {
        if count == 0 {
            0.0
        } else {
            black as f64 / (count * BLOCK_SIZE * BLOCK_SIZE) as f64
        }
    };
    let [black_pixels, white_pixels] = counts;
    let [from_black, from_white] = black_subpixels;
    let black_source_density = density(from_black, black_pixels);
    let white_source_density = density(from_white, white_pixels);

    Ok(ContrastReport {
        black_pixels,
        white_pixels,
        black_source_density,
        white_source_density,
        contrast: black_source_density - white_source_density,
    })
}

/// Count the blocks of a share that are not half black
///
/// A correctly generated share always yields zero.
///
/// # Errors
///
/// Returns `InvalidInput` if either dimension is odd
pub fn unbalanced_blocks(share: &BinaryRaster) -> Result<usize> {
    let dims = share.dimensions();
    if dims.width % BLOCK_SIZE != 0 || dims.height % BLOCK_SIZE != 0 {
        return Err(invalid_input(&format!(
            "share dimensions {dims} are not a whole number of blocks"
        )));
    }
    Ok(share
        .blocks()
        .filter(|(_, block)| !block.is_balanced())
        .count())
}
