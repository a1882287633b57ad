//! The pair of shares produced by one generation call

use crate::raster::{BinaryPixel, BinaryRaster, Dimensions, SubPixelBlock};
use crate::scheme::reconstruct::overlay_matching;
use ndarray::Array2;

/// Two shares of identical dimensions, produced together
///
/// Neither share can be replaced or mutated once the pair exists, which is
/// what keeps their dimensions equal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharePair {
    first: BinaryRaster,
    second: BinaryRaster,
}

impl SharePair {
    // Arrays come from the generator with equal, non-zero, even dimensions
    pub(crate) const fn from_arrays(first: Array2<BinaryPixel>, second: Array2<BinaryPixel>) -> Self {
        Self {
            first: BinaryRaster::from_array_unchecked(first),
            second: BinaryRaster::from_array_unchecked(second),
        }
    }

    /// First share
    pub const fn first(&self) -> &BinaryRaster {
        &self.first
    }

    /// Second share
    pub const fn second(&self) -> &BinaryRaster {
        &self.second
    }

    /// Dimensions shared by both shares
    pub fn dimensions(&self) -> Dimensions {
        self.first.dimensions()
    }

    /// Split the pair into `(first, second)`
    pub fn into_parts(self) -> (BinaryRaster, BinaryRaster) {
        (self.first, self.second)
    }

    /// The blocks both shares hold for source pixel `(row, col)`
    pub fn blocks(&self, row: usize, col: usize) -> Option<(SubPixelBlock, SubPixelBlock)> {
        Some((self.first.block(row, col)?, self.second.block(row, col)?))
    }

    /// Overlay the two shares
    pub fn reconstruct(&self) -> BinaryRaster {
        overlay_matching(&self.first, &self.second)
    }
}
