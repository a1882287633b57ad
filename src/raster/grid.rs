//! Rectangular two-level rasters backed by `ndarray`
//!
//! A [`BinaryRaster`] is the only image representation the sharing scheme
//! understands. Construction validates the two invariants the scheme relies
//! on: the raster is non-empty, and every sample is exactly black or white.
//! Anything that fails either check is rejected rather than clamped.

use crate::io::error::{Result, ShareError};
use crate::raster::block::{BLOCK_SIZE, SubPixelBlock};
use crate::raster::pixel::BinaryPixel;
use ndarray::{Array2, ArrayView2};
use std::fmt;

/// Width and height of a raster in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dimensions {
    /// Number of columns
    pub width: usize,
    /// Number of rows
    pub height: usize,
}

impl Dimensions {
    /// Create dimensions from width and height
    pub const fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    /// Dimensions after expanding every pixel into a sub-pixel block
    pub const fn expanded(self) -> Self {
        Self {
            width: self.width * BLOCK_SIZE,
            height: self.height * BLOCK_SIZE,
        }
    }

    /// Total number of pixels
    pub const fn area(self) -> usize {
        self.width * self.height
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Non-empty grid of black and white pixels in row-major order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryRaster {
    pixels: Array2<BinaryPixel>,
}

impl BinaryRaster {
    /// Wrap a pixel array indexed by `(row, col)`
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the array has zero rows or zero columns
    pub fn new(pixels: Array2<BinaryPixel>) -> Result<Self> {
        let (rows, cols) = pixels.dim();
        if rows == 0 || cols == 0 {
            return Err(ShareError::InvalidInput {
                reason: format!("raster must not be empty (got {cols}x{rows})"),
            });
        }
        Ok(Self { pixels })
    }

    // Callers guarantee both dimensions are non-zero
    pub(crate) const fn from_array_unchecked(pixels: Array2<BinaryPixel>) -> Self {
        Self { pixels }
    }

    /// Raster of the given size with every pixel set to `pixel`
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if either dimension is zero
    pub fn filled(width: usize, height: usize, pixel: BinaryPixel) -> Result<Self> {
        Self::new(Array2::from_elem((height, width), pixel))
    }

    /// Raster whose pixels are produced by `f(row, col)`
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if either dimension is zero
    pub fn from_fn<F>(width: usize, height: usize, mut f: F) -> Result<Self>
    where
        F: FnMut(usize, usize) -> BinaryPixel,
    {
        Self::new(Array2::from_shape_fn((height, width), |(row, col)| {
            f(row, col)
        }))
    }

    /// Build a raster from rows of pixels
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if there are no rows, a row is empty, or the
    /// rows have different lengths
    pub fn from_rows<R: AsRef<[BinaryPixel]>>(rows: &[R]) -> Result<Self> {
        let width = rows.first().map_or(0, |row| row.as_ref().len());
        if let Some(index) = rows.iter().position(|row| row.as_ref().len() != width) {
            return Err(ShareError::InvalidInput {
                reason: format!("row {index} length differs from first row length {width}"),
            });
        }
        let flat: Vec<BinaryPixel> = rows
            .iter()
            .flat_map(|row| row.as_ref().iter().copied())
            .collect();
        let pixels =
            Array2::from_shape_vec((rows.len(), width), flat).map_err(|e| ShareError::InvalidInput {
                reason: e.to_string(),
            })?;
        Self::new(pixels)
    }

    /// Validate an array of 8-bit luma levels, indexed by `(row, col)`
    ///
    /// Only the levels 0 (black) and 255 (white) are accepted. Binarizing
    /// grey levels is the caller's job.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the array is empty or contains any other level
    pub fn from_luma(levels: ArrayView2<'_, u8>) -> Result<Self> {
        if let Some(((row, col), level)) = levels
            .indexed_iter()
            .find(|(_, level)| BinaryPixel::from_luma(**level).is_none())
        {
            return Err(ShareError::InvalidInput {
                reason: format!(
                    "pixel at row {row}, column {col} has level {level}, expected 0 or 255"
                ),
            });
        }
        Self::new(levels.map(|&level| {
            BinaryPixel::from_luma(level).unwrap_or_default()
        }))
    }

    /// Encode as 8-bit luma levels
    pub fn to_luma(&self) -> Array2<u8> {
        self.pixels.map(|pixel| pixel.to_luma())
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.pixels.ncols()
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.pixels.nrows()
    }

    /// Width and height together
    pub fn dimensions(&self) -> Dimensions {
        Dimensions::new(self.width(), self.height())
    }

    /// Pixel at `(row, col)`
    pub fn get(&self, row: usize, col: usize) -> Option<BinaryPixel> {
        self.pixels.get((row, col)).copied()
    }

    /// Borrow the underlying array
    pub fn pixels(&self) -> ArrayView2<'_, BinaryPixel> {
        self.pixels.view()
    }

    /// Consume the raster, returning the underlying array
    pub fn into_pixels(self) -> Array2<BinaryPixel> {
        self.pixels
    }

    /// Number of black pixels
    pub fn black_count(&self) -> usize {
        self.pixels.iter().filter(|pixel| pixel.is_black()).count()
    }

    /// The 2x2 block whose top-left corner is `(2 * row, 2 * col)`
    ///
    /// On a share this is the block encoding source pixel `(row, col)`.
    /// Returns `None` when the block would extend past the raster edge.
    pub fn block(&self, row: usize, col: usize) -> Option<SubPixelBlock> {
        let top = row * BLOCK_SIZE;
        let left = col * BLOCK_SIZE;
        Some(SubPixelBlock::new([
            [self.get(top, left)?, self.get(top, left + 1)?],
            [self.get(top + 1, left)?, self.get(top + 1, left + 1)?],
        ]))
    }

    /// Iterate over every complete 2x2 block as `((row, col), block)`
    pub fn blocks(&self) -> impl Iterator<Item = ((usize, usize), SubPixelBlock)> + '_ {
        let block_rows = self.height() / BLOCK_SIZE;
        let block_cols = self.width() / BLOCK_SIZE;
        (0..block_rows).flat_map(move |row| {
            (0..block_cols)
                .filter_map(move |col| self.block(row, col).map(|block| ((row, col), block)))
        })
    }
}

impl fmt::Display for BinaryRaster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.pixels.rows() {
            for pixel in row {
                write!(f, "{pixel}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
