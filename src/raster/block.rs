//! The 2x2 sub-pixel blocks every source pixel expands into

use crate::raster::pixel::BinaryPixel::{self, Black, White};
use std::ops::{BitAnd, Not};

/// Side length of a sub-pixel block
pub const BLOCK_SIZE: usize = 2;

/// A 2x2 arrangement of sub-pixels, addressed as `[row][col]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubPixelBlock([[BinaryPixel; BLOCK_SIZE]; BLOCK_SIZE]);

/// Canonical pattern selected by a zero bit
pub const PATTERN_0: SubPixelBlock = SubPixelBlock([[White, Black], [Black, White]]);

/// Canonical pattern selected by a one bit, the complement of [`PATTERN_0`]
pub const PATTERN_1: SubPixelBlock = SubPixelBlock([[Black, White], [White, Black]]);

/// Both canonical patterns, indexed by the random bit that selects them
pub const CANONICAL_PATTERNS: [SubPixelBlock; 2] = [PATTERN_0, PATTERN_1];

impl SubPixelBlock {
    /// Build a block from its rows
    pub const fn new(rows: [[BinaryPixel; BLOCK_SIZE]; BLOCK_SIZE]) -> Self {
        Self(rows)
    }

    /// Block where every sub-pixel has the same value
    pub const fn uniform(pixel: BinaryPixel) -> Self {
        Self([[pixel; BLOCK_SIZE]; BLOCK_SIZE])
    }

    /// Canonical pattern for a random bit
    pub const fn canonical(bit: bool) -> Self {
        if bit { PATTERN_1 } else { PATTERN_0 }
    }

    /// Sub-pixel at the given offset inside the block
    pub fn get(&self, row: usize, col: usize) -> Option<BinaryPixel> {
        self.0.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Rows of the block
    pub const fn rows(&self) -> &[[BinaryPixel; BLOCK_SIZE]; BLOCK_SIZE] {
        &self.0
    }

    /// Sub-pixel-wise complement
    pub fn complement(self) -> Self {
        Self(self.0.map(|row| row.map(BinaryPixel::complement)))
    }

    /// Sub-pixel-wise overlay of two blocks
    pub fn overlay(self, other: Self) -> Self {
        let mut rows = self.0;
        for (row, other_row) in rows.iter_mut().zip(other.0) {
            for (pixel, other_pixel) in row.iter_mut().zip(other_row) {
                *pixel = *pixel & other_pixel;
            }
        }
        Self(rows)
    }

    /// Number of black sub-pixels
    pub fn black_count(&self) -> usize {
        self.0.iter().flatten().filter(|pixel| pixel.is_black()).count()
    }

    /// Fraction of sub-pixels that are black
    pub fn density(&self) -> f64 {
        self.black_count() as f64 / (BLOCK_SIZE * BLOCK_SIZE) as f64
    }

    /// Exactly half the sub-pixels are black
    ///
    /// Every block of a single share has this property whatever the source
    /// pixel was, which is what keeps one share on its own uninformative.
    pub fn is_balanced(&self) -> bool {
        self.black_count() * 2 == BLOCK_SIZE * BLOCK_SIZE
    }

    /// Whether the block is one of the two canonical patterns
    pub fn is_canonical(&self) -> bool {
        CANONICAL_PATTERNS.contains(self)
    }
}

impl Not for SubPixelBlock {
    type Output = Self;

    fn not(self) -> Self::Output {
        self.complement()
    }
}

impl BitAnd for SubPixelBlock {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        self.overlay(rhs)
    }
}
