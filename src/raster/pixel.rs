//! Two-level pixel values and their overlay algebra

use std::fmt;
use std::ops::{BitAnd, Not};

/// Luma level used to encode a black pixel
pub const BLACK_LUMA: u8 = 0;
/// Luma level used to encode a white pixel
pub const WHITE_LUMA: u8 = 255;

/// A strictly two-valued sample
///
/// Overlaying transparencies behaves like a logical AND in which black is
/// absorbing: any sub-pixel that is black on either sheet stays black.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum BinaryPixel {
    /// Opaque sub-pixel
    Black,
    /// Transparent sub-pixel
    #[default]
    White,
}

impl BinaryPixel {
    /// Interpret an 8-bit luma level, accepting only the two encoded levels
    pub const fn from_luma(level: u8) -> Option<Self> {
        match level {
            BLACK_LUMA => Some(Self::Black),
            WHITE_LUMA => Some(Self::White),
            _ => None,
        }
    }

    /// Encode as an 8-bit luma level
    pub const fn to_luma(self) -> u8 {
        match self {
            Self::Black => BLACK_LUMA,
            Self::White => WHITE_LUMA,
        }
    }

    /// Swap black and white
    pub const fn complement(self) -> Self {
        match self {
            Self::Black => Self::White,
            Self::White => Self::Black,
        }
    }

    /// Combine with another pixel as two stacked transparencies
    pub const fn overlay(self, other: Self) -> Self {
        match (self, other) {
            (Self::White, Self::White) => Self::White,
            _ => Self::Black,
        }
    }

    /// Whether the pixel is black
    pub const fn is_black(self) -> bool {
        matches!(self, Self::Black)
    }
}

impl Not for BinaryPixel {
    type Output = Self;

    fn not(self) -> Self::Output {
        self.complement()
    }
}

impl BitAnd for BinaryPixel {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        self.overlay(rhs)
    }
}

impl fmt::Display for BinaryPixel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Black => f.write_str("B"),
            Self::White => f.write_str("W"),
        }
    }
}
