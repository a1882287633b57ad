//! Built-in test images for demos and fixtures

use crate::io::error::{Result, invalid_input};
use crate::raster::{BinaryPixel, BinaryRaster};

const GLYPH_WIDTH: usize = 3;
const GLYPH_HEIGHT: usize = 5;
// Blank column between glyphs
const GLYPH_SPACING: usize = 1;

// Rows top to bottom; bit 2 is the leftmost column
const FONT: [(char, [u8; GLYPH_HEIGHT]); 36] = [
    ('A', [0b010, 0b101, 0b111, 0b101, 0b101]),
    ('B', [0b110, 0b101, 0b110, 0b101, 0b110]),
    ('C', [0b011, 0b100, 0b100, 0b100, 0b011]),
    ('D', [0b110, 0b101, 0b101, 0b101, 0b110]),
    ('E', [0b111, 0b100, 0b110, 0b100, 0b111]),
    ('F', [0b111, 0b100, 0b110, 0b100, 0b100]),
    ('G', [0b011, 0b100, 0b101, 0b101, 0b011]),
    ('H', [0b101, 0b101, 0b111, 0b101, 0b101]),
    ('I', [0b111, 0b010, 0b010, 0b010, 0b111]),
    ('J', [0b001, 0b001, 0b001, 0b101, 0b010]),
    ('K', [0b101, 0b101, 0b110, 0b101, 0b101]),
    ('L', [0b100, 0b100, 0b100, 0b100, 0b111]),
    ('M', [0b101, 0b111, 0b111, 0b101, 0b101]),
    ('N', [0b110, 0b101, 0b101, 0b101, 0b101]),
    ('O', [0b010, 0b101, 0b101, 0b101, 0b010]),
    ('P', [0b110, 0b101, 0b110, 0b100, 0b100]),
    ('Q', [0b010, 0b101, 0b101, 0b110, 0b011]),
    ('R', [0b110, 0b101, 0b110, 0b101, 0b101]),
    ('S', [0b011, 0b100, 0b010, 0b001, 0b110]),
    ('T', [0b111, 0b010, 0b010, 0b010, 0b010]),
    ('U', [0b101, 0b101, 0b101, 0b101, 0b111]),
    ('V', [0b101, 0b101, 0b101, 0b101, 0b010]),
    ('W', [0b101, 0b101, 0b111, 0b111, 0b101]),
    ('X', [0b101, 0b101, 0b010, 0b101, 0b101]),
    ('Y', [0b101, 0b101, 0b010, 0b010, 0b010]),
    ('Z', [0b111, 0b001, 0b010, 0b100, 0b111]),
    ('0', [0b111, 0b101, 0b101, 0b101, 0b111]),
    ('1', [0b010, 0b110, 0b010, 0b010, 0b111]),
    ('2', [0b110, 0b001, 0b010, 0b100, 0b111]),
    ('3', [0b110, 0b001, 0b010, 0b001, 0b110]),
    ('4', [0b101, 0b101, 0b111, 0b001, 0b001]),
    ('5', [0b111, 0b100, 0b110, 0b001, 0b110]),
    ('6', [0b011, 0b100, 0b110, 0b101, 0b010]),
    ('7', [0b111, 0b001, 0b010, 0b010, 0b010]),
    ('8', [0b010, 0b101, 0b010, 0b101, 0b010]),
    ('9', [0b010, 0b101, 0b011, 0b001, 0b110]),
];

fn glyph(c: char) -> [u8; GLYPH_HEIGHT] {
    let upper = c.to_ascii_uppercase();
    FONT.iter()
        .find(|(key, _)| *key == upper)
        .map_or([0; GLYPH_HEIGHT], |(_, rows)| *rows)
}

fn glyph_is_set(c: char, row: usize, col: usize) -> bool {
    glyph(c)
        .get(row)
        .is_some_and(|bits| col < GLYPH_WIDTH && (bits >> (GLYPH_WIDTH - 1 - col)) & 1 == 1)
}

/// Width of `text` in font cells before scaling
pub fn text_cells(text: &str) -> usize {
    let count = text.chars().count();
    (count * (GLYPH_WIDTH + GLYPH_SPACING)).saturating_sub(GLYPH_SPACING)
}

/// Black text centred on a white canvas
///
/// Glyphs come from a built-in 3x5 font covering `A`-`Z` and `0`-`9`
/// (lowercase is drawn as uppercase, anything else is blank). The text is
/// scaled by the largest whole factor that fits; if even factor 1 does not
/// fit, the overflow is clipped.
///
/// # Errors
///
/// Returns `InvalidInput` if either dimension is zero
pub fn banner(text: &str, width: usize, height: usize) -> Result<BinaryRaster> {
    if width == 0 || height == 0 {
        return Err(invalid_input(&format!(
            "banner must not be empty (got {width}x{height})"
        )));
    }

    let chars: Vec<char> = text.chars().collect();
    let cells = text_cells(text);
    let scale = if cells == 0 {
        1
    } else {
        (width / cells).min(height / GLYPH_HEIGHT).max(1)
    };
    let left = width.saturating_sub(cells * scale) / 2;
    let top = height.saturating_sub(GLYPH_HEIGHT * scale) / 2;

    BinaryRaster::from_fn(width, height, |row, col| {
        let (Some(cell_row), Some(cell_col)) = (
            row.checked_sub(top).map(|r| r / scale),
            col.checked_sub(left).map(|c| c / scale),
        ) else {
            return BinaryPixel::White;
        };
        let advance = GLYPH_WIDTH + GLYPH_SPACING;
        let inked = chars
            .get(cell_col / advance)
            .is_some_and(|&c| glyph_is_set(c, cell_row, cell_col % advance));
        if inked {
            BinaryPixel::Black
        } else {
            BinaryPixel::White
        }
    })
}

/// Alternating black and white pixels, black at the top-left corner
///
/// # Errors
///
/// Returns `InvalidInput` if either dimension is zero
pub fn checkerboard(width: usize, height: usize) -> Result<BinaryRaster> {
    BinaryRaster::from_fn(width, height, |row, col| {
        if (row + col) % 2 == 0 {
            BinaryPixel::Black
        } else {
            BinaryPixel::White
        }
    })
}
