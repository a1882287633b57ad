//! Share generation: expanding each source pixel into a pair of 2x2 blocks
//!
//! For every source pixel one random bit picks a canonical pattern `P`.
//! A white pixel puts `P` on both shares, so stacking them leaves `P`
//! (half black). A black pixel puts `P` on the first share and `!P` on the
//! second, so stacking them is fully black. Either share on its own is a
//! uniformly random canonical pattern for every pixel, whatever its color.

use crate::io::error::Result;
use crate::raster::block::{BLOCK_SIZE, SubPixelBlock};
use crate::raster::{BinaryPixel, BinaryRaster};
use crate::scheme::entropy::BitSource;
use crate::scheme::share::SharePair;
use ndarray::{Array2, ArrayView2, Zip};

#[cfg(feature = "parallel")]
use rand::{Rng, SeedableRng, rngs::StdRng};
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// The blocks written to the first and second share for one source pixel
pub fn encode_pixel(pixel: BinaryPixel, bit: bool) -> (SubPixelBlock, SubPixelBlock) {
    let pattern = SubPixelBlock::canonical(bit);
    match pixel {
        BinaryPixel::White => (pattern, pattern),
        BinaryPixel::Black => (pattern, !pattern),
    }
}

/// Split a raster into two shares
///
/// Draws exactly one bit per source pixel, in row-major order, so the
/// output is fully determined by the raster and the bit sequence.
pub fn generate_shares<B: BitSource + ?Sized>(source: &BinaryRaster, bits: &mut B) -> SharePair {
    let choices =
        Array2::from_shape_simple_fn((source.height(), source.width()), || bits.next_bit());
    expand(source, choices.view())
}

/// Validate raw luma levels and split them into two shares
///
/// # Errors
///
/// Returns `InvalidInput` if the levels are empty or contain anything
/// other than 0 and 255
pub fn split_luma<B: BitSource + ?Sized>(
    levels: ArrayView2<'_, u8>,
    bits: &mut B,
) -> Result<SharePair> {
    let source = BinaryRaster::from_luma(levels)?;
    Ok(generate_shares(&source, bits))
}

/// Split a raster into two shares using one worker-local generator per row
///
/// The master generator is asked for one seed per source row, in order, and
/// each row draws its bits from a `StdRng` seeded with that value. Output is
/// reproducible for a given master state independent of thread scheduling,
/// but it is not the same as [`generate_shares`] with the same generator.
#[cfg(feature = "parallel")]
pub fn generate_shares_parallel<R: Rng>(source: &BinaryRaster, master: &mut R) -> SharePair {
    let seeds: Vec<u64> = (0..source.height()).map(|_| master.random()).collect();
    let width = source.width();
    let rows: Vec<Vec<bool>> = seeds
        .par_iter()
        .map(|&seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            (0..width).map(|_| rng.random::<bool>()).collect()
        })
        .collect();
    let choices = Array2::from_shape_fn((source.height(), width), |(row, col)| {
        rows.get(row)
            .and_then(|bits| bits.get(col))
            .copied()
            .unwrap_or(false)
    });
    expand(source, choices.view())
}

// Writes both shares from per-pixel pattern choices; no state crosses pixels
fn expand(source: &BinaryRaster, choices: ArrayView2<'_, bool>) -> SharePair {
    let expanded = source.dimensions().expanded();
    let shape = (expanded.height, expanded.width);
    let mut first = Array2::from_elem(shape, BinaryPixel::White);
    let mut second = Array2::from_elem(shape, BinaryPixel::White);

    let write = |(row, col): (usize, usize), a: &mut BinaryPixel, b: &mut BinaryPixel| {
        let (src_row, src_col) = (row / BLOCK_SIZE, col / BLOCK_SIZE);
        let pixel = source.get(src_row, src_col).unwrap_or_default();
        let bit = choices.get((src_row, src_col)).copied().unwrap_or(false);
        let (block_a, block_b) = encode_pixel(pixel, bit);
        let (dr, dc) = (row % BLOCK_SIZE, col % BLOCK_SIZE);
        *a = block_a.get(dr, dc).unwrap_or_default();
        *b = block_b.get(dr, dc).unwrap_or_default();
    };

    #[cfg(feature = "parallel")]
    Zip::indexed(&mut first).and(&mut second).par_for_each(write);

    #[cfg(not(feature = "parallel"))]
    Zip::indexed(&mut first).and(&mut second).for_each(write);

    SharePair::from_arrays(first, second)
}
