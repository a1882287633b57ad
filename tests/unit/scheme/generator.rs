//! Tests for pixel encoding and share generation

#[cfg(test)]
mod tests {
    use ndarray::array;
    use visualshare::ShareError;
    use visualshare::raster::BinaryPixel::{Black, White};
    use visualshare::raster::block::{PATTERN_0, PATTERN_1};
    use visualshare::raster::{BinaryRaster, Dimensions, SubPixelBlock};
    use visualshare::scheme::entropy::FixedBits;
    use visualshare::scheme::generator::{encode_pixel, generate_shares, split_luma};

    // Tests white pixels get identical patterns on both shares
    // Verified by complementing the second block for white pixels
    #[test]
    fn test_encode_white_pixel() {
        assert_eq!(encode_pixel(White, false), (PATTERN_0, PATTERN_0));
        assert_eq!(encode_pixel(White, true), (PATTERN_1, PATTERN_1));
    }

    // Tests black pixels get complementary patterns
    // Verified by writing the same pattern for black pixels
    #[test]
    fn test_encode_black_pixel() {
        assert_eq!(encode_pixel(Black, false), (PATTERN_0, PATTERN_1));
        assert_eq!(encode_pixel(Black, true), (PATTERN_1, PATTERN_0));
    }

    // Tests share dimensions are twice the source
    // Verified by allocating shares at source size
    #[test]
    fn test_share_dimensions() {
        let source = BinaryRaster::filled(3, 5, White).unwrap();
        let pair = generate_shares(&source, &mut FixedBits::constant(false));

        assert_eq!(pair.dimensions(), Dimensions::new(6, 10));
        assert_eq!(pair.second().dimensions(), Dimensions::new(6, 10));
    }

    // Tests bits are consumed one per pixel in row-major order
    // Verified by drawing bits column-major
    #[test]
    fn test_bits_assigned_row_major() {
        let source = BinaryRaster::filled(2, 2, White).unwrap();
        let mut bits = FixedBits::from_bools(&[false, true, true, false]);
        let pair = generate_shares(&source, &mut bits);

        assert_eq!(bits.consumed(), 4);
        assert_eq!(pair.first().block(0, 0), Some(PATTERN_0));
        assert_eq!(pair.first().block(0, 1), Some(PATTERN_1));
        assert_eq!(pair.first().block(1, 0), Some(PATTERN_1));
        assert_eq!(pair.first().block(1, 1), Some(PATTERN_0));
    }

    // Tests a mixed raster block by block against encode_pixel
    // Verified by reading the source pixel at share coordinates
    #[test]
    fn test_every_block_matches_encoding() {
        let source = BinaryRaster::from_rows(&[[Black, White, Black], [White, White, Black]]).unwrap();
        let sequence = [true, false, false, true, true, false];
        let pair = generate_shares(&source, &mut FixedBits::from_bools(&sequence));

        for row in 0..2 {
            for col in 0..3 {
                let pixel = source.get(row, col).unwrap();
                let bit = sequence[row * 3 + col];
                assert_eq!(
                    pair.blocks(row, col),
                    Some(encode_pixel(pixel, bit)),
                    "block ({row}, {col})"
                );
            }
        }
    }

    // Tests validation of raw luma input
    // Verified by thresholding grey levels in split_luma
    #[test]
    fn test_split_luma_validates() {
        let good = array![[0u8, 255]];
        let pair = split_luma(good.view(), &mut FixedBits::constant(true)).unwrap();
        assert_eq!(pair.first().block(0, 0), Some(PATTERN_1));
        assert_eq!(pair.second().block(0, 0), Some(PATTERN_0));
        assert_eq!(pair.second().block(0, 1), Some(PATTERN_1));

        let grey = array![[0u8, 64]];
        assert!(matches!(
            split_luma(grey.view(), &mut FixedBits::constant(true)),
            Err(ShareError::InvalidInput { .. })
        ));

        let empty = ndarray::Array2::<u8>::zeros((0, 4));
        assert!(matches!(
            split_luma(empty.view(), &mut FixedBits::constant(true)),
            Err(ShareError::InvalidInput { .. })
        ));
    }

    // Tests the reconstruction of an all-black source is fully black
    #[test]
    fn test_black_source_reconstructs_black() {
        let source = BinaryRaster::filled(4, 4, Black).unwrap();
        let pair = generate_shares(&source, &mut FixedBits::from_bools(&[true, false, true]));

        for ((_, _), block) in pair.reconstruct().blocks() {
            assert_eq!(block, SubPixelBlock::uniform(Black));
        }
    }

    #[cfg(feature = "parallel")]
    mod parallel {
        use rand::SeedableRng;
        use rand::rngs::StdRng;
        use visualshare::raster::BinaryRaster;
        use visualshare::raster::BinaryPixel::{Black, White};
        use visualshare::scheme::generator::generate_shares_parallel;

        // Tests per-row generators are reproducible from the master seed
        // Verified by seeding rows from thread-local entropy
        #[test]
        fn test_parallel_generation_is_reproducible() {
            let source = BinaryRaster::from_fn(37, 23, |r, c| {
                if (r * c) % 3 == 0 { Black } else { White }
            })
            .unwrap();

            let first = generate_shares_parallel(&source, &mut StdRng::seed_from_u64(9));
            let again = generate_shares_parallel(&source, &mut StdRng::seed_from_u64(9));

            assert_eq!(first, again);
        }

        // Tests parallel output keeps the reconstruction laws
        // Verified by skipping the complement for black pixels
        #[test]
        fn test_parallel_generation_reconstructs() {
            let source = BinaryRaster::from_fn(16, 16, |r, c| {
                if (r + c) % 2 == 0 { Black } else { White }
            })
            .unwrap();
            let pair = generate_shares_parallel(&source, &mut StdRng::seed_from_u64(1));
            let reconstructed = pair.reconstruct();

            for ((row, col), block) in reconstructed.blocks() {
                let expected = if source.get(row, col) == Some(Black) { 4 } else { 2 };
                assert_eq!(block.black_count(), expected);
            }
        }
    }
}
