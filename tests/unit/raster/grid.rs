//! Tests for raster construction, validation and block access

#[cfg(test)]
mod tests {
    use ndarray::{Array2, array};
    use visualshare::ShareError;
    use visualshare::raster::BinaryPixel::{Black, White};
    use visualshare::raster::block::{PATTERN_0, PATTERN_1};
    use visualshare::raster::{BinaryRaster, Dimensions};

    // Tests that rasters with a zero dimension are rejected
    // Verified by removing the emptiness check in BinaryRaster::new
    #[test]
    fn test_empty_raster_is_invalid_input() {
        for (width, height) in [(0, 3), (3, 0), (0, 0)] {
            let result = BinaryRaster::filled(width, height, White);
            assert!(
                matches!(result, Err(ShareError::InvalidInput { .. })),
                "{width}x{height} should be rejected"
            );
        }
    }

    // Tests that grey levels are rejected rather than clamped
    // Verified by clamping levels with a threshold instead
    #[test]
    fn test_from_luma_rejects_grey_levels() {
        let levels = array![[0u8, 255], [255, 128]];
        let err = BinaryRaster::from_luma(levels.view()).unwrap_err();

        match err {
            ShareError::InvalidInput { reason } => {
                assert!(reason.contains("row 1"), "{reason}");
                assert!(reason.contains("128"), "{reason}");
            }
            other => unreachable!("Expected InvalidInput, got {other:?}"),
        }
    }

    // Tests luma validation and encoding agree
    // Verified by swapping rows and columns in from_luma
    #[test]
    fn test_from_luma_round_trip() {
        let levels = array![[0u8, 255, 0], [255, 255, 0]];
        let raster = BinaryRaster::from_luma(levels.view()).unwrap();

        assert_eq!(raster.dimensions(), Dimensions::new(3, 2));
        assert_eq!(raster.get(0, 1), Some(White));
        assert_eq!(raster.get(1, 2), Some(Black));
        assert_eq!(raster.to_luma(), levels);
    }

    // Tests width is columns and height is rows
    // Verified by swapping ncols and nrows
    #[test]
    fn test_width_and_height_orientation() {
        let raster = BinaryRaster::filled(5, 2, Black).unwrap();

        assert_eq!(raster.width(), 5);
        assert_eq!(raster.height(), 2);
        assert_eq!(raster.dimensions().expanded(), Dimensions::new(10, 4));
        assert_eq!(raster.dimensions().area(), 10);
        assert_eq!(raster.black_count(), 10);
    }

    // Tests ragged rows are rejected
    // Verified by truncating rows to the first row length
    #[test]
    fn test_from_rows_rejects_ragged_input() {
        let rows: Vec<Vec<_>> = vec![vec![Black, White], vec![White]];
        assert!(matches!(
            BinaryRaster::from_rows(&rows),
            Err(ShareError::InvalidInput { .. })
        ));

        let none: Vec<Vec<visualshare::BinaryPixel>> = Vec::new();
        assert!(BinaryRaster::from_rows(&none).is_err());
    }

    // Tests block extraction at block coordinates
    // Verified by reading blocks at pixel coordinates instead
    #[test]
    fn test_block_access() {
        let raster = BinaryRaster::from_rows(&[
            [White, Black, Black, White],
            [Black, White, White, Black],
        ])
        .unwrap();

        assert_eq!(raster.block(0, 0), Some(PATTERN_0));
        assert_eq!(raster.block(0, 1), Some(PATTERN_1));
        assert_eq!(raster.block(1, 0), None);

        let blocks: Vec<_> = raster.blocks().collect();
        assert_eq!(blocks, vec![((0, 0), PATTERN_0), ((0, 1), PATTERN_1)]);
    }

    // Tests partial blocks at odd edges are skipped
    #[test]
    fn test_blocks_skip_partial_edges() {
        let raster = BinaryRaster::filled(3, 3, White).unwrap();
        assert_eq!(raster.blocks().count(), 1);
    }

    // Tests the text dump used in assertion messages
    #[test]
    fn test_display() {
        let raster = BinaryRaster::new(Array2::from_elem((2, 2), Black)).unwrap();
        assert_eq!(raster.to_string(), "BB\nBB\n");
        assert_eq!(Dimensions::new(4, 3).to_string(), "4x3");
    }

    // Tests the underlying array comes back unchanged and row-major
    // Verified by transposing in into_pixels
    #[test]
    fn test_into_pixels() {
        let raster = BinaryRaster::from_rows(&[[Black, White, White], [White, White, Black]]).unwrap();
        let view = raster.pixels().to_owned();

        let pixels: Array2<_> = raster.into_pixels();
        assert_eq!(pixels.dim(), (2, 3));
        assert_eq!(pixels, view);
        assert_eq!(pixels.get((1, 2)), Some(&Black));
    }
}
