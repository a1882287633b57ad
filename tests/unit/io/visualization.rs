//! Tests for the overlay animation

#[cfg(test)]
mod tests {
    use tempfile::tempdir;
    use visualshare::ShareError;
    use visualshare::io::sample::checkerboard;
    use visualshare::io::visualization::OverlayAnimation;
    use visualshare::raster::{BinaryPixel, BinaryRaster};
    use visualshare::scheme::entropy::FixedBits;
    use visualshare::scheme::generator::generate_shares;
    use visualshare::scheme::share::SharePair;

    fn sample_pair() -> SharePair {
        let source = checkerboard(3, 2).unwrap();
        generate_shares(&source, &mut FixedBits::from_bools(&[true, false, false]))
    }

    // Tests the first share slides from fully off to aligned
    // Verified by counting offsets upward
    #[test]
    fn test_offsets() {
        let pair = sample_pair();
        let animation = OverlayAnimation::from_pair(&pair, 3).unwrap();

        assert_eq!(animation.frame_count(), 4);
        assert_eq!(animation.offset(0), 6);
        assert_eq!(animation.offset(1), 4);
        assert_eq!(animation.offset(2), 2);
        assert_eq!(animation.offset(3), 0);
        assert_eq!(animation.offset(99), 0);
    }

    // Tests the aligned frame is the reconstruction
    // Verified by shifting the second share instead
    #[test]
    fn test_last_frame_is_reconstruction() {
        let pair = sample_pair();
        let animation = OverlayAnimation::from_pair(&pair, 4).unwrap();

        assert_eq!(animation.frame(4), pair.reconstruct());
    }

    // Tests only the second share shows before the sheets overlap
    #[test]
    fn test_first_frame_is_second_share() {
        let pair = sample_pair();
        let animation = OverlayAnimation::from_pair(&pair, 2).unwrap();

        assert_eq!(&animation.frame(0), pair.second());
    }

    // Tests a partial overlap combines only the covered columns
    #[test]
    fn test_partial_frame() {
        let first = BinaryRaster::filled(4, 1, BinaryPixel::Black).unwrap();
        let second = BinaryRaster::filled(4, 1, BinaryPixel::White).unwrap();
        let animation = OverlayAnimation::new(&first, &second, 2).unwrap();

        let frame = animation.frame(1);
        assert_eq!(frame.black_count(), 2);
        assert_eq!(frame.get(0, 1), Some(BinaryPixel::White));
        assert_eq!(frame.get(0, 2), Some(BinaryPixel::Black));
    }

    // Tests invalid animations are rejected
    #[test]
    fn test_rejects_invalid() {
        let pair = sample_pair();
        assert!(matches!(
            OverlayAnimation::from_pair(&pair, 0),
            Err(ShareError::InvalidParameter { .. })
        ));

        let other = BinaryRaster::filled(2, 2, BinaryPixel::White).unwrap();
        assert!(matches!(
            OverlayAnimation::new(pair.first(), &other, 3),
            Err(ShareError::DimensionMismatch { .. })
        ));
    }

    // Tests the exported GIF decodes at share size
    // Verified by rendering frames with swapped axes
    #[test]
    fn test_export_gif() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out").join("overlay.gif");
        let pair = sample_pair();

        OverlayAnimation::from_pair(&pair, 3)
            .unwrap()
            .export_gif(&path, 10)
            .unwrap();

        let decoded = image::open(&path).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (6, 4));
    }

    // Tests very long frame delays are accepted instead of overflowing the hold
    // Verified by multiplying the hold without saturation
    #[test]
    fn test_export_gif_long_delay() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("slow.gif");
        let pair = sample_pair();

        OverlayAnimation::from_pair(&pair, 2)
            .unwrap()
            .export_gif(&path, 200_000_000)
            .unwrap();
        OverlayAnimation::from_pair(&pair, 2)
            .unwrap()
            .export_gif(&path, u32::MAX)
            .unwrap();

        let decoded = image::open(&path).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (6, 4));
    }
}
