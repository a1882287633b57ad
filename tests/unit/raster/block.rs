//! Tests for sub-pixel blocks and the canonical pattern table

#[cfg(test)]
mod tests {
    use visualshare::raster::BinaryPixel::{Black, White};
    use visualshare::raster::block::{
        CANONICAL_PATTERNS, PATTERN_0, PATTERN_1, SubPixelBlock,
    };

    // Tests the exact layout of both canonical patterns
    // Verified by transposing PATTERN_0
    #[test]
    fn test_canonical_pattern_layout() {
        assert_eq!(PATTERN_0.rows(), &[[White, Black], [Black, White]]);
        assert_eq!(PATTERN_1.rows(), &[[Black, White], [White, Black]]);
        assert_eq!(CANONICAL_PATTERNS, [PATTERN_0, PATTERN_1]);
    }

    // Tests that the random bit indexes the pattern table
    // Verified by inverting the bit in canonical
    #[test]
    fn test_canonical_selection_by_bit() {
        assert_eq!(SubPixelBlock::canonical(false), PATTERN_0);
        assert_eq!(SubPixelBlock::canonical(true), PATTERN_1);
    }

    // Tests that the patterns are complements of each other
    // Verified by making complement a no-op
    #[test]
    fn test_patterns_are_complementary() {
        assert_eq!(!PATTERN_0, PATTERN_1);
        assert_eq!(!PATTERN_1, PATTERN_0);
    }

    // Tests that both patterns are balanced and canonical
    // Verified by changing one sub-pixel of PATTERN_1
    #[test]
    fn test_patterns_are_balanced() {
        for pattern in CANONICAL_PATTERNS {
            assert_eq!(pattern.black_count(), 2);
            assert!(pattern.is_balanced());
            assert!(pattern.is_canonical());
            assert!((pattern.density() - 0.5).abs() < f64::EPSILON);
        }
        assert!(!SubPixelBlock::uniform(Black).is_balanced());
        assert!(!SubPixelBlock::uniform(White).is_canonical());
    }

    // Tests block overlay for identical and complementary patterns
    // Verified by overlaying with OR semantics
    #[test]
    fn test_overlay_of_patterns() {
        assert_eq!(PATTERN_0 & PATTERN_0, PATTERN_0);
        assert_eq!(PATTERN_1 & PATTERN_1, PATTERN_1);
        assert_eq!(PATTERN_0 & PATTERN_1, SubPixelBlock::uniform(Black));
        assert_eq!(PATTERN_1 & PATTERN_0, SubPixelBlock::uniform(Black));
    }

    // Tests bounds checking of sub-pixel access
    #[test]
    fn test_get_out_of_bounds() {
        assert_eq!(PATTERN_0.get(0, 1), Some(Black));
        assert_eq!(PATTERN_0.get(1, 1), Some(White));
        assert_eq!(PATTERN_0.get(2, 0), None);
        assert_eq!(PATTERN_0.get(0, 2), None);
    }
}
