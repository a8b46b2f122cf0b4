//! Tests for keyed checksum hashing and lattice values

#[cfg(test)]
mod tests {
    use wallweave::math::hash::{MAX_VALUE, adler32, crc32, lattice_value, normalize, seed_state};

    // Tests CRC-32 matches the zlib check value
    // Verified by seeding the hasher with a non-zero initial value
    #[test]
    fn test_crc32_check_value() {
        assert_eq!(crc32(b"123456789", 0), 0xCBF4_3926);
    }

    // Tests CRC-32 continues from its initial value like zlib
    // Verified by ignoring the initial value
    #[test]
    fn test_crc32_continuation() {
        let first = crc32(b"hello ", 0);
        assert_eq!(crc32(b"world", first), crc32(b"hello world", 0));
    }

    // Tests Adler-32 matches the reference value
    // Verified by starting from zero instead of one
    #[test]
    fn test_adler32_reference_value() {
        assert_eq!(seed_state(b"Wikipedia"), 0x11E6_0398);
    }

    // Tests Adler-32 from the standard start equals the seed state
    // Verified by swapping the two running sums
    #[test]
    fn test_adler32_initial_one_matches_seed_state() {
        assert_eq!(adler32(b"test", 1), seed_state(b"test"));
        assert_ne!(adler32(b"test", 7), seed_state(b"test"));
    }

    // Tests normalization discards the top two bits
    // Verified by removing the mask
    #[test]
    fn test_normalize_masks_top_bits() {
        assert!(normalize(0).abs() < f64::EPSILON);
        assert!((normalize(MAX_VALUE) - 1.0).abs() < f64::EPSILON);
        assert!(normalize(0xC000_0000).abs() < f64::EPSILON);
        assert!((normalize(u32::MAX) - 1.0).abs() < f64::EPSILON);
    }

    // Tests lattice values are deterministic, bounded and vary by cell
    // Verified by hashing only the x coordinate
    #[test]
    fn test_lattice_value_properties() {
        assert!((lattice_value(42, 3, -7) - lattice_value(42, 3, -7)).abs() < f64::EPSILON);

        let values: Vec<f64> = (0..10).map(|y| lattice_value(42, 0, y)).collect();
        assert!(values.iter().all(|value| (0.0..=1.0).contains(value)));
        assert!(values.windows(2).any(|pair| pair[0] != pair[1]));

        assert!(
            (0..10).any(|x| (lattice_value(1, x, 0) - lattice_value(2, x, 0)).abs() > f64::EPSILON)
        );
    }
}
