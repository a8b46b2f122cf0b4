//! Tests for generation constants and defaults

#[cfg(test)]
mod tests {
    use std::time::{Duration, UNIX_EPOCH};
    use wallweave::io::configuration::{
        COLOR_NOISE_THRESHOLD, CONTENT_TYPE, DEFAULT_HEIGHT, DEFAULT_WIDTH, DETAIL_MAX_FRACTION,
        DETAIL_MIN_FRACTION, IMAGE_SCALE_CAP, OFFSET_THRESHOLD, OVERSCAN, PINNED_SEED_EPOCH_SECS,
        RADIAL_HUE_THRESHOLD, STDOUT_PATH, VIGNETTE_THRESHOLD, WAVE_THRESHOLD, ZOOM_THRESHOLD,
    };

    // Tests the default canvas size
    // Verified by changing the default height
    #[test]
    fn test_default_canvas() {
        assert_eq!(DEFAULT_WIDTH, 1024);
        assert_eq!(DEFAULT_HEIGHT, 786);
    }

    // Tests gate thresholds lie strictly inside the unit interval
    // Verified by setting a threshold to one
    #[test]
    fn test_thresholds_in_unit_interval() {
        for threshold in [
            OFFSET_THRESHOLD,
            WAVE_THRESHOLD,
            ZOOM_THRESHOLD,
            COLOR_NOISE_THRESHOLD,
            VIGNETTE_THRESHOLD,
            RADIAL_HUE_THRESHOLD,
        ] {
            assert!(threshold > 0.0 && threshold < 1.0);
        }
    }

    // Tests generation scale constants
    // Verified by swapping the detail fractions
    #[test]
    fn test_scale_constants() {
        assert!(DETAIL_MIN_FRACTION < DETAIL_MAX_FRACTION);
        assert!((IMAGE_SCALE_CAP - 400.0).abs() < f64::EPSILON);
        assert!((OVERSCAN - 0.5).abs() < f64::EPSILON);
    }

    // Tests the pinned-seed epoch is midnight on 2000-01-01 UTC
    // Verified by using the local-time offset
    #[test]
    fn test_pinned_seed_epoch() {
        let days = PINNED_SEED_EPOCH_SECS / 86_400;
        assert_eq!(PINNED_SEED_EPOCH_SECS % 86_400, 0);
        assert_eq!(days, 10_957);
        assert!(UNIX_EPOCH + Duration::from_secs(PINNED_SEED_EPOCH_SECS) > UNIX_EPOCH);
    }

    // Tests output constants
    // Verified by changing the content type
    #[test]
    fn test_output_constants() {
        assert_eq!(CONTENT_TYPE, "image/svg+xml");
        assert_eq!(STDOUT_PATH, "-");
    }
}
