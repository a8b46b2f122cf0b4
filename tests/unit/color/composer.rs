//! Tests for folding a scheme through its filters

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use wallweave::color::{ColorComposer, ColorFilter, ColorScheme, ColorSource, Hsv, SchemeFamily};
    use wallweave::parameters::{DecisionLog, ParameterSpace};
    use wallweave::spatial::canvas::Canvas;
    use wallweave::spatial::point::Point;

    fn scheme() -> ColorScheme {
        ColorScheme::new(SchemeFamily::Monochrome, Hsv::new(0.0, 1.0, 1.0))
    }

    // Tests an unfiltered composer returns the scheme color
    // Verified by applying a default filter
    #[test]
    fn test_unfiltered() {
        let composer = ColorComposer::new(scheme(), Vec::new());
        let point = Point::new(10.0, 10.0);
        assert_eq!(composer.color_at(point, 0), scheme().color_at(point, 0));
        assert_eq!(composer.hex_at(point, 0), "ff0000");
    }

    // Tests filters are folded in order
    // Verified by applying only the last filter
    #[test]
    fn test_filters_fold_in_order() {
        let canvas = Canvas::new(300, 400).expect("valid canvas");
        let composer = ColorComposer::new(
            scheme(),
            vec![
                ColorFilter::Vignette {
                    canvas,
                    edge_amount: 0.5,
                },
                ColorFilter::RadialHue {
                    canvas,
                    edge_amount: 0.5,
                },
            ],
        );
        let color = composer.color_at(Point::ZERO, 0);
        assert!((color.value - 0.5).abs() < 1e-12);
        assert!((color.hue - 0.5).abs() < 1e-12);
        assert_eq!(composer.hex_at(Point::ZERO, 0), "008080");
    }

    // Tests drawing builds the scheme and the gated filters
    // Verified by skipping the filter gates
    #[test]
    fn test_draw() {
        let canvas = Canvas::new(64, 64).expect("valid canvas");
        let overrides = HashMap::from([
            ("color_scheme".to_string(), "Complement".to_string()),
            ("have_color_noise".to_string(), "0".to_string()),
            ("have_vignette".to_string(), "1".to_string()),
            ("have_radial_hue".to_string(), "0".to_string()),
        ]);
        let params = ParameterSpace::new(Some(b"compose".as_slice()), canvas, overrides);
        let composer = ColorComposer::draw(&params, &mut DecisionLog::new()).expect("valid");

        assert_eq!(composer.scheme().family(), SchemeFamily::Complement);
        assert_eq!(composer.filters().len(), 1);
    }
}
