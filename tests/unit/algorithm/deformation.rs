//! Tests for coordinate warps and their composition

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use wallweave::algorithm::deformation::{
        Composition, Deformation, DeformationKind, DeformationPipeline, Warp,
    };
    use wallweave::parameters::{DecisionLog, ParameterSpace};
    use wallweave::spatial::canvas::Canvas;
    use wallweave::spatial::point::Point;
    use wallweave::spatial::polygon::Polygon;

    fn params(overrides: &[(&str, &str)]) -> ParameterSpace {
        let canvas = Canvas::new(200, 100).expect("valid canvas");
        let overrides = overrides
            .iter()
            .map(|&(key, value)| (key.to_string(), value.to_string()))
            .collect::<HashMap<_, _>>();
        ParameterSpace::new(Some(b"deform".as_slice()), canvas, overrides)
    }

    fn zoom(exponent: f64) -> Deformation {
        Deformation::Zoom {
            center: Point::ZERO,
            size: 10.0,
            exponent,
        }
    }

    // Tests the zoom centre and the reference distance are fixed points
    // Verified by scaling the offset without normalising by distance
    #[test]
    fn test_zoom_fixed_points() {
        let warp = zoom(2.0);
        assert_eq!(warp.warp(Point::ZERO), Point::ZERO);

        let on_circle = Point::new(6.0, 8.0);
        assert!((warp.warp(on_circle) - on_circle).norm() < 1e-12);

        let inside = warp.warp(Point::new(5.0, 0.0));
        assert!((inside - Point::new(2.5, 0.0)).norm() < 1e-12);
    }

    // Tests the zoom preserves the angle around its centre
    // Verified by swapping the offset components
    #[test]
    fn test_zoom_preserves_angle() {
        let warped = zoom(0.5).warp(Point::new(3.0, 4.0));
        assert!((warped.y / warped.x - 4.0 / 3.0).abs() < 1e-12);
    }

    // Tests the wave leaves points with zero phase in place
    // Verified by adding the direction unconditionally
    #[test]
    fn test_wave_zero_phase() {
        let wave = Deformation::Wave {
            rotation: Point::new(1.0, 0.0),
            direction: Point::new(0.0, 5.0),
            wavelength: 10.0,
        };
        assert_eq!(wave.warp(Point::new(0.0, 3.0)), Point::new(0.0, 3.0));

        let crest = wave.warp(Point::new(10.0 * std::f64::consts::FRAC_PI_2, 0.0));
        assert!((crest.y - 5.0).abs() < 1e-9);
    }

    // Tests the noise offset never exceeds its maximum displacement
    // Verified by doubling the displacement range
    #[test]
    fn test_offset_bounded() {
        let params = params(&[]);
        let offset = Deformation::offset(&params, &mut DecisionLog::new());
        assert_eq!(offset.kind(), DeformationKind::Offset);

        let max = 0.17 * params.canvas().diagonal();
        for i in 0..40 {
            let point = Point::new(f64::from(i) * 7.3, f64::from(i) * 2.9);
            let moved = offset.warp(point) - point;
            assert!(moved.x.abs() <= max + 1e-9);
            assert!(moved.y.abs() <= max + 1e-9);
        }
    }

    // Tests gates are evaluated in order and all of them are logged
    // Verified by skipping gates after the first enabled kind
    #[test]
    fn test_draw_gates() {
        let params = params(&[("should_offset", "0"), ("have_wave", "1"), ("have_zoom", "1")]);
        let mut log = DecisionLog::new();
        let pipeline = DeformationPipeline::draw(&params, Composition::FirstEnabled, &mut log);

        let kinds: Vec<DeformationKind> = pipeline.stages().iter().map(Deformation::kind).collect();
        assert_eq!(kinds, vec![DeformationKind::Wave, DeformationKind::Zoom]);
        assert_eq!(pipeline.active().len(), 1);
        assert!(log.get("should_offset").is_some());
        assert!(log.get("zoom_amount").is_some());
        assert!(log.get("detail").is_none());
    }

    // Tests only the first enabled deformation applies by default
    // Verified by folding over every stage regardless of composition
    #[test]
    fn test_first_enabled_composition() {
        let point = Point::new(5.0, 0.0);
        let first = DeformationPipeline::new(vec![zoom(2.0), zoom(2.0)], Composition::FirstEnabled);
        let chained = DeformationPipeline::new(vec![zoom(2.0), zoom(2.0)], Composition::Chained);

        assert!((first.warp(point) - Point::new(2.5, 0.0)).norm() < 1e-12);
        assert!((chained.warp(point) - Point::new(0.625, 0.0)).norm() < 1e-12);
    }

    // Tests an empty pipeline leaves polygons untouched
    // Verified by warping through an empty fold with a changed color
    #[test]
    fn test_identity_pipeline() {
        let pipeline = DeformationPipeline::default();
        assert!(pipeline.is_identity());
        assert!(pipeline.active().is_empty());

        let polygon = Polygon::new(vec![Point::new(1.0, 2.0), Point::new(3.0, 4.0)], 2);
        assert_eq!(pipeline.apply(polygon.clone()), polygon);
    }

    // Tests applying a pipeline warps every vertex
    // Verified by warping only the first vertex
    #[test]
    fn test_apply_warps_vertices() {
        let pipeline = DeformationPipeline::new(vec![zoom(2.0)], Composition::FirstEnabled);
        let polygon = Polygon::new(vec![Point::new(5.0, 0.0), Point::new(0.0, 5.0)], 1);
        let warped = pipeline.apply(polygon);

        assert_eq!(warped.color_index, 1);
        assert!((warped.points[0] - Point::new(2.5, 0.0)).norm() < 1e-12);
        assert!((warped.points[1] - Point::new(0.0, 2.5)).norm() < 1e-12);
    }
}
