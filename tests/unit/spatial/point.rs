//! Tests for point arithmetic and rectangles

#[cfg(test)]
mod tests {
    use std::f64::consts::FRAC_PI_2;
    use wallweave::spatial::point::{Point, Rect};

    fn close(a: Point, b: Point) -> bool {
        (a - b).norm() < 1e-12
    }

    // Tests i squared is minus one
    // Verified by swapping the sign of the cross term
    #[test]
    fn test_complex_mul() {
        assert!(close(Point::I.complex_mul(Point::I), Point::new(-1.0, 0.0)));
        assert!(close(
            Point::new(1.0, 2.0).complex_mul(Point::new(3.0, -1.0)),
            Point::new(5.0, 5.0)
        ));
    }

    // Tests division inverts multiplication and rejects zero
    // Verified by omitting the conjugate
    #[test]
    fn test_complex_div() {
        let a = Point::new(2.5, -1.5);
        let b = Point::new(0.3, 4.0);
        let quotient = a.complex_mul(b).complex_div(b).expect("non-zero divisor");
        assert!(close(quotient, a));
        assert_eq!(a.complex_div(Point::ZERO), None);
    }

    // Tests unit vectors from angles
    // Verified by swapping sine and cosine
    #[test]
    fn test_from_angle() {
        assert!(close(Point::from_angle(0.0), Point::new(1.0, 0.0)));
        assert!(close(Point::from_angle(FRAC_PI_2), Point::I));
        assert!((Point::from_angle(1.234).norm() - 1.0).abs() < 1e-12);
    }

    // Tests vector operators and helpers
    // Verified by subtracting in the wrong order
    #[test]
    fn test_vector_operators() {
        let a = Point::new(3.0, 4.0);
        assert!((a.norm() - 5.0).abs() < f64::EPSILON);
        assert_eq!(a + Point::new(1.0, 1.0), Point::new(4.0, 5.0));
        assert_eq!(a - Point::new(1.0, 1.0), Point::new(2.0, 3.0));
        assert_eq!(a * 2.0, Point::new(6.0, 8.0));
        assert_eq!(a / 2.0, Point::new(1.5, 2.0));
        assert!((a.max_component() - 4.0).abs() < f64::EPSILON);
    }

    // Tests rectangle intersection includes touching edges
    // Verified by using strict comparisons
    #[test]
    fn test_rect_intersects() {
        let a = Rect::new(Point::ZERO, Point::new(10.0, 10.0));
        let touching = Rect::new(Point::new(10.0, 5.0), Point::new(20.0, 6.0));
        let below = Rect::new(Point::new(0.0, 11.0), Point::new(10.0, 12.0));

        assert!(a.intersects(&touching));
        assert!(touching.intersects(&a));
        assert!(!a.intersects(&below));
    }

    // Tests expansion grows every side by a fraction of the extent
    // Verified by growing only the maximum corner
    #[test]
    fn test_rect_expand() {
        let rect = Rect::new(Point::ZERO, Point::new(100.0, 50.0)).expand(0.5);
        assert_eq!(rect.min, Point::new(-50.0, -25.0));
        assert_eq!(rect.max, Point::new(150.0, 75.0));
        assert_eq!(rect.extent(), Point::new(200.0, 100.0));
    }
}
