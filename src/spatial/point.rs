//! Planar coordinates with vector and complex arithmetic
//!
//! Rotations are expressed as multiplication by unit complex numbers, which
//! keeps the wave deformation a one-liner.

use std::ops::{Add, Div, Mul, Sub};

/// A 2D coordinate, also read as the complex number `x + iy`
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    /// Horizontal component (real part)
    pub x: f64,
    /// Vertical component, growing downwards (imaginary part)
    pub y: f64,
}

impl Point {
    /// The origin
    pub const ZERO: Self = Self::new(0.0, 0.0);
    /// The imaginary unit `i`
    pub const I: Self = Self::new(0.0, 1.0);

    /// Create a point from its components
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Unit complex number `e^{i·angle}`
    pub fn from_angle(angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::new(cos, sin)
    }

    /// Euclidean length (complex modulus)
    pub fn norm(self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Complex product
    pub fn complex_mul(self, other: Self) -> Self {
        Self::new(
            self.x.mul_add(other.x, -self.y * other.y),
            self.x.mul_add(other.y, self.y * other.x),
        )
    }

    /// Complex quotient, `None` when dividing by zero
    pub fn complex_div(self, other: Self) -> Option<Self> {
        let denominator = other.x.mul_add(other.x, other.y * other.y);
        if denominator == 0.0 {
            return None;
        }
        Some(Self::new(
            self.x.mul_add(other.x, self.y * other.y) / denominator,
            self.y.mul_add(other.x, -self.x * other.y) / denominator,
        ))
    }

    /// Larger of the two components
    pub fn max_component(self) -> f64 {
        self.x.max(self.y)
    }
}

impl Add for Point {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Point {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl Div<f64> for Point {
    type Output = Self;

    fn div(self, rhs: f64) -> Self {
        Self::new(self.x / rhs, self.y / rhs)
    }
}

/// Axis-aligned rectangle given by its minimum and maximum corners
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    /// Corner with the smallest coordinates
    pub min: Point,
    /// Corner with the largest coordinates
    pub max: Point,
}

impl Rect {
    /// Create a rectangle from two corners
    pub const fn new(min: Point, max: Point) -> Self {
        Self { min, max }
    }

    /// Width and height as a point
    pub fn extent(&self) -> Point {
        self.max - self.min
    }

    /// Grow the rectangle by `fraction` of its extent on every side
    pub fn expand(&self, fraction: f64) -> Self {
        let margin = self.extent() * fraction;
        Self::new(self.min - margin, self.max + margin)
    }

    /// Whether the two rectangles share any point (edges included)
    pub const fn intersects(&self, other: &Self) -> bool {
        self.min.x <= other.max.x
            && other.min.x <= self.max.x
            && self.min.y <= other.max.y
            && other.min.y <= self.max.y
    }
}
