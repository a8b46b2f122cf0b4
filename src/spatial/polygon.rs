//! Closed polygons tagged with a palette index

use crate::spatial::point::{Point, Rect};

/// An implicitly closed polygon with the palette slot it should be filled from
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon {
    /// Vertices in drawing order; the last connects back to the first
    pub points: Vec<Point>,
    /// Index into the active color palette
    pub color_index: usize,
}

impl Polygon {
    /// Create a polygon
    pub const fn new(points: Vec<Point>, color_index: usize) -> Self {
        Self {
            points,
            color_index,
        }
    }

    /// Whether the polygon has no vertices
    pub const fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Mean of the vertices, `None` for an empty polygon
    pub fn centroid(&self) -> Option<Point> {
        if self.points.is_empty() {
            return None;
        }
        let sum = self
            .points
            .iter()
            .fold(Point::ZERO, |acc, &point| acc + point);
        Some(sum / self.points.len() as f64)
    }

    /// Smallest axis-aligned rectangle containing every vertex
    pub fn bounding_box(&self) -> Option<Rect> {
        let first = *self.points.first()?;
        let (min, max) = self
            .points
            .iter()
            .fold((first, first), |(min, max), point| {
                (
                    Point::new(min.x.min(point.x), min.y.min(point.y)),
                    Point::new(max.x.max(point.x), max.y.max(point.y)),
                )
            });
        Some(Rect::new(min, max))
    }

    /// Apply `f` to every vertex, keeping the color index
    #[must_use]
    pub fn map_points(self, f: impl Fn(Point) -> Point) -> Self {
        Self {
            points: self.points.into_iter().map(f).collect(),
            color_index: self.color_index,
        }
    }
}
