//! Spatial primitives and tiling geometry
//!
//! This module contains spatial-related functionality including:
//! - Points, rectangles and the canvas extent
//! - Polygons with their centroid and bounding box
//! - Periodic tiling families and the lazy tile stream

/// Canvas extent and derived measures
pub mod canvas;
/// Points and rectangles
pub mod point;
/// Closed polygons tagged with a palette index
pub mod polygon;
/// Periodic tiling families
pub mod tiles;

pub use canvas::Canvas;
pub use point::{Point, Rect};
pub use polygon::Polygon;
