//! Canvas extent and the derived measures used to scale generation

use crate::io::configuration::IMAGE_SCALE_CAP;
use crate::io::error::{Result, invalid_parameter};
use crate::spatial::point::{Point, Rect};

/// Requested output size in user units
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Canvas {
    width: u32,
    height: u32,
}

impl Canvas {
    /// Create a canvas
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 {
            return Err(invalid_parameter("width", &width, &"must be positive"));
        }
        if height == 0 {
            return Err(invalid_parameter("height", &height, &"must be positive"));
        }
        Ok(Self { width, height })
    }

    /// Canvas width
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Canvas height
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Size as a point `(width, height)`
    pub fn size(&self) -> Point {
        Point::new(f64::from(self.width), f64::from(self.height))
    }

    /// Centre of the canvas
    pub fn center(&self) -> Point {
        self.size() / 2.0
    }

    /// Length of the diagonal
    pub fn diagonal(&self) -> f64 {
        self.size().norm()
    }

    /// One-directional indication of the image size, capped for large canvases
    pub fn image_scale(&self) -> f64 {
        self.diagonal().min(IMAGE_SCALE_CAP)
    }

    /// The visible region `[0, width] × [0, height]`
    pub fn bounds(&self) -> Rect {
        Rect::new(Point::ZERO, self.size())
    }
}
