//! A base scheme folded through its filters

use crate::color::filter::ColorFilter;
use crate::color::hsv::Hsv;
use crate::color::scheme::{ColorScheme, ColorSource};
use crate::io::error::Result;
use crate::parameters::{DecisionLog, ParameterSpace};
use crate::spatial::point::Point;

/// Maps `(position, palette index)` to a final color
#[derive(Clone, Debug)]
pub struct ColorComposer {
    scheme: ColorScheme,
    filters: Vec<ColorFilter>,
}

impl ColorComposer {
    /// Compose a scheme with filters applied in order
    pub const fn new(scheme: ColorScheme, filters: Vec<ColorFilter>) -> Self {
        Self { scheme, filters }
    }

    /// Draw the scheme and its filters
    ///
    /// # Errors
    ///
    /// Returns an error if the `color_scheme` override names no family
    pub fn draw(params: &ParameterSpace, log: &mut DecisionLog) -> Result<Self> {
        let scheme = ColorScheme::draw(params, log)?;
        let filters = ColorFilter::draw_all(params, log);
        Ok(Self::new(scheme, filters))
    }

    /// The unfiltered base scheme
    pub const fn scheme(&self) -> &ColorScheme {
        &self.scheme
    }

    /// Filters in application order
    pub fn filters(&self) -> &[ColorFilter] {
        &self.filters
    }

    /// Final color of slot `index` at `point` as lower-case hex
    pub fn hex_at(&self, point: Point, index: usize) -> String {
        self.color_at(point, index).to_rgb().hex()
    }
}

impl ColorSource for ColorComposer {
    fn color_at(&self, point: Point, index: usize) -> Hsv {
        self.filters
            .iter()
            .fold(self.scheme.color_at(point, index), |color, filter| {
                filter.apply(point, color)
            })
    }
}
