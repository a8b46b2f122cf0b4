//! Base palettes derived from a single random hue

use crate::color::hsv::Hsv;
use crate::io::error::Result;
use crate::parameters::{Choice, DecisionLog, ParameterSpace};
use crate::spatial::point::Point;

/// Anything that colors a palette slot at a position
pub trait ColorSource {
    /// Color of palette slot `index` at `point`
    fn color_at(&self, point: Point, index: usize) -> Hsv;
}

/// Hue relationships a palette can be built on
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SchemeFamily {
    /// One hue, varying brightness
    Monochrome,
    /// The base hue and its opposite
    Complement,
    /// The base hue and its neighbours a fifth of a turn away
    Adjacent,
}

impl Choice for SchemeFamily {
    const WEIGHTED: &'static [(f64, Self)] = &[
        (75.0, Self::Monochrome),
        (5.0, Self::Complement),
        (20.0, Self::Adjacent),
    ];

    fn display_name(self) -> &'static str {
        match self {
            Self::Monochrome => "Monochrome",
            Self::Complement => "Complement",
            Self::Adjacent => "Adjacent",
        }
    }
}

impl SchemeFamily {
    /// The palette this family derives from `base`
    pub fn palette(self, base: Hsv) -> Vec<Hsv> {
        match self {
            Self::Monochrome => vec![
                base,
                base.shift_value(0.3),
                base.shift_value(-0.3),
                base.shift_value(0.1),
                base.shift_value(-0.1),
            ],
            Self::Complement => vec![
                base,
                base.shift_hue(0.5),
                base.shift_value(0.1),
                base.shift_value(-0.1),
            ],
            Self::Adjacent => vec![
                base,
                base.shift_hue(-0.2),
                base.shift_hue(0.2),
                base.shift_value(-0.3),
                base.shift_value(0.1),
            ],
        }
    }
}

/// A fixed palette indexed cyclically
#[derive(Clone, Debug, PartialEq)]
pub struct ColorScheme {
    family: SchemeFamily,
    palette: Vec<Hsv>,
}

impl ColorScheme {
    /// Build a scheme around an explicit base color
    pub fn new(family: SchemeFamily, base: Hsv) -> Self {
        Self {
            family,
            palette: family.palette(base),
        }
    }

    /// Draw the family and base color from the parameter space
    ///
    /// # Errors
    ///
    /// Returns an error if the `color_scheme` override names no family
    pub fn draw(params: &ParameterSpace, log: &mut DecisionLog) -> Result<Self> {
        let family: SchemeFamily = params.choose("color_scheme", log)?;
        let base = Hsv::new(
            params.uniform("hue", 0.0, 1.0, log),
            params.uniform("saturation", 0.5, 1.0, log),
            params.uniform("value", 0.3, 1.0, log),
        );
        Ok(Self::new(family, base))
    }

    /// The family the palette was derived with
    pub const fn family(&self) -> SchemeFamily {
        self.family
    }

    /// Palette entries in slot order
    pub fn palette(&self) -> &[Hsv] {
        &self.palette
    }
}

impl ColorSource for ColorScheme {
    fn color_at(&self, _point: Point, index: usize) -> Hsv {
        self.palette
            .get(index % self.palette.len().max(1))
            .copied()
            .unwrap_or_default()
    }
}
