//! Coordinate-space warps applied to tile vertices
//!
//! Three kinds are gated independently, in a fixed order: positional noise,
//! a sinusoidal wave and a radial zoom. By default only the first enabled
//! kind is applied; chaining every enabled kind is opt-in.

use crate::io::configuration::{
    OFFSET_MAX_FRACTION, OFFSET_PERIOD_FRACTION, OFFSET_THRESHOLD, WAVE_THRESHOLD, ZOOM_THRESHOLD,
};
use crate::math::noise::{NoiseConfig, NoiseField, Octaves};
use crate::parameters::{DecisionLog, ParameterSpace};
use crate::spatial::point::Point;
use crate::spatial::polygon::Polygon;
use std::f64::consts::TAU;

/// A pure map from coordinates to coordinates
pub trait Warp {
    /// Where `point` ends up
    fn warp(&self, point: Point) -> Point;
}

/// The deformation families, in gate order
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DeformationKind {
    /// Displacement by two noise fields
    Offset,
    /// Sinusoidal displacement along a rotated axis
    Wave,
    /// Radial remapping of distance from the canvas centre
    Zoom,
}

/// A single configured warp
#[derive(Clone, Debug)]
pub enum Deformation {
    /// `p + (noise_x(p), noise_y(p))`
    Offset {
        /// Horizontal displacement field
        noise_x: NoiseField,
        /// Vertical displacement field
        noise_y: NoiseField,
    },
    /// `p + direction · sin((p·rotation).x / wavelength)`
    Wave {
        /// Unit rotation of the wave axis
        rotation: Point,
        /// Displacement vector at the crest
        direction: Point,
        /// Length of one radian of phase
        wavelength: f64,
    },
    /// Distance `d` from `center` becomes `(d / size)^exponent · size`
    Zoom {
        /// Fixed point of the zoom
        center: Point,
        /// Distance that maps to itself
        size: f64,
        /// Below one expands the centre, above one compresses it
        exponent: f64,
    },
}

impl Deformation {
    /// Which family this warp belongs to
    pub const fn kind(&self) -> DeformationKind {
        match self {
            Self::Offset { .. } => DeformationKind::Offset,
            Self::Wave { .. } => DeformationKind::Wave,
            Self::Zoom { .. } => DeformationKind::Zoom,
        }
    }

    /// Positional noise scaled to the canvas
    pub fn offset(params: &ParameterSpace, log: &mut DecisionLog) -> Self {
        let canvas = params.canvas();
        let max_offset = OFFSET_MAX_FRACTION * canvas.diagonal();
        let octaves = Octaves::Detail(params.detail(log));
        let size = canvas.size();

        let field = |key: &str, period: f64| {
            params.noise_field(
                key,
                NoiseConfig::new(period)
                    .with_octaves(octaves)
                    .with_range(-max_offset, max_offset),
            )
        };

        Self::Offset {
            noise_x: field("noise_x", OFFSET_PERIOD_FRACTION * size.x),
            noise_y: field("noise_y", OFFSET_PERIOD_FRACTION * size.y),
        }
    }

    /// Wave with drawn amplitude, wavelength and rotation
    pub fn wave(params: &ParameterSpace, log: &mut DecisionLog) -> Self {
        let scale = params.canvas().image_scale();
        let amplitude = scale * params.uniform("wave_amplitude", 0.1, 0.5, log);
        let wavelength = scale * params.uniform("wave_wavelength", 0.2, 2.0, log);
        let angle = params.uniform("wave_rotation", 1.0, TAU, log);

        let rotation = Point::from_angle(angle);
        // amplitude · i / rotation, rotation being a unit vector
        let direction = Point::I
            .complex_div(rotation)
            .unwrap_or(Point::I)
            * amplitude;

        Self::Wave {
            rotation,
            direction,
            wavelength,
        }
    }

    /// Radial zoom around the canvas centre
    pub fn zoom(params: &ParameterSpace, log: &mut DecisionLog) -> Self {
        let exponent = params.uniform("zoom_amount", 0.5, 1.5, log);
        let center = params.canvas().center();

        Self::Zoom {
            center,
            size: center.max_component(),
            exponent,
        }
    }
}

impl Warp for Deformation {
    fn warp(&self, point: Point) -> Point {
        match self {
            Self::Offset { noise_x, noise_y } => {
                point + Point::new(noise_x.sample(point), noise_y.sample(point))
            }
            Self::Wave {
                rotation,
                direction,
                wavelength,
            } => {
                let phase = point.complex_mul(*rotation).x / wavelength;
                point + *direction * phase.sin()
            }
            Self::Zoom {
                center,
                size,
                exponent,
            } => {
                let offset = point - *center;
                let distance = offset.norm();
                if distance == 0.0 || *size <= 0.0 {
                    return point;
                }
                let new_distance = (distance / size).powf(*exponent) * size;
                *center + offset * (new_distance / distance)
            }
        }
    }
}

/// How several enabled deformations combine
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Composition {
    /// Apply only the first enabled deformation
    #[default]
    FirstEnabled,
    /// Apply every enabled deformation in gate order
    Chained,
}

/// The deformations enabled for one render and how they combine
#[derive(Clone, Debug, Default)]
pub struct DeformationPipeline {
    stages: Vec<Deformation>,
    composition: Composition,
}

impl DeformationPipeline {
    /// Pipeline from explicit stages
    pub const fn new(stages: Vec<Deformation>, composition: Composition) -> Self {
        Self {
            stages,
            composition,
        }
    }

    /// Evaluate every gate and build the enabled deformations
    ///
    /// All three gates are drawn (and logged) whatever the outcome, so the
    /// decision log always shows why a kind is absent.
    pub fn draw(params: &ParameterSpace, composition: Composition, log: &mut DecisionLog) -> Self {
        let mut stages = Vec::new();

        if params.gate("should_offset", OFFSET_THRESHOLD, log) {
            stages.push(Deformation::offset(params, log));
        }
        if params.gate("have_wave", WAVE_THRESHOLD, log) {
            stages.push(Deformation::wave(params, log));
        }
        if params.gate("have_zoom", ZOOM_THRESHOLD, log) {
            stages.push(Deformation::zoom(params, log));
        }

        Self::new(stages, composition)
    }

    /// Enabled deformations in gate order
    pub fn stages(&self) -> &[Deformation] {
        &self.stages
    }

    /// Deformations that actually move vertices under the composition rule
    pub fn active(&self) -> &[Deformation] {
        match self.composition {
            Composition::FirstEnabled => self.stages.get(..1).unwrap_or(&[]),
            Composition::Chained => &self.stages,
        }
    }

    /// Whether no vertex is ever moved
    pub fn is_identity(&self) -> bool {
        self.stages.is_empty()
    }

    /// Warp every vertex of `polygon`
    pub fn apply(&self, polygon: Polygon) -> Polygon {
        if self.is_identity() {
            return polygon;
        }
        polygon.map_points(|point| self.warp(point))
    }
}

impl Warp for DeformationPipeline {
    fn warp(&self, point: Point) -> Point {
        self.active()
            .iter()
            .fold(point, |point, stage| stage.warp(point))
    }
}
