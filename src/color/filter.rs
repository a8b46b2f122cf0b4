//! Spatial color filters layered over a base scheme

use crate::color::hsv::Hsv;
use crate::io::configuration::{
    COLOR_NOISE_PERIOD_FRACTION, COLOR_NOISE_THRESHOLD, RADIAL_HUE_THRESHOLD, VIGNETTE_THRESHOLD,
};
use crate::math::noise::{NoiseConfig, NoiseField, Octaves};
use crate::parameters::{DecisionLog, ParameterSpace};
use crate::spatial::canvas::Canvas;
use crate::spatial::point::Point;

/// Distance from the canvas centre as a fraction of half the diagonal
fn radial_distance(canvas: &Canvas, point: Point) -> f64 {
    let diagonal = canvas.diagonal();
    if diagonal <= 0.0 {
        return 0.0;
    }
    2.0 * (point - canvas.center()).norm() / diagonal
}

/// A position-dependent adjustment of an HSV color
#[derive(Clone, Debug)]
pub enum ColorFilter {
    /// Adds independent noise to hue, saturation and value
    Noise {
        /// Hue perturbation field
        hue: NoiseField,
        /// Saturation perturbation field
        saturation: NoiseField,
        /// Value perturbation field
        value: NoiseField,
    },
    /// Darkens towards the edges
    Vignette {
        /// Canvas the distance is measured on
        canvas: Canvas,
        /// Darkening per unit of radial distance
        edge_amount: f64,
    },
    /// Rotates hue towards the edges
    RadialHue {
        /// Canvas the distance is measured on
        canvas: Canvas,
        /// Hue turns per unit of radial distance
        edge_amount: f64,
    },
}

impl ColorFilter {
    /// Spatial noise with drawn amplitudes
    pub fn noise(params: &ParameterSpace, log: &mut DecisionLog) -> Self {
        let hue = params.uniform("hue_variation", 0.0, 0.05, log);
        let saturation = params.uniform("saturation_variation", 0.0, 0.2, log);
        let value = params.uniform("value_variation", 0.0, 0.5, log);
        let period = COLOR_NOISE_PERIOD_FRACTION * params.canvas().diagonal();

        let field = |key: &str, amplitude: f64| {
            params.noise_field(
                key,
                NoiseConfig::new(period)
                    .with_octaves(Octaves::Count(1))
                    .with_range(-amplitude, amplitude),
            )
        };

        Self::Noise {
            hue: field("hue_variation_spatial", hue),
            saturation: field("saturation_variation_spatial", saturation),
            value: field("value_variation_spatial", value),
        }
    }

    /// Vignette with a drawn strength
    pub fn vignette(params: &ParameterSpace, log: &mut DecisionLog) -> Self {
        Self::Vignette {
            canvas: params.canvas(),
            edge_amount: params.uniform("radial_darkness", 0.2, 0.7, log),
        }
    }

    /// Radial hue rotation with a drawn strength
    pub fn radial_hue(params: &ParameterSpace, log: &mut DecisionLog) -> Self {
        Self::RadialHue {
            canvas: params.canvas(),
            edge_amount: params.uniform("radial_hue_shift", 0.1, 0.5, log),
        }
    }

    /// Evaluate every filter gate and build the enabled filters, in application order
    pub fn draw_all(params: &ParameterSpace, log: &mut DecisionLog) -> Vec<Self> {
        let mut filters = Vec::new();

        if params.gate("have_color_noise", COLOR_NOISE_THRESHOLD, log) {
            filters.push(Self::noise(params, log));
        }
        if params.gate("have_vignette", VIGNETTE_THRESHOLD, log) {
            filters.push(Self::vignette(params, log));
        }
        if params.gate("have_radial_hue", RADIAL_HUE_THRESHOLD, log) {
            filters.push(Self::radial_hue(params, log));
        }

        filters
    }

    /// Adjust `color` as seen at `point`
    pub fn apply(&self, point: Point, color: Hsv) -> Hsv {
        match self {
            Self::Noise {
                hue,
                saturation,
                value,
            } => Hsv::new(
                color.hue + hue.sample(point),
                color.saturation + saturation.sample(point),
                color.value + value.sample(point),
            ),
            Self::Vignette {
                canvas,
                edge_amount,
            } => {
                let fade = 1.0 - (radial_distance(canvas, point) * edge_amount).min(1.0);
                Hsv::new(color.hue, color.saturation, color.value * fade)
            }
            Self::RadialHue {
                canvas,
                edge_amount,
            } => color.shift_hue(radial_distance(canvas, point) * edge_amount),
        }
    }
}
