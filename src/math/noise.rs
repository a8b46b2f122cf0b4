//! Multi-octave lattice (value) noise
//!
//! Each octave assigns a hashed pseudorandom value to every integer lattice
//! point and bilinearly interpolates between the four corners of the cell
//! containing the sample. Octave `o` runs at frequency `2^o` with amplitude
//! `0.5^o`; the weighted sum is renormalised to `[0, 1]` before being mapped
//! onto the configured output range.

use crate::math::hash::{MAX_VALUE, lattice_value};
use crate::spatial::point::Point;

/// Multiplier spreading octave seeds apart
const OCTAVE_SEED_STRIDE: u32 = 541;

/// How many octaves a noise field sums
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Octaves {
    /// An explicit octave count (at least one is always used)
    Count(u32),
    /// Enough octaves for features down to this size: `round(log2(period / detail))`
    Detail(f64),
}

impl Octaves {
    /// Resolve to a concrete octave count for the given base period
    pub fn resolve(self, period: f64) -> u32 {
        match self {
            Self::Count(count) => count.max(1),
            Self::Detail(detail) => {
                let octaves = (period / detail).log2().round();
                if octaves.is_finite() && octaves >= 1.0 {
                    octaves.min(f64::from(u8::MAX)) as u32
                } else {
                    1
                }
            }
        }
    }
}

/// Construction parameters for a [`NoiseField`]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NoiseConfig {
    /// Wavelength of the base octave
    pub period: f64,
    /// Octave count or the detail size it derives from
    pub octaves: Octaves,
    /// Smallest output value
    pub min: f64,
    /// Largest output value
    pub max: f64,
}

impl NoiseConfig {
    /// Four octaves over `[0, 1]` with the given period
    pub const fn new(period: f64) -> Self {
        Self {
            period,
            octaves: Octaves::Count(4),
            min: 0.0,
            max: 1.0,
        }
    }

    /// Set the output range
    #[must_use]
    pub const fn with_range(mut self, min: f64, max: f64) -> Self {
        self.min = min;
        self.max = max;
        self
    }

    /// Set how the octave count is chosen
    #[must_use]
    pub const fn with_octaves(mut self, octaves: Octaves) -> Self {
        self.octaves = octaves;
        self
    }
}

#[derive(Clone, Copy, Debug)]
struct Octave {
    seed: u32,
    frequency: f64,
    weight: f64,
}

/// A seeded, continuous `Point → f64` noise function
#[derive(Clone, Debug)]
pub struct NoiseField {
    seed: u32,
    octaves: Vec<Octave>,
    inv_period: f64,
    min: f64,
    max: f64,
}

impl NoiseField {
    /// Build a noise field from a derived seed and its configuration
    pub fn new(seed: u32, config: NoiseConfig) -> Self {
        let count = config.octaves.resolve(config.period);
        let total_amplitude: f64 = (0..count).map(|o| 0.5_f64.powi(o as i32)).sum();

        let octaves = (0..count)
            .map(|o| Octave {
                seed: (seed ^ o.wrapping_mul(OCTAVE_SEED_STRIDE)) & MAX_VALUE,
                frequency: 2.0_f64.powi(o as i32),
                weight: 0.5_f64.powi(o as i32) / total_amplitude,
            })
            .collect();

        let inv_period = if config.period.is_finite() && config.period > 0.0 {
            config.period.recip()
        } else {
            1.0
        };

        Self {
            seed,
            octaves,
            inv_period,
            min: config.min,
            max: config.max,
        }
    }

    /// Seed the field was built from
    pub const fn seed(&self) -> u32 {
        self.seed
    }

    /// Number of summed octaves
    pub fn octave_count(&self) -> usize {
        self.octaves.len()
    }

    /// Output range `(min, max)`
    pub const fn range(&self) -> (f64, f64) {
        (self.min, self.max)
    }

    /// Sample the field
    pub fn sample(&self, point: Point) -> f64 {
        let base = point * self.inv_period;
        let value: f64 = self
            .octaves
            .iter()
            .map(|octave| octave.weight * octave_value(octave.seed, base * octave.frequency))
            .sum();
        let value = value.clamp(0.0, 1.0);

        let (low, high) = (self.min.min(self.max), self.min.max(self.max));
        value.mul_add(self.max - self.min, self.min).clamp(low, high)
    }
}

/// Bilinear interpolation of the four hashed corners around `point`
fn octave_value(seed: u32, point: Point) -> f64 {
    let cell_x = point.x.floor();
    let cell_y = point.y.floor();
    let offset_x = point.x - cell_x;
    let offset_y = point.y - cell_y;

    let x0 = cell_x as i64;
    let y0 = cell_y as i64;
    let x1 = x0.wrapping_add(1);
    let y1 = y0.wrapping_add(1);

    let value00 = lattice_value(seed, x0, y0);
    let value10 = lattice_value(seed, x1, y0);
    let value01 = lattice_value(seed, x0, y1);
    let value11 = lattice_value(seed, x1, y1);

    let top = offset_x.mul_add(value10 - value00, value00);
    let bottom = offset_x.mul_add(value11 - value01, value01);

    offset_y.mul_add(bottom - top, top)
}
