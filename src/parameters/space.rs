//! Keyed deterministic randomness with an override layer
//!
//! Every value is the hash of `(seed, key)` rather than the next output of a
//! stream, so any decision can be added, removed or reordered without
//! disturbing the others. Overrides pin individual keys by name.

use crate::io::configuration::{DETAIL_MAX_FRACTION, DETAIL_MIN_FRACTION};
use crate::io::error::{Result, invalid_override, invalid_parameter};
use crate::math::hash::{adler32, crc32, normalize, seed_state};
use crate::math::noise::{NoiseConfig, NoiseField};
use crate::parameters::choice::Choice;
use crate::parameters::decisions::{DecisionLog, DecisionValue};
use crate::spatial::canvas::Canvas;
use std::collections::HashMap;
use std::time::{SystemTime, UNIX_EPOCH};

/// Seed text used when no seed is supplied: the current Unix time to a tenth of a second
pub fn default_seed() -> String {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs_f64())
        .unwrap_or_default();
    format!("{now:.1}")
}

/// Source of every random decision made for one render
#[derive(Clone, Debug)]
pub struct ParameterSpace {
    seed: u32,
    canvas: Canvas,
    overrides: HashMap<String, String>,
}

impl ParameterSpace {
    /// Create a parameter space
    ///
    /// An absent or empty seed is replaced by [`default_seed`].
    pub fn new(seed: Option<&[u8]>, canvas: Canvas, overrides: HashMap<String, String>) -> Self {
        let seed = match seed {
            Some(bytes) if !bytes.is_empty() => seed_state(bytes),
            _ => seed_state(default_seed().as_bytes()),
        };
        Self {
            seed,
            canvas,
            overrides,
        }
    }

    /// Root hash state all draws derive from
    pub const fn seed(&self) -> u32 {
        self.seed
    }

    /// Canvas the draws are scaled against
    pub const fn canvas(&self) -> Canvas {
        self.canvas
    }

    /// Raw override string for `key`, if any
    pub fn override_for(&self, key: &str) -> Option<&str> {
        self.overrides.get(key).map(String::as_str)
    }

    /// Pseudorandom value in `[0, 1]`, ignoring overrides and the log
    pub fn scalar(&self, key: &str) -> f64 {
        normalize(crc32(key.as_bytes(), self.seed))
    }

    /// Value in `[min, max]`, or the parsed override for `key`
    ///
    /// An override that does not parse as a finite number is ignored with a
    /// warning and the random draw is used instead.
    pub fn uniform(&self, key: &str, min: f64, max: f64, log: &mut DecisionLog) -> f64 {
        let value = self
            .numeric_override(key)
            .unwrap_or_else(|| self.scalar(key).mul_add(max - min, min));
        log.record(key, DecisionValue::Number(value));
        value
    }

    /// Value in `[0, 1]`, or the parsed override for `key`
    pub fn random(&self, key: &str, log: &mut DecisionLog) -> f64 {
        self.uniform(key, 0.0, 1.0, log)
    }

    /// Whether the draw for `key` exceeds `threshold`
    pub fn gate(&self, key: &str, threshold: f64, log: &mut DecisionLog) -> bool {
        self.random(key, log) > threshold
    }

    /// Pick one of `options` with probability proportional to its weight
    ///
    /// The draw is scaled onto `[0, total)` and each weight is subtracted in
    /// order; the first option that takes the remainder to zero or below
    /// wins, so exact boundaries resolve towards earlier options.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - An override is set for `key` and matches no option's display name
    /// - `options` is empty or its weights do not sum to a positive value
    pub fn weighted_choice<T: Choice>(
        &self,
        key: &str,
        options: &[(f64, T)],
        log: &mut DecisionLog,
    ) -> Result<T> {
        let total: f64 = options.iter().map(|&(weight, _)| weight).sum();
        if options.is_empty() || total.is_nan() || total <= 0.0 {
            return Err(invalid_parameter(
                "options",
                &key,
                &"weighted choice needs options with a positive total weight",
            ));
        }

        let choice = if let Some(requested) = self.override_for(key) {
            options
                .iter()
                .map(|&(_, option)| option)
                .find(|option| option.display_name().eq_ignore_ascii_case(requested.trim()))
                .ok_or_else(|| {
                    invalid_override(
                        key,
                        requested,
                        options
                            .iter()
                            .map(|&(_, option)| option.display_name())
                            .collect(),
                    )
                })?
        } else {
            let mut remainder = total * self.scalar(key);
            let mut picked = None;
            for &(weight, option) in options {
                remainder -= weight;
                if remainder <= 0.0 {
                    picked = Some(option);
                    break;
                }
            }
            // Rounding can leave a sliver past the last weight
            match picked.or_else(|| options.last().map(|&(_, option)| option)) {
                Some(option) => option,
                None => return Err(invalid_parameter("options", &key, &"no options")),
            }
        };

        log.record(key, DecisionValue::Name(choice.display_name()));
        Ok(choice)
    }

    /// Pick a variant of `T` using its registered weights
    ///
    /// # Errors
    ///
    /// Returns an error if an override is set for `key` and names no variant
    pub fn choose<T: Choice>(&self, key: &str, log: &mut DecisionLog) -> Result<T> {
        self.weighted_choice(key, T::WEIGHTED, log)
    }

    /// Noise field with its own lattice seeded from `(seed, key)`
    pub fn noise_field(&self, key: &str, config: NoiseConfig) -> NoiseField {
        NoiseField::new(adler32(key.as_bytes(), self.seed), config)
    }

    /// Size of the smallest geometric detail
    pub fn detail(&self, log: &mut DecisionLog) -> f64 {
        let scale = self.canvas.image_scale();
        self.uniform(
            "detail",
            scale * DETAIL_MIN_FRACTION,
            scale * DETAIL_MAX_FRACTION,
            log,
        )
    }

    fn numeric_override(&self, key: &str) -> Option<f64> {
        let raw = self.override_for(key)?;
        match raw.trim().parse::<f64>() {
            Ok(value) if value.is_finite() => Some(value),
            _ => {
                log::warn!("ignoring non-numeric override {key}={raw}");
                None
            }
        }
    }
}
