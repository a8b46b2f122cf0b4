//! Hashing and noise primitives

/// Keyed checksum hashing
pub mod hash;
/// Multi-octave lattice noise
pub mod noise;

pub use noise::{NoiseConfig, NoiseField, Octaves};
