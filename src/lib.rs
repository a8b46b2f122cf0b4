//! Deterministic procedural wallpaper generation
//!
//! A seed and a canvas size select, through a keyed parameter space, a
//! periodic tiling, a chain of coordinate deformations and a color scheme
//! with spatial filters. The result is a lazily produced sequence of colored
//! polygons serialized as SVG. Any decision can be pinned by name.

#![forbid(unsafe_code)]

/// Render orchestration and coordinate deformations
pub mod algorithm;
/// HSV palettes, color filters and RGB conversion
pub mod color;
/// Input/output operations, configuration and error handling
pub mod io;
/// Hashing and lattice noise
pub mod math;
/// Keyed, seed-deterministic decisions and their log
pub mod parameters;
/// Points, polygons, canvas and tiling geometry
pub mod spatial;

pub use io::error::{Result, WallpaperError};
