//! Palettes, spatial filters and conversion to hex RGB

/// Scheme folded through its filters
pub mod composer;
/// Position-dependent color adjustments
pub mod filter;
/// HSV colors and RGB conversion
pub mod hsv;
/// Base palettes built from one drawn hue
pub mod scheme;

pub use composer::ColorComposer;
pub use filter::ColorFilter;
pub use hsv::{Hsv, Rgb};
pub use scheme::{ColorScheme, ColorSource, SchemeFamily};
