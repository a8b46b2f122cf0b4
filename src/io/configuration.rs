//! Generation constants and runtime configuration defaults

// Default values for configurable parameters
/// Canvas width used when none is requested
pub const DEFAULT_WIDTH: u32 = 1024;
/// Canvas height used when none is requested
pub const DEFAULT_HEIGHT: u32 = 786;

// Deformations displace vertices outward, so tiles are generated past the canvas
/// Fraction of the canvas extent generated beyond each edge
pub const OVERSCAN: f64 = 0.5;

/// Upper bound on the one-directional image scale
pub const IMAGE_SCALE_CAP: f64 = 400.0;

// Smallest detail, as fractions of the image scale
/// Lower bound of the detail draw
pub const DETAIL_MIN_FRACTION: f64 = 0.05;
/// Upper bound of the detail draw
pub const DETAIL_MAX_FRACTION: f64 = 0.2;

// Gate thresholds: a feature is enabled when its draw exceeds the threshold
/// Gate for positional noise deformation
pub const OFFSET_THRESHOLD: f64 = 0.3;
/// Gate for wave deformation
pub const WAVE_THRESHOLD: f64 = 0.5;
/// Gate for radial zoom deformation
pub const ZOOM_THRESHOLD: f64 = 0.5;
/// Gate for the spatial color noise filter
pub const COLOR_NOISE_THRESHOLD: f64 = 0.18;
/// Gate for the vignette filter
pub const VIGNETTE_THRESHOLD: f64 = 0.65;
/// Gate for the radial hue filter
pub const RADIAL_HUE_THRESHOLD: f64 = 0.94;

// Positional noise deformation
/// Maximum displacement as a fraction of the canvas diagonal
pub const OFFSET_MAX_FRACTION: f64 = 0.17;
/// Noise period as a fraction of the canvas side
pub const OFFSET_PERIOD_FRACTION: f64 = 0.8;

/// Period of the color noise filter as a fraction of the canvas diagonal
pub const COLOR_NOISE_PERIOD_FRACTION: f64 = 0.1;

// Output settings
/// Content type of rendered wallpapers
pub const CONTENT_TYPE: &str = "image/svg+xml";
/// Unix time reported as the modification time of pinned seeds (2000-01-01T00:00:00Z)
pub const PINNED_SEED_EPOCH_SECS: u64 = 946_684_800;
/// Output path meaning standard output
pub const STDOUT_PATH: &str = "-";
