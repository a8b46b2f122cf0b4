/// Command-line arguments and the render processor
pub mod cli;
/// Named defaults and thresholds
pub mod configuration;
/// Crate-wide error type
pub mod error;
/// SVG serialization
pub mod svg;
/// HTTP route and response handling
pub mod web;
