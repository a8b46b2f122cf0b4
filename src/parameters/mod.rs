//! Deterministic keyed randomness and the record of what it decided

/// Weighted families of named variants
pub mod choice;
/// Decision log threaded through every resolution
pub mod decisions;
/// The keyed parameter space itself
pub mod space;

pub use choice::Choice;
pub use decisions::{Decision, DecisionLog, DecisionValue};
pub use space::ParameterSpace;
