//! Closed sets of named variants that can be drawn by weight

/// A variant of a closed family that can be picked by `weighted_choice`
///
/// The display name doubles as the override spelling, matched
/// case-insensitively, and as the value written to the decision log.
pub trait Choice: Copy + 'static {
    /// Every variant with its relative weight, in tie-break order
    const WEIGHTED: &'static [(f64, Self)];

    /// Canonical display name
    fn display_name(self) -> &'static str;
}
