/// Coordinate warps applied to tile vertices
pub mod deformation;
/// Render orchestration and clipping
pub mod executor;
