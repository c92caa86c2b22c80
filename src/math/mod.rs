//! Mathematical utilities for placement geometry and resampling

/// Bilinear pixel interpolation and alpha blending
pub mod interpolation;
/// Rigid tile transforms between canvas and tile space
pub mod transform;
