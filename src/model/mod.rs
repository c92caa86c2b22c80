//! Data model shared by the normalizer, layout engine and compositor
//!
//! This module contains:
//! - Normalized photos and the pool owning them
//! - Placed tile records
//! - Canvas configuration

/// Canvas dimensions and base tile size
pub mod canvas;
/// Normalized photos, pool references and the pool itself
pub mod image;
/// Placed tile records and stacking order
pub mod tile;

pub use canvas::CanvasSpec;
pub use image::{ImageRef, NormalizedImage, PhotoPool};
pub use tile::PlacedTile;
