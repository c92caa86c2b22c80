//! Layout engine: grid geometry, photo sampling and tile placement

/// Randomized tile placement
pub mod engine;
/// Grid geometry derived from the canvas
pub mod grid;
/// Photo sampling with repetition
pub mod sampling;

pub use engine::LayoutEngine;
pub use grid::GridDimensions;
