//! Compositing placed tiles into the exported image

/// Stack-ordered compositing onto the canvas
pub mod compositor;
/// Rounded-rectangle clip geometry
pub mod geometry;

pub use compositor::Compositor;
