//! Scrapbook-style photo collages
//!
//! Photos are normalized into a shared pool, scattered over an overlapping
//! grid that bleeds past the canvas edges with random size, jitter, rotation
//! and stacking, and finally flattened into a single PNG.

#![forbid(unsafe_code)]

/// Command line, progress reporting, export and error handling
pub mod io;
/// Randomized tile placement over the overlap grid
pub mod layout;
/// Rotation transforms, interpolation and blending
pub mod math;
/// Photos, tiles and canvas configuration
pub mod model;
/// Photo import: media type checks, decoding and downsampling
pub mod normalize;
/// Stack-ordered compositing of placed tiles
pub mod render;
/// Session state tying import, layout, restacking and export together
pub mod session;

pub use io::error::{CollageError, Result};
pub use session::Session;
