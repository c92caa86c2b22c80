//! Photo import: media type checks, decoding and downsampling

/// Concurrent batch normalization
pub mod batch;
/// Raw inputs and declared media types
pub mod media;
/// Single-photo decoding and downsampling
pub mod normalizer;

pub use batch::{BatchReport, SkippedInput, normalize_batch, normalize_files};
pub use media::RawImage;
pub use normalizer::normalize;
