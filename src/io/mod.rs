//! Input/output surface: command line, progress, export and error types

/// Command-line interface and end-to-end collage processing
pub mod cli;
/// Layout constants and runtime defaults
pub mod configuration;
/// Error types shared by every component
pub mod error;
/// PNG encoding and collage export
pub mod image;
/// Terminal progress reporting
pub mod progress;
