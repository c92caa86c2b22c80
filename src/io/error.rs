//! Error types for collage import, layout and export

use std::fmt;
use std::path::PathBuf;

/// Main error type for all collage operations
#[derive(Debug)]
pub enum CollageError {
    /// Failed to decode a source image
    ImageLoad {
        /// Label of the input (usually its path)
        path: PathBuf,
        /// Underlying image decoding error
        source: image::ImageError,
    },

    /// Failed to read a photo file during import
    PhotoRead {
        /// Path of the photo
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Input was not declared as an image and was skipped
    UnsupportedMediaType {
        /// Label of the input
        path: PathBuf,
        /// Declared media type, if any could be determined
        media_type: Option<String>,
    },

    /// Collage generation requested with no photos in the pool
    EmptyPool,

    /// Export or restack requested before any layout was generated
    NoLayout,

    /// Layout grid would exceed the configured cell limit
    GridTooLarge {
        /// Grid dimensions (cols, rows)
        grid_dimensions: (usize, usize),
        /// Maximum number of cells allowed
        max_cells: usize,
    },

    /// Configuration parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Tile index exceeds the current layout
    InvalidTileIndex {
        /// The invalid tile index
        index: usize,
        /// Number of tiles in the layout
        tile_count: usize,
    },

    /// Tile references an image that is not in the pool
    InvalidImageRef {
        /// The dangling pool index
        index: usize,
        /// Current pool size
        pool_size: usize,
    },

    /// Failed to encode or save the flattened collage
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image encoding error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl CollageError {
    /// Whether this error only excludes a single input from an import batch
    pub const fn is_skippable(&self) -> bool {
        matches!(
            self,
            Self::ImageLoad { .. } | Self::PhotoRead { .. } | Self::UnsupportedMediaType { .. }
        )
    }

    /// Whether this error reports a user-facing precondition rather than a failure
    pub const fn is_precondition(&self) -> bool {
        matches!(self, Self::EmptyPool | Self::NoLayout)
    }
}

impl fmt::Display for CollageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::PhotoRead { path, source } => {
                write!(f, "Failed to read photo '{}': {source}", path.display())
            }
            Self::UnsupportedMediaType { path, media_type } => match media_type {
                Some(media_type) => write!(
                    f,
                    "Skipping '{}': media type '{media_type}' is not an image",
                    path.display()
                ),
                None => write!(
                    f,
                    "Skipping '{}': unknown media type",
                    path.display()
                ),
            },
            Self::EmptyPool => write!(f, "Please upload some photos first"),
            Self::NoLayout => write!(f, "Please generate a collage first"),
            Self::GridTooLarge {
                grid_dimensions,
                max_cells,
            } => {
                write!(
                    f,
                    "Layout grid {}x{} exceeds the limit of {max_cells} tiles",
                    grid_dimensions.0, grid_dimensions.1
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::InvalidTileIndex { index, tile_count } => {
                write!(
                    f,
                    "Tile index {index} is out of bounds (layout has {tile_count} tiles)"
                )
            }
            Self::InvalidImageRef { index, pool_size } => {
                write!(
                    f,
                    "Image reference {index} is out of bounds (pool has {pool_size} photos)"
                )
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export collage to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for CollageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::PhotoRead { source, .. } | Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for collage results
pub type Result<T> = std::result::Result<T, CollageError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> CollageError {
    CollageError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
