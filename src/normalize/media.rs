//! Raw inputs and their declared media types

use crate::io::error::{CollageError, Result};
use image::ImageFormat;
use std::path::{Path, PathBuf};

/// Undecoded input as handed over by the file selection surface
#[derive(Debug, Clone)]
pub struct RawImage {
    /// Label used in logs and errors, usually the source path
    pub label: PathBuf,
    /// Media type declared for the input, e.g. `image/jpeg`
    pub media_type: Option<String>,
    /// Encoded file contents
    pub bytes: Vec<u8>,
}

impl RawImage {
    /// Create a raw input from in-memory bytes
    pub fn new(label: impl Into<PathBuf>, media_type: Option<&str>, bytes: Vec<u8>) -> Self {
        Self {
            label: label.into(),
            media_type: media_type.map(str::to_owned),
            bytes,
        }
    }

    /// Read a file, declaring its media type from the extension
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read
    pub fn from_path(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path).map_err(|source| CollageError::PhotoRead {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(Self {
            label: path.to_path_buf(),
            media_type: media_type_for_path(path).map(str::to_owned),
            bytes,
        })
    }

    /// Whether the declared media type is an image type
    pub fn is_declared_image(&self) -> bool {
        self.media_type.as_deref().is_some_and(is_image_media_type)
    }
}

/// Media type implied by a file extension, if it names an image format
pub fn media_type_for_path(path: &Path) -> Option<&'static str> {
    ImageFormat::from_path(path)
        .ok()
        .map(|format| format.to_mime_type())
}

/// Whether a media type string belongs to the `image/` family
pub fn is_image_media_type(media_type: &str) -> bool {
    media_type
        .get(..6)
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case("image/"))
}
