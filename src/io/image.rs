//! PNG encoding and timestamped collage export

use crate::io::configuration::{OUTPUT_EXTENSION, OUTPUT_PREFIX};
use crate::io::error::{CollageError, Result};
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, RgbaImage};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

/// Filename for a collage exported at `timestamp_ms` (milliseconds since the Unix epoch)
pub fn collage_filename(timestamp_ms: u128) -> String {
    format!("{OUTPUT_PREFIX}{timestamp_ms}.{OUTPUT_EXTENSION}")
}

/// Milliseconds since the Unix epoch, or zero if the clock is before it
pub fn unix_timestamp_ms() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis())
        .unwrap_or_default()
}

/// Encode an RGBA canvas as PNG bytes
///
/// # Errors
///
/// Returns an error if the encoder rejects the buffer
pub fn encode_png(canvas: &RgbaImage) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    PngEncoder::new(&mut bytes)
        .write_image(
            canvas.as_raw(),
            canvas.width(),
            canvas.height(),
            ExtendedColorType::Rgba8,
        )
        .map_err(|source| CollageError::ImageExport {
            path: PathBuf::from("<memory>"),
            source,
        })?;
    Ok(bytes)
}

/// Write a collage into `output_dir` under a timestamped filename
///
/// Returns the path of the written file.
///
/// # Errors
///
/// Returns an error if:
/// - The output directory cannot be created
/// - PNG encoding fails
/// - The file cannot be written
pub fn export_collage(canvas: &RgbaImage, output_dir: &Path) -> Result<PathBuf> {
    std::fs::create_dir_all(output_dir).map_err(|source| CollageError::FileSystem {
        path: output_dir.to_path_buf(),
        operation: "create directory",
        source,
    })?;

    let output_path = output_dir.join(collage_filename(unix_timestamp_ms()));
    let bytes = encode_png(canvas).map_err(|error| match error {
        CollageError::ImageExport { source, .. } => CollageError::ImageExport {
            path: output_path.clone(),
            source,
        },
        other => other,
    })?;

    std::fs::write(&output_path, bytes).map_err(|source| CollageError::FileSystem {
        path: output_path.clone(),
        operation: "write collage",
        source,
    })?;

    log::info!(
        "Exported {}x{} collage to {}",
        canvas.width(),
        canvas.height(),
        output_path.display()
    );
    Ok(output_path)
}
