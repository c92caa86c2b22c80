//! Decoding and downsampling of individual photos

use crate::io::configuration::MAX_IMAGE_DIMENSION;
use crate::io::error::{CollageError, Result};
use crate::model::NormalizedImage;
use crate::normalize::media::RawImage;
use image::error::{ParameterError, ParameterErrorKind};
use image::imageops::FilterType;
use image::{ImageError, RgbaImage};

/// Decode a raw input into a normalized photo
///
/// Photos whose longest side exceeds [`MAX_IMAGE_DIMENSION`] are resampled
/// so that side becomes exactly that long; smaller photos keep their
/// decoded pixels untouched.
///
/// # Errors
///
/// Returns an error if:
/// - The declared media type is not an image type
/// - The bytes cannot be decoded
/// - The decoded image has a zero dimension
pub fn normalize(raw: &RawImage) -> Result<NormalizedImage> {
    if !raw.is_declared_image() {
        return Err(CollageError::UnsupportedMediaType {
            path: raw.label.clone(),
            media_type: raw.media_type.clone(),
        });
    }

    let decoded =
        image::load_from_memory(&raw.bytes).map_err(|source| CollageError::ImageLoad {
            path: raw.label.clone(),
            source,
        })?;

    let pixels = downsample_to_fit(decoded.to_rgba8(), MAX_IMAGE_DIMENSION);

    NormalizedImage::new(pixels).ok_or_else(|| CollageError::ImageLoad {
        path: raw.label.clone(),
        source: ImageError::Parameter(ParameterError::from_kind(
            ParameterErrorKind::DimensionMismatch,
        )),
    })
}

/// Dimensions after scaling so the longest side is at most `max_dimension`
///
/// Aspect ratio is preserved; neither side drops below one pixel.
pub fn fit_within(width: u32, height: u32, max_dimension: u32) -> (u32, u32) {
    let longest = width.max(height);
    if longest <= max_dimension {
        return (width, height);
    }

    let scale = f64::from(max_dimension) / f64::from(longest);
    let scaled = |side: u32| ((f64::from(side) * scale).round() as u32).clamp(1, max_dimension);
    (scaled(width), scaled(height))
}

fn downsample_to_fit(pixels: RgbaImage, max_dimension: u32) -> RgbaImage {
    let (width, height) = pixels.dimensions();
    let (target_width, target_height) = fit_within(width, height, max_dimension);
    if (target_width, target_height) == (width, height) {
        return pixels;
    }

    log::debug!("Downsampling {width}x{height} photo to {target_width}x{target_height}");
    image::imageops::resize(&pixels, target_width, target_height, FilterType::Lanczos3)
}
