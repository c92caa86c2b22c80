//! Tests for single-photo decoding and downsampling

#[cfg(test)]
mod tests {
    use crate::png_bytes;
    use photocollage::CollageError;
    use photocollage::io::configuration::MAX_IMAGE_DIMENSION;
    use photocollage::normalize::RawImage;
    use photocollage::normalize::normalizer::{fit_within, normalize};

    // Tests dimensions within the limit are untouched
    // Verified by always scaling to the limit
    #[test]
    fn test_fit_within_keeps_small_images() {
        assert_eq!(fit_within(1800, 1200, 1800), (1800, 1200));
        assert_eq!(fit_within(10, 20, 1800), (10, 20));
    }

    // Tests oversized dimensions scale the longest side to the limit
    // Verified by scaling only the longest side
    #[test]
    fn test_fit_within_scales_longest_side() {
        assert_eq!(fit_within(3600, 2400, 1800), (1800, 1200));
        assert_eq!(fit_within(1000, 4000, 1800), (450, 1800));
        assert_eq!(fit_within(1801, 1801, 1800), (1800, 1800));
        // Extreme panoramas keep at least one pixel
        assert_eq!(fit_within(100_000, 10, 1800), (1800, 1));
    }

    // Tests small photos keep their decoded pixels
    // Verified by resampling every photo
    #[test]
    fn test_normalize_small_photo() {
        let raw = RawImage::new("small.png", Some("image/png"), png_bytes(40, 30, [5, 6, 7, 255]));

        let image = normalize(&raw).expect("normalizes");

        assert_eq!((image.width(), image.height()), (40, 30));
        assert!((image.aspect_ratio() - 4.0 / 3.0).abs() < 1e-12);
        assert!(image.pixels().pixels().all(|pixel| pixel.0 == [5, 6, 7, 255]));
    }

    // Tests large photos are downsampled preserving aspect ratio
    // Verified by removing the downsampling step
    #[test]
    fn test_normalize_large_photo() {
        let raw = RawImage::new("wide.png", Some("image/png"), png_bytes(2000, 500, [0, 0, 0, 255]));

        let image = normalize(&raw).expect("normalizes");

        assert_eq!(image.width(), MAX_IMAGE_DIMENSION);
        assert_eq!(image.height(), 450);
    }

    // Tests non-image media types are refused before decoding
    // Verified by decoding regardless of the declared type
    #[test]
    fn test_normalize_rejects_non_image() {
        let raw = RawImage::new("photo.png", Some("application/pdf"), png_bytes(4, 4, [0, 0, 0, 255]));

        assert!(matches!(
            normalize(&raw),
            Err(CollageError::UnsupportedMediaType { .. })
        ));
    }

    // Tests undecodable data is reported as a load error
    // Verified by returning an empty image instead
    #[test]
    fn test_normalize_rejects_garbage() {
        let raw = RawImage::new("fake.jpg", Some("image/jpeg"), b"definitely not a jpeg".to_vec());

        let error = normalize(&raw).expect_err("garbage should not decode");
        assert!(matches!(error, CollageError::ImageLoad { .. }));
        assert!(error.is_skippable());
    }
}
