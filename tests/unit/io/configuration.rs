//! Tests for layout constants and configuration defaults

#[cfg(test)]
mod tests {
    use photocollage::io::configuration::{
        BACKGROUND_COLOR, CORNER_RADIUS, DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH,
        DEFAULT_TILE_SIZE, EDGE_BLEED_FACTOR, GRID_PADDING, JITTER_FACTOR, MAX_IMAGE_DIMENSION,
        MAX_ROTATION_DEGREES, MAX_TILE_SCALE, MAX_TOTAL_CELLS, MIN_TILE_SCALE, OUTPUT_EXTENSION,
        OUTPUT_PREFIX, OVERLAP_FACTOR, PORTRAIT_HEIGHT_FACTOR, RENDER_BATCH_SIZE,
    };

    // Tests grid construction constants
    // Verified by changing the overlap factor
    #[test]
    fn test_grid_constants() {
        assert!((OVERLAP_FACTOR - 0.55).abs() < f64::EPSILON);
        assert_eq!(GRID_PADDING, 2);
        assert!((EDGE_BLEED_FACTOR - 0.2).abs() < f64::EPSILON);
        assert!((JITTER_FACTOR - 0.2).abs() < f64::EPSILON);
        assert_eq!(MAX_TOTAL_CELLS, 100_000);
    }

    // Tests per-tile variation ranges
    // Verified by widening the scale range
    #[test]
    fn test_tile_variation_constants() {
        assert!((MIN_TILE_SCALE - 0.9).abs() < f64::EPSILON);
        assert!((MAX_TILE_SCALE - 1.3).abs() < f64::EPSILON);
        assert!(MIN_TILE_SCALE < MAX_TILE_SCALE);
        assert!((PORTRAIT_HEIGHT_FACTOR - 1.1).abs() < f64::EPSILON);
        assert!((MAX_ROTATION_DEGREES - 10.0).abs() < f64::EPSILON);
    }

    // Tests normalization and compositing constants
    // Verified by changing the background colour
    #[test]
    fn test_image_constants() {
        assert_eq!(MAX_IMAGE_DIMENSION, 1800);
        assert!((CORNER_RADIUS - 8.0).abs() < f64::EPSILON);
        assert_eq!(BACKGROUND_COLOR, [0xf9, 0xf9, 0xf9, 0xff]);
        assert!(RENDER_BATCH_SIZE > 0);
    }

    // Tests defaults and output naming
    // Verified by changing the output prefix
    #[test]
    fn test_defaults_and_output_naming() {
        assert!(DEFAULT_CANVAS_WIDTH > 0 && DEFAULT_CANVAS_HEIGHT > 0 && DEFAULT_TILE_SIZE > 0);
        assert_eq!(OUTPUT_PREFIX, "photo-collage-");
        assert_eq!(OUTPUT_EXTENSION, "png");
    }
}
