//! Layout constants and runtime configuration defaults

// Normalization
/// Longest side allowed for an imported photo before it is downsampled
pub const MAX_IMAGE_DIMENSION: u32 = 1800;

// Grid construction
/// Fraction of the base tile size between neighbouring grid cells
pub const OVERLAP_FACTOR: f64 = 0.55;
/// Extra columns and rows added beyond the canvas so edges bleed
pub const GRID_PADDING: usize = 2;
/// Fraction of the base tile size every tile is shifted up and left
pub const EDGE_BLEED_FACTOR: f64 = 0.2;
/// Fraction of the base tile size used as maximum jitter on either axis
pub const JITTER_FACTOR: f64 = 0.2;

// Safety limit to prevent excessive memory allocation
/// Maximum number of tiles a single layout pass may produce
pub const MAX_TOTAL_CELLS: usize = 100_000;

// Per-tile variation
/// Smallest tile scale factor (inclusive)
pub const MIN_TILE_SCALE: f64 = 0.9;
/// Largest tile scale factor (exclusive)
pub const MAX_TILE_SCALE: f64 = 1.3;
/// Height boost applied to portrait and square photos
pub const PORTRAIT_HEIGHT_FACTOR: f64 = 1.1;
/// Maximum absolute tile rotation in degrees
pub const MAX_ROTATION_DEGREES: f64 = 10.0;

// Compositing
/// Corner radius of the clip applied to every tile, in pixels
pub const CORNER_RADIUS: f64 = 8.0;
/// Canvas color behind all tiles
pub const BACKGROUND_COLOR: [u8; 4] = [0xf9, 0xf9, 0xf9, 0xff];
/// Tiles whose sources are scaled concurrently before being composited in order
pub const RENDER_BATCH_SIZE: usize = 64;

// Default values for configurable parameters
/// Default canvas width in pixels
pub const DEFAULT_CANVAS_WIDTH: u32 = 1200;
/// Default canvas height in pixels
pub const DEFAULT_CANVAS_HEIGHT: u32 = 800;
/// Default base tile size in pixels
pub const DEFAULT_TILE_SIZE: u32 = 200;

// Output settings
/// Prefix of exported collage filenames
pub const OUTPUT_PREFIX: &str = "photo-collage-";
/// Extension of exported collage filenames
pub const OUTPUT_EXTENSION: &str = "png";

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
