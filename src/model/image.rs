//! Normalized photos and the pool that owns them

use image::RgbaImage;
use std::sync::Arc;

/// Decoded photo ready for placement
///
/// Pixel data is reference counted so that the pool, the layout and the
/// compositor can share it without copies. Immutable once created.
#[derive(Debug, Clone)]
pub struct NormalizedImage {
    pixels: Arc<RgbaImage>,
    aspect_ratio: f64,
}

impl NormalizedImage {
    /// Wrap decoded pixels, returning `None` for zero-sized images
    pub fn new(pixels: RgbaImage) -> Option<Self> {
        let (width, height) = pixels.dimensions();
        (width > 0 && height > 0).then(|| Self {
            aspect_ratio: f64::from(width) / f64::from(height),
            pixels: Arc::new(pixels),
        })
    }

    /// Pixel width
    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    /// Pixel height
    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// Width divided by height
    pub const fn aspect_ratio(&self) -> f64 {
        self.aspect_ratio
    }

    /// Shared handle to the pixel data
    pub const fn pixels(&self) -> &Arc<RgbaImage> {
        &self.pixels
    }
}

/// Reference from a tile into the photo pool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ImageRef(pub usize);

impl ImageRef {
    /// Position of the referenced photo in the pool
    pub const fn index(self) -> usize {
        self.0
    }
}

/// Imported photos available for placement
///
/// Only ever appended to or cleared, so every `ImageRef` handed out stays
/// valid until the next `clear`.
#[derive(Debug, Clone, Default)]
pub struct PhotoPool {
    images: Vec<NormalizedImage>,
}

impl PhotoPool {
    /// Create an empty pool
    pub const fn new() -> Self {
        Self { images: Vec::new() }
    }

    /// Append photos in the given order
    pub fn extend(&mut self, images: impl IntoIterator<Item = NormalizedImage>) {
        self.images.extend(images);
    }

    /// Remove every photo
    pub fn clear(&mut self) {
        self.images.clear();
    }

    /// Look up a photo by reference
    pub fn get(&self, image: ImageRef) -> Option<&NormalizedImage> {
        self.images.get(image.index())
    }

    /// Number of photos
    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// Whether no photos have been imported
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// References to every photo in pool order
    pub fn refs(&self) -> impl Iterator<Item = ImageRef> + '_ {
        (0..self.images.len()).map(ImageRef)
    }

    /// Iterate photos in pool order
    pub fn iter(&self) -> impl Iterator<Item = &NormalizedImage> {
        self.images.iter()
    }
}
