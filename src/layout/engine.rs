//! Randomized tile placement over the overlap grid

use crate::io::configuration::{
    JITTER_FACTOR, MAX_ROTATION_DEGREES, MAX_TILE_SCALE, MIN_TILE_SCALE, PORTRAIT_HEIGHT_FACTOR,
};
use crate::io::error::{CollageError, Result};
use crate::io::progress::{Phase, ProgressReporter};
use crate::layout::grid::GridDimensions;
use crate::layout::sampling::sample_with_repetition;
use crate::model::{CanvasSpec, ImageRef, NormalizedImage, PhotoPool, PlacedTile};
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Width and height of a tile for a photo of the given aspect ratio
///
/// Landscape photos take their width from the base size; portrait and
/// square photos take a slightly boosted height instead.
pub fn tile_size(aspect_ratio: f64, base_tile_size: f64, scale: f64) -> (f64, f64) {
    if aspect_ratio > 1.0 {
        let width = base_tile_size * scale;
        (width, width / aspect_ratio)
    } else {
        let height = base_tile_size * scale * PORTRAIT_HEIGHT_FACTOR;
        (height * aspect_ratio, height)
    }
}

/// Produces collage layouts from a random source
///
/// Seeding the engine makes layouts reproducible.
pub struct LayoutEngine<R = StdRng> {
    rng: R,
}

impl LayoutEngine<StdRng> {
    /// Create an engine with a fixed seed
    pub fn from_seed(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Create an engine seeded from the operating system
    pub fn from_os_rng() -> Self {
        Self::new(StdRng::from_os_rng())
    }
}

impl<R: Rng> LayoutEngine<R> {
    /// Create an engine drawing from `rng`
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Place one tile on every cell of the grid covering `spec`
    ///
    /// Tiles are emitted in row-major cell order. Photos are reused as often
    /// as needed when the pool is smaller than the grid.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The pool is empty
    /// - The grid would exceed the tile limit
    pub fn layout(
        &mut self,
        pool: &PhotoPool,
        spec: &CanvasSpec,
        progress: &dyn ProgressReporter,
    ) -> Result<Vec<PlacedTile>> {
        if pool.is_empty() {
            return Err(CollageError::EmptyPool);
        }

        let grid = GridDimensions::for_canvas(spec)?;
        let total = grid.total_cells();
        log::debug!(
            "Layout grid {}x{} ({total} tiles, spacing {:.1})",
            grid.cols,
            grid.rows,
            grid.spacing
        );

        let assignments = sample_with_repetition(pool.len(), total, &mut self.rng);
        let base = f64::from(spec.base_tile_size());
        let mut tiles = Vec::with_capacity(total);
        let mut cells = assignments.into_iter();

        progress.report(Phase::Placing, 0, total);
        for row in 0..grid.rows {
            for col in 0..grid.cols {
                let Some(image) = cells.next() else {
                    break;
                };
                let aspect_ratio = pool
                    .get(image)
                    .map(NormalizedImage::aspect_ratio)
                    .ok_or(CollageError::InvalidImageRef {
                        index: image.index(),
                        pool_size: pool.len(),
                    })?;
                let origin = grid.cell_origin(row, col, base);
                tiles.push(self.place_tile(image, aspect_ratio, origin, base, total));
            }
            progress.report(Phase::Placing, tiles.len(), total);
        }

        Ok(tiles)
    }

    fn place_tile(
        &mut self,
        image: ImageRef,
        aspect_ratio: f64,
        origin: (f64, f64),
        base: f64,
        total: usize,
    ) -> PlacedTile {
        let scale = self.rng.random_range(MIN_TILE_SCALE..MAX_TILE_SCALE);
        let (width, height) = tile_size(aspect_ratio, base, scale);

        let jitter = base * JITTER_FACTOR;
        let x = origin.0 + self.rng.random_range(-jitter..jitter);
        let y = origin.1 + self.rng.random_range(-jitter..jitter);

        PlacedTile {
            image,
            x,
            y,
            width,
            height,
            rotation_degrees: self
                .rng
                .random_range(-MAX_ROTATION_DEGREES..MAX_ROTATION_DEGREES),
            stack_order: self.rng.random_range(0..total as u64),
        }
    }
}
