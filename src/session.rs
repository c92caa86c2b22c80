//! Collage session owning the photo pool and the current layout
//!
//! All shared state lives here and changes only through the methods below:
//! importing appends to the pool, generating replaces the layout wholesale,
//! restacking bumps a single tile, and clearing drops everything.

use crate::io::error::{CollageError, Result};
use crate::io::image::{encode_png, export_collage};
use crate::io::progress::ProgressReporter;
use crate::layout::LayoutEngine;
use crate::model::{CanvasSpec, NormalizedImage, PhotoPool, PlacedTile};
use crate::normalize::{SkippedInput, normalize_files};
use crate::render::Compositor;
use image::RgbaImage;
use rand::Rng;
use std::path::{Path, PathBuf};

/// Result of importing a batch of files
#[derive(Debug)]
pub struct ImportSummary {
    /// Inputs processed, including skipped ones
    pub processed: usize,
    /// Photos added to the pool
    pub imported: usize,
    /// Inputs left out of the pool
    pub skipped: Vec<SkippedInput>,
}

#[derive(Debug, Clone)]
struct Layout {
    spec: CanvasSpec,
    tiles: Vec<PlacedTile>,
    max_stack_order: u64,
}

/// Photos, the current layout and the restack counter
#[derive(Debug, Default)]
pub struct Session {
    pool: PhotoPool,
    layout: Option<Layout>,
    compositor: Compositor,
}

impl Session {
    /// Create an empty session
    pub fn new() -> Self {
        Self::default()
    }

    /// Imported photos
    pub const fn pool(&self) -> &PhotoPool {
        &self.pool
    }

    /// Tiles of the current layout, if one has been generated
    pub fn tiles(&self) -> Option<&[PlacedTile]> {
        self.layout.as_ref().map(|layout| layout.tiles.as_slice())
    }

    /// Canvas of the current layout, if one has been generated
    pub fn canvas(&self) -> Option<CanvasSpec> {
        self.layout.as_ref().map(|layout| layout.spec)
    }

    /// Append already normalized photos to the pool
    pub fn add_photos(&mut self, images: Vec<NormalizedImage>) {
        self.pool.extend(images);
    }

    /// Read, normalize and append files
    ///
    /// Inputs that are not images, cannot be read or fail to decode are
    /// skipped without affecting the rest of the batch.
    pub fn import_files(&mut self, paths: &[PathBuf], progress: &dyn ProgressReporter) -> ImportSummary {
        let report = normalize_files(paths, progress);
        let summary = ImportSummary {
            processed: report.processed,
            imported: report.images.len(),
            skipped: report.skipped,
        };
        self.add_photos(report.images);
        summary
    }

    /// Replace the current layout with a fresh one
    ///
    /// # Errors
    ///
    /// Returns an error, leaving the session unchanged, if:
    /// - No photos have been imported
    /// - The grid would exceed the tile limit
    pub fn generate_layout<R: Rng>(
        &mut self,
        engine: &mut LayoutEngine<R>,
        spec: CanvasSpec,
        progress: &dyn ProgressReporter,
    ) -> Result<&[PlacedTile]> {
        let tiles = engine.layout(&self.pool, &spec, progress)?;
        let layout = self.layout.insert(Layout {
            spec,
            max_stack_order: tiles.len() as u64,
            tiles,
        });
        Ok(&layout.tiles)
    }

    /// Raise a tile above every other tile
    ///
    /// Returns the tile's new stack order.
    ///
    /// # Errors
    ///
    /// Returns an error if no layout exists or the index is out of range
    pub fn bring_to_front(&mut self, index: usize) -> Result<u64> {
        let layout = self.layout.as_mut().ok_or(CollageError::NoLayout)?;
        let tile_count = layout.tiles.len();
        let tile = layout
            .tiles
            .get_mut(index)
            .ok_or(CollageError::InvalidTileIndex { index, tile_count })?;

        layout.max_stack_order += 1;
        tile.stack_order = layout.max_stack_order;
        Ok(tile.stack_order)
    }

    /// Flatten the current layout
    ///
    /// # Errors
    ///
    /// Returns an error if no layout exists or a tile cannot be resolved
    pub fn render(&self) -> Result<RgbaImage> {
        let layout = self.layout.as_ref().ok_or(CollageError::NoLayout)?;
        self.compositor
            .render(&layout.tiles, &self.pool, &layout.spec)
    }

    /// Flatten the current layout into PNG bytes
    ///
    /// # Errors
    ///
    /// Returns an error if rendering or encoding fails
    pub fn render_png(&self) -> Result<Vec<u8>> {
        encode_png(&self.render()?)
    }

    /// Flatten the current layout and write it into `output_dir`
    ///
    /// Nothing is written when rendering fails.
    ///
    /// # Errors
    ///
    /// Returns an error if no layout exists, rendering fails or the file
    /// cannot be written
    pub fn export(&self, output_dir: &Path) -> Result<PathBuf> {
        let canvas = self.render()?;
        export_collage(&canvas, output_dir)
    }

    /// Drop every photo and the current layout
    pub fn clear(&mut self) {
        self.pool.clear();
        self.layout = None;
    }
}
