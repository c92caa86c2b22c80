//! Flattening a layout onto a single canvas
//!
//! Tiles are drawn strictly by ascending stack order. Shrinking each source
//! photo towards its tile size is independent work and runs on the rayon
//! pool in batches; the batch is then composited sequentially, so
//! preparation completion order never affects the result.
//!
//! Sources are never enlarged: a tile larger than its photo samples the
//! shared pixels directly, so memory stays bounded by the normalized photo
//! size whatever the tile size.

use crate::io::configuration::{BACKGROUND_COLOR, CORNER_RADIUS, RENDER_BATCH_SIZE};
use crate::io::error::{CollageError, Result};
use crate::math::interpolation::{blend_over, sample_bilinear};
use crate::math::transform::TileTransform;
use crate::model::tile::stacking_order;
use crate::model::{CanvasSpec, PhotoPool, PlacedTile};
use crate::render::geometry::{edge_coverage, rounded_rect_distance};
use image::imageops::FilterType;
use image::{Rgba, RgbaImage};
use rayon::prelude::*;
use std::sync::Arc;

/// Tile with its source shrunk to at most the drawn size
struct PreparedTile<'a> {
    tile: &'a PlacedTile,
    source: Arc<RgbaImage>,
}

/// Renders placed tiles onto a flat RGBA canvas
#[derive(Debug, Clone, Copy)]
pub struct Compositor {
    background: Rgba<u8>,
    corner_radius: f64,
}

impl Default for Compositor {
    fn default() -> Self {
        Self::new(BACKGROUND_COLOR, CORNER_RADIUS)
    }
}

impl Compositor {
    /// Create a compositor with a background colour and tile corner radius
    pub const fn new(background: [u8; 4], corner_radius: f64) -> Self {
        Self {
            background: Rgba(background),
            corner_radius,
        }
    }

    /// Draw `tiles` over the background in stack order
    ///
    /// The result always measures exactly the canvas size; tile parts
    /// outside the canvas are discarded.
    ///
    /// # Errors
    ///
    /// Returns an error if a tile references a photo missing from `pool`
    pub fn render(
        &self,
        tiles: &[PlacedTile],
        pool: &PhotoPool,
        spec: &CanvasSpec,
    ) -> Result<RgbaImage> {
        let mut canvas = RgbaImage::from_pixel(spec.width(), spec.height(), self.background);
        let order: Vec<&PlacedTile> = stacking_order(tiles)
            .into_iter()
            .filter_map(|index| tiles.get(index))
            .collect();

        for batch in order.chunks(RENDER_BATCH_SIZE) {
            let prepared = batch
                .par_iter()
                .map(|&tile| prepare(tile, pool))
                .collect::<Result<Vec<_>>>()?;

            for tile in &prepared {
                self.draw(&mut canvas, tile);
            }
        }

        Ok(canvas)
    }

    fn draw(&self, canvas: &mut RgbaImage, prepared: &PreparedTile<'_>) {
        let tile = prepared.tile;
        let half_width = tile.width / 2.0;
        let half_height = tile.height / 2.0;
        let transform = TileTransform::new(tile.center(), tile.rotation_radians());

        // One pixel of padding keeps the anti-aliased edge inside the scan
        let bounds = transform.bounds(half_width + 1.0, half_height + 1.0);
        let x_start = bounds.min_x.floor().max(0.0) as u32;
        let y_start = bounds.min_y.floor().max(0.0) as u32;
        let x_end = bounds.max_x.ceil().min(f64::from(canvas.width())) as u32;
        let y_end = bounds.max_y.ceil().min(f64::from(canvas.height())) as u32;

        let scale_x = f64::from(prepared.source.width()) / tile.width;
        let scale_y = f64::from(prepared.source.height()) / tile.height;

        for py in y_start..y_end {
            for px in x_start..x_end {
                let local = transform.to_local((f64::from(px) + 0.5, f64::from(py) + 0.5));
                let distance =
                    rounded_rect_distance(local, half_width, half_height, self.corner_radius);
                let coverage = edge_coverage(distance);
                if coverage <= 0.0 {
                    continue;
                }

                let color = sample_bilinear(
                    &prepared.source,
                    (local.0 + half_width) * scale_x,
                    (local.1 + half_height) * scale_y,
                );
                if let Some(pixel) = canvas.get_pixel_mut_checked(px, py) {
                    blend_over(pixel, color, coverage);
                }
            }
        }
    }
}

fn prepare<'a>(tile: &'a PlacedTile, pool: &PhotoPool) -> Result<PreparedTile<'a>> {
    let image = pool.get(tile.image).ok_or(CollageError::InvalidImageRef {
        index: tile.image.index(),
        pool_size: pool.len(),
    })?;

    let pixels = image.pixels();
    let target_width = shrunk_side(pixels.width(), tile.width);
    let target_height = shrunk_side(pixels.height(), tile.height);
    if (target_width, target_height) == pixels.dimensions() {
        return Ok(PreparedTile {
            tile,
            source: Arc::clone(pixels),
        });
    }

    let source = image::imageops::resize(
        pixels.as_ref(),
        target_width,
        target_height,
        FilterType::Triangle,
    );
    Ok(PreparedTile {
        tile,
        source: Arc::new(source),
    })
}

/// Pixel count along one side after shrinking towards `drawn`, never growing
fn shrunk_side(source: u32, drawn: f64) -> u32 {
    if drawn >= f64::from(source) {
        source
    } else {
        drawn.ceil().max(1.0) as u32
    }
}
