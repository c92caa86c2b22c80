//! Grid geometry for a layout pass
//!
//! The grid is deliberately larger than the canvas: cells are spaced at a
//! fraction of the base tile size so neighbouring tiles overlap, and extra
//! columns and rows are added so tiles bleed past every edge.

use crate::io::configuration::{EDGE_BLEED_FACTOR, GRID_PADDING, MAX_TOTAL_CELLS, OVERLAP_FACTOR};
use crate::io::error::{CollageError, Result};
use crate::model::CanvasSpec;

/// Cell layout derived from a canvas specification
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridDimensions {
    /// Distance between neighbouring cell origins
    pub spacing: f64,
    /// Number of columns
    pub cols: usize,
    /// Number of rows
    pub rows: usize,
}

impl GridDimensions {
    /// Compute the grid for a canvas
    ///
    /// # Errors
    ///
    /// Returns an error if the grid would hold more than [`MAX_TOTAL_CELLS`] cells
    pub fn for_canvas(spec: &CanvasSpec) -> Result<Self> {
        let spacing = f64::from(spec.base_tile_size()) * OVERLAP_FACTOR;
        let cells_along = |extent: u32| (f64::from(extent) / spacing).ceil() as usize + GRID_PADDING;

        let grid = Self {
            spacing,
            cols: cells_along(spec.width()),
            rows: cells_along(spec.height()),
        };

        match grid.cols.checked_mul(grid.rows) {
            Some(total) if total <= MAX_TOTAL_CELLS => Ok(grid),
            _ => Err(CollageError::GridTooLarge {
                grid_dimensions: (grid.cols, grid.rows),
                max_cells: MAX_TOTAL_CELLS,
            }),
        }
    }

    /// Total number of cells, one tile each
    pub const fn total_cells(&self) -> usize {
        self.cols * self.rows
    }

    /// Top-left origin of a cell before jitter, in canvas coordinates
    pub fn cell_origin(&self, row: usize, col: usize, base_tile_size: f64) -> (f64, f64) {
        let bleed = base_tile_size * EDGE_BLEED_FACTOR;
        (
            (col as f64).mul_add(self.spacing, -bleed),
            (row as f64).mul_add(self.spacing, -bleed),
        )
    }
}
