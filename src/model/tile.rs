//! Placed tile records produced by a layout pass

use crate::model::image::ImageRef;

/// One photo instance placed on the canvas
///
/// Coordinates are canvas pixels and may lie outside the canvas. Only
/// `stack_order` changes after placement.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedTile {
    /// Photo drawn by this tile
    pub image: ImageRef,
    /// Left edge before rotation
    pub x: f64,
    /// Top edge before rotation
    pub y: f64,
    /// Drawn width
    pub width: f64,
    /// Drawn height
    pub height: f64,
    /// Rotation about the tile centre, in degrees
    pub rotation_degrees: f64,
    /// Compositing priority, higher draws later
    pub stack_order: u64,
}

impl PlacedTile {
    /// Centre of the tile in canvas coordinates
    pub fn center(&self) -> (f64, f64) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Rotation in radians
    pub fn rotation_radians(&self) -> f64 {
        self.rotation_degrees.to_radians()
    }
}

/// Indices of `tiles` in compositing order
///
/// Stable: tiles sharing a stack order keep their list order.
pub fn stacking_order(tiles: &[PlacedTile]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..tiles.len()).collect();
    order.sort_by_key(|&index| tiles.get(index).map_or(0, |tile| tile.stack_order));
    order
}
