//! Rotation about a tile centre
//!
//! Canvas coordinates grow right and down, so positive angles turn
//! clockwise on screen.

/// Maps between tile-local coordinates (origin at the tile centre) and canvas coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileTransform {
    center: (f64, f64),
    cos: f64,
    sin: f64,
}

/// Axis-aligned bounds in canvas coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    /// Minimum x
    pub min_x: f64,
    /// Minimum y
    pub min_y: f64,
    /// Maximum x
    pub max_x: f64,
    /// Maximum y
    pub max_y: f64,
}

impl TileTransform {
    /// Translate to `center`, then rotate by `radians`
    pub fn new(center: (f64, f64), radians: f64) -> Self {
        let (sin, cos) = radians.sin_cos();
        Self { center, cos, sin }
    }

    /// Tile-local point to canvas
    pub fn to_canvas(&self, local: (f64, f64)) -> (f64, f64) {
        let (x, y) = local;
        (
            self.center.0 + x.mul_add(self.cos, -(y * self.sin)),
            self.center.1 + x.mul_add(self.sin, y * self.cos),
        )
    }

    /// Canvas point to tile-local
    pub fn to_local(&self, canvas: (f64, f64)) -> (f64, f64) {
        let dx = canvas.0 - self.center.0;
        let dy = canvas.1 - self.center.1;
        (
            dx.mul_add(self.cos, dy * self.sin),
            dy.mul_add(self.cos, -(dx * self.sin)),
        )
    }

    /// Canvas bounds of a centred rectangle with the given half extents
    pub fn bounds(&self, half_width: f64, half_height: f64) -> Bounds {
        let corners = [
            (-half_width, -half_height),
            (half_width, -half_height),
            (half_width, half_height),
            (-half_width, half_height),
        ];

        corners.iter().map(|&corner| self.to_canvas(corner)).fold(
            Bounds {
                min_x: f64::INFINITY,
                min_y: f64::INFINITY,
                max_x: f64::NEG_INFINITY,
                max_y: f64::NEG_INFINITY,
            },
            |bounds, (x, y)| Bounds {
                min_x: bounds.min_x.min(x),
                min_y: bounds.min_y.min(y),
                max_x: bounds.max_x.max(x),
                max_y: bounds.max_y.max(y),
            },
        )
    }
}
