//! Canvas configuration shared by layout and compositing

use crate::io::error::{Result, invalid_parameter};

/// Target canvas and base tile size, in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasSpec {
    width: u32,
    height: u32,
    base_tile_size: u32,
}

impl CanvasSpec {
    /// Create a canvas specification
    ///
    /// # Errors
    ///
    /// Returns an error if any dimension is zero
    pub fn new(width: u32, height: u32, base_tile_size: u32) -> Result<Self> {
        for (parameter, value) in [
            ("width", width),
            ("height", height),
            ("tile_size", base_tile_size),
        ] {
            if value == 0 {
                return Err(invalid_parameter(parameter, &value, &"must be positive"));
            }
        }

        Ok(Self {
            width,
            height,
            base_tile_size,
        })
    }

    /// Canvas width
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Canvas height
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Base tile size every tile is scaled from
    pub const fn base_tile_size(&self) -> u32 {
        self.base_tile_size
    }
}
