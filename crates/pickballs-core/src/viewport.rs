use glam::Vec2;

use crate::error::{PickError, Result};

/// Pixel dimensions of the rendering surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn aspect(&self) -> f32 {
        self.width / self.height.max(1.0)
    }

    pub fn contains(&self, x: f32, y: f32) -> bool {
        self.width > 0.0
            && self.height > 0.0
            && (0.0..=self.width).contains(&x)
            && (0.0..=self.height).contains(&y)
    }

    /// Map a pixel coordinate to normalized device coordinates.
    ///
    /// Pixel `y` grows downward while NDC `y` grows upward, so the vertical
    /// axis is flipped. Both edges of the surface are valid inputs.
    pub fn to_ndc(&self, x: f32, y: f32) -> Result<Vec2> {
        if !self.contains(x, y) {
            return Err(PickError::OutOfBoundsCoordinate {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        let ndc_x = x / self.width * 2.0 - 1.0;
        let ndc_y = (1.0 - y / self.height) * 2.0 - 1.0;
        Ok(Vec2::new(ndc_x, ndc_y))
    }
}
