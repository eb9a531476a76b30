//! Horizontally scrolling, seamlessly tiled background

use super::state::{TickState, Viewport};
use crate::renderer::{ImageHandle, Rect, Surface};

/// The sky. Scaled to the viewport height and tiled horizontally.
#[derive(Debug, Clone)]
pub struct Background {
    /// Scroll distance into the current tile, in [0, scaled_width)
    pub offset: f32,
    image: ImageHandle,
    viewport: Viewport,
}

impl Background {
    pub fn new(image: ImageHandle, viewport: Viewport) -> Self {
        Self {
            offset: 0.0,
            image,
            viewport,
        }
    }

    /// Image height divided by viewport height
    #[inline]
    pub fn scale(&self) -> f32 {
        self.image.height / self.viewport.height
    }

    /// Width of one tile on screen
    #[inline]
    pub fn scaled_width(&self) -> f32 {
        self.image.width / self.scale()
    }

    pub fn update(&mut self, state: &TickState) {
        if !state.moving {
            return;
        }
        let width = self.scaled_width();
        if width <= 0.0 {
            return;
        }

        self.offset += state.speed;
        // Repeated subtraction rather than `%` so odd speeds still land in range
        while self.offset >= width {
            self.offset -= width;
        }
        while self.offset < 0.0 {
            self.offset += width;
        }
    }

    /// Tile from `-offset` until the viewport is covered
    pub fn draw(&self, surface: &mut dyn Surface) {
        let width = self.scaled_width();
        if width <= 0.0 {
            return;
        }
        let mut x = -self.offset;
        while x < self.viewport.width {
            let dst = Rect::new(x, 0.0, width, self.viewport.height);
            surface.blit(&self.image, self.image.bounds(), dst);
            x += width;
        }
    }
}
