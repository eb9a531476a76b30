//! Animated sprites that scroll in from the right
//!
//! A sprite sheet is a single horizontal strip of equally sized frames. The
//! animator cycles through them on a fixed tick cadence while the sprite
//! drifts left at the world's scroll speed.

use glam::Vec2;

use super::balloon::Balloon;
use super::collision::CollisionCircle;
use super::state::{TickState, Viewport};
use crate::renderer::{ImageHandle, Rect, Surface};

/// Anything that lives in an entity pool
pub trait Entity {
    /// Advance animation and scrolling by one tick
    fn update(&mut self, state: &TickState);

    fn render(&self, surface: &mut dyn Surface);

    fn collision_circle(&self) -> CollisionCircle;

    /// Overlaps the balloon
    fn collides(&self, balloon: &Balloon) -> bool {
        self.collision_circle().overlaps(&balloon.collision_circle())
    }

    /// Scrolled fully past the left edge
    fn has_exited(&self) -> bool;
}

/// Frame geometry of a sprite strip
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpriteSheet {
    pub image: ImageHandle,
    pub frames: u32,
    pub ticks_per_frame: u32,
    /// Natural size is divided by this when drawn
    pub scale: f32,
}

impl SpriteSheet {
    pub fn new(image: ImageHandle, frames: u32, ticks_per_frame: u32, scale: f32) -> Self {
        Self {
            image,
            frames: frames.max(1),
            ticks_per_frame,
            scale,
        }
    }

    /// Frame count, never 0
    #[inline]
    pub fn frame_count(&self) -> u32 {
        self.frames.max(1)
    }

    /// Width of one frame in the source image
    #[inline]
    pub fn cell_width(&self) -> f32 {
        self.image.width / self.frame_count() as f32
    }

    /// Width of one frame on screen
    #[inline]
    pub fn width(&self) -> f32 {
        self.cell_width() / self.scale
    }

    /// Height on screen
    #[inline]
    pub fn height(&self) -> f32 {
        self.image.height / self.scale
    }

    /// Source rectangle of a frame
    pub fn frame_rect(&self, frame: u32) -> Rect {
        let w = self.cell_width();
        Rect::new(frame as f32 * w, 0.0, w, self.image.height)
    }
}

/// One animated, scrolling sprite
#[derive(Debug, Clone, PartialEq)]
pub struct SpriteAnimator {
    pub sheet: SpriteSheet,
    /// Current frame, cycles through [0, frames)
    pub frame_index: u32,
    /// Ticks since the frame last advanced
    pub tick_count: u32,
    /// Distance scrolled since spawn; negative means still off the right edge
    pub offset: f32,
    elevation: f32,
    viewport: Viewport,
}

impl SpriteAnimator {
    pub fn new(sheet: SpriteSheet, viewport: Viewport, elevation: f32, offset: f32) -> Self {
        Self {
            sheet,
            frame_index: 0,
            tick_count: 0,
            offset,
            elevation,
            viewport,
        }
    }

    /// Screen y of the top edge, fixed at spawn
    #[inline]
    pub fn elevation(&self) -> f32 {
        self.elevation
    }

    /// Screen x of the left edge
    #[inline]
    pub fn x(&self) -> f32 {
        self.viewport.width - self.offset
    }
}

impl Entity for SpriteAnimator {
    fn update(&mut self, state: &TickState) {
        self.tick_count += 1;
        if self.tick_count > self.sheet.ticks_per_frame {
            self.tick_count = 0;
            self.frame_index = (self.frame_index + 1) % self.sheet.frame_count();
        }

        if state.moving {
            self.offset += state.speed;
        }
    }

    fn render(&self, surface: &mut dyn Surface) {
        let src = self.sheet.frame_rect(self.frame_index);
        let dst = Rect::new(self.x(), self.elevation, self.sheet.width(), self.sheet.height());
        surface.blit(&self.sheet.image, src, dst);
    }

    /// Quarter-height circle nudged in from the top-left corner.
    /// Not the geometric center; tuned to the art.
    fn collision_circle(&self) -> CollisionCircle {
        let radius = self.sheet.height() / 4.0;
        let inset = radius * (2.0 / 3.0);
        CollisionCircle::new(Vec2::new(self.x() + inset, self.elevation + inset), radius)
    }

    fn has_exited(&self) -> bool {
        self.offset > self.viewport.width + self.sheet.width()
    }
}
