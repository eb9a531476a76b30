//! Drawing surface abstraction
//!
//! The simulation never talks to a canvas or GPU directly. Everything it draws
//! goes through [`Surface::blit`]: copy a source sub-rectangle of an image to a
//! destination rectangle on screen.

use serde::{Deserialize, Serialize};

use crate::sim::CollisionCircle;

/// Axis-aligned rectangle in pixels (top-left origin, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Right edge
    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.w
    }
}

/// A loaded image: an opaque id the host understands plus its natural size
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImageHandle {
    pub id: u32,
    pub width: f32,
    pub height: f32,
}

impl ImageHandle {
    pub fn new(id: u32, width: f32, height: f32) -> Self {
        Self { id, width, height }
    }

    /// Full image as a source rectangle
    pub fn bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height)
    }
}

/// Anything the game can draw onto
pub trait Surface {
    /// Copy `src` (in image pixels) of `image` into `dst` (in screen pixels)
    fn blit(&mut self, image: &ImageHandle, src: Rect, dst: Rect);

    /// Outline a collision circle (debug overlay). Ignored by default.
    fn stroke_circle(&mut self, _circle: &CollisionCircle) {}
}

/// One recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Blit { image: u32, src: Rect, dst: Rect },
    Circle(CollisionCircle),
}

/// Surface that just remembers what was drawn.
///
/// Used by the headless runner and by tests to inspect a frame.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub calls: Vec<DrawCall>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget the previous frame
    pub fn clear(&mut self) {
        self.calls.clear();
    }

    /// Blits of a particular image, in draw order
    pub fn blits_of(&self, image_id: u32) -> Vec<(Rect, Rect)> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                DrawCall::Blit { image, src, dst } if *image == image_id => Some((*src, *dst)),
                _ => None,
            })
            .collect()
    }

    pub fn blit_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, DrawCall::Blit { .. }))
            .count()
    }

    pub fn circle_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, DrawCall::Circle(_)))
            .count()
    }
}

impl Surface for RecordingSurface {
    fn blit(&mut self, image: &ImageHandle, src: Rect, dst: Rect) {
        self.calls.push(DrawCall::Blit {
            image: image.id,
            src,
            dst,
        });
    }

    fn stroke_circle(&mut self, circle: &CollisionCircle) {
        self.calls.push(DrawCall::Circle(*circle));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn test_recording_surface_filters_by_image() {
        let sky = ImageHandle::new(1, 100.0, 50.0);
        let coin = ImageHandle::new(2, 60.0, 10.0);
        let mut surface = RecordingSurface::new();

        surface.blit(&sky, sky.bounds(), Rect::new(0.0, 0.0, 100.0, 50.0));
        surface.blit(&coin, Rect::new(10.0, 0.0, 10.0, 10.0), Rect::new(5.0, 5.0, 10.0, 10.0));
        surface.blit(&sky, sky.bounds(), Rect::new(100.0, 0.0, 100.0, 50.0));

        assert_eq!(surface.blit_count(), 3);
        let sky_blits = surface.blits_of(1);
        assert_eq!(sky_blits.len(), 2);
        assert_eq!(sky_blits[1].1.x, 100.0);

        surface.clear();
        assert_eq!(surface.blit_count(), 0);
    }

    #[test]
    fn test_default_stroke_is_noop() {
        struct Null(usize);
        impl Surface for Null {
            fn blit(&mut self, _: &ImageHandle, _: Rect, _: Rect) {
                self.0 += 1;
            }
        }

        let mut null = Null(0);
        null.stroke_circle(&CollisionCircle::new(Vec2::ZERO, 1.0));
        assert_eq!(null.0, 0);
    }
}
