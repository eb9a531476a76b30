//! Circle-based collision detection
//!
//! Sprites are approximated by a single bounding circle each. Two circles
//! collide when their centers are strictly closer than the sum of their radii;
//! circles that merely touch do not collide.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// A bounding circle in screen space
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CollisionCircle {
    pub center: Vec2,
    pub radius: f32,
}

impl CollisionCircle {
    pub fn new(center: Vec2, radius: f32) -> Self {
        Self { center, radius }
    }

    /// True if the two circles overlap (touching is not overlapping)
    #[inline]
    pub fn overlaps(&self, other: &CollisionCircle) -> bool {
        circles_overlap(self.center, self.radius, other.center, other.radius)
    }
}

/// Euclidean center distance strictly less than the sum of radii
#[inline]
pub fn circles_overlap(a_center: Vec2, a_radius: f32, b_center: Vec2, b_radius: f32) -> bool {
    a_center.distance(b_center) < a_radius + b_radius
}
