//! Rendering module
//!
//! The game only needs "blit a sub-rectangle of an image"; hosts implement
//! [`Surface`] on top of whatever canvas or GPU they have.

pub mod surface;

pub use surface::{DrawCall, ImageHandle, Rect, RecordingSurface, Surface};
