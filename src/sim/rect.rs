//! Axis-aligned enclosure geometry
//!
//! The enclosure is a rectangle `{x, y, w, h}` with walls at `x`, `x + w`,
//! `y`, `y + h`. It may be resized between traces but is constant during a
//! single trace.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// The rectangular enclosure rays bounce inside
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Left wall position
    pub x: f32,
    /// Top wall position
    pub y: f32,
    /// Width (always positive)
    pub w: f32,
    /// Height (always positive)
    pub h: f32,
}

impl Rect {
    /// Create an enclosure. Panics if either dimension is not positive; a
    /// degenerate box has no interior for a ray to travel in.
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        assert!(w > 0.0 && h > 0.0, "enclosure dimensions must be positive");
        Self { x, y, w, h }
    }

    /// Box of size `w` x `h` centered in an outer viewport
    pub fn centered_in(viewport_w: f32, viewport_h: f32, w: f32, h: f32) -> Self {
        Self::new((viewport_w - w) / 2.0, (viewport_h - h) / 2.0, w, h)
    }

    /// Right wall position
    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    /// Bottom wall position
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    /// Check if a point is inside the closed rectangle (walls included)
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.x && p.x <= self.right() && p.y >= self.y && p.y <= self.bottom()
    }

    /// Clamp a point into the closed rectangle
    pub fn clamp_point(&self, p: Vec2) -> Vec2 {
        Vec2::new(
            p.x.clamp(self.x, self.right()),
            p.y.clamp(self.y, self.bottom()),
        )
    }
}
