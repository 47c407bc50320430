//! Raybox - an interactive ray-bounce preview engine
//!
//! Core modules:
//! - `sim`: Deterministic ray tracing (box geometry, wall bounces, path data)
//! - `settings`: Slider-backed simulation parameters
//!
//! Rendering, pointer capture, and frame scheduling live in the embedding
//! application; this crate only turns gestures and parameters into path data.

pub mod settings;
pub mod sim;

pub use settings::Settings;

use glam::Vec2;

/// Simulation constants
pub mod consts {
    /// Distance a ray travels per simulation step (pixels)
    pub const RAY_SPEED: f32 = 10.0;
    /// Hard step ceiling per trace, independent of the bounce limit
    pub const MAX_TRACE_STEPS: u32 = 4000;

    /// Default enclosure size
    pub const BOX_WIDTH: f32 = 1200.0;
    pub const BOX_HEIGHT: f32 = 800.0;

    /// Parameter defaults (slider start positions)
    pub const DEFAULT_DIVERGENCE_DEG: f32 = 3.0;
    pub const DEFAULT_PAIR_COUNT: u32 = 1;
    pub const DEFAULT_MAX_BOUNCES: u32 = 10;
    pub const DEFAULT_DECAY_RATE: f32 = 0.0;
}

/// Angle of a vector in radians, measured from the +x axis
#[inline]
pub fn vec_angle(v: Vec2) -> f32 {
    v.y.atan2(v.x)
}

/// Vector of the given magnitude pointing at `angle` radians
#[inline]
pub fn vec_from_angle(angle: f32, magnitude: f32) -> Vec2 {
    Vec2::from_angle(angle) * magnitude
}
