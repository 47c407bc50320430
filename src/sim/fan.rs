//! Divergence fan
//!
//! A single drag gesture spawns a pencil of rays: the base direction plus
//! symmetric pairs rotated away from it by a fixed angular step.

use glam::Vec2;

use crate::{vec_angle, vec_from_angle};

/// Expand a base direction into a fan of `1 + 2 * pair_count` directions.
///
/// The base vector comes first, unmodified. Pair `i` contributes the base
/// angle rotated by `-angle_step * i` then `+angle_step * i`, magnitude
/// preserved. Callers must not pass a zero-magnitude base; zero-length drags
/// are filtered out before a ray is ever created.
pub fn expand(base: Vec2, angle_step: f32, pair_count: u32) -> Vec<Vec2> {
    let base_angle = vec_angle(base);
    let magnitude = base.length();

    let mut directions = Vec::with_capacity(1 + 2 * pair_count as usize);
    directions.push(base);
    for i in 1..=pair_count {
        let offset = angle_step * i as f32;
        directions.push(vec_from_angle(base_angle - offset, magnitude));
        directions.push(vec_from_angle(base_angle + offset, magnitude));
    }
    directions
}
