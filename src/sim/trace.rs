//! Fixed-step ray trace
//!
//! Core engine that advances a ray deterministically, one velocity step at a
//! time, until it has used up its bounce budget or hits the step ceiling.

use glam::Vec2;

use super::collision::deflect_walls;
use super::path::{Path, PathBuilder};
use super::rect::Rect;

/// Trace a ray through the enclosure.
///
/// Each step advances the position by one velocity vector, applies wall
/// deflection, and records the resulting point. Wall contact closes the open
/// segment at the impact point and starts the next one there. A corner hit
/// reflects both velocity components but counts as a single bounce event.
///
/// The trace stops once `max_bounces` bounce events have occurred or
/// `max_steps` steps have been taken, whichever comes first; `max_steps` is
/// the unconditional ceiling that keeps a near-zero velocity from spinning
/// forever. Callers filter zero-magnitude velocities before a ray is created.
pub fn trace(origin: Vec2, velocity: Vec2, rect: &Rect, max_bounces: u32, max_steps: u32) -> Path {
    let mut pos = origin;
    let mut vel = velocity;
    let mut bounces = 0;
    let mut steps = 0;
    let mut builder = PathBuilder::new(origin);

    while bounces < max_bounces && steps < max_steps {
        pos += vel;
        steps += 1;

        let deflection = deflect_walls(&mut pos, &mut vel, rect);
        builder.visit(pos);

        if deflection.any() {
            builder.break_at(pos);
            bounces += 1;
        }
    }

    builder.finish()
}
