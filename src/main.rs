//! Raybox demo driver
//!
//! Sprays a handful of seeded random drag gestures into a scene and dumps the
//! traced paths as JSON on stdout. A renderer can pipe this straight in; the
//! same seed always produces the same output.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use raybox::Settings;
use raybox::consts::*;
use raybox::sim::{Rect, Scene};

/// Number of gestures the demo sprays
const DEMO_GESTURES: u32 = 4;

fn main() {
    env_logger::init();

    let seed: u64 = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(42);
    log::info!("Spraying {DEMO_GESTURES} gestures with seed {seed}");

    let rect = Rect::centered_in(1920.0, 1080.0, BOX_WIDTH, BOX_HEIGHT);
    let mut scene = Scene::new(rect, Settings::load());
    let mut rng = Pcg32::seed_from_u64(seed);

    for _ in 0..DEMO_GESTURES {
        let start = Vec2::new(
            rng.random_range(rect.x..rect.right()),
            rng.random_range(rect.y..rect.bottom()),
        );
        let end = start
            + Vec2::new(
                rng.random_range(-200.0..200.0),
                rng.random_range(-200.0..200.0),
            );
        if !scene.add_drag(start, end) {
            log::debug!("Skipped zero-length drag at {start}");
        }
    }

    let points: usize = scene.paths().iter().map(|p| p.point_count()).sum();
    log::info!(
        "Traced {} paths ({} retained configs, {points} points)",
        scene.paths().len(),
        scene.configs().len()
    );

    match serde_json::to_string_pretty(&scene) {
        Ok(json) => println!("{json}"),
        Err(err) => log::error!("Failed to serialize scene: {err}"),
    }
}
