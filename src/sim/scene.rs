//! Scene state and ray regeneration
//!
//! The scene owns everything needed to rebuild every path from scratch: the
//! enclosure, the current settings, and one `RayConfig` per completed drag.
//! Slider and box changes call back into `recompute`, which replaces the
//! cached paths wholesale instead of letting a redraw loop mask stale data.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::fan::expand;
use super::path::Path;
use super::rect::Rect;
use super::trace::trace;
use crate::settings::Settings;
use crate::{vec_angle, vec_from_angle};

/// Origin and direction captured from one completed drag gesture.
///
/// Never mutated after creation; kept so paths can be regenerated when any
/// parameter changes, without re-reading the gesture.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RayConfig {
    pub origin: Vec2,
    pub dir: Vec2,
}

impl RayConfig {
    /// Build a config from a drag's endpoints. Returns `None` for a
    /// zero-length drag, which creates no ray.
    pub fn from_drag(start: Vec2, end: Vec2) -> Option<Self> {
        let dir = end - start;
        if dir.length_squared() == 0.0 {
            return None;
        }
        Some(Self { origin: start, dir })
    }

    /// Step velocity for this ray: drag direction at the configured speed.
    /// The drag's length carries no meaning beyond being nonzero.
    pub fn velocity(&self, speed: f32) -> Vec2 {
        vec_from_angle(vec_angle(self.dir), speed)
    }
}

/// Retained ray configs plus the paths traced from them
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scene {
    rect: Rect,
    settings: Settings,
    configs: Vec<RayConfig>,
    paths: Vec<Path>,
}

impl Scene {
    pub fn new(rect: Rect, settings: Settings) -> Self {
        Self {
            rect,
            settings: settings.clamped(),
            configs: Vec::new(),
            paths: Vec::new(),
        }
    }

    #[inline]
    pub fn rect(&self) -> &Rect {
        &self.rect
    }

    #[inline]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Retained drag configs, oldest first
    pub fn configs(&self) -> &[RayConfig] {
        &self.configs
    }

    /// Current traced paths, one per fan direction per retained config
    pub fn paths(&self) -> &[Path] {
        &self.paths
    }

    /// Complete a drag gesture: retain its config and append its paths.
    /// Returns false for a drag that is zero-length or starts outside the
    /// enclosure; neither creates a ray.
    pub fn add_drag(&mut self, start: Vec2, end: Vec2) -> bool {
        if !self.rect.contains(start) {
            return false;
        }
        let Some(config) = RayConfig::from_drag(start, end) else {
            return false;
        };
        let mut paths = self.trace_fan(&config);
        self.configs.push(config);
        self.paths.append(&mut paths);
        true
    }

    /// Paths for an in-progress drag, without retaining anything. The
    /// embedding app draws these live while the pointer is still down.
    pub fn preview(&self, start: Vec2, end: Vec2) -> Vec<Path> {
        if !self.rect.contains(start) {
            return Vec::new();
        }
        match RayConfig::from_drag(start, end) {
            Some(config) => self.trace_fan(&config),
            None => Vec::new(),
        }
    }

    /// Replace the settings and retrace every retained config
    pub fn set_settings(&mut self, settings: Settings) {
        self.settings = settings.clamped();
        self.recompute();
    }

    /// Replace the enclosure and retrace every retained config
    pub fn set_rect(&mut self, rect: Rect) {
        self.rect = rect;
        self.recompute();
    }

    /// Drop all retained configs and paths
    pub fn reset(&mut self) {
        self.configs.clear();
        self.paths.clear();
    }

    /// Rebuild the full path set from the retained configs
    pub fn recompute(&mut self) {
        self.paths = self
            .configs
            .iter()
            .flat_map(|config| self.trace_fan(config))
            .collect();
    }

    /// Expand one config into its fan and trace each direction
    fn trace_fan(&self, config: &RayConfig) -> Vec<Path> {
        let base = config.velocity(self.settings.ray_speed);
        expand(base, self.settings.divergence_angle, self.settings.pair_count)
            .into_iter()
            .map(|vel| {
                trace(
                    config.origin,
                    vel,
                    &self.rect,
                    self.settings.max_bounces,
                    self.settings.max_steps,
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_scene() -> Scene {
        Scene::new(Rect::new(0.0, 0.0, 400.0, 300.0), Settings::default())
    }

    #[test]
    fn test_zero_length_drag_ignored() {
        let mut scene = test_scene();
        assert!(!scene.add_drag(Vec2::new(50.0, 50.0), Vec2::new(50.0, 50.0)));
        assert!(scene.configs().is_empty());
        assert!(scene.paths().is_empty());
    }

    #[test]
    fn test_drag_from_outside_the_box_ignored() {
        let mut scene = test_scene();
        assert!(!scene.add_drag(Vec2::new(-10.0, 50.0), Vec2::new(60.0, 50.0)));
        assert!(scene.configs().is_empty());
        assert!(scene
            .preview(Vec2::new(500.0, 50.0), Vec2::new(60.0, 50.0))
            .is_empty());
    }

    #[test]
    fn test_drag_spawns_fan() {
        let mut scene = test_scene();
        assert!(scene.add_drag(Vec2::new(200.0, 150.0), Vec2::new(260.0, 150.0)));

        assert_eq!(scene.configs().len(), 1);
        // Default settings: one pair flanking the base ray
        assert_eq!(
            scene.paths().len(),
            1 + 2 * Settings::default().pair_count as usize
        );
    }

    #[test]
    fn test_drag_length_does_not_matter() {
        let mut short = test_scene();
        let mut long = test_scene();
        short.add_drag(Vec2::new(200.0, 150.0), Vec2::new(201.0, 150.0));
        long.add_drag(Vec2::new(200.0, 150.0), Vec2::new(390.0, 150.0));

        assert_eq!(short.paths(), long.paths());
    }

    #[test]
    fn test_settings_change_retraces_retained_configs() {
        let mut scene = test_scene();
        scene.add_drag(Vec2::new(200.0, 150.0), Vec2::new(260.0, 180.0));
        scene.add_drag(Vec2::new(100.0, 100.0), Vec2::new(150.0, 90.0));
        let before = scene.paths().to_vec();

        let mut settings = *scene.settings();
        settings.pair_count = 3;
        scene.set_settings(settings);

        assert_eq!(scene.configs().len(), 2);
        assert_eq!(scene.paths().len(), 2 * 7);
        assert_ne!(scene.paths(), before.as_slice());

        // Restoring the old settings restores the exact same paths
        settings.pair_count = Settings::default().pair_count;
        scene.set_settings(settings);
        assert_eq!(scene.paths(), before.as_slice());
    }

    #[test]
    fn test_rect_change_retraces() {
        let mut scene = test_scene();
        scene.add_drag(Vec2::new(200.0, 150.0), Vec2::new(260.0, 150.0));
        let before = scene.paths().to_vec();

        scene.set_rect(Rect::new(0.0, 0.0, 250.0, 300.0));
        assert_ne!(scene.paths(), before.as_slice());
    }

    #[test]
    fn test_preview_is_transient() {
        let scene = test_scene();
        let paths = scene.preview(Vec2::new(200.0, 150.0), Vec2::new(220.0, 160.0));

        assert!(!paths.is_empty());
        assert!(scene.configs().is_empty());
        assert!(scene.paths().is_empty());
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut scene = test_scene();
        scene.add_drag(Vec2::new(200.0, 150.0), Vec2::new(260.0, 150.0));
        scene.reset();

        assert!(scene.configs().is_empty());
        assert!(scene.paths().is_empty());
    }
}
