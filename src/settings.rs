//! Simulation settings
//!
//! The slider-backed parameter set. Sliders are range-bounded upstream, but
//! everything entering a scene passes through `clamped` anyway so a hostile
//! config file cannot smuggle in a negative bounce budget or a NaN angle.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Slider bounds
pub const MAX_DIVERGENCE: f32 = std::f32::consts::FRAC_PI_4;
pub const MAX_PAIR_COUNT: u32 = 10;
pub const MAX_BOUNCE_LIMIT: u32 = 100;
pub const MAX_DECAY_RATE: f32 = 1.0;

/// User-tunable simulation parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Angular gap between adjacent fan rays (radians)
    pub divergence_angle: f32,
    /// Number of symmetric ray pairs flanking the base ray
    pub pair_count: u32,
    /// Maximum reflection events per ray
    pub max_bounces: u32,
    /// Distance a ray travels per step (pixels)
    pub ray_speed: f32,
    /// Hard step ceiling per trace
    pub max_steps: u32,
    /// Per-segment-index opacity falloff; rendering only, the simulator
    /// never reads it
    pub decay_rate: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            divergence_angle: DEFAULT_DIVERGENCE_DEG.to_radians(),
            pair_count: DEFAULT_PAIR_COUNT,
            max_bounces: DEFAULT_MAX_BOUNCES,
            ray_speed: RAY_SPEED,
            max_steps: MAX_TRACE_STEPS,
            decay_rate: DEFAULT_DECAY_RATE,
        }
    }
}

impl Settings {
    /// Copy of these settings with every field forced into its slider range
    pub fn clamped(mut self) -> Self {
        self.divergence_angle = sanitize(self.divergence_angle, 0.0, MAX_DIVERGENCE);
        self.pair_count = self.pair_count.min(MAX_PAIR_COUNT);
        self.max_bounces = self.max_bounces.min(MAX_BOUNCE_LIMIT);
        self.ray_speed = sanitize(self.ray_speed, 1.0, 100.0);
        self.max_steps = self.max_steps.clamp(1, MAX_TRACE_STEPS);
        self.decay_rate = sanitize(self.decay_rate, 0.0, MAX_DECAY_RATE);
        self
    }

    /// Opacity for the segment at `index` along a path, from the decay rate
    pub fn segment_alpha(&self, index: usize) -> f32 {
        (1.0 - index as f32 * self.decay_rate).max(0.0)
    }

    /// Settings file next to the binary
    const SETTINGS_FILE: &'static str = "raybox_settings.json";

    /// Load settings from disk, falling back to defaults on any error
    pub fn load() -> Self {
        match std::fs::read_to_string(Self::SETTINGS_FILE) {
            Ok(json) => match serde_json::from_str::<Settings>(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", Self::SETTINGS_FILE);
                    settings.clamped()
                }
                Err(err) => {
                    log::warn!("Ignoring malformed settings file: {err}");
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }

    /// Save settings to disk
    pub fn save(&self) {
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(err) = std::fs::write(Self::SETTINGS_FILE, json) {
                    log::warn!("Failed to save settings: {err}");
                } else {
                    log::info!("Settings saved");
                }
            }
            Err(err) => log::warn!("Failed to serialize settings: {err}"),
        }
    }
}

/// Clamp a float into range, mapping NaN to the low end
fn sanitize(value: f32, min: f32, max: f32) -> f32 {
    if value.is_nan() {
        min
    } else {
        value.clamp(min, max)
    }
}
