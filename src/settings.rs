//! Simulation settings
//!
//! Loaded from an optional JSON file by the runner; everything has a default.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// What happens to a burst particle that leaves the field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ParticleBoundary {
    /// Marked dead, same as projectiles
    #[default]
    Despawn,
    /// Reappears on the opposite edge, same as fragments
    Wrap,
}

impl ParticleBoundary {
    pub fn as_str(&self) -> &'static str {
        match self {
            ParticleBoundary::Despawn => "despawn",
            ParticleBoundary::Wrap => "wrap",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "despawn" => Some(ParticleBoundary::Despawn),
            "wrap" => Some(ParticleBoundary::Wrap),
            _ => None,
        }
    }
}

/// Simulation settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Play field width in world units
    pub width: f32,
    /// Play field height in world units
    pub height: f32,
    /// Seed for the spawn RNG
    pub seed: u64,
    /// Large fragments placed on the edge at start and restart
    pub initial_fragments: usize,
    /// Boundary policy for burst particles
    pub particle_boundary: ParticleBoundary,
    /// Per-tick velocity multiplier for the craft (None = no drag)
    pub craft_drag: Option<f32>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            width: FIELD_WIDTH,
            height: FIELD_HEIGHT,
            seed: 0x5EED_A57E,
            initial_fragments: INITIAL_FRAGMENTS,
            particle_boundary: ParticleBoundary::Despawn,
            craft_drag: None,
        }
    }
}

impl Settings {
    /// Smallest accepted field extent, keeps spawn ranges non-empty
    pub const MIN_FIELD_EXTENT: f32 = 1.0;
    /// Largest opening wave accepted from a settings file
    pub const MAX_INITIAL_FRAGMENTS: usize = 256;

    /// Default settings with a specific field size
    pub fn with_field(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
        .sanitized()
    }

    /// Clamp values that would leave the simulation without a usable field
    pub fn sanitized(mut self) -> Self {
        self.width = sanitize_extent("width", self.width, FIELD_WIDTH);
        self.height = sanitize_extent("height", self.height, FIELD_HEIGHT);
        if self.initial_fragments > Self::MAX_INITIAL_FRAGMENTS {
            log::warn!(
                "Opening wave of {} fragments too large, clamping to {}",
                self.initial_fragments,
                Self::MAX_INITIAL_FRAGMENTS
            );
            self.initial_fragments = Self::MAX_INITIAL_FRAGMENTS;
        }
        if let Some(drag) = self.craft_drag {
            if !drag.is_finite() {
                self.craft_drag = None;
            } else {
                self.craft_drag = Some(drag.clamp(0.0, 1.0));
            }
        }
        self
    }

    /// Parse settings from JSON, falling back to defaults on error
    pub fn from_json(json: &str) -> Self {
        match serde_json::from_str::<Settings>(json) {
            Ok(settings) => settings.sanitized(),
            Err(e) => {
                log::warn!("Invalid settings ({}), using defaults", e);
                Self::default()
            }
        }
    }

    /// Load settings from a JSON file, falling back to defaults
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => {
                log::info!("Loaded settings from {}", path.display());
                Self::from_json(&json)
            }
            Err(e) => {
                log::warn!("Could not read {} ({}), using defaults", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}

/// Non-finite extents fall back to the default, tiny ones clamp to the minimum
fn sanitize_extent(name: &str, value: f32, default: f32) -> f32 {
    if !value.is_finite() {
        log::warn!("Field {} {} is not finite, using {}", name, value, default);
        default
    } else if value < Settings::MIN_FIELD_EXTENT {
        log::warn!("Field {} {} too small, clamping", name, value);
        Settings::MIN_FIELD_EXTENT
    } else {
        value
    }
}
