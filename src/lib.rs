//! Asteroid Field - a headless arcade simulation core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, kinematics, collisions, game state)
//! - `renderer`: Tessellates a simulation snapshot into vertex lists
//! - `settings`: Field dimensions, seed and policy switches

pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::{ParticleBoundary, Settings};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Fixed timestep used by the headless runner (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Default play field dimensions
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 800.0;

    /// Large fragments spawned on the field edge at start and restart
    pub const INITIAL_FRAGMENTS: usize = 5;

    /// Fragment radii per size category
    pub const FRAGMENT_RADIUS_LARGE: f32 = 40.0;
    pub const FRAGMENT_RADIUS_MEDIUM: f32 = 20.0;
    pub const FRAGMENT_RADIUS_SMALL: f32 = 10.0;
    /// Random drift speed range for a fragment (units/s), size-independent
    pub const FRAGMENT_MIN_SPEED: f32 = 20.0;
    pub const FRAGMENT_MAX_SPEED: f32 = 70.0;
    /// Random spin range (degrees/s)
    pub const FRAGMENT_MAX_SPIN: f32 = 50.0;
    /// Children produced when a Large or Medium fragment splits
    pub const SPLIT_CHILDREN: usize = 2;
    /// Particles released whenever a fragment is destroyed
    pub const SPLIT_BURST_COUNT: usize = 10;

    /// Craft handling
    pub const CRAFT_ROTATION_SPEED: f32 = 400.0; // degrees/s
    pub const CRAFT_THRUST: f32 = 400.0; // units/s²
    pub const CRAFT_BRAKE: f32 = 0.95; // per tick, not dt-scaled
    /// Extra distance added to a fragment radius for the craft hit test
    pub const CRAFT_COLLISION_MARGIN: f32 = 15.0;
    /// Craft triangle extents (rendering only)
    pub const CRAFT_SIZE: f32 = 20.0;

    /// Projectiles
    pub const PROJECTILE_SPEED: f32 = 500.0;
    pub const PROJECTILE_MUZZLE_OFFSET: f32 = 20.0;
    pub const PROJECTILE_LIFETIME: f32 = 2.0;
    pub const PROJECTILE_RADIUS: f32 = 2.0;

    /// Burst particles
    pub const PARTICLE_LIFETIME: f32 = 2.0;
    pub const PARTICLE_MIN_SPEED: f32 = 5.0;
    pub const PARTICLE_MAX_SPEED: f32 = 75.0;
    pub const PARTICLE_RADIUS: f32 = 1.0;
}

/// Unit vector the craft points along for a rotation in degrees.
///
/// Rotation 0 faces "up" on screen (negative y); positive rotation turns clockwise.
#[inline]
pub fn facing_direction(rotation_deg: f32) -> Vec2 {
    let radians = rotation_deg.to_radians();
    Vec2::new(radians.sin(), -radians.cos())
}

/// Rotate a point about the origin by `angle_deg` degrees
#[inline]
pub fn rotate_point(point: Vec2, angle_deg: f32) -> Vec2 {
    Vec2::from_angle(angle_deg.to_radians()).rotate(point)
}

/// Unit vector for a polar angle in degrees (0 = +x)
#[inline]
pub fn direction_from_degrees(angle_deg: f32) -> Vec2 {
    let radians = angle_deg.to_radians();
    Vec2::new(radians.cos(), radians.sin())
}
