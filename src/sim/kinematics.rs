//! Per-entity integration and boundary policy
//!
//! Craft and fragments live on a torus; projectiles die at the edge. Burst
//! particles follow whichever policy the settings select.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::entity::{Entity, EntityKind};
use crate::settings::ParticleBoundary;

/// Rectangular play field `[0, width] × [0, height]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub width: f32,
    pub height: f32,
}

impl Field {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Inclusive bounds test
    pub fn contains(&self, pos: Vec2) -> bool {
        pos.x >= 0.0 && pos.x <= self.width && pos.y >= 0.0 && pos.y <= self.height
    }

    /// Toroidal wrap: past the far edge resets to 0, below 0 resets to the far edge
    pub fn wrap(&self, pos: Vec2) -> Vec2 {
        Vec2::new(wrap_axis(pos.x, self.width), wrap_axis(pos.y, self.height))
    }
}

#[inline]
fn wrap_axis(v: f32, extent: f32) -> f32 {
    if v > extent {
        0.0
    } else if v < 0.0 {
        extent
    } else {
        v
    }
}

/// What to do when an entity crosses the field edge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Boundary {
    Wrap,
    Despawn,
}

/// Boundary policy for an entity kind
pub fn boundary_for(kind: &EntityKind, particles: ParticleBoundary) -> Boundary {
    match kind {
        EntityKind::Craft | EntityKind::Fragment { .. } => Boundary::Wrap,
        EntityKind::Projectile { .. } => Boundary::Despawn,
        EntityKind::Particle { .. } => match particles {
            ParticleBoundary::Despawn => Boundary::Despawn,
            ParticleBoundary::Wrap => Boundary::Wrap,
        },
    }
}

/// Advance one entity by `dt` seconds and apply its boundary and lifetime rules.
///
/// Negative `dt` is treated as zero. Dead entities are left untouched.
pub fn integrate(entity: &mut Entity, dt: f32, field: &Field, particles: ParticleBoundary) {
    if !entity.alive {
        return;
    }
    let dt = dt.max(0.0);

    entity.pos += entity.vel * dt;

    match &mut entity.kind {
        EntityKind::Craft => {}
        EntityKind::Fragment {
            angular_velocity, ..
        } => {
            entity.rotation += *angular_velocity * dt;
        }
        EntityKind::Projectile { life } | EntityKind::Particle { life } => {
            *life -= dt;
            if *life <= 0.0 {
                entity.alive = false;
            }
        }
    }

    match boundary_for(&entity.kind, particles) {
        Boundary::Wrap => entity.pos = field.wrap(entity.pos),
        Boundary::Despawn => {
            if !field.contains(entity.pos) {
                entity.alive = false;
            }
        }
    }
}
