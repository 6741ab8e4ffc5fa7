//! Entity model shared by every simulated body
//!
//! One record shape (position, velocity, rotation, liveness) plus a closed set
//! of kind variants holding the per-kind attributes.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Fragment size category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FragmentSize {
    Large,
    Medium,
    Small,
}

impl FragmentSize {
    /// Collision and render radius; the only source of a fragment's radius
    pub const fn radius(self) -> f32 {
        match self {
            FragmentSize::Large => FRAGMENT_RADIUS_LARGE,
            FragmentSize::Medium => FRAGMENT_RADIUS_MEDIUM,
            FragmentSize::Small => FRAGMENT_RADIUS_SMALL,
        }
    }

    /// Size of the children produced when this fragment splits
    pub const fn child(self) -> Option<FragmentSize> {
        match self {
            FragmentSize::Large => Some(FragmentSize::Medium),
            FragmentSize::Medium => Some(FragmentSize::Small),
            FragmentSize::Small => None,
        }
    }
}

/// Kind tag plus per-kind attributes
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum EntityKind {
    Craft,
    Fragment {
        size: FragmentSize,
        /// Degrees per second
        angular_velocity: f32,
    },
    Projectile {
        /// Seconds remaining
        life: f32,
    },
    Particle {
        /// Seconds remaining
        life: f32,
    },
}

/// A simulated body
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Degrees
    pub rotation: f32,
    pub alive: bool,
    pub kind: EntityKind,
}

impl Entity {
    /// The player's craft, at rest and facing up
    pub fn craft(pos: Vec2) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            rotation: 0.0,
            alive: true,
            kind: EntityKind::Craft,
        }
    }

    pub fn fragment(size: FragmentSize, pos: Vec2, vel: Vec2, angular_velocity: f32) -> Self {
        Self {
            pos,
            vel,
            rotation: 0.0,
            alive: true,
            kind: EntityKind::Fragment {
                size,
                angular_velocity,
            },
        }
    }

    pub fn projectile(pos: Vec2, vel: Vec2) -> Self {
        Self {
            pos,
            vel,
            rotation: 0.0,
            alive: true,
            kind: EntityKind::Projectile {
                life: PROJECTILE_LIFETIME,
            },
        }
    }

    pub fn particle(pos: Vec2, vel: Vec2) -> Self {
        Self {
            pos,
            vel,
            rotation: 0.0,
            alive: true,
            kind: EntityKind::Particle {
                life: PARTICLE_LIFETIME,
            },
        }
    }

    /// Fragment size, if this is a fragment
    pub fn fragment_size(&self) -> Option<FragmentSize> {
        match self.kind {
            EntityKind::Fragment { size, .. } => Some(size),
            _ => None,
        }
    }

    /// Kind-specific radius (craft has none; it collides through a margin)
    pub fn radius(&self) -> Option<f32> {
        match self.kind {
            EntityKind::Craft => None,
            EntityKind::Fragment { size, .. } => Some(size.radius()),
            EntityKind::Projectile { .. } => Some(PROJECTILE_RADIUS),
            EntityKind::Particle { .. } => Some(PARTICLE_RADIUS),
        }
    }

    /// Remaining lifetime for short-lived kinds
    pub fn life(&self) -> Option<f32> {
        match self.kind {
            EntityKind::Projectile { life } | EntityKind::Particle { life } => Some(life),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_radius_is_function_of_size() {
        assert_eq!(FragmentSize::Large.radius(), 40.0);
        assert_eq!(FragmentSize::Medium.radius(), 20.0);
        assert_eq!(FragmentSize::Small.radius(), 10.0);

        let e = Entity::fragment(FragmentSize::Medium, Vec2::ZERO, Vec2::ZERO, 12.0);
        assert_eq!(e.radius(), Some(20.0));
        assert_eq!(e.fragment_size(), Some(FragmentSize::Medium));
    }

    #[test]
    fn test_split_chain_terminates() {
        assert_eq!(FragmentSize::Large.child(), Some(FragmentSize::Medium));
        assert_eq!(FragmentSize::Medium.child(), Some(FragmentSize::Small));
        assert_eq!(FragmentSize::Small.child(), None);
    }

    #[test]
    fn test_short_lived_kinds_start_with_full_life() {
        let p = Entity::projectile(Vec2::ZERO, Vec2::X);
        assert_eq!(p.life(), Some(2.0));
        assert_eq!(p.radius(), Some(2.0));

        let q = Entity::particle(Vec2::ZERO, Vec2::X);
        assert_eq!(q.life(), Some(2.0));
        assert_eq!(q.radius(), Some(1.0));

        let c = Entity::craft(Vec2::new(400.0, 400.0));
        assert_eq!(c.life(), None);
        assert_eq!(c.radius(), None);
        assert!(c.alive);
    }
}
