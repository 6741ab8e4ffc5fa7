//! Construction of fragments, projectiles and burst particles
//!
//! All randomness is drawn from the caller's RNG so a seeded run is reproducible.

use glam::Vec2;
use rand::Rng;

use super::entity::{Entity, FragmentSize};
use super::kinematics::Field;
use crate::consts::*;
use crate::{direction_from_degrees, facing_direction};

/// What a destroyed fragment leaves behind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitRule {
    /// Child size and count, if the fragment breaks into smaller ones
    pub children: Option<(FragmentSize, usize)>,
    /// Burst particles released at the fragment's position
    pub burst: usize,
}

/// Split table keyed by parent size
pub const fn split_rule(size: FragmentSize) -> SplitRule {
    match size.child() {
        Some(child) => SplitRule {
            children: Some((child, SPLIT_CHILDREN)),
            burst: SPLIT_BURST_COUNT,
        },
        None => SplitRule {
            children: None,
            burst: SPLIT_BURST_COUNT,
        },
    }
}

/// Entities created during a tick, appended to storage after collision resolution
#[derive(Debug, Clone, Default)]
pub struct PendingSpawns {
    pub fragments: Vec<Entity>,
    pub particles: Vec<Entity>,
}

impl PendingSpawns {
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty() && self.particles.is_empty()
    }
}

/// A fragment with a random drift added to the inherited velocity and a random spin
pub fn spawn_fragment<R: Rng + ?Sized>(
    size: FragmentSize,
    pos: Vec2,
    inherited_vel: Vec2,
    rng: &mut R,
) -> Entity {
    let speed = rng.random_range(FRAGMENT_MIN_SPEED..FRAGMENT_MAX_SPEED);
    let angle = rng.random_range(0.0f32..360.0);
    let spin = rng.random_range(-FRAGMENT_MAX_SPIN..=FRAGMENT_MAX_SPIN);
    let vel = inherited_vel + direction_from_degrees(angle) * speed;
    Entity::fragment(size, pos, vel, spin)
}

/// Random point on the field edge: pick an axis, then near or far edge
pub fn edge_position<R: Rng + ?Sized>(field: &Field, rng: &mut R) -> Vec2 {
    if rng.random_bool(0.5) {
        let x = rng.random_range(0.0..field.width);
        let y = if rng.random_bool(0.5) { 0.0 } else { field.height };
        Vec2::new(x, y)
    } else {
        let x = if rng.random_bool(0.5) { 0.0 } else { field.width };
        let y = rng.random_range(0.0..field.height);
        Vec2::new(x, y)
    }
}

/// `count` Large fragments on the field edge, with no inherited velocity
pub fn spawn_wave<R: Rng + ?Sized>(field: &Field, count: usize, rng: &mut R) -> Vec<Entity> {
    (0..count)
        .map(|_| {
            let pos = edge_position(field, rng);
            spawn_fragment(FragmentSize::Large, pos, Vec2::ZERO, rng)
        })
        .collect()
}

/// A projectile leaving the craft's muzzle along its facing direction
pub fn spawn_projectile(craft: &Entity) -> Entity {
    let dir = facing_direction(craft.rotation);
    let pos = craft.pos + dir * PROJECTILE_MUZZLE_OFFSET;
    let vel = craft.vel + dir * PROJECTILE_SPEED;
    Entity::projectile(pos, vel)
}

/// `count` particles scattered around the parent velocity
pub fn spawn_burst<R: Rng + ?Sized>(pos: Vec2, vel: Vec2, count: usize, rng: &mut R) -> Vec<Entity> {
    (0..count)
        .map(|_| {
            let angle = rng.random_range(0.0f32..360.0);
            let speed = rng.random_range(PARTICLE_MIN_SPEED..=PARTICLE_MAX_SPEED);
            Entity::particle(pos, vel + direction_from_degrees(angle) * speed)
        })
        .collect()
}

/// Queue the children and burst for a destroyed fragment.
///
/// Non-fragments queue nothing.
pub fn split_fragment<R: Rng + ?Sized>(parent: &Entity, rng: &mut R, pending: &mut PendingSpawns) {
    let Some(size) = parent.fragment_size() else {
        return;
    };
    let rule = split_rule(size);

    if let Some((child, count)) = rule.children {
        for _ in 0..count {
            pending
                .fragments
                .push(spawn_fragment(child, parent.pos, parent.vel, rng));
        }
    }
    pending
        .particles
        .extend(spawn_burst(parent.pos, parent.vel, rule.burst, rng));
}
