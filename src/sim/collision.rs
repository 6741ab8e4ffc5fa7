//! Proximity tests between projectiles, fragments and the craft
//!
//! Resolution only clears liveness flags and queues spawns. Storage is never
//! resized here; the tick compacts once resolution is finished.

use glam::Vec2;
use rand::Rng;

use super::entity::{Entity, FragmentSize};
use super::spawn::{PendingSpawns, split_fragment};
use crate::consts::CRAFT_COLLISION_MARGIN;

/// Outcome of one resolution pass
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CollisionReport {
    /// Size and position of each fragment destroyed this pass, in hit order
    pub destroyed: Vec<(FragmentSize, Vec2)>,
    /// A live fragment overlapped the craft
    pub craft_hit: bool,
}

/// Projectile inside a fragment's radius
#[inline]
pub fn projectile_hits_fragment(projectile: &Entity, fragment: &Entity) -> bool {
    match fragment.fragment_size() {
        Some(size) => projectile.pos.distance(fragment.pos) < size.radius(),
        None => false,
    }
}

/// Craft within a fragment's radius plus the craft margin
#[inline]
pub fn craft_hits_fragment(craft: &Entity, fragment: &Entity) -> bool {
    match fragment.fragment_size() {
        Some(size) => craft.pos.distance(fragment.pos) < size.radius() + CRAFT_COLLISION_MARGIN,
        None => false,
    }
}

/// Match every live projectile against live fragments.
///
/// A projectile is consumed by the first fragment it overlaps in storage
/// order, and a fragment killed earlier in the pass is never matched again.
/// Children and bursts go to `pending` and are not tested until the next tick.
pub fn resolve_projectile_hits<R: Rng + ?Sized>(
    projectiles: &mut [Entity],
    fragments: &mut [Entity],
    rng: &mut R,
    pending: &mut PendingSpawns,
) -> Vec<(FragmentSize, Vec2)> {
    let mut destroyed = Vec::new();

    for projectile in projectiles.iter_mut().filter(|p| p.alive) {
        let hit = fragments
            .iter_mut()
            .filter(|f| f.alive)
            .find(|f| projectile_hits_fragment(projectile, f));

        if let Some(fragment) = hit {
            projectile.alive = false;
            fragment.alive = false;
            split_fragment(fragment, rng, pending);
            if let Some(size) = fragment.fragment_size() {
                log::debug!("{:?} fragment destroyed at ({:.1}, {:.1})", size, fragment.pos.x, fragment.pos.y);
                destroyed.push((size, fragment.pos));
            }
        }
    }

    destroyed
}

/// Whether any live fragment overlaps the craft
pub fn craft_collides(craft: &Entity, fragments: &[Entity]) -> bool {
    fragments
        .iter()
        .filter(|f| f.alive)
        .any(|f| craft_hits_fragment(craft, f))
}

/// Full resolution pass: projectile hits first, then the craft test against
/// fragments that survived them.
pub fn resolve<R: Rng + ?Sized>(
    craft: &Entity,
    projectiles: &mut [Entity],
    fragments: &mut [Entity],
    rng: &mut R,
    pending: &mut PendingSpawns,
) -> CollisionReport {
    let destroyed = resolve_projectile_hits(projectiles, fragments, rng, pending);
    let craft_hit = craft_collides(craft, fragments);
    CollisionReport { destroyed, craft_hit }
}
