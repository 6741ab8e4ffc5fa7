//! Read-only view of the world for renderers and HUDs

use glam::Vec2;
use serde::Serialize;

use super::entity::{Entity, EntityKind, FragmentSize};
use super::kinematics::Field;
use super::state::GameState;

/// Entity kind as seen by a renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ViewKind {
    Craft,
    Fragment(FragmentSize),
    Projectile,
    Particle,
}

/// One drawable entity
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EntityView {
    pub kind: ViewKind,
    pub position: Vec2,
    /// Degrees
    pub rotation: f32,
    /// Fragment, projectile and particle radius; none for the craft
    pub radius: Option<f32>,
}

impl From<&Entity> for EntityView {
    fn from(entity: &Entity) -> Self {
        let kind = match entity.kind {
            EntityKind::Craft => ViewKind::Craft,
            EntityKind::Fragment { size, .. } => ViewKind::Fragment(size),
            EntityKind::Projectile { .. } => ViewKind::Projectile,
            EntityKind::Particle { .. } => ViewKind::Particle,
        };
        Self {
            kind,
            position: entity.pos,
            rotation: entity.rotation,
            radius: entity.radius(),
        }
    }
}

/// Everything a renderer needs after a tick
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub field: Field,
    pub is_game_over: bool,
    pub fragment_count: usize,
    /// Craft first, then fragments, projectiles and particles
    pub entities: Vec<EntityView>,
}

impl Snapshot {
    pub fn capture(state: &GameState) -> Self {
        let entities = std::iter::once(&state.craft)
            .chain(state.fragments.iter())
            .chain(state.projectiles.iter())
            .chain(state.particles.iter())
            .filter(|e| e.alive)
            .map(EntityView::from)
            .collect();

        Self {
            field: state.field,
            is_game_over: state.is_game_over(),
            fragment_count: state.fragment_count(),
            entities,
        }
    }

    pub fn count(&self, kind: ViewKind) -> usize {
        self.entities.iter().filter(|e| e.kind == kind).count()
    }

    pub fn craft(&self) -> Option<&EntityView> {
        self.entities.iter().find(|e| e.kind == ViewKind::Craft)
    }
}

impl GameState {
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(self)
    }
}
