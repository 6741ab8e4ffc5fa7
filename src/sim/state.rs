//! Game state and the Playing / GameOver machine
//!
//! The state exclusively owns every entity and the spawn RNG.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::entity::{Entity, FragmentSize};
use super::kinematics::Field;
use super::spawn::spawn_wave;
use crate::settings::{ParticleBoundary, Settings};

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Craft was hit; the world is frozen until restart
    GameOver,
}

/// Something that happened during the last tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    ProjectileFired,
    FragmentDestroyed { size: FragmentSize, position: Vec2 },
    GameOver,
    Restarted,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    pub settings: Settings,
    pub field: Field,
    pub phase: GamePhase,
    pub craft: Entity,
    /// Live fragments, in spawn order
    pub fragments: Vec<Entity>,
    pub projectiles: Vec<Entity>,
    /// Visual particles (not gameplay-affecting)
    pub particles: Vec<Entity>,
    /// Events from the most recent tick
    pub events: Vec<GameEvent>,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub(crate) rng: Pcg32,
}

impl GameState {
    /// Create a new game with the given settings: craft centered, one wave on the edge
    pub fn new(settings: Settings) -> Self {
        let mut state = Self::empty(settings);
        state.reset_world();
        state
    }

    /// A game with no fragments, for building exact scenarios
    pub fn empty(settings: Settings) -> Self {
        let settings = settings.sanitized();
        let field = Field::new(settings.width, settings.height);
        Self {
            rng: Pcg32::seed_from_u64(settings.seed),
            field,
            phase: GamePhase::Playing,
            craft: Entity::craft(field.center()),
            fragments: Vec::new(),
            projectiles: Vec::new(),
            particles: Vec::new(),
            events: Vec::new(),
            time_ticks: 0,
            settings,
        }
    }

    /// Default settings with the given seed
    pub fn with_seed(seed: u64) -> Self {
        Self::new(Settings {
            seed,
            ..Settings::default()
        })
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    pub fn fragment_count(&self) -> usize {
        self.fragments.len()
    }

    pub fn particle_boundary(&self) -> ParticleBoundary {
        self.settings.particle_boundary
    }

    /// Enter GameOver; repeated calls are no-ops
    pub(crate) fn end_game(&mut self) {
        if self.phase == GamePhase::Playing {
            log::info!(
                "Game over after {} ticks with {} fragments left",
                self.time_ticks,
                self.fragments.len()
            );
            self.phase = GamePhase::GameOver;
            self.events.push(GameEvent::GameOver);
        }
    }

    /// Leave GameOver with a fresh world. Ignored while playing.
    pub fn restart(&mut self) -> bool {
        if self.phase != GamePhase::GameOver {
            return false;
        }
        self.reset_world();
        self.phase = GamePhase::Playing;
        self.events.push(GameEvent::Restarted);
        log::info!("Restarted with {} fragments", self.fragments.len());
        true
    }

    /// Clear storage, recenter the craft and spawn the opening wave
    fn reset_world(&mut self) {
        self.craft = Entity::craft(self.field.center());
        self.projectiles.clear();
        self.particles.clear();
        self.fragments = spawn_wave(&self.field, self.settings.initial_fragments, &mut self.rng);
        log::debug!("Spawned {} large fragments", self.fragments.len());
    }

    /// Drop every entity whose liveness flag is cleared
    pub(crate) fn compact(&mut self) {
        self.fragments.retain(|f| f.alive);
        self.projectiles.retain(|p| p.alive);
        self.particles.retain(|p| p.alive);
    }
}
