//! One simulation step
//!
//! Order per tick: commands, integration, collision resolution, compaction.
//! While in GameOver the world is frozen and only Restart is honored.

use super::collision;
use super::kinematics::integrate;
use super::spawn::{PendingSpawns, spawn_projectile};
use super::state::{GameEvent, GamePhase, GameState};
use crate::consts::*;
use crate::facing_direction;

/// Input commands for a single tick
///
/// Rotation, thrust and brake are held flags. `fire` and `restart` are press
/// events; the caller clears them after the tick that consumes them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub rotate_left: bool,
    pub rotate_right: bool,
    pub thrust: bool,
    pub brake: bool,
    pub fire: bool,
    pub restart: bool,
}

impl TickInput {
    /// Drop the press events once they have been delivered
    pub fn clear_edges(&mut self) {
        self.fire = false;
        self.restart = false;
    }
}

/// Advance the game state by `dt` seconds (negative values count as zero)
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    state.events.clear();
    let dt = dt.max(0.0);

    if state.phase == GamePhase::GameOver {
        if input.restart {
            state.restart();
        }
        return;
    }

    state.time_ticks += 1;

    apply_commands(state, input, dt);

    let boundary = state.particle_boundary();
    let field = state.field;
    integrate(&mut state.craft, dt, &field, boundary);
    for entity in state
        .fragments
        .iter_mut()
        .chain(state.projectiles.iter_mut())
        .chain(state.particles.iter_mut())
    {
        integrate(entity, dt, &field, boundary);
    }

    let mut pending = PendingSpawns::default();
    let report = collision::resolve(
        &state.craft,
        &mut state.projectiles,
        &mut state.fragments,
        &mut state.rng,
        &mut pending,
    );

    state.events.extend(
        report
            .destroyed
            .iter()
            .map(|&(size, position)| GameEvent::FragmentDestroyed { size, position }),
    );
    if report.craft_hit {
        state.end_game();
    }

    state.compact();
    state.fragments.append(&mut pending.fragments);
    state.particles.append(&mut pending.particles);
}

/// Steering, thrust, brake and fire for the craft
fn apply_commands(state: &mut GameState, input: &TickInput, dt: f32) {
    let craft = &mut state.craft;

    let mut turn = 0.0;
    if input.rotate_left {
        turn -= 1.0;
    }
    if input.rotate_right {
        turn += 1.0;
    }
    if turn != 0.0 {
        craft.rotation = normalize_degrees(craft.rotation + turn * CRAFT_ROTATION_SPEED * dt);
    }

    if input.thrust {
        craft.vel += facing_direction(craft.rotation) * CRAFT_THRUST * dt;
    }
    if input.brake {
        craft.vel *= CRAFT_BRAKE;
    }
    if let Some(drag) = state.settings.craft_drag {
        craft.vel *= drag;
    }

    if input.fire {
        let projectile = spawn_projectile(craft);
        state.projectiles.push(projectile);
        state.events.push(GameEvent::ProjectileFired);
    }
}

/// Fold an angle into `[0, 360)`
fn normalize_degrees(angle: f32) -> f32 {
    let r = angle.rem_euclid(360.0);
    // rem_euclid of a tiny negative value rounds up to 360
    if r >= 360.0 { 0.0 } else { r }
}
