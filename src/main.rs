//! Asteroid Field headless runner
//!
//! Drives the simulation with a scripted pilot at a fixed timestep, logs the
//! HUD state and prints the final snapshot as JSON.
//!
//! Usage: `asteroid-field [settings.json] [despawn|wrap]`

use std::path::PathBuf;

use asteroid_field::consts::*;
use asteroid_field::renderer::build_draw_list;
use asteroid_field::sim::{GameEvent, GameState, TickInput, tick};
use asteroid_field::{ParticleBoundary, Settings};

/// Simulated wall-clock seconds to run
const RUN_SECONDS: f32 = 120.0;
/// Frame time fed to the accumulator (a slightly uneven display rate)
const FRAME_TIME: f32 = 1.0 / 50.0;
/// Ticks between shots
const FIRE_INTERVAL: u64 = 12;
/// Stop after this many restarts
const MAX_GAMES: u32 = 3;

/// Fixed-step driver around a game state
struct Runner {
    state: GameState,
    input: TickInput,
    accumulator: f32,
    games: u32,
    destroyed: u32,
}

impl Runner {
    fn new(settings: Settings) -> Self {
        Self {
            state: GameState::new(settings),
            input: TickInput::default(),
            accumulator: 0.0,
            games: 1,
            destroyed: 0,
        }
    }

    /// Scripted pilot: keep turning, fire on an interval, restart when dead
    fn steer(&mut self) {
        if self.state.is_game_over() {
            self.input = TickInput {
                restart: true,
                ..Default::default()
            };
            return;
        }
        self.input.rotate_right = true;
        self.input.thrust = self.state.time_ticks % 240 < 20;
        self.input.brake = self.state.time_ticks % 240 > 200;
        self.input.fire = self.state.time_ticks % FIRE_INTERVAL == 0;
    }

    /// Run simulation ticks for one frame
    fn update(&mut self, dt: f32) -> bool {
        let dt = dt.min(0.1);
        self.accumulator += dt;

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            self.steer();
            tick(&mut self.state, &self.input, SIM_DT);
            self.accumulator -= SIM_DT;
            substeps += 1;

            // Clear one-shot inputs after processing
            self.input.clear_edges();

            for event in &self.state.events {
                match event {
                    GameEvent::FragmentDestroyed { size, .. } => {
                        self.destroyed += 1;
                        log::debug!("Destroyed {:?}", size);
                    }
                    GameEvent::GameOver => {
                        log::info!(
                            "Game {} over, {} fragments destroyed",
                            self.games,
                            self.destroyed
                        );
                    }
                    GameEvent::Restarted => {
                        self.games += 1;
                        self.destroyed = 0;
                    }
                    GameEvent::ProjectileFired => {}
                }
            }

            if self.games > MAX_GAMES {
                return false;
            }
        }
        true
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let mut settings = match args.next().map(PathBuf::from) {
        Some(path) => Settings::load(&path),
        None => Settings::default(),
    };
    if let Some(policy) = args.next() {
        match ParticleBoundary::from_str(&policy) {
            Some(boundary) => settings.particle_boundary = boundary,
            None => log::warn!(
                "Unknown particle policy '{}', keeping {}",
                policy,
                settings.particle_boundary.as_str()
            ),
        }
    }
    log::info!(
        "Field {}x{}, seed {:#x}, particles {}",
        settings.width,
        settings.height,
        settings.seed,
        settings.particle_boundary.as_str()
    );

    let mut runner = Runner::new(settings);
    let frames = (RUN_SECONDS / FRAME_TIME) as u32;
    for frame in 0..frames {
        if !runner.update(FRAME_TIME) {
            break;
        }
        if frame % 250 == 0 {
            let snapshot = runner.state.snapshot();
            let draw = build_draw_list(&snapshot);
            log::info!(
                "Asteroids: {} | game over: {} | {} line / {} triangle vertex bytes",
                snapshot.fragment_count,
                snapshot.is_game_over,
                draw.line_bytes().len(),
                draw.triangle_bytes().len()
            );
        }
    }

    match serde_json::to_string_pretty(&runner.state.snapshot()) {
        Ok(json) => println!("{json}"),
        Err(e) => log::error!("Could not serialize snapshot: {}", e),
    }
}
