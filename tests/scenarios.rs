//! End-to-end gameplay scenarios driven through `tick`.

use asteroid_field::Settings;
use asteroid_field::consts::SIM_DT;
use asteroid_field::sim::{
    Entity, FragmentSize, GameEvent, GamePhase, GameState, TickInput, ViewKind, tick,
};
use glam::Vec2;

fn empty_field() -> GameState {
    GameState::empty(Settings::default())
}

fn stationary(size: FragmentSize, x: f32, y: f32) -> Entity {
    Entity::fragment(size, Vec2::new(x, y), Vec2::ZERO, 0.0)
}

#[test]
fn projectile_splits_large_fragment() {
    let mut state = empty_field();
    state.craft.pos = Vec2::new(400.0, 500.0);
    state.fragments.push(stationary(FragmentSize::Large, 400.0, 400.0));

    let fire = TickInput {
        fire: true,
        ..Default::default()
    };
    let mut events = Vec::new();
    tick(&mut state, &fire, SIM_DT);
    events.extend(state.events.iter().copied());

    // 12 ticks at 60 Hz moves the projectile 100 units
    for _ in 1..12 {
        tick(&mut state, &TickInput::default(), SIM_DT);
        events.extend(state.events.iter().copied());
    }

    assert!(!state.is_game_over());
    assert!(state.projectiles.is_empty(), "projectile should be consumed");
    assert_eq!(state.fragment_count(), 2);
    for child in &state.fragments {
        assert_eq!(child.fragment_size(), Some(FragmentSize::Medium));
        assert!(child.pos.distance(Vec2::new(400.0, 400.0)) < 15.0);
    }
    assert_eq!(state.particles.len(), 10);

    let destroyed: Vec<_> = events
        .iter()
        .filter(|e| matches!(e, GameEvent::FragmentDestroyed { .. }))
        .collect();
    assert_eq!(destroyed.len(), 1);
    assert_eq!(events[0], GameEvent::ProjectileFired);
}

#[test]
fn split_children_appear_next_tick_only() {
    let mut state = empty_field();
    state.craft.pos = Vec2::new(100.0, 700.0);
    state.fragments.push(stationary(FragmentSize::Medium, 400.0, 400.0));
    // Two projectiles inside the same fragment: only one is consumed
    state.projectiles.push(Entity::projectile(Vec2::new(400.0, 400.0), Vec2::ZERO));
    state.projectiles.push(Entity::projectile(Vec2::new(401.0, 400.0), Vec2::ZERO));

    tick(&mut state, &TickInput::default(), 0.0);

    assert_eq!(state.projectiles.len(), 1);
    assert_eq!(state.fragment_count(), 2);
    assert!(state
        .fragments
        .iter()
        .all(|f| f.fragment_size() == Some(FragmentSize::Small)));

    // The survivor can hit a child on the following tick
    tick(&mut state, &TickInput::default(), 0.0);
    assert!(state.projectiles.is_empty());
    assert_eq!(state.fragment_count(), 1);
    assert_eq!(state.particles.len(), 20);
}

#[test]
fn small_fragment_leaves_only_burst() {
    let mut state = empty_field();
    state.fragments.push(stationary(FragmentSize::Small, 200.0, 200.0));
    state.projectiles.push(Entity::projectile(Vec2::new(205.0, 200.0), Vec2::ZERO));

    tick(&mut state, &TickInput::default(), 0.0);

    assert_eq!(state.fragment_count(), 0);
    assert_eq!(state.particles.len(), 10);
    assert_eq!(
        state.events,
        vec![GameEvent::FragmentDestroyed {
            size: FragmentSize::Small,
            position: Vec2::new(200.0, 200.0)
        }]
    );
}

#[test]
fn craft_near_fragment_ends_game_without_input() {
    let mut state = empty_field();
    state.craft.pos = Vec2::new(400.0, 400.0);
    state.fragments.push(stationary(FragmentSize::Large, 400.0, 350.0));

    tick(&mut state, &TickInput::default(), SIM_DT);

    assert!(state.is_game_over());
    assert_eq!(state.events, vec![GameEvent::GameOver]);

    // Stays over until restart
    for _ in 0..30 {
        tick(&mut state, &TickInput::default(), SIM_DT);
        assert_eq!(state.phase, GamePhase::GameOver);
    }
}

#[test]
fn craft_outside_margin_survives() {
    let mut state = empty_field();
    state.craft.pos = Vec2::new(400.0, 400.0);
    state.fragments.push(stationary(FragmentSize::Large, 400.0, 340.0));

    tick(&mut state, &TickInput::default(), SIM_DT);
    assert!(!state.is_game_over());
}

#[test]
fn restart_restores_opening_layout() {
    let mut state = GameState::with_seed(77);
    state.fragments.push(stationary(FragmentSize::Small, 400.0, 400.0));
    state.craft.vel = Vec2::new(30.0, 0.0);
    state.craft.rotation = 120.0;
    state.projectiles.push(Entity::projectile(Vec2::new(50.0, 50.0), Vec2::ZERO));
    tick(&mut state, &TickInput::default(), SIM_DT);
    assert!(state.is_game_over());

    let restart = TickInput {
        restart: true,
        ..Default::default()
    };
    tick(&mut state, &restart, SIM_DT);

    assert!(!state.is_game_over());
    assert_eq!(state.fragment_count(), 5);
    assert!(state
        .fragments
        .iter()
        .all(|f| f.fragment_size() == Some(FragmentSize::Large)));
    assert!(state.projectiles.is_empty());
    assert!(state.particles.is_empty());
    assert_eq!(state.craft.pos, Vec2::new(400.0, 400.0));
    assert_eq!(state.craft.vel, Vec2::ZERO);
    assert_eq!(state.craft.rotation, 0.0);

    let snap = state.snapshot();
    assert_eq!(snap.count(ViewKind::Fragment(FragmentSize::Large)), 5);
    assert!(!snap.is_game_over);
}

#[test]
fn zero_dt_changes_nothing() {
    let mut state = GameState::with_seed(2024);
    state.projectiles.push(Entity::projectile(Vec2::new(200.0, 200.0), Vec2::new(300.0, 0.0)));
    state.particles.push(Entity::particle(Vec2::new(600.0, 600.0), Vec2::new(0.0, 40.0)));

    let fragments = state.fragments.clone();
    let projectiles = state.projectiles.clone();
    let particles = state.particles.clone();
    let craft = state.craft;

    for _ in 0..100 {
        tick(&mut state, &TickInput::default(), 0.0);
    }

    assert_eq!(state.fragments, fragments);
    assert_eq!(state.projectiles, projectiles);
    assert_eq!(state.particles, particles);
    assert_eq!(state.craft, craft);
}

#[test]
fn negative_dt_behaves_like_zero() {
    let mut state = GameState::with_seed(5);
    let fragments = state.fragments.clone();
    tick(&mut state, &TickInput::default(), -0.5);
    assert_eq!(state.fragments, fragments);
}

#[test]
fn idle_projectile_expires_after_two_seconds() {
    let mut state = empty_field();
    state.projectiles.push(Entity::projectile(Vec2::new(300.0, 300.0), Vec2::ZERO));

    for _ in 0..7 {
        tick(&mut state, &TickInput::default(), 0.25);
        assert_eq!(state.projectiles.len(), 1);
    }
    tick(&mut state, &TickInput::default(), 0.25);
    assert!(state.projectiles.is_empty());
}

#[test]
fn fired_projectile_inherits_craft_velocity() {
    let mut state = empty_field();
    // Moving down at muzzle speed: the shot hangs in place
    state.craft.vel = Vec2::new(0.0, 500.0);
    let fire = TickInput {
        fire: true,
        ..Default::default()
    };
    tick(&mut state, &fire, 0.0);
    assert_eq!(state.projectiles.len(), 1);
    assert!(state.projectiles[0].vel.length() < 1e-3);
}

#[test]
fn particles_wrap_when_configured() {
    let mut state = GameState::empty(Settings {
        particle_boundary: asteroid_field::ParticleBoundary::Wrap,
        ..Settings::default()
    });
    state.particles.push(Entity::particle(Vec2::new(799.0, 100.0), Vec2::new(100.0, 0.0)));
    state.projectiles.push(Entity::projectile(Vec2::new(799.0, 200.0), Vec2::new(100.0, 0.0)));

    tick(&mut state, &TickInput::default(), 0.1);

    assert_eq!(state.particles.len(), 1);
    assert_eq!(state.particles[0].pos.x, 0.0);
    assert!(state.projectiles.is_empty());
}
