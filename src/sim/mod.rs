//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Time only enters through the tick's `dt`
//! - Seeded RNG only
//! - Stable iteration order (storage order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod entity;
pub mod kinematics;
pub mod snapshot;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{CollisionReport, craft_hits_fragment, projectile_hits_fragment};
pub use entity::{Entity, EntityKind, FragmentSize};
pub use kinematics::{Boundary, Field, integrate};
pub use snapshot::{EntityView, Snapshot, ViewKind};
pub use spawn::{PendingSpawns, SplitRule, split_rule};
pub use state::{GameEvent, GamePhase, GameState};
pub use tick::{TickInput, tick};
