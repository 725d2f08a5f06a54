//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Caller-supplied frame delta only
//! - Seeded RNG only
//! - Stable iteration order (by entity ID)
//! - No rendering or platform dependencies

pub mod asteroid;
pub mod body;
pub mod player;
pub mod projectile;
pub mod registry;
pub mod spawn;
pub mod state;
pub mod tick;

pub use asteroid::Asteroid;
pub use body::{Circular, CircularBody};
pub use player::Player;
pub use projectile::Projectile;
pub use registry::{Entity, EntityId, Group, Groups, Registry};
pub use spawn::{Edge, Spawn, SpawnDirector};
pub use state::{
    BodySnapshot, GameEvent, GamePhase, GameState, SplitOutcome, StateSnapshot,
};
pub use tick::{TickInput, TickOutcome, tick};
