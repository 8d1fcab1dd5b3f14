//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (pools are append-and-filter)
//! - No rendering or platform dependencies

pub mod collision;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{player_item_overlap, spans_overlap};
pub use spawn::spawn_wave;
pub use state::{Frame, Hud, Item, ItemKind, Particle, Player, RunPhase, RunState};
pub use tick::{TickInput, tick};
