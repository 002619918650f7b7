//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only (one tick per rendered frame)
//! - Seeded RNG only
//! - Stable iteration order (by entity ID)
//! - No rendering or platform dependencies

pub mod rect;
pub mod spawn;
pub mod state;
pub mod tick;
pub mod world;

pub use rect::Rect;
pub use spawn::{SpawnError, find_spawn};
pub use state::{DefeatCause, GameState, Grub, HungerStage, Player, Seed, SessionError, Wasp};
pub use tick::{TickInput, tick};
pub use world::{GeomError, World};
