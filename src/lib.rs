//! Skitter - a top-down walled-yard arcade game core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (geometry, actors, per-frame tick)
//! - `view`: Read-only render snapshot for an external driver
//! - `tuning`: Data-driven game balance
//!
//! The crate contains no rendering or input plumbing. An external driver
//! feeds a [`sim::TickInput`] into [`sim::tick`] once per frame and draws
//! whatever a [`view::Snapshot`] exposes.

pub mod sim;
pub mod tuning;
pub mod view;

pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation tick rate (matches the reference 60 fps frame loop)
    pub const TICK_HZ: u32 = 60;
    /// Seconds per tick; used only for time-derived state (grub age, grace
    /// window). Movement is expressed in pixels per tick, not delta-scaled.
    pub const SIM_DT: f32 = 1.0 / TICK_HZ as f32;

    /// Yard dimensions (pixels)
    pub const YARD_WIDTH: f32 = 800.0;
    pub const YARD_HEIGHT: f32 = 600.0;

    /// Actor sizes (square sprites, pixels)
    pub const PLAYER_SIZE: f32 = 50.0;
    pub const WASP_SIZE: f32 = 40.0;
    pub const SEED_SIZE: f32 = 20.0;
    pub const GRUB_SIZE: f32 = 45.0;

    /// Player step per tick (pixels)
    pub const PLAYER_SPEED: f32 = 5.0;

    /// Spawn search gives up past this many rejected candidates
    pub const MAX_SPAWN_ATTEMPTS: u32 = 10_000;
}

/// Seconds elapsed after the given number of ticks
#[inline]
pub fn ticks_to_secs(ticks: u64) -> f32 {
    ticks as f32 * consts::SIM_DT
}
