//! Game state and core simulation types
//!
//! Everything that must survive a save/continue round-trip lives here,
//! including the RNG, so a serialized session resumes deterministically.

use std::fmt;

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use super::spawn::{SpawnError, find_spawn};
use super::world::World;
use crate::ticks_to_secs;
use crate::tuning::{Tuning, TuningError};

/// A session couldn't be constructed.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionError {
    /// Rejected balance values
    Tuning(TuningError),
    /// An initial placement couldn't be found
    Spawn(SpawnError),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::Tuning(err) => write!(f, "{err}"),
            SessionError::Spawn(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for SessionError {}

impl From<TuningError> for SessionError {
    fn from(err: TuningError) -> Self {
        SessionError::Tuning(err)
    }
}

impl From<SpawnError> for SessionError {
    fn from(err: SpawnError) -> Self {
        SessionError::Spawn(err)
    }
}

/// Hunger stages of the grub, in order of elapsed seconds since it was
/// last fed. Derived fresh from the age every frame, never cached, so a
/// dropped frame can't leave a stale stage behind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum HungerStage {
    /// [0, 3) seconds
    Fed,
    /// [3, 6) seconds
    Peckish,
    /// [6, 9) seconds
    Hungry,
    /// [9, 10) seconds
    Starving,
    /// [10, ∞) — terminal; the grub despawns this frame
    Starved,
}

/// Stage boundaries in seconds
pub const PECKISH_AT: f32 = 3.0;
pub const HUNGRY_AT: f32 = 6.0;
pub const STARVING_AT: f32 = 9.0;
pub const STARVED_AT: f32 = 10.0;

impl HungerStage {
    /// Stage after `secs` seconds without food.
    pub fn at(secs: f32) -> Self {
        if secs >= STARVED_AT {
            HungerStage::Starved
        } else if secs >= STARVING_AT {
            HungerStage::Starving
        } else if secs >= HUNGRY_AT {
            HungerStage::Hungry
        } else if secs >= PECKISH_AT {
            HungerStage::Peckish
        } else {
            HungerStage::Fed
        }
    }
}

/// Why the session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DefeatCause {
    /// A wasp touched the player
    Stung,
    /// The grub starved with nobody left to feed
    GrubStarved,
}

/// The input-driven beetle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub rect: Rect,
    /// Pixels per tick along each pressed axis
    pub speed: f32,
}

/// A roaming hostile. Direction components are always exactly ±1; the
/// per-tick displacement is `speed * dir`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Wasp {
    pub id: u32,
    pub rect: Rect,
    /// Pixels per tick, drawn once at creation
    pub speed: f32,
    /// Sign vector in {-1, +1}², drawn once at creation
    pub dir: Vec2,
}

/// A collectible. Stateless besides position; consumed seeds respawn
/// elsewhere 1:1.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Seed {
    pub id: u32,
    pub rect: Rect,
}

/// The neutral, time-limited grub. Only its birth tick is stored; the
/// hunger stage is always derived.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Grub {
    pub rect: Rect,
    /// Ticks since creation or last feeding
    pub age_ticks: u64,
}

impl Grub {
    pub fn age_secs(&self) -> f32 {
        ticks_to_secs(self.age_ticks)
    }

    pub fn stage(&self) -> HungerStage {
        HungerStage::at(self.age_secs())
    }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Session seed for reproducibility
    pub seed: u64,
    /// RNG state; serialized so mid-session saves stay deterministic
    pub rng: Pcg32,
    /// Balance values this session was started with
    pub tuning: Tuning,
    /// Static level geometry
    pub world: World,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Seeds currently held
    pub score: u32,
    /// Times the grub has been fed
    pub feedings: u32,
    /// Terminal flag; once set the session is over
    pub defeated: Option<DefeatCause>,
    pub player: Player,
    /// Sorted by id for deterministic iteration
    pub wasps: Vec<Wasp>,
    /// Sorted by id for deterministic iteration
    pub seeds: Vec<Seed>,
    /// The live grub, if any
    pub grub: Option<Grub>,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Start a session: reject bad balance values up front, place every
    /// actor via spawn search, and fail the level load if any placement
    /// can't be found. (`World` geometry was already validated.)
    pub fn new(seed: u64, world: World, tuning: Tuning) -> Result<Self, SessionError> {
        tuning.validate()?;
        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            tuning,
            world,
            time_ticks: 0,
            score: 0,
            feedings: 0,
            defeated: None,
            player: Player {
                rect: Rect::new(0.0, 0.0, 0.0, 0.0),
                speed: 0.0,
            },
            wasps: Vec::new(),
            seeds: Vec::new(),
            grub: None,
            next_id: 1,
        };

        let t = state.tuning.clone();
        state.player = Player {
            rect: find_spawn(
                &mut state.rng,
                Vec2::splat(t.player_size),
                &state.world,
                &[],
                t.spawn_margin,
            )?,
            speed: t.player_speed,
        };

        for _ in 0..t.wasp_count {
            state.spawn_wasp()?;
        }
        for _ in 0..t.seed_count {
            state.spawn_seed()?;
        }
        state.respawn_grub()?;

        Ok(state)
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Spawn one wasp at a clear spot, away from the player, with speed
    /// and direction signs drawn once.
    pub fn spawn_wasp(&mut self) -> Result<(), SpawnError> {
        let rect = self.find_clear_spot(Vec2::splat(self.tuning.wasp_size), self.tuning.spawn_margin)?;
        let speed = self
            .rng
            .random_range(self.tuning.wasp_speed_min..=self.tuning.wasp_speed_max);
        let dir = Vec2::new(self.random_sign(), self.random_sign());
        let id = self.next_entity_id();
        self.wasps.push(Wasp { id, rect, speed, dir });
        Ok(())
    }

    /// Spawn one seed at a clear spot.
    pub fn spawn_seed(&mut self) -> Result<(), SpawnError> {
        let rect = self.find_clear_spot(Vec2::splat(self.tuning.seed_size), 0.0)?;
        let id = self.next_entity_id();
        self.seeds.push(Seed { id, rect });
        Ok(())
    }

    /// Place (or re-place) the grub with a fresh timer.
    pub fn respawn_grub(&mut self) -> Result<(), SpawnError> {
        let rect = self.find_clear_spot(Vec2::splat(self.tuning.grub_size), self.tuning.spawn_margin)?;
        self.grub = Some(Grub { rect, age_ticks: 0 });
        Ok(())
    }

    /// Spawn search excluding every live actor.
    fn find_clear_spot(&mut self, size: Vec2, margin: f32) -> Result<Rect, SpawnError> {
        let mut occupied: Vec<Rect> = Vec::with_capacity(2 + self.wasps.len() + self.seeds.len());
        occupied.push(self.player.rect);
        occupied.extend(self.wasps.iter().map(|w| w.rect));
        occupied.extend(self.seeds.iter().map(|s| s.rect));
        if let Some(grub) = &self.grub {
            occupied.push(grub.rect);
        }
        find_spawn(&mut self.rng, size, &self.world, &[&occupied], margin)
    }

    /// Seconds since session start (tick-derived)
    pub fn elapsed_secs(&self) -> f32 {
        ticks_to_secs(self.time_ticks)
    }

    fn random_sign(&mut self) -> f32 {
        if self.rng.random::<bool>() { 1.0 } else { -1.0 }
    }
}
