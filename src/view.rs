//! Read-only render snapshot
//!
//! The driver never reaches into `GameState`; it captures a `Snapshot`
//! after each tick and draws that. Everything a renderer needs is here:
//! one tagged rect per live actor, the walls, the counters, and the
//! terminal defeat cause.

use serde::{Deserialize, Serialize};

use crate::sim::rect::Rect;
use crate::sim::state::{DefeatCause, GameState, HungerStage};

/// What to draw for one actor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum VisualTag {
    Player,
    Wasp,
    Seed,
    /// The grub's marker changes with its hunger stage
    Grub(HungerStage),
}

/// One drawable actor.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SpriteView {
    pub rect: Rect,
    pub tag: VisualTag,
}

/// A frame's worth of drawable state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub walls: Vec<Rect>,
    pub sprites: Vec<SpriteView>,
    pub score: u32,
    pub feedings: u32,
    pub time_ticks: u64,
    pub defeated: Option<DefeatCause>,
}

impl Snapshot {
    pub fn capture(state: &GameState) -> Self {
        let mut sprites = Vec::with_capacity(2 + state.wasps.len() + state.seeds.len());
        sprites.push(SpriteView {
            rect: state.player.rect,
            tag: VisualTag::Player,
        });
        for wasp in &state.wasps {
            sprites.push(SpriteView {
                rect: wasp.rect,
                tag: VisualTag::Wasp,
            });
        }
        for seed in &state.seeds {
            sprites.push(SpriteView {
                rect: seed.rect,
                tag: VisualTag::Seed,
            });
        }
        if let Some(grub) = &state.grub {
            sprites.push(SpriteView {
                rect: grub.rect,
                tag: VisualTag::Grub(grub.stage()),
            });
        }

        Self {
            walls: state.world.wall_slice().to_vec(),
            sprites,
            score: state.score,
            feedings: state.feedings,
            time_ticks: state.time_ticks,
            defeated: state.defeated,
        }
    }
}
