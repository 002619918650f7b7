//! Fixed-timestep simulation tick
//!
//! One call advances the whole yard by exactly one frame. Movement is
//! expressed in pixels per tick at the fixed 60 Hz rate; there is no
//! delta-time scaling, so every speed and threshold stays a plain
//! per-tick number.

use glam::Vec2;

use super::state::{DefeatCause, GameState, HungerStage, Wasp};
use super::world::World;

/// Input flags for a single tick (deterministic)
///
/// The driver samples its input devices and hands over four booleans;
/// anything it can't read defaults to released. The flags are not
/// exclusive: opposing pairs cancel and diagonals are additive.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl TickInput {
    /// Vector sum of the active flags, each scaled by `speed`.
    pub fn displacement(&self, speed: f32) -> Vec2 {
        let mut d = Vec2::ZERO;
        if self.left {
            d.x -= speed;
        }
        if self.right {
            d.x += speed;
        }
        if self.up {
            d.y -= speed;
        }
        if self.down {
            d.y += speed;
        }
        d
    }
}

/// Advance the game state by one fixed frame.
///
/// Order within the frame: player, wasps, grub aging, sting check, seed
/// consumption, feeding, grub-lost check. Once `defeated` is set the
/// state is frozen; restarting is the driver's job.
pub fn tick(state: &mut GameState, input: &TickInput) {
    if state.defeated.is_some() {
        return;
    }
    state.time_ticks += 1;

    // Player: displace, clamp to the yard, roll the whole move back on
    // the first wall hit. At most one rollback per frame.
    let delta = input.displacement(state.player.speed);
    let moved = state
        .player
        .rect
        .translated(delta)
        .clamp_within(&state.world.bounds());
    if !state.world.hits_wall(&moved) {
        state.player.rect = moved;
    }

    // Wasps wander on their own.
    for wasp in &mut state.wasps {
        step_wasp(wasp, &state.world);
    }

    // Grub ages every frame; the stage is derived, never stored.
    if let Some(grub) = &mut state.grub {
        grub.age_ticks += 1;
    }
    if state
        .grub
        .as_ref()
        .is_some_and(|g| g.stage() == HungerStage::Starved)
    {
        state.grub = None;
    }

    // Sting check, suppressed for the opening grace window so a wasp
    // spawning near the player can't end the session instantly.
    let in_grace = state.elapsed_secs() < state.tuning.grace_secs;
    if !in_grace
        && state
            .wasps
            .iter()
            .any(|w| w.rect.overlaps(&state.player.rect))
    {
        state.defeated = Some(DefeatCause::Stung);
        return;
    }

    // Seeds: collect ids during the scan, mutate after, respawn 1:1.
    let eaten: Vec<u32> = state
        .seeds
        .iter()
        .filter(|s| s.rect.overlaps(&state.player.rect))
        .map(|s| s.id)
        .collect();
    if !eaten.is_empty() {
        state.seeds.retain(|s| !eaten.contains(&s.id));
        state.score += eaten.len() as u32;
        for _ in &eaten {
            if let Err(err) = state.spawn_seed() {
                log::warn!("seed respawn failed ({err}); one seed dropped from play");
            }
        }
    }

    // Feeding: costs seeds, resets the grub's clock, relocates it, and
    // attracts one more wasp.
    let can_feed = state.score >= state.tuning.feed_cost
        && state
            .grub
            .as_ref()
            .is_some_and(|g| g.rect.overlaps(&state.player.rect));
    if can_feed {
        state.score -= state.tuning.feed_cost;
        state.feedings += 1;
        if let Err(err) = state.respawn_grub() {
            // Keep the grub where it is; the feeding still counts.
            log::warn!("grub relocation failed ({err}); feeding in place");
            if let Some(grub) = &mut state.grub {
                grub.age_ticks = 0;
            }
        }
        if let Err(err) = state.spawn_wasp() {
            log::warn!("wasp spawn failed ({err}); no extra wasp this feeding");
        }
    }

    // Starved with nobody fed this frame: session over.
    if state.grub.is_none() {
        state.defeated = Some(DefeatCause::GrubStarved);
    }
}

/// Advance one wasp: displace by `speed * dir`, flip a single axis on a
/// yard edge, and on a wall hit roll back AND flip both axes.
///
/// Wall hits flip BOTH components, not just the axis that caused the
/// hit; yard edges flip one.
fn step_wasp(wasp: &mut Wasp, world: &World) {
    let bounds = world.bounds();
    let moved = wasp.rect.translated(wasp.speed * wasp.dir);

    if moved.x <= bounds.x || moved.right() >= bounds.right() {
        wasp.dir.x = -wasp.dir.x;
    }
    if moved.y <= bounds.y || moved.bottom() >= bounds.bottom() {
        wasp.dir.y = -wasp.dir.y;
    }

    if world.hits_wall(&moved) {
        wasp.dir = -wasp.dir;
    } else {
        wasp.rect = moved;
    }
}
