//! Random placement via rejection sampling
//!
//! Spawning anything (player, wasp, seed, grub) means finding a rect of
//! the right size that clears the walls and whatever exclusion sets the
//! caller passes (other actors, usually with a safety margin so things
//! don't pop in flush against the player).
//!
//! The search is capped at
//! [`MAX_SPAWN_ATTEMPTS`](crate::consts::MAX_SPAWN_ATTEMPTS) and reports
//! exhaustion, so a level with no free area fails loudly instead of
//! hanging the frame.

use std::fmt;

use glam::Vec2;
use rand::Rng;

use super::rect::Rect;
use super::world::World;
use crate::consts::MAX_SPAWN_ATTEMPTS;

/// Spawn search gave up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpawnError {
    /// The candidate doesn't fit the yard at all.
    TooLarge,
    /// No clear placement found within the attempt cap.
    Exhausted,
}

impl fmt::Display for SpawnError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpawnError::TooLarge => write!(f, "spawn candidate larger than the yard"),
            SpawnError::Exhausted => {
                write!(f, "no clear spawn position after {MAX_SPAWN_ATTEMPTS} attempts")
            }
        }
    }
}

impl std::error::Error for SpawnError {}

/// Find a `size`-sized rect inside `world.bounds()` that overlaps neither
/// a wall nor any rect in any exclusion set.
///
/// `margin` inflates the candidate on every side for the clearance test
/// only; the returned rect is the raw, uninflated candidate. Walls are
/// always part of the exclusion, margin included.
pub fn find_spawn<R: Rng>(
    rng: &mut R,
    size: Vec2,
    world: &World,
    exclusions: &[&[Rect]],
    margin: f32,
) -> Result<Rect, SpawnError> {
    let bounds = world.bounds();
    let max_x = bounds.right() - size.x;
    let max_y = bounds.bottom() - size.y;
    if max_x < bounds.x || max_y < bounds.y {
        return Err(SpawnError::TooLarge);
    }

    for _ in 0..MAX_SPAWN_ATTEMPTS {
        let x = rng.random_range(bounds.x..=max_x);
        let y = rng.random_range(bounds.y..=max_y);
        let candidate = Rect::new(x, y, size.x, size.y);
        let padded = candidate.inflated(margin);

        if world.hits_wall(&candidate) || world.hits_wall(&padded) {
            continue;
        }
        let blocked = exclusions
            .iter()
            .flat_map(|set| set.iter())
            .any(|r| candidate.overlaps(r) || padded.overlaps(r));
        if !blocked {
            return Ok(candidate);
        }
    }

    Err(SpawnError::Exhausted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn open_world() -> World {
        World::from_tuples(&[(150, 120, 40, 360), (610, 120, 40, 360)]).unwrap()
    }

    #[test]
    fn test_spawn_clears_walls_and_exclusions() {
        let world = open_world();
        let mut rng = Pcg32::seed_from_u64(7);
        let occupied = [Rect::new(400.0, 300.0, 50.0, 50.0)];

        for _ in 0..200 {
            let spot = find_spawn(&mut rng, Vec2::splat(40.0), &world, &[&occupied], 0.0).unwrap();
            assert!(!world.hits_wall(&spot));
            assert!(!spot.overlaps(&occupied[0]));
            assert!(world.bounds().contains(&spot));
        }
    }

    #[test]
    fn test_margin_keeps_clearance() {
        let world = open_world();
        let mut rng = Pcg32::seed_from_u64(11);
        let occupied = [Rect::new(400.0, 300.0, 50.0, 50.0)];
        let margin = 30.0;

        for _ in 0..200 {
            let spot =
                find_spawn(&mut rng, Vec2::splat(40.0), &world, &[&occupied], margin).unwrap();
            assert!(!spot.inflated(margin).overlaps(&occupied[0]));
            assert!(!world.hits_wall(&spot.inflated(margin)));
        }
    }

    #[test]
    fn test_exhaustion_on_fully_walled_level() {
        // One wall covering the whole yard: no free area exists.
        let world = World::from_tuples(&[(0, 0, 800, 600)]).unwrap();
        let mut rng = Pcg32::seed_from_u64(3);
        let err = find_spawn(&mut rng, Vec2::splat(40.0), &world, &[], 0.0).unwrap_err();
        assert_eq!(err, SpawnError::Exhausted);
    }

    #[test]
    fn test_oversized_candidate_rejected() {
        let world = open_world();
        let mut rng = Pcg32::seed_from_u64(3);
        let err = find_spawn(&mut rng, Vec2::new(900.0, 40.0), &world, &[], 0.0).unwrap_err();
        assert_eq!(err, SpawnError::TooLarge);
    }

    proptest! {
        #[test]
        fn prop_spawn_never_overlaps_exclusions(
            seed in any::<u64>(),
            ex_x in 0.0f32..700.0, ex_y in 0.0f32..500.0,
            ex_w in 10.0f32..100.0, ex_h in 10.0f32..100.0,
        ) {
            let world = open_world();
            let mut rng = Pcg32::seed_from_u64(seed);
            let occupied = [Rect::new(ex_x, ex_y, ex_w, ex_h)];
            let spot = find_spawn(&mut rng, Vec2::splat(30.0), &world, &[&occupied], 0.0).unwrap();
            prop_assert!(!spot.overlaps(&occupied[0]));
            prop_assert!(!world.hits_wall(&spot));
        }
    }
}
