//! Data-driven game balance
//!
//! Every balance number a session depends on, in one serde struct. A
//! driver may override the stock values from a JSON blob before
//! constructing a `GameState`.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::{GRUB_SIZE, PLAYER_SIZE, PLAYER_SPEED, SEED_SIZE, WASP_SIZE};

/// Rejected tuning values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TuningError {
    NonPositive(&'static str),
    EmptyRange(&'static str),
}

impl fmt::Display for TuningError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TuningError::NonPositive(field) => write!(f, "tuning field `{field}` must be > 0"),
            TuningError::EmptyRange(field) => write!(f, "tuning range `{field}` has min > max"),
        }
    }
}

impl std::error::Error for TuningError {}

/// Balance values for one session.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Player step in pixels per tick
    pub player_speed: f32,
    /// Wasp speed range, pixels per tick, drawn once per wasp
    pub wasp_speed_min: f32,
    pub wasp_speed_max: f32,
    /// Wasps at session start (feedings attract more)
    pub wasp_count: u32,
    /// Seeds kept in play (consumed seeds respawn 1:1)
    pub seed_count: u32,
    /// Seeds spent per feeding
    pub feed_cost: u32,
    /// Seconds after session start during which stings are ignored
    pub grace_secs: f32,
    /// Clearance (pixels per side) required around fresh spawns
    pub spawn_margin: f32,
    /// Actor edge lengths (square sprites)
    pub player_size: f32,
    pub wasp_size: f32,
    pub seed_size: f32,
    pub grub_size: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            player_speed: PLAYER_SPEED,
            wasp_speed_min: 2.0,
            wasp_speed_max: 5.0,
            wasp_count: 2,
            seed_count: 5,
            feed_cost: 3,
            grace_secs: 2.0,
            spawn_margin: 60.0,
            player_size: PLAYER_SIZE,
            wasp_size: WASP_SIZE,
            seed_size: SEED_SIZE,
            grub_size: GRUB_SIZE,
        }
    }
}

impl Tuning {
    /// Parse a JSON blob; absent fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Reject values the sim can't run with.
    pub fn validate(&self) -> Result<(), TuningError> {
        for (name, value) in [
            ("player_speed", self.player_speed),
            ("wasp_speed_min", self.wasp_speed_min),
            ("grace_secs", self.grace_secs),
            ("player_size", self.player_size),
            ("wasp_size", self.wasp_size),
            ("seed_size", self.seed_size),
            ("grub_size", self.grub_size),
        ] {
            if !(value > 0.0) {
                return Err(TuningError::NonPositive(name));
            }
        }
        if self.feed_cost == 0 {
            return Err(TuningError::NonPositive("feed_cost"));
        }
        if self.spawn_margin < 0.0 {
            return Err(TuningError::NonPositive("spawn_margin"));
        }
        if self.wasp_speed_min > self.wasp_speed_max {
            return Err(TuningError::EmptyRange("wasp_speed"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        Tuning::default().validate().unwrap();
    }

    #[test]
    fn test_from_json_partial_override() {
        let tuning = Tuning::from_json(r#"{"feed_cost": 5, "wasp_count": 4}"#).unwrap();
        assert_eq!(tuning.feed_cost, 5);
        assert_eq!(tuning.wasp_count, 4);
        assert_eq!(tuning.player_speed, Tuning::default().player_speed);
    }

    #[test]
    fn test_validate_rejects_empty_speed_range() {
        let tuning = Tuning {
            wasp_speed_min: 6.0,
            wasp_speed_max: 2.0,
            ..Default::default()
        };
        assert_eq!(
            tuning.validate().unwrap_err(),
            TuningError::EmptyRange("wasp_speed")
        );
    }

    #[test]
    fn test_validate_rejects_zero_feed_cost() {
        let tuning = Tuning {
            feed_cost: 0,
            ..Default::default()
        };
        assert!(tuning.validate().is_err());
    }
}
