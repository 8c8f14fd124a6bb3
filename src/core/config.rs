//! Engine configuration.
//!
//! Board geometry and the premium map are compile-time constants. The
//! knobs a host may want to vary per ruleset live here, built the same way
//! as any other value: start from `EngineConfig::default()` and chain
//! `with_*` calls.

use serde::{Deserialize, Serialize};

/// Tiles a full rack holds under the standard rules.
pub const RACK_CAPACITY: usize = 7;

/// Flat bonus for emptying a full rack in one move.
pub const BINGO_BONUS: u32 = 50;

/// Rules knobs for a [`MoveEngine`](crate::rules::MoveEngine).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Tiles a player holds when their rack is full.
    pub rack_capacity: usize,

    /// Points added when a move uses every tile of a full rack.
    pub bingo_bonus: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            rack_capacity: RACK_CAPACITY,
            bingo_bonus: BINGO_BONUS,
        }
    }
}

impl EngineConfig {
    /// Standard rules: 7-tile racks and a 50-point bingo.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the rack capacity.
    #[must_use]
    pub fn with_rack_capacity(mut self, capacity: usize) -> Self {
        assert!(capacity > 0, "Rack capacity must be at least 1");
        self.rack_capacity = capacity;
        self
    }

    /// Set the bingo bonus.
    #[must_use]
    pub fn with_bingo_bonus(mut self, bonus: u32) -> Self {
        self.bingo_bonus = bonus;
        self
    }
}
