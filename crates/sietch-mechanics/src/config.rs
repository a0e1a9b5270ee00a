//! Tunable limits for the dice engine.

use crate::error::MechResult;
use crate::validate::{self, MAX_DICE, MAX_SIDES};

/// Default cap on explosions within one exploding roll.
pub const DEFAULT_MAX_EXPLOSIONS: u32 = 100;

/// Limits applied by a caller before it hands parameters to an evaluator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Most dice a single roll may use.
    pub max_dice: u32,
    /// Most faces a die may have.
    pub max_sides: u32,
    /// Most extra dice an exploding roll may add; `None` leaves chains uncapped.
    pub max_explosions: Option<u32>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_dice: MAX_DICE,
            max_sides: MAX_SIDES,
            max_explosions: Some(DEFAULT_MAX_EXPLOSIONS),
        }
    }
}

impl EngineConfig {
    /// Set the dice-count limit (at least 1).
    pub fn with_max_dice(mut self, max: u32) -> Self {
        self.max_dice = max.max(1);
        self
    }

    /// Set the face-count limit (at least 2).
    pub fn with_max_sides(mut self, max: u32) -> Self {
        self.max_sides = max.max(2);
        self
    }

    /// Cap the number of explosions per roll.
    pub fn with_max_explosions(mut self, cap: u32) -> Self {
        self.max_explosions = Some(cap);
        self
    }

    /// Let explosion chains run until a non-maximum face comes up.
    pub fn without_explosion_cap(mut self) -> Self {
        self.max_explosions = None;
        self
    }

    /// Check a dice request against these limits.
    pub fn validate_dice(&self, count: u32, sides: u32) -> MechResult<()> {
        validate::check_dice(count, sides, self.max_dice, self.max_sides)
    }
}
