//! Count-successes resolution (Dune 2d20).
//!
//! Roll two or more d20s. Each die at or below the target number scores one
//! success; a die at or below the critical threshold (a natural 1 by default)
//! scores two. Each die at or above the complication range is a complication.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::dice::{DieSource, RollDetails, RollResult, roll_pool};
use crate::resolution::Outcome;

/// Faces on a Dune die.
pub const D20: u32 = 20;
/// Dice rolled before any bonus dice.
pub const BASE_DICE: u32 = 2;

/// Configuration for count-successes resolution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountSuccesses {
    /// Roll at or below this value to score a success.
    pub target_number: u32,
    /// Roll at or below this value to score two successes.
    pub critical_threshold: u32,
    /// Roll at or above this value to suffer a complication.
    pub complication_range: u32,
    /// How many successes are needed to pass.
    pub successes_needed: u32,
}

impl Default for CountSuccesses {
    fn default() -> Self {
        Self {
            target_number: 10,
            critical_threshold: 1,
            complication_range: D20,
            successes_needed: 1,
        }
    }
}

/// Successes and complications counted from a set of d20 faces.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    /// Total successes, criticals counted twice.
    pub successes: u32,
    /// Dice in the complication range.
    pub complications: u32,
    /// Dice in the critical range.
    pub critical_hits: u32,
}

impl CountSuccesses {
    /// A counter for `target_number` with default thresholds.
    pub fn new(target_number: u32) -> Self {
        Self {
            target_number,
            ..Self::default()
        }
    }

    /// Successes a single face contributes: 0, 1, or 2.
    pub fn score(&self, face: u32) -> u32 {
        if face <= self.critical_threshold {
            2
        } else if face <= self.target_number {
            1
        } else {
            0
        }
    }

    /// Count successes, complications, and critical hits over all faces.
    pub fn tally(&self, faces: &[u32]) -> Tally {
        faces.iter().fold(Tally::default(), |mut tally, &face| {
            tally.successes += self.score(face);
            if face >= self.complication_range {
                tally.complications += 1;
            }
            if face <= self.critical_threshold {
                tally.critical_hits += 1;
            }
            tally
        })
    }

    /// Place a tally into an outcome tier against `successes_needed`.
    pub fn resolve(&self, tally: &Tally) -> Outcome {
        let needed = self.successes_needed;
        let successes = tally.successes;

        if successes >= needed {
            let margin = successes - needed;
            if margin >= 2 {
                Outcome::CriticalSuccess { margin }
            } else {
                Outcome::Success { margin }
            }
        } else if successes == 0 && tally.complications > 0 {
            Outcome::CriticalFailure
        } else if successes > 0 && successes + 1 == needed {
            Outcome::Partial
        } else {
            Outcome::Failure
        }
    }
}

/// Roll `2 + bonus_dice` d20s against `target_number`.
///
/// Every die counts toward successes and complications; choosing which
/// two dice to show is left to the caller (see [`RollResult::main_pair`]).
pub fn dune_2d20_roll<S: DieSource + ?Sized>(
    target_number: u32,
    bonus_dice: u32,
    source: &mut S,
) -> RollResult {
    let rolls = roll_pool(BASE_DICE.saturating_add(bonus_dice), D20, source);
    let tally = CountSuccesses::new(target_number).tally(&rolls);
    debug!(
        target_number,
        bonus_dice,
        successes = tally.successes,
        complications = tally.complications,
        "dune 2d20 roll"
    );

    RollResult {
        total: rolls.iter().map(|&r| i64::from(r)).sum(),
        rolls,
        successes: tally.successes,
        complications: tally.complications,
        botch: false,
        exploded_dice: Vec::new(),
        details: RollDetails::Dune {
            target_number,
            bonus_dice,
        },
    }
}
