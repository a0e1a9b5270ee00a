//! Evaluators that turn raw faces into typed results.
//!
//! Each system reduces dice differently:
//! - **Sum** (standard, exploding): add every face and a modifier
//! - **Pool** (World of Darkness): count d10s at or above a difficulty
//! - **Count successes** (Dune 2d20): count d20s at or below a target number

pub mod count;
pub mod sum;
pub mod wod;

pub use count::{CountSuccesses, Tally, dune_2d20_roll};
pub use sum::{exploding_roll, exploding_roll_with_cap, standard_roll};
pub use wod::world_of_darkness_roll;

use serde::{Deserialize, Serialize};

/// The outcome tier of a test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "tier", rename_all = "snake_case")]
pub enum Outcome {
    /// Two or more successes beyond what was needed.
    CriticalSuccess {
        /// Successes beyond the difficulty.
        margin: u32,
    },
    /// Enough successes, with at most one to spare.
    Success {
        /// Successes beyond the difficulty.
        margin: u32,
    },
    /// Failed by a single success after scoring at least one.
    Partial,
    /// Not enough successes.
    Failure,
    /// No successes and at least one complication.
    CriticalFailure,
}

impl Outcome {
    /// Returns true for either success tier.
    pub fn is_success(self) -> bool {
        matches!(self, Self::CriticalSuccess { .. } | Self::Success { .. })
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CriticalSuccess { margin } => write!(f, "Critical Success (margin {margin})"),
            Self::Success { margin } => write!(f, "Success (margin {margin})"),
            Self::Partial => write!(f, "Close Failure"),
            Self::Failure => write!(f, "Failure"),
            Self::CriticalFailure => write!(f, "Critical Failure"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_display() {
        assert_eq!(
            Outcome::CriticalSuccess { margin: 3 }.to_string(),
            "Critical Success (margin 3)"
        );
        assert_eq!(
            Outcome::Success { margin: 1 }.to_string(),
            "Success (margin 1)"
        );
        assert_eq!(Outcome::Partial.to_string(), "Close Failure");
        assert_eq!(Outcome::Failure.to_string(), "Failure");
        assert_eq!(Outcome::CriticalFailure.to_string(), "Critical Failure");
    }

    #[test]
    fn success_tiers() {
        assert!(Outcome::CriticalSuccess { margin: 2 }.is_success());
        assert!(Outcome::Success { margin: 0 }.is_success());
        assert!(!Outcome::Partial.is_success());
        assert!(!Outcome::CriticalFailure.is_success());
    }
}
