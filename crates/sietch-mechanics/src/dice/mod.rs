//! Dice notation, random sources, and roll results.
//!
//! Four systems are supported: plain sums, exploding sums, World of
//! Darkness d10 pools, and the Dune 2d20 roll-under test.

pub mod notation;
pub mod pool;
pub mod roll;

pub use notation::{RollSpec, parse_standard_notation};
pub use pool::{DieSource, ScriptedDice, roll_pool};
pub use roll::{RollDetails, RollResult};

use serde::{Deserialize, Serialize};

/// A dice system the engine knows how to evaluate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiceSystem {
    /// Sum of dice plus a modifier.
    Standard,
    /// Sum of dice where maximum faces roll again.
    Exploding,
    /// d10 pool counting faces at or above a difficulty.
    #[serde(rename = "wod")]
    WorldOfDarkness,
    /// d20 pool counting faces at or below a target number.
    #[serde(rename = "dune")]
    Dune2d20,
}

impl DiceSystem {
    /// Parse a system from a user-supplied name.
    pub fn from_name(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "standard" | "std" => Some(Self::Standard),
            "exploding" | "explode" => Some(Self::Exploding),
            "wod" | "world of darkness" | "world_of_darkness" => Some(Self::WorldOfDarkness),
            "dune" | "2d20" | "dune_2d20" => Some(Self::Dune2d20),
            _ => None,
        }
    }
}

impl std::fmt::Display for DiceSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Standard => write!(f, "standard"),
            Self::Exploding => write!(f, "exploding"),
            Self::WorldOfDarkness => write!(f, "wod"),
            Self::Dune2d20 => write!(f, "dune"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_from_name() {
        assert_eq!(DiceSystem::from_name("Standard"), Some(DiceSystem::Standard));
        assert_eq!(DiceSystem::from_name("wod"), Some(DiceSystem::WorldOfDarkness));
        assert_eq!(DiceSystem::from_name("2d20"), Some(DiceSystem::Dune2d20));
        assert_eq!(DiceSystem::from_name("fate"), None);
    }

    #[test]
    fn system_display_round_trips() {
        for system in [
            DiceSystem::Standard,
            DiceSystem::Exploding,
            DiceSystem::WorldOfDarkness,
            DiceSystem::Dune2d20,
        ] {
            assert_eq!(DiceSystem::from_name(&system.to_string()), Some(system));
        }
    }
}
