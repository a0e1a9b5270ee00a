//! Conflict helpers: initiative and ranged attack difficulty.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::dice::DieSource;
use crate::error::MechError;
use crate::resolution::count::D20;
use crate::sheet::{Character, DEFAULT_SKILL};

/// Difficulty of a ranged attack before range and cover.
pub const BASE_RANGED_DIFFICULTY: u32 = 1;

/// Roll initiative: a d20 plus the character's value in `skill`.
pub fn roll_initiative<S: DieSource + ?Sized>(
    character: &Character,
    skill: &str,
    source: &mut S,
) -> u32 {
    let skill_value = character.skill(skill).unwrap_or(DEFAULT_SKILL);
    let roll = source.roll_die(D20);
    debug!(character = %character.name, skill, roll, skill_value, "initiative");
    roll.saturating_add(skill_value)
}

/// Distance between attacker and target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RangeBand {
    /// Same zone.
    Close,
    /// Adjacent zone.
    Medium,
    /// Two zones away.
    Long,
    /// Beyond long range.
    Extreme,
}

impl RangeBand {
    fn penalty(self) -> u32 {
        match self {
            Self::Close => 0,
            Self::Medium => 1,
            Self::Long => 2,
            Self::Extreme => 3,
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Close => "Close range",
            Self::Medium => "Medium range",
            Self::Long => "Long range",
            Self::Extreme => "Extreme range",
        }
    }
}

impl FromStr for RangeBand {
    type Err = MechError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "close" => Ok(Self::Close),
            "medium" => Ok(Self::Medium),
            "long" => Ok(Self::Long),
            "extreme" => Ok(Self::Extreme),
            _ => Err(MechError::UnknownRange(s.trim().to_string())),
        }
    }
}

/// Cover protecting the target.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cover {
    /// In the open.
    #[default]
    None,
    /// Partly obscured.
    Light,
    /// Mostly protected.
    Heavy,
    /// Fully protected.
    Total,
}

impl Cover {
    fn penalty(self) -> u32 {
        match self {
            Self::None => 0,
            Self::Light => 1,
            Self::Heavy => 2,
            Self::Total => 3,
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::None => "no cover",
            Self::Light => "light cover",
            Self::Heavy => "heavy cover",
            Self::Total => "total cover",
        }
    }
}

impl FromStr for Cover {
    type Err = MechError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" => Ok(Self::None),
            "light" => Ok(Self::Light),
            "heavy" => Ok(Self::Heavy),
            "total" => Ok(Self::Total),
            _ => Err(MechError::UnknownCover(s.trim().to_string())),
        }
    }
}

/// Difficulty of a ranged attack with a description of what raised it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeModifier {
    /// Total difficulty.
    pub difficulty: u32,
    /// e.g. "Long range (+2 difficulty), light cover (+1 difficulty)".
    pub description: String,
}

/// Work out the difficulty of attacking across `range` into `cover`.
pub fn range_modifiers(range: RangeBand, cover: Cover) -> RangeModifier {
    let mut description = range.label().to_string();
    if range.penalty() > 0 {
        description.push_str(&format!(" (+{} difficulty)", range.penalty()));
    }
    if cover.penalty() > 0 {
        description.push_str(&format!(", {} (+{} difficulty)", cover.label(), cover.penalty()));
    }

    RangeModifier {
        difficulty: BASE_RANGED_DIFFICULTY + range.penalty() + cover.penalty(),
        description,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::ScriptedDice;

    #[test]
    fn initiative_adds_skill() {
        let stilgar = Character::new("Stilgar").with_skill("Move", 5);
        let mut dice = ScriptedDice::new([12]);
        assert_eq!(roll_initiative(&stilgar, "move", &mut dice), 17);
    }

    #[test]
    fn initiative_untrained() {
        let mut dice = ScriptedDice::new([9]);
        assert_eq!(roll_initiative(&Character::new("Farok"), "Battle", &mut dice), 9);
    }

    #[test]
    fn initiative_saturates_huge_skill() {
        let sheet = Character::new("Leto").with_skill("Move", u32::MAX);
        let mut dice = ScriptedDice::new([12]);
        assert_eq!(roll_initiative(&sheet, "Move", &mut dice), u32::MAX);
    }

    #[test]
    fn close_in_the_open() {
        let m = range_modifiers(RangeBand::Close, Cover::None);
        assert_eq!(m.difficulty, 1);
        assert_eq!(m.description, "Close range");
    }

    #[test]
    fn long_range_light_cover() {
        let m = range_modifiers(RangeBand::Long, Cover::Light);
        assert_eq!(m.difficulty, 4);
        assert_eq!(
            m.description,
            "Long range (+2 difficulty), light cover (+1 difficulty)"
        );
    }

    #[test]
    fn worst_case() {
        let m = range_modifiers(RangeBand::Extreme, Cover::Total);
        assert_eq!(m.difficulty, 7);
    }

    #[test]
    fn parse_bands_and_cover() {
        assert_eq!("MEDIUM".parse::<RangeBand>().unwrap(), RangeBand::Medium);
        assert_eq!("heavy".parse::<Cover>().unwrap(), Cover::Heavy);
        assert!(matches!(
            "orbital".parse::<RangeBand>(),
            Err(MechError::UnknownRange(r)) if r == "orbital"
        ));
        assert!(matches!(
            "shield".parse::<Cover>(),
            Err(MechError::UnknownCover(c)) if c == "shield"
        ));
    }
}
