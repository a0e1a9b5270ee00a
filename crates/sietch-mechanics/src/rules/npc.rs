//! Non-player characters: stat blocks by tier and quick supporting tests.

use std::collections::BTreeMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::dice::DieSource;
use crate::error::MechError;
use crate::rules::preset::{DUNE_DRIVES, NPC_ATTRIBUTES, NPC_SKILLS};
use crate::rules::{TestOptions, TestResult, resolve_test};

/// How dangerous an NPC is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NpcTier {
    /// Rank-and-file opposition.
    Minion,
    /// A capable named foe.
    Toughened,
    /// A major antagonist.
    Nemesis,
}

/// Per-tier baseline values.
struct TierStats {
    attribute: u32,
    skill: u32,
    vigor: u32,
    resolve: u32,
    drive: u32,
    supporting: u32,
}

impl NpcTier {
    /// Every tier, weakest first.
    pub const ALL: [NpcTier; 3] = [Self::Minion, Self::Toughened, Self::Nemesis];

    fn stats(self) -> TierStats {
        match self {
            Self::Minion => TierStats {
                attribute: 7,
                skill: 1,
                vigor: 3,
                resolve: 2,
                drive: 4,
                supporting: 7,
            },
            Self::Toughened => TierStats {
                attribute: 9,
                skill: 2,
                vigor: 5,
                resolve: 3,
                drive: 5,
                supporting: 8,
            },
            Self::Nemesis => TierStats {
                attribute: 11,
                skill: 3,
                vigor: 8,
                resolve: 5,
                drive: 6,
                supporting: 9,
            },
        }
    }

    /// The single stat a supporting character of this tier tests with.
    pub fn supporting_stat(self) -> u32 {
        self.stats().supporting
    }
}

impl std::fmt::Display for NpcTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Minion => write!(f, "minion"),
            Self::Toughened => write!(f, "toughened"),
            Self::Nemesis => write!(f, "nemesis"),
        }
    }
}

impl FromStr for NpcTier {
    type Err = MechError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "minion" => Ok(Self::Minion),
            "toughened" => Ok(Self::Toughened),
            "nemesis" => Ok(Self::Nemesis),
            _ => Err(MechError::UnknownTier(s.trim().to_string())),
        }
    }
}

/// A generated NPC stat block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NpcStats {
    /// Tier the block was generated for.
    pub tier: NpcTier,
    /// One-line concept (e.g., "Harkonnen trooper").
    pub concept: String,
    /// Attribute scores.
    pub attributes: BTreeMap<String, u32>,
    /// Skill scores.
    pub skills: BTreeMap<String, u32>,
    /// Drive scores.
    pub drives: BTreeMap<String, u32>,
    /// Assets; empty until the gamemaster assigns some.
    pub assets: Vec<String>,
    /// Traits; empty until the gamemaster assigns some.
    pub traits: Vec<String>,
    /// Physical harm the NPC can absorb.
    pub vigor: u32,
    /// Mental harm the NPC can absorb.
    pub resolve: u32,
}

/// Build a stat block from the tier table.
pub fn generate_npc_stats(tier: NpcTier, concept: impl Into<String>) -> NpcStats {
    let stats = tier.stats();

    NpcStats {
        tier,
        concept: concept.into(),
        attributes: fill(&NPC_ATTRIBUTES, stats.attribute),
        skills: fill(&NPC_SKILLS, stats.skill),
        drives: fill(&DUNE_DRIVES, stats.drive),
        assets: Vec::new(),
        traits: Vec::new(),
        vigor: stats.vigor,
        resolve: stats.resolve,
    }
}

fn fill(names: &[&str], value: u32) -> BTreeMap<String, u32> {
    names.iter().map(|n| (n.to_string(), value)).collect()
}

/// Test a supporting character of `tier`.
///
/// The tier's single stat is the whole target number. An asset adds one die.
pub fn npc_test<S: DieSource + ?Sized>(
    tier: NpcTier,
    with_asset: bool,
    difficulty: u32,
    source: &mut S,
) -> TestResult {
    let options = TestOptions::default()
        .with_difficulty(difficulty)
        .with_bonus_dice(u32::from(with_asset));
    let mut result = resolve_test(tier.supporting_stat(), 0, &options, source);
    result.narrative = format!("The {tier} NPC acts. {}", result.narrative);
    result
}
