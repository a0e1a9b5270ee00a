//! Dune 2d20 tests: options, results, and the test procedure.
//!
//! A test rolls `2 + bonus_dice` d20s against a target number built from
//! an attribute (or drive) plus a skill. Successes beyond the difficulty
//! become momentum; every complication becomes one point of threat.

pub mod damage;
pub mod extended;
pub mod npc;
pub mod preset;

pub use damage::{DamageResult, QualityEffect, WEAPON_QUALITIES, WeaponQuality, roll_damage};
pub use extended::{ExtendedProgress, extended_test};
pub use npc::{NpcStats, NpcTier, generate_npc_stats, npc_test};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::dice::{DieSource, roll_pool};
use crate::resolution::count::{BASE_DICE, D20};
use crate::resolution::{CountSuccesses, Outcome};
use crate::sheet::{Character, DEFAULT_ATTRIBUTE, DEFAULT_SKILL};

/// Most bonus dice that assisting characters can add to a test.
pub const MAX_ASSIST_DICE: u32 = 3;

/// Knobs for a single test.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestOptions {
    /// Successes required to pass.
    pub difficulty: u32,
    /// d20s added beyond the base two.
    pub bonus_dice: u32,
    /// Assets brought to bear (narrative only).
    pub assets: Vec<String>,
    /// Traits invoked (narrative only).
    pub traits: Vec<String>,
    /// Whether the character spent Determination; the caller deducts it.
    pub use_determination: bool,
    /// Faces at or above this are complications.
    pub complication_range: u32,
}

impl Default for TestOptions {
    fn default() -> Self {
        Self {
            difficulty: 1,
            bonus_dice: 0,
            assets: Vec::new(),
            traits: Vec::new(),
            use_determination: false,
            complication_range: D20,
        }
    }
}

impl TestOptions {
    /// Set the difficulty.
    pub fn with_difficulty(mut self, difficulty: u32) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// Set the number of bonus dice.
    pub fn with_bonus_dice(mut self, bonus_dice: u32) -> Self {
        self.bonus_dice = bonus_dice;
        self
    }

    /// Add an asset to the test.
    pub fn with_asset(mut self, asset: impl Into<String>) -> Self {
        self.assets.push(asset.into());
        self
    }

    /// Add a trait to the test.
    pub fn with_trait(mut self, name: impl Into<String>) -> Self {
        self.traits.push(name.into());
        self
    }

    /// Mark the test as using Determination.
    pub fn with_determination(mut self) -> Self {
        self.use_determination = true;
        self
    }

    /// Set the complication range (clamped to 1-20).
    pub fn with_complication_range(mut self, range: u32) -> Self {
        self.complication_range = range.clamp(1, D20);
        self
    }
}

/// Inputs echoed back with a test result.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestDetails {
    /// Attribute (or drive) value used.
    pub attribute: u32,
    /// Skill value used.
    pub skill: u32,
    /// Attribute plus skill.
    pub target_number: u32,
    /// Bonus dice rolled.
    pub bonus_dice: u32,
    /// Assets named for the test.
    pub assets: Vec<String>,
    /// Traits named for the test.
    pub traits: Vec<String>,
    /// Whether Determination was spent.
    pub determination: bool,
    /// Successes that were required.
    pub difficulty: u32,
}

/// The result of a Dune test.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestResult {
    /// Whether the test passed.
    pub success: bool,
    /// Successes scored, criticals counted twice.
    pub successes: u32,
    /// Dice in the complication range.
    pub complications: u32,
    /// Dice showing a natural 1.
    pub critical_hits: u32,
    /// Successes beyond the difficulty.
    pub momentum: u32,
    /// Threat generated, one per complication.
    pub threat: u32,
    /// Every face rolled.
    pub rolls: Vec<u32>,
    /// Outcome tier.
    pub outcome: Outcome,
    /// One or two sentences describing the result.
    pub narrative: String,
    /// Inputs echoed back for display.
    pub details: TestDetails,
}

impl Default for TestResult {
    fn default() -> Self {
        Self {
            success: false,
            successes: 0,
            complications: 0,
            critical_hits: 0,
            momentum: 0,
            threat: 0,
            rolls: Vec::new(),
            outcome: Outcome::Failure,
            narrative: String::new(),
            details: TestDetails::default(),
        }
    }
}

/// Test a character's attribute (or drive) plus skill.
///
/// Names the sheet lacks fall back to [`DEFAULT_ATTRIBUTE`] and
/// [`DEFAULT_SKILL`] rather than failing.
pub fn perform_test<S: DieSource + ?Sized>(
    character: &Character,
    attribute: &str,
    skill: &str,
    options: &TestOptions,
    source: &mut S,
) -> TestResult {
    let attribute_value = character.stat(attribute).unwrap_or_else(|| {
        debug!(character = %character.name, attribute, "attribute missing, using default");
        DEFAULT_ATTRIBUTE
    });
    let skill_value = character.skill(skill).unwrap_or_else(|| {
        debug!(character = %character.name, skill, "skill missing, using default");
        DEFAULT_SKILL
    });

    let mut result = resolve_test(attribute_value, skill_value, options, source);
    result.narrative = narrative(&result, attribute, skill);
    result
}

/// Run the test procedure on raw attribute and skill values.
///
/// The narrative names no stats; [`perform_test`] replaces it with one that does.
pub fn resolve_test<S: DieSource + ?Sized>(
    attribute: u32,
    skill: u32,
    options: &TestOptions,
    source: &mut S,
) -> TestResult {
    let target_number = attribute.saturating_add(skill);
    let counter = CountSuccesses {
        target_number,
        critical_threshold: 1,
        complication_range: options.complication_range,
        successes_needed: options.difficulty,
    };

    let rolls = roll_pool(BASE_DICE.saturating_add(options.bonus_dice), D20, source);
    let tally = counter.tally(&rolls);
    let outcome = counter.resolve(&tally);
    let success = tally.successes >= options.difficulty;
    let momentum = tally.successes.saturating_sub(options.difficulty);

    debug!(
        target_number,
        difficulty = options.difficulty,
        successes = tally.successes,
        complications = tally.complications,
        momentum,
        "dune test"
    );

    let mut result = TestResult {
        success,
        successes: tally.successes,
        complications: tally.complications,
        critical_hits: tally.critical_hits,
        momentum,
        threat: tally.complications,
        rolls,
        outcome,
        narrative: String::new(),
        details: TestDetails {
            attribute,
            skill,
            target_number,
            bonus_dice: options.bonus_dice,
            assets: options.assets.clone(),
            traits: options.traits.clone(),
            determination: options.use_determination,
            difficulty: options.difficulty,
        },
    };
    result.narrative = narrative(&result, "attribute", "skill");
    result
}

/// Describe a result in prose, naming the stats that were tested.
fn narrative(result: &TestResult, attribute: &str, skill: &str) -> String {
    let mut text = match result.outcome {
        Outcome::CriticalSuccess { .. } => {
            format!("Exceptional success! Your {skill} far exceeds what the moment demanded.")
        }
        Outcome::Success { .. } if result.critical_hits > 0 => {
            format!("Critical success! Your {attribute} and {skill} combine perfectly.")
        }
        Outcome::Success { .. } => format!("Success. Your {skill} proves adequate for the task."),
        Outcome::Partial => format!("Close failure. Your {skill} almost succeeds but falls just short."),
        Outcome::Failure => format!("Failure. Your {skill} does not achieve the desired result."),
        Outcome::CriticalFailure => {
            format!("Disaster. Your {skill} fails and the situation turns against you.")
        }
    };

    match result.complications {
        0 => {}
        1 => text.push_str(" However, a complication arises."),
        _ => text.push_str(" However, multiple complications emerge."),
    }
    text
}

/// Bonus dice from assisting characters: one per helper trained in `skill`.
pub fn calculate_assistance(helpers: &[Character], skill: &str) -> u32 {
    let trained = helpers
        .iter()
        .filter(|helper| helper.skill(skill).is_some_and(|v| v > 0))
        .count() as u32;
    trained.min(MAX_ASSIST_DICE)
}

/// Bonus dice bought with momentum: one die per point.
pub fn spend_momentum_for_dice(momentum: u32) -> u32 {
    momentum
}
