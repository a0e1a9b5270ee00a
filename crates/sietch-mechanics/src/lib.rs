//! Dice resolution engine for Dune 2d20 and friends.
//!
//! Provides notation parsing, bounds validation, and four dice systems:
//! standard sums, exploding sums, World of Darkness d10 pools, and Dune
//! 2d20 success counting. On top of that sit the Dune rules helpers:
//! attribute plus skill tests, momentum and threat, damage, NPC stat
//! blocks, and conflict modifiers.
//!
//! Every evaluator draws from a caller-supplied [`DieSource`], so a seeded
//! RNG or [`ScriptedDice`] makes any roll reproducible.

pub mod combat;
pub mod config;
pub mod dice;
pub mod error;
pub mod resolution;
pub mod rules;
pub mod sheet;
pub mod validate;

pub use config::EngineConfig;
pub use dice::{
    DiceSystem, DieSource, RollDetails, RollResult, RollSpec, ScriptedDice,
    parse_standard_notation,
};
pub use error::{ErrorKind, MechError, MechResult};
pub use resolution::{
    Outcome, dune_2d20_roll, exploding_roll, exploding_roll_with_cap, standard_roll,
    world_of_darkness_roll,
};
pub use rules::{TestOptions, TestResult, perform_test};
pub use sheet::{Character, MomentumPool};
pub use validate::{validate_dice_parameters, validate_wod_parameters};
