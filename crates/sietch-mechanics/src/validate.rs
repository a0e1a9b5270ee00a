//! Bounds checks run after parsing and before any die is rolled.
//!
//! The limits keep requests small enough to render and cheap to compute.
//! [`EngineConfig`](crate::config::EngineConfig) can tune the dice limits;
//! the free functions here use the defaults.

use crate::error::{MechError, MechResult};

/// Fewest dice a roll may use.
pub const MIN_DICE: u32 = 1;
/// Most dice a roll may use.
pub const MAX_DICE: u32 = 100;
/// Fewest faces a die may have.
pub const MIN_SIDES: u32 = 2;
/// Most faces a die may have.
pub const MAX_SIDES: u32 = 1000;
/// Largest World of Darkness pool.
pub const MAX_WOD_POOL: u32 = 30;
/// Lowest World of Darkness difficulty.
pub const MIN_DIFFICULTY: u32 = 1;
/// Highest World of Darkness difficulty.
pub const MAX_DIFFICULTY: u32 = 10;
/// Difficulty used when a World of Darkness roll does not name one.
pub const DEFAULT_WOD_DIFFICULTY: u32 = 6;

/// Reject dice counts outside `1..=100` and face counts outside `2..=1000`.
pub fn validate_dice_parameters(count: u32, sides: u32) -> MechResult<()> {
    check_dice(count, sides, MAX_DICE, MAX_SIDES)
}

/// Reject World of Darkness pools outside `1..=30` and difficulties outside `1..=10`.
pub fn validate_wod_parameters(pool: u32, difficulty: u32) -> MechResult<()> {
    if !(1..=MAX_WOD_POOL).contains(&pool) {
        return Err(MechError::InvalidPool {
            pool,
            max: MAX_WOD_POOL,
        });
    }
    if !(MIN_DIFFICULTY..=MAX_DIFFICULTY).contains(&difficulty) {
        return Err(MechError::InvalidDifficulty {
            difficulty,
            min: MIN_DIFFICULTY,
            max: MAX_DIFFICULTY,
        });
    }
    Ok(())
}

pub(crate) fn check_dice(count: u32, sides: u32, max_dice: u32, max_sides: u32) -> MechResult<()> {
    if !(MIN_DICE..=max_dice).contains(&count) {
        return Err(MechError::InvalidCount {
            count,
            min: MIN_DICE,
            max: max_dice,
        });
    }
    if !(MIN_SIDES..=max_sides).contains(&sides) {
        return Err(MechError::InvalidSides {
            sides,
            min: MIN_SIDES,
            max: max_sides,
        });
    }
    Ok(())
}
