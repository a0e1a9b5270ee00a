//! World of Darkness d10 pools.
//!
//! Every d10 at or above the difficulty is a success. With a specialty a
//! 10 scores twice. A roll with no successes and at least one 1 is a botch.

use tracing::debug;

use crate::dice::{DieSource, RollDetails, RollResult, roll_pool};

/// Faces on a World of Darkness die.
pub const WOD_DIE: u32 = 10;

/// Roll a pool of `count` d10s against `difficulty`.
///
/// The caller validates `difficulty` (see
/// [`validate_wod_parameters`](crate::validate::validate_wod_parameters)).
/// Ones are counted for display and the botch check; they do not cancel
/// successes.
pub fn world_of_darkness_roll<S: DieSource + ?Sized>(
    count: u32,
    difficulty: u32,
    specialty: bool,
    source: &mut S,
) -> RollResult {
    let rolls = roll_pool(count, WOD_DIE, source);

    let mut successes = 0;
    let mut ones = 0;
    for &face in &rolls {
        if face >= difficulty {
            successes += if specialty && face == WOD_DIE { 2 } else { 1 };
        }
        if face == 1 {
            ones += 1;
        }
    }
    let botch = successes == 0 && ones > 0;
    debug!(count, difficulty, specialty, successes, ones, botch, "world of darkness roll");

    RollResult {
        total: rolls.iter().map(|&r| i64::from(r)).sum(),
        rolls,
        successes,
        complications: 0,
        botch,
        exploded_dice: Vec::new(),
        details: RollDetails::WorldOfDarkness {
            difficulty,
            ones,
            specialty,
        },
    }
}
