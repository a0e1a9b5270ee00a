//! Summing evaluators: standard and exploding dice.
//!
//! Roll a pool of dice and add every face plus a modifier. Exploding dice
//! roll again whenever a die shows its maximum face, and the extra die is
//! itself allowed to explode.

use tracing::{debug, warn};

use crate::config::DEFAULT_MAX_EXPLOSIONS;
use crate::dice::{DieSource, RollDetails, RollResult, roll_pool};

/// Roll `count` dice with `sides` faces and add `modifier`.
///
/// Parameters are expected to have passed
/// [`validate_dice_parameters`](crate::validate::validate_dice_parameters).
pub fn standard_roll<S: DieSource + ?Sized>(
    count: u32,
    sides: u32,
    modifier: i32,
    source: &mut S,
) -> RollResult {
    let rolls = roll_pool(count, sides, source);
    let total = sum(&rolls) + i64::from(modifier);
    debug!(count, sides, modifier, total, "standard roll");

    RollResult {
        rolls,
        total,
        successes: 0,
        complications: 0,
        botch: false,
        exploded_dice: Vec::new(),
        details: RollDetails::Standard { modifier },
    }
}

/// Roll exploding dice with the default explosion cap.
pub fn exploding_roll<S: DieSource + ?Sized>(
    count: u32,
    sides: u32,
    modifier: i32,
    source: &mut S,
) -> RollResult {
    exploding_roll_with_cap(count, sides, modifier, Some(DEFAULT_MAX_EXPLOSIONS), source)
}

/// Roll exploding dice, stopping after `cap` extra dice when a cap is given.
///
/// `rolls` holds every face, each exploded die directly after the die that
/// triggered it. `exploded_dice` holds only the extra dice.
pub fn exploding_roll_with_cap<S: DieSource + ?Sized>(
    count: u32,
    sides: u32,
    modifier: i32,
    cap: Option<u32>,
    source: &mut S,
) -> RollResult {
    let mut rolls = Vec::with_capacity(count as usize);
    let mut exploded_dice = Vec::new();
    let mut capped = false;

    for _ in 0..count {
        let mut face = source.roll_die(sides);
        rolls.push(face);

        while face == sides {
            if cap.is_some_and(|max| exploded_dice.len() as u32 >= max) {
                capped = true;
                break;
            }
            face = source.roll_die(sides);
            rolls.push(face);
            exploded_dice.push(face);
        }
    }

    if capped {
        warn!(count, sides, ?cap, "explosion cap reached, chain stopped early");
    }

    let total = sum(&rolls) + i64::from(modifier);
    let exploded_count = exploded_dice.len() as u32;
    debug!(count, sides, modifier, exploded_count, total, "exploding roll");

    RollResult {
        rolls,
        total,
        successes: 0,
        complications: 0,
        botch: false,
        exploded_dice,
        details: RollDetails::Exploding {
            modifier,
            exploded_count,
            capped,
        },
    }
}

fn sum(rolls: &[u32]) -> i64 {
    rolls.iter().map(|&r| i64::from(r)).sum()
}
