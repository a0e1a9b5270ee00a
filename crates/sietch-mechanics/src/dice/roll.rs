//! Roll results and their per-system details.

use serde::{Deserialize, Serialize};

use super::DiceSystem;

/// Inputs echoed back with a result, one shape per dice system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "system", rename_all = "snake_case")]
pub enum RollDetails {
    /// Plain sum of dice.
    Standard {
        /// Constant added to the dice.
        modifier: i32,
    },
    /// Sum of dice where maximum faces roll again.
    Exploding {
        /// Constant added to the dice.
        modifier: i32,
        /// Number of extra dice generated by explosions.
        exploded_count: u32,
        /// True when the explosion cap stopped a chain early.
        capped: bool,
    },
    /// World of Darkness d10 pool.
    #[serde(rename = "wod")]
    WorldOfDarkness {
        /// Face a die must reach to succeed.
        difficulty: u32,
        /// How many dice showed a 1.
        ones: u32,
        /// Whether 10s counted double.
        specialty: bool,
    },
    /// Dune 2d20 roll-under test.
    #[serde(rename = "dune")]
    Dune {
        /// Roll at or under this to succeed.
        target_number: u32,
        /// d20s added beyond the base two.
        bonus_dice: u32,
    },
}

impl RollDetails {
    /// The dice system these details belong to.
    pub fn system(&self) -> DiceSystem {
        match self {
            Self::Standard { .. } => DiceSystem::Standard,
            Self::Exploding { .. } => DiceSystem::Exploding,
            Self::WorldOfDarkness { .. } => DiceSystem::WorldOfDarkness,
            Self::Dune { .. } => DiceSystem::Dune2d20,
        }
    }

    /// The additive modifier, for the summing systems.
    pub fn modifier(&self) -> Option<i32> {
        match self {
            Self::Standard { modifier } | Self::Exploding { modifier, .. } => Some(*modifier),
            _ => None,
        }
    }
}

/// The outcome of one evaluator call.
///
/// Built once per roll and never mutated afterwards. Fields that do not
/// apply to a system keep their zero value: `total` is only meaningful for
/// the summing systems, `successes` only for the pool systems.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollResult {
    /// Every face generated, in generation order.
    pub rolls: Vec<u32>,
    /// Sum of all faces plus any modifier.
    pub total: i64,
    /// Number of successes scored.
    pub successes: u32,
    /// Number of dice that landed in the complication range.
    pub complications: u32,
    /// World of Darkness botch: no successes and at least one 1.
    pub botch: bool,
    /// Extra dice generated by explosions, in generation order.
    pub exploded_dice: Vec<u32>,
    /// System-specific inputs.
    pub details: RollDetails,
}

impl RollResult {
    /// Which system produced this result.
    pub fn system(&self) -> DiceSystem {
        self.details.system()
    }

    /// Sum of the faces, without any modifier.
    pub fn dice_sum(&self) -> i64 {
        self.rolls.iter().map(|&r| i64::from(r)).sum()
    }

    /// The two lowest faces, for displays that only show the base 2d20.
    pub fn main_pair(&self) -> Vec<u32> {
        let mut sorted = self.rolls.clone();
        sorted.sort_unstable();
        sorted.truncate(2);
        sorted
    }

    /// Number of dice generated.
    pub fn count(&self) -> usize {
        self.rolls.len()
    }
}

impl std::fmt::Display for RollResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let values: Vec<String> = self.rolls.iter().map(u32::to_string).collect();
        let faces = values.join(", ");
        match &self.details {
            RollDetails::Standard { modifier } | RollDetails::Exploding { modifier, .. } => {
                match modifier.cmp(&0) {
                    std::cmp::Ordering::Greater => {
                        write!(f, "[{faces}] + {modifier} = {}", self.total)
                    }
                    std::cmp::Ordering::Less => {
                        write!(f, "[{faces}] - {} = {}", modifier.unsigned_abs(), self.total)
                    }
                    std::cmp::Ordering::Equal => write!(f, "[{faces}] = {}", self.total),
                }
            }
            RollDetails::WorldOfDarkness { .. } => {
                write!(f, "[{faces}] = {} successes", self.successes)?;
                if self.botch {
                    write!(f, " (botch)")?;
                }
                Ok(())
            }
            RollDetails::Dune { .. } => write!(
                f,
                "[{faces}] = {} successes, {} complications",
                self.successes, self.complications
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn standard(rolls: &[u32], modifier: i32) -> RollResult {
        let sum: i64 = rolls.iter().map(|&r| i64::from(r)).sum();
        RollResult {
            rolls: rolls.to_vec(),
            total: sum + i64::from(modifier),
            successes: 0,
            complications: 0,
            botch: false,
            exploded_dice: Vec::new(),
            details: RollDetails::Standard { modifier },
        }
    }

    #[test]
    fn system_follows_details() {
        let r = standard(&[3], 0);
        assert_eq!(r.system(), DiceSystem::Standard);
        let details = RollDetails::Dune {
            target_number: 10,
            bonus_dice: 0,
        };
        assert_eq!(details.system(), DiceSystem::Dune2d20);
        assert_eq!(details.modifier(), None);
    }

    #[test]
    fn dice_sum_ignores_modifier() {
        let r = standard(&[4, 2, 5], 2);
        assert_eq!(r.dice_sum(), 11);
        assert_eq!(r.total, 13);
        assert_eq!(r.count(), 3);
    }

    #[test]
    fn main_pair_takes_lowest_two() {
        let mut r = standard(&[14, 3, 20, 7], 0);
        r.details = RollDetails::Dune {
            target_number: 10,
            bonus_dice: 2,
        };
        assert_eq!(r.main_pair(), vec![3, 7]);
    }

    #[test]
    fn display_modifier_signs() {
        insta::assert_snapshot!(standard(&[4, 2, 5], 2).to_string(), @"[4, 2, 5] + 2 = 13");
        insta::assert_snapshot!(standard(&[4, 2, 5], -2).to_string(), @"[4, 2, 5] - 2 = 9");
        insta::assert_snapshot!(standard(&[6], 0).to_string(), @"[6] = 6");
    }

    #[test]
    fn display_wod_botch() {
        let r = RollResult {
            rolls: vec![1, 1, 3],
            total: 5,
            successes: 0,
            complications: 0,
            botch: true,
            exploded_dice: Vec::new(),
            details: RollDetails::WorldOfDarkness {
                difficulty: 7,
                ones: 2,
                specialty: false,
            },
        };
        insta::assert_snapshot!(r.to_string(), @"[1, 1, 3] = 0 successes (botch)");
    }

    #[test]
    fn details_serialize_with_system_tag() {
        let details = RollDetails::WorldOfDarkness {
            difficulty: 6,
            ones: 1,
            specialty: true,
        };
        let json = serde_json::to_value(&details).unwrap();
        assert_eq!(json["system"], "wod");
        assert_eq!(json["ones"], 1);
    }
}
