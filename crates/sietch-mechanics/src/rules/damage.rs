//! Damage and effects rolls with weapon qualities.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::dice::DieSource;

/// Faces on a damage die.
pub const DAMAGE_DIE: u32 = 6;

/// When a weapon quality fires and what it does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QualityEffect {
    /// Adds to damage when the damage die shows at least this.
    BonusDamage {
        /// Lowest damage die face that triggers the bonus.
        trigger: u32,
    },
    /// Adds to effects when the effects die shows at least this.
    BonusEffects {
        /// Lowest effects die face that triggers the bonus.
        trigger: u32,
    },
    /// Always applies; only reported.
    Always,
}

/// A named weapon quality.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeaponQuality {
    /// Lowercase quality name.
    pub name: &'static str,
    /// Trigger and effect.
    pub effect: QualityEffect,
    /// Line reported when the quality applies.
    pub note: &'static str,
}

/// Every quality `roll_damage` understands.
pub const WEAPON_QUALITIES: &[WeaponQuality] = &[
    WeaponQuality {
        name: "vicious",
        effect: QualityEffect::BonusDamage { trigger: 5 },
        note: "Vicious effect triggered",
    },
    WeaponQuality {
        name: "intense",
        effect: QualityEffect::BonusEffects { trigger: 5 },
        note: "Intense effect triggered",
    },
    WeaponQuality {
        name: "piercing",
        effect: QualityEffect::Always,
        note: "Piercing - ignores armor",
    },
    WeaponQuality {
        name: "area",
        effect: QualityEffect::Always,
        note: "Area - strikes everyone in the zone",
    },
];

/// Look up a quality by name, ignoring case.
pub fn find_quality(name: &str) -> Option<&'static WeaponQuality> {
    WEAPON_QUALITIES
        .iter()
        .find(|q| q.name.eq_ignore_ascii_case(name.trim()))
}

/// The outcome of a damage roll.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DamageResult {
    /// Base damage plus the damage die and any bonus.
    pub damage: u32,
    /// Base effects plus the effects die and any bonus.
    pub effects: u32,
    /// Face shown by the damage die.
    pub damage_die: u32,
    /// Face shown by the effects die.
    pub effects_die: u32,
    /// Notes for each quality that applied.
    pub special: Vec<String>,
}

/// Roll one d6 for damage and one for effects, then apply `qualities`.
///
/// Unknown qualities are skipped.
pub fn roll_damage<S: DieSource + ?Sized>(
    base_damage: u32,
    base_effects: u32,
    qualities: &[String],
    source: &mut S,
) -> DamageResult {
    let damage_die = source.roll_die(DAMAGE_DIE);
    let effects_die = source.roll_die(DAMAGE_DIE);

    let mut result = DamageResult {
        damage: base_damage + damage_die,
        effects: base_effects + effects_die,
        damage_die,
        effects_die,
        special: Vec::new(),
    };

    for name in qualities {
        let Some(quality) = find_quality(name) else {
            debug!(quality = %name, "unknown weapon quality ignored");
            continue;
        };
        let applies = match quality.effect {
            QualityEffect::BonusDamage { trigger } if damage_die >= trigger => {
                result.damage += 1;
                true
            }
            QualityEffect::BonusEffects { trigger } if effects_die >= trigger => {
                result.effects += 1;
                true
            }
            QualityEffect::Always => true,
            _ => false,
        };
        if applies {
            result.special.push(quality.note.to_string());
        }
    }

    debug!(
        base_damage,
        base_effects,
        damage = result.damage,
        effects = result.effects,
        "damage roll"
    );
    result
}
