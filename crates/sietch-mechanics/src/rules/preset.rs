//! Canonical names used by Dune characters and NPCs.
//!
//! Player characters test a drive plus one of the five Dune skills.
//! Generated NPCs use a broader set of attributes and skills.

/// The five skills on a Dune character sheet.
pub const DUNE_SKILLS: [&str; 5] = ["Battle", "Communicate", "Discipline", "Move", "Understand"];

/// The five drives on a Dune character sheet.
pub const DUNE_DRIVES: [&str; 5] = ["Duty", "Faith", "Justice", "Power", "Truth"];

/// Attributes given to every generated NPC.
pub const NPC_ATTRIBUTES: [&str; 6] = [
    "muscle",
    "move",
    "intellect",
    "awareness",
    "communication",
    "discipline",
];

/// Skills given to every generated NPC.
pub const NPC_SKILLS: [&str; 6] = [
    "battle",
    "command",
    "discipline",
    "investigate",
    "persuade",
    "stealth",
];

/// Skills that may be used for conflict initiative.
pub const INITIATIVE_SKILLS: [&str; 3] = ["Battle", "Discipline", "Move"];

/// Return the canonical spelling of a Dune skill, ignoring case.
pub fn dune_skill(name: &str) -> Option<&'static str> {
    DUNE_SKILLS
        .iter()
        .copied()
        .find(|s| s.eq_ignore_ascii_case(name.trim()))
}

/// Return the canonical spelling of a drive, ignoring case.
pub fn dune_drive(name: &str) -> Option<&'static str> {
    DUNE_DRIVES
        .iter()
        .copied()
        .find(|d| d.eq_ignore_ascii_case(name.trim()))
}
