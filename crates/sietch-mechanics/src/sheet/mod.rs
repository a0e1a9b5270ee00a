//! Character sheets with attributes, skills, drives, and assets.
//!
//! Sheets are plain data loaded by the caller (usually from JSON). Name
//! lookups ignore case so `"Battle"` and `"battle"` find the same skill.

pub mod momentum;

pub use momentum::{MOMENTUM_CAP, MomentumPool};

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::MechResult;

/// Attribute value assumed when a test names an attribute the sheet lacks.
pub const DEFAULT_ATTRIBUTE: u32 = 8;
/// Skill value assumed when a test names a skill the sheet lacks (untrained).
pub const DEFAULT_SKILL: u32 = 0;

/// A character's mechanical state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Character {
    /// Character name.
    pub name: String,
    /// Attribute scores (e.g., muscle: 8, discipline: 10).
    pub attributes: BTreeMap<String, u32>,
    /// Skill scores (e.g., Battle: 6, Understand: 4).
    pub skills: BTreeMap<String, u32>,
    /// Drive scores (e.g., Duty: 8, Truth: 5).
    pub drives: BTreeMap<String, u32>,
    /// Named assets the character carries.
    pub assets: Vec<String>,
    /// Narrative traits.
    pub traits: Vec<String>,
    /// Determination points on hand.
    pub determination: u32,
}

impl Character {
    /// Create an empty sheet with a name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Decode a sheet from JSON. Missing fields take their empty defaults.
    pub fn from_json(json: &str) -> MechResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Set an attribute score.
    pub fn with_attribute(mut self, name: impl Into<String>, value: u32) -> Self {
        self.attributes.insert(name.into(), value);
        self
    }

    /// Set a skill score.
    pub fn with_skill(mut self, name: impl Into<String>, value: u32) -> Self {
        self.skills.insert(name.into(), value);
        self
    }

    /// Set a drive score.
    pub fn with_drive(mut self, name: impl Into<String>, value: u32) -> Self {
        self.drives.insert(name.into(), value);
        self
    }

    /// Look up an attribute by name.
    pub fn attribute(&self, name: &str) -> Option<u32> {
        lookup(&self.attributes, name)
    }

    /// Look up a skill by name.
    pub fn skill(&self, name: &str) -> Option<u32> {
        lookup(&self.skills, name)
    }

    /// Look up a drive by name.
    pub fn drive(&self, name: &str) -> Option<u32> {
        lookup(&self.drives, name)
    }

    /// Look up the first half of a target number: an attribute, else a drive.
    pub fn stat(&self, name: &str) -> Option<u32> {
        self.attribute(name).or_else(|| self.drive(name))
    }

    /// Returns true if the character holds a named asset.
    pub fn has_asset(&self, asset: &str) -> bool {
        self.assets.iter().any(|a| a.eq_ignore_ascii_case(asset))
    }
}

fn lookup(values: &BTreeMap<String, u32>, name: &str) -> Option<u32> {
    values
        .get(name)
        .or_else(|| {
            values
                .iter()
                .find(|(key, _)| key.eq_ignore_ascii_case(name))
                .map(|(_, value)| value)
        })
        .copied()
}
