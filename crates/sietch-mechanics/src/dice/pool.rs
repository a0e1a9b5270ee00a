//! Random sources and pool rolling.
//!
//! Every evaluator draws its faces through [`DieSource`]. Any
//! [`rand::RngCore`] is a source, so production code hands in the thread
//! RNG and tests hand in a seeded `StdRng` or a [`ScriptedDice`].

use rand::{Rng, RngCore};

/// Something that can produce the face of a die.
pub trait DieSource {
    /// Roll one die with `sides` faces, returning a value in `1..=sides`.
    ///
    /// A face count of zero is treated as a one-sided die.
    fn roll_die(&mut self, sides: u32) -> u32;
}

impl<R: RngCore + ?Sized> DieSource for R {
    fn roll_die(&mut self, sides: u32) -> u32 {
        self.random_range(1..=sides.max(1))
    }
}

/// A die source that replays a fixed script of faces.
///
/// Each value is clamped into `1..=sides` of the die being rolled. Once the
/// script runs out it starts over; an empty script always rolls 1.
#[derive(Debug, Clone, Default)]
pub struct ScriptedDice {
    faces: Vec<u32>,
    cursor: usize,
}

impl ScriptedDice {
    /// Create a source that yields `faces` in order.
    pub fn new(faces: impl Into<Vec<u32>>) -> Self {
        Self {
            faces: faces.into(),
            cursor: 0,
        }
    }

    /// How many faces have been drawn so far.
    pub fn drawn(&self) -> usize {
        self.cursor
    }
}

impl DieSource for ScriptedDice {
    fn roll_die(&mut self, sides: u32) -> u32 {
        let face = if self.faces.is_empty() {
            1
        } else {
            self.faces[self.cursor % self.faces.len()]
        };
        self.cursor += 1;
        face.clamp(1, sides.max(1))
    }
}

/// Roll `count` independent dice with `sides` faces each.
pub fn roll_pool<S: DieSource + ?Sized>(count: u32, sides: u32, source: &mut S) -> Vec<u32> {
    (0..count).map(|_| source.roll_die(sides)).collect()
}
