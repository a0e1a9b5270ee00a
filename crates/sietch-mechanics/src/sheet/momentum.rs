//! Momentum and threat pools.
//!
//! Momentum is the players' shared pool, banked from excess successes and
//! capped at six. Threat is the gamemaster's pool, fed by complications.
//! Neither goes below zero. Storing a pool between tests is the caller's job.

use serde::{Deserialize, Serialize};

use crate::error::{MechError, MechResult};
use crate::rules::TestResult;

/// Most momentum a group may bank.
pub const MOMENTUM_CAP: u32 = 6;

/// The momentum and threat held by one scene.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MomentumPool {
    /// Player-facing momentum.
    pub momentum: u32,
    /// Gamemaster-facing threat.
    pub threat: u32,
}

impl MomentumPool {
    /// Create a pool with starting values; momentum is clamped to the cap.
    pub fn new(momentum: u32, threat: u32) -> Self {
        Self {
            momentum: momentum.min(MOMENTUM_CAP),
            threat,
        }
    }

    /// Bank the momentum and threat generated by a test.
    ///
    /// Returns how much momentum was lost to the cap.
    pub fn apply(&mut self, result: &TestResult) -> u32 {
        self.threat = self.threat.saturating_add(result.threat);
        let banked = self.momentum.saturating_add(result.momentum);
        self.momentum = banked.min(MOMENTUM_CAP);
        banked - self.momentum
    }

    /// Spend momentum, failing if the pool holds less than `amount`.
    pub fn spend_momentum(&mut self, amount: u32) -> MechResult<u32> {
        if amount > self.momentum {
            return Err(MechError::InsufficientMomentum {
                available: self.momentum,
                requested: amount,
            });
        }
        self.momentum -= amount;
        Ok(self.momentum)
    }

    /// Spend threat, never going below zero. Returns the threat actually spent.
    pub fn spend_threat(&mut self, amount: u32) -> u32 {
        let spent = amount.min(self.threat);
        self.threat -= spent;
        spent
    }

    /// Adjust both pools by signed deltas, clamping to their bounds.
    pub fn adjust(&mut self, momentum_delta: i32, threat_delta: i32) {
        self.momentum = self
            .momentum
            .saturating_add_signed(momentum_delta)
            .min(MOMENTUM_CAP);
        self.threat = self.threat.saturating_add_signed(threat_delta);
    }

    /// Empty both pools.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl std::fmt::Display for MomentumPool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Momentum: {}/{MOMENTUM_CAP} | Threat: {}",
            self.momentum, self.threat
        )
    }
}
