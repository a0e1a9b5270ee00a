//! Extended tests: several tests pooled toward one success target.

use serde::{Deserialize, Serialize};

use crate::rules::TestResult;

/// Running totals for an extended test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtendedProgress {
    /// Successes accumulated across every attempt.
    pub total_successes: u32,
    /// Percentage of the target reached, 0 to 100.
    pub progress: u32,
    /// Whether the target has been reached.
    pub complete: bool,
    /// Attempts left before the time limit, if there is one.
    pub time_remaining: Option<u32>,
    /// Complications accumulated across every attempt.
    pub complications: u32,
}

/// Sum a run of tests toward `target_successes`.
///
/// Each result counts as one unit of time against `time_limit`. A target
/// of zero is complete before any attempt.
pub fn extended_test(
    results: &[TestResult],
    target_successes: u32,
    time_limit: Option<u32>,
) -> ExtendedProgress {
    let total_successes: u32 = results.iter().map(|r| r.successes).sum();
    let complications = results.iter().map(|r| r.complications).sum();

    let progress = if target_successes == 0 {
        100
    } else {
        let percent = u64::from(total_successes) * 100 / u64::from(target_successes);
        percent.min(100) as u32
    };
    let attempts = u32::try_from(results.len()).unwrap_or(u32::MAX);

    ExtendedProgress {
        total_successes,
        progress,
        complete: total_successes >= target_successes,
        time_remaining: time_limit.map(|limit| limit.saturating_sub(attempts)),
        complications,
    }
}
