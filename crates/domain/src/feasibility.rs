// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Bunk feasibility for the remainder of a semester.
//!
//! The final percentage after skipping `b` of the `R` remaining classes is
//! `(A + R - b) / (T + R) * 100`, which never increases as `b` grows. The
//! solver walks every candidate from `0` to `R` and keeps the largest that
//! still meets the target, then applies a fixed safety margin.

use crate::error::DomainError;
use crate::percentage::{Percentage, percent_after_skipping};
use crate::types::{AttendanceSnapshot, TargetPercent};
use serde::{Deserialize, Serialize};

/// Raw bunkable counts at or above this value are reduced by the margin.
pub const SAFETY_MARGIN_THRESHOLD: u32 = 5;

/// Classes held back from large bunkable counts.
pub const SAFETY_MARGIN: u32 = 2;

/// Outcome of a feasibility calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeasibilityResult {
    /// Classes that may be skipped after the safety margin.
    pub bunkable: u32,
    /// Final percentage if every remaining class is attended.
    pub max_possible_attendance: Percentage,
    /// Whether attending every remaining class meets the target.
    pub reachable: bool,
}

/// Computes how many remaining classes can be skipped while staying at or
/// above `target`.
///
/// # Arguments
///
/// * `snapshot` - Past attendance
/// * `remaining` - Classes still to be held
/// * `target` - Target attendance percentage
///
/// # Errors
///
/// Returns an error if the final class totals overflow or are zero.
///
/// # Example
///
/// ```text
/// attended = 60, held = 80, remaining = 5, target = 75
///
/// b = 0: 65 / 85 = 76.47%   ok
/// b = 1: 64 / 85 = 75.29%   ok
/// b = 2: 63 / 85 = 74.12%   below target
///
/// bunkable = 1, max possible = 76.47, reachable
/// ```
pub fn solve(
    snapshot: &AttendanceSnapshot,
    remaining: u32,
    target: TargetPercent,
) -> Result<FeasibilityResult, DomainError> {
    let best_case: f64 = percent_after_skipping(snapshot, remaining, 0)?;

    let mut raw_bunkable: u32 = 0;
    for skipped in 0..=remaining {
        if percent_after_skipping(snapshot, remaining, skipped)? >= target.value() {
            raw_bunkable = skipped;
        }
    }

    Ok(FeasibilityResult {
        bunkable: apply_safety_margin(raw_bunkable),
        max_possible_attendance: Percentage::from_value(best_case),
        reachable: best_case >= target.value(),
    })
}

/// Reduces a raw bunkable count by the fixed safety margin.
#[must_use]
pub const fn apply_safety_margin(raw_bunkable: u32) -> u32 {
    if raw_bunkable >= SAFETY_MARGIN_THRESHOLD {
        raw_bunkable - SAFETY_MARGIN
    } else {
        raw_bunkable
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_safety_margin_threshold() {
        assert_eq!(apply_safety_margin(0), 0);
        assert_eq!(apply_safety_margin(4), 4);
        assert_eq!(apply_safety_margin(5), 3);
        assert_eq!(apply_safety_margin(6), 4);
        assert_eq!(apply_safety_margin(40), 38);
    }
}
