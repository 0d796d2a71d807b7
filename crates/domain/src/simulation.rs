// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! What-if evaluation for a fixed number of skipped classes.

use crate::error::DomainError;
use crate::percentage::{Percentage, percent_after_skipping};
use crate::types::AttendanceSnapshot;

/// Returns the final percentage if exactly `skip_count` of the `remaining`
/// classes are skipped and the rest attended.
///
/// A `skip_count` larger than `remaining` is accepted and attends no further
/// classes.
///
/// # Errors
///
/// Returns an error if the final class totals overflow or are zero.
pub fn simulate(
    snapshot: &AttendanceSnapshot,
    remaining: u32,
    skip_count: u32,
) -> Result<Percentage, DomainError> {
    percent_after_skipping(snapshot, remaining, skip_count).map(Percentage::from_value)
}
