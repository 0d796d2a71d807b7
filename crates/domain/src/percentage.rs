// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Percentage arithmetic shared by the solver and the simulation.
//!
//! Raw percentages are computed as `attended / total * 100` in `f64`, in that
//! operation order, so threshold comparisons see the same binary values the
//! attendance system produces. Rounding to hundredths happens only when a
//! value is reported.

use crate::error::DomainError;
use crate::types::AttendanceSnapshot;
use serde::{Deserialize, Serialize};

/// A percentage rounded half away from zero to two decimal places.
///
/// Stored as an integer count of hundredths so that equality and display are
/// exact. Always renders with two decimals (`75.00`, `76.47`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Percentage {
    hundredths: u32,
}

impl Percentage {
    /// Rounds a raw percentage in `[0, 100]` to hundredths.
    ///
    /// Values outside the range are clamped; non-finite values become zero.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn from_value(value: f64) -> Self {
        let scaled: f64 = if value.is_finite() {
            (value * 100.0).round().clamp(0.0, 10_000.0)
        } else {
            0.0
        };

        // Safe cast: clamped to [0, 10_000] above.
        Self {
            hundredths: scaled as u32,
        }
    }

    /// Returns the value as a count of hundredths (`76.47` is `7647`).
    #[must_use]
    pub const fn hundredths(&self) -> u32 {
        self.hundredths
    }
}

impl std::fmt::Display for Percentage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{:02}", self.hundredths / 100, self.hundredths % 100)
    }
}

/// Computes `attended / total * 100`.
///
/// # Errors
///
/// Returns `DivisionUndefined` if `total` is zero.
pub fn raw_percent(attended: u32, total: u32) -> Result<f64, DomainError> {
    if total == 0 {
        return Err(DomainError::DivisionUndefined {
            context: String::from("total classes held is zero"),
        });
    }

    Ok(f64::from(attended) / f64::from(total) * 100.0)
}

/// Computes the final percentage after attending all but `skipped` of the
/// `remaining` classes.
///
/// Skip counts above `remaining` attend zero further classes.
///
/// # Errors
///
/// Returns an error if the final totals overflow or the final total is zero.
pub fn percent_after_skipping(
    snapshot: &AttendanceSnapshot,
    remaining: u32,
    skipped: u32,
) -> Result<f64, DomainError> {
    let attended: u32 = snapshot
        .past_attended()
        .checked_add(remaining.saturating_sub(skipped))
        .ok_or_else(|| overflow("attended"))?;
    let total: u32 = snapshot
        .past_total()
        .checked_add(remaining)
        .ok_or_else(|| overflow("total"))?;

    if total == 0 {
        return Err(DomainError::DivisionUndefined {
            context: String::from("past total plus remaining classes is zero"),
        });
    }

    raw_percent(attended, total)
}

fn overflow(field: &str) -> DomainError {
    DomainError::InvalidRange {
        field: field.to_string(),
        reason: String::from("class count overflows after adding remaining classes"),
    }
}
