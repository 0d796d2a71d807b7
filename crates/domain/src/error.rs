// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur while projecting the calendar or evaluating attendance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A supplied date string could not be parsed as a calendar date.
    InvalidDate {
        /// The invalid date string.
        date_string: String,
        /// The parsing error message.
        error: String,
    },
    /// A percentage would require dividing by a zero class total.
    DivisionUndefined {
        /// Which total was zero.
        context: String,
    },
    /// The reference time zone is not a known IANA zone.
    InvalidTimeZone(String),
    /// A calendar instant cannot be represented in the reference time zone.
    UnresolvableInstant {
        /// Description of the instant that failed to resolve.
        reason: String,
    },
    /// A value lies outside its permitted range.
    InvalidRange {
        /// The offending field.
        field: String,
        /// Description of the violated bound.
        reason: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDate { date_string, error } => {
                write!(f, "Failed to parse date '{date_string}': {error}")
            }
            Self::DivisionUndefined { context } => {
                write!(f, "Attendance percentage is undefined: {context}")
            }
            Self::InvalidTimeZone(name) => write!(f, "Invalid time zone: {name}"),
            Self::UnresolvableInstant { reason } => {
                write!(f, "Cannot resolve instant: {reason}")
            }
            Self::InvalidRange { field, reason } => {
                write!(f, "Invalid value for '{field}': {reason}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
