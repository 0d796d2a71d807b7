// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use crate::store::StoreError;
use bunk_planner_domain::DomainError;

/// API-level errors.
///
/// These are distinct from domain errors and represent the API contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// A domain rule was violated.
    DomainRuleViolation {
        /// The rule that was violated.
        rule: String,
        /// A human-readable description of the violation.
        message: String,
    },
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainRuleViolation { rule, message } => {
                write!(f, "Domain rule violation ({rule}): {message}")
            }
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::Internal { message } => {
                write!(f, "Internal error: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        Self::Internal {
            message: err.to_string(),
        }
    }
}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::InvalidDate { .. } => ApiError::InvalidInput {
            field: String::from("date"),
            message: err.to_string(),
        },
        DomainError::DivisionUndefined { context } => ApiError::DomainRuleViolation {
            rule: String::from("division_undefined"),
            message: format!("Attendance percentage is undefined: {context}"),
        },
        DomainError::InvalidTimeZone(name) => ApiError::InvalidInput {
            field: String::from("timezone"),
            message: format!("Unknown time zone '{name}'"),
        },
        DomainError::UnresolvableInstant { reason } => ApiError::DomainRuleViolation {
            rule: String::from("resolvable_instant"),
            message: format!("Cannot resolve instant: {reason}"),
        },
        DomainError::InvalidRange { field, reason } => ApiError::InvalidInput {
            field,
            message: reason,
        },
    }
}

/// Translates a domain error raised while processing a known input field.
///
/// Date and range errors are attributed to `field`; other errors translate
/// as in [`translate_domain_error`].
#[must_use]
pub fn translate_field_error(field: &str, err: DomainError) -> ApiError {
    match err {
        DomainError::InvalidDate { .. } => ApiError::InvalidInput {
            field: field.to_string(),
            message: err.to_string(),
        },
        DomainError::InvalidRange { reason, .. } => ApiError::InvalidInput {
            field: field.to_string(),
            message: reason,
        },
        other => translate_domain_error(other),
    }
}
