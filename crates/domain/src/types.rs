// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::percentage::{Percentage, raw_percent};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use time::{Date, Weekday};

/// Attended and held counts for a single subject.
///
/// Subject records are carried through unchanged for display; they do not
/// take part in the bunk calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubjectRecord {
    name: String,
    attended: u32,
    total: u32,
}

impl SubjectRecord {
    /// Creates a new subject record.
    ///
    /// # Errors
    ///
    /// Returns `InvalidRange` if `attended` exceeds `total`.
    pub fn new(name: impl Into<String>, attended: u32, total: u32) -> Result<Self, DomainError> {
        let name: String = name.into();
        if attended > total {
            return Err(DomainError::InvalidRange {
                field: format!("subjects[{name}].attended"),
                reason: format!("attended ({attended}) exceeds total ({total})"),
            });
        }

        Ok(Self {
            name,
            attended,
            total,
        })
    }

    /// Returns the subject name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the number of classes attended.
    #[must_use]
    pub const fn attended(&self) -> u32 {
        self.attended
    }

    /// Returns the number of classes held.
    #[must_use]
    pub const fn total(&self) -> u32 {
        self.total
    }

    /// Returns the subject attendance percentage, or `None` if no classes
    /// have been held yet.
    #[must_use]
    pub fn percentage(&self) -> Option<Percentage> {
        raw_percent(self.attended, self.total)
            .ok()
            .map(Percentage::from_value)
    }
}

/// The historical attendance tally supplied by the attendance source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttendanceSnapshot {
    student_id: Option<String>,
    past_attended: u32,
    past_total: u32,
    subjects: Vec<SubjectRecord>,
}

impl AttendanceSnapshot {
    /// Creates a new attendance snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `past_total` is zero (`DivisionUndefined`)
    /// - `past_attended` exceeds `past_total` (`InvalidRange`)
    pub fn new(
        past_attended: u32,
        past_total: u32,
        subjects: Vec<SubjectRecord>,
    ) -> Result<Self, DomainError> {
        if past_total == 0 {
            return Err(DomainError::DivisionUndefined {
                context: String::from("past total classes held is zero"),
            });
        }

        if past_attended > past_total {
            return Err(DomainError::InvalidRange {
                field: String::from("pastAttended"),
                reason: format!("attended ({past_attended}) exceeds total ({past_total})"),
            });
        }

        Ok(Self {
            student_id: None,
            past_attended,
            past_total,
            subjects,
        })
    }

    /// Attaches the student identifier reported by the attendance source.
    #[must_use]
    pub fn with_student_id(mut self, student_id: impl Into<String>) -> Self {
        self.student_id = Some(student_id.into());
        self
    }

    /// Returns the student identifier, if one was supplied.
    #[must_use]
    pub fn student_id(&self) -> Option<&str> {
        self.student_id.as_deref()
    }

    /// Returns the number of classes attended so far.
    #[must_use]
    pub const fn past_attended(&self) -> u32 {
        self.past_attended
    }

    /// Returns the number of classes held so far.
    #[must_use]
    pub const fn past_total(&self) -> u32 {
        self.past_total
    }

    /// Returns the per-subject records in source order.
    #[must_use]
    pub fn subjects(&self) -> &[SubjectRecord] {
        &self.subjects
    }

    /// Returns the current overall attendance percentage.
    #[must_use]
    pub fn current_percentage(&self) -> Percentage {
        // past_total is non-zero by construction
        Percentage::from_value(raw_percent(self.past_attended, self.past_total).unwrap_or(0.0))
    }
}

/// Largest number of classes accepted for a single weekday.
pub const MAX_CLASSES_PER_DAY: u32 = 24;

/// Number of classes held on each weekday.
///
/// Weekdays that were never set hold zero classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Timetable {
    /// Class counts indexed by days from Monday.
    counts: [u32; 7],
}

impl Timetable {
    /// Creates an empty timetable (no classes on any day).
    #[must_use]
    pub const fn new() -> Self {
        Self { counts: [0; 7] }
    }

    /// Returns this timetable with `classes` held on `weekday`.
    #[must_use]
    pub fn with_classes(mut self, weekday: Weekday, classes: u32) -> Self {
        self.counts[weekday.number_days_from_monday() as usize] = classes;
        self
    }

    /// Sets the number of classes held on `weekday`.
    pub fn set_classes(&mut self, weekday: Weekday, classes: u32) {
        self.counts[weekday.number_days_from_monday() as usize] = classes;
    }

    /// Returns the number of classes held on `weekday`.
    #[must_use]
    pub const fn classes_on(&self, weekday: Weekday) -> u32 {
        self.counts[weekday.number_days_from_monday() as usize]
    }
}

/// Declared holidays on which no classes are held.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ExceptionDates {
    dates: BTreeSet<Date>,
}

impl ExceptionDates {
    /// Creates an empty set of exception dates.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            dates: BTreeSet::new(),
        }
    }

    /// Parses a list of ISO 8601 calendar date strings.
    ///
    /// # Errors
    ///
    /// Returns `InvalidDate` for the first entry that fails to parse.
    pub fn parse<S: AsRef<str>>(entries: &[S]) -> Result<Self, DomainError> {
        entries
            .iter()
            .map(|entry| crate::calendar::parse_calendar_date(entry.as_ref()))
            .collect()
    }

    /// Returns whether `date` is a declared holiday.
    #[must_use]
    pub fn contains(&self, date: Date) -> bool {
        self.dates.contains(&date)
    }

    /// Returns the number of distinct dates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Returns whether no dates are declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}

impl FromIterator<Date> for ExceptionDates {
    fn from_iter<I: IntoIterator<Item = Date>>(iter: I) -> Self {
        Self {
            dates: iter.into_iter().collect(),
        }
    }
}

/// Target attendance percentage, validated to lie in `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct TargetPercent(f64);

impl TargetPercent {
    /// The target used when none is configured.
    pub const DEFAULT_VALUE: f64 = 75.0;

    /// Creates a validated target percentage.
    ///
    /// # Errors
    ///
    /// Returns `InvalidRange` if the value is not finite or lies outside `[0, 100]`.
    pub fn new(value: f64) -> Result<Self, DomainError> {
        if !value.is_finite() || !(0.0..=100.0).contains(&value) {
            return Err(DomainError::InvalidRange {
                field: String::from("targetPercent"),
                reason: format!("must be between 0 and 100, got {value}"),
            });
        }
        Ok(Self(value))
    }

    /// Returns the target as a percentage value.
    #[must_use]
    pub const fn value(&self) -> f64 {
        self.0
    }
}

impl Default for TargetPercent {
    fn default() -> Self {
        Self(Self::DEFAULT_VALUE)
    }
}
