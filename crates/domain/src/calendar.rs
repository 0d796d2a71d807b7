// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Remaining-class projection over the rest of a semester.
//!
//! This module counts the class instances still to be held between a
//! projection start date and the semester end date (both inclusive), based on:
//! - A weekly timetable of class counts per weekday
//! - The structural no-class days (every Sunday, second and fourth Saturdays)
//! - Declared holidays
//!
//! ## Invariants
//!
//! - The projection starts today, or tomorrow once the local time reaches
//!   17:00 in the reference time zone
//! - A start date after the semester end projects zero classes
//! - Holidays outside the projection window have no effect
//! - The current instant is always supplied by the caller

use crate::error::DomainError;
use crate::types::{ExceptionDates, Timetable};
use chrono::{DateTime, Datelike, NaiveDate, TimeZone, Timelike, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use time::{Date, Month, Weekday};

/// Local hour from which today's classes are treated as already held.
pub const DAY_CUTOFF_HOUR: u32 = 17;

/// Longest projection window, in days, that will be counted.
pub const MAX_PROJECTION_DAYS: i64 = 366;

/// An inclusive range of calendar dates to project over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectionWindow {
    start_date: Date,
    end_date: Date,
}

impl ProjectionWindow {
    /// Creates a window, or `None` if `start_date` is after `end_date`.
    #[must_use]
    pub fn new(start_date: Date, end_date: Date) -> Option<Self> {
        (start_date <= end_date).then_some(Self {
            start_date,
            end_date,
        })
    }

    /// Returns the first date of the window.
    #[must_use]
    pub const fn start_date(&self) -> Date {
        self.start_date
    }

    /// Returns the last date of the window.
    #[must_use]
    pub const fn end_date(&self) -> Date {
        self.end_date
    }

    /// Iterates every date in the window in calendar order.
    pub fn dates(&self) -> impl Iterator<Item = Date> {
        let end_date: Date = self.end_date;
        std::iter::successors(Some(self.start_date), move |current| {
            current.next_day().filter(|next| *next <= end_date)
        })
    }
}

/// Result of projecting the remaining classes of a semester.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Projection {
    /// Class instances still to be held, inclusive of the start date.
    pub remaining_classes: u32,
    /// The first date counted by the projection.
    pub start_date: Date,
}

/// Counts the classes remaining between `now` and the semester end.
///
/// # Arguments
///
/// * `timetable` - Weekly class counts
/// * `semester_end` - Last day of the semester (inclusive)
/// * `exceptions` - Declared holidays
/// * `now` - The current instant in the reference time zone
///
/// # Errors
///
/// Returns an error if the local date of `now` cannot be represented as a
/// calendar date, or if the window or its class count is out of range (see
/// [`count_remaining_classes`]).
pub fn project_remaining_classes<Z: TimeZone>(
    timetable: &Timetable,
    semester_end: Date,
    exceptions: &ExceptionDates,
    now: &DateTime<Z>,
) -> Result<Projection, DomainError> {
    let start_date: Date = projection_start_date(now)?;
    let remaining_classes: u32 =
        count_remaining_classes(timetable, start_date, semester_end, exceptions)?;

    Ok(Projection {
        remaining_classes,
        start_date,
    })
}

/// Counts the classes held from `start_date` through `semester_end`.
///
/// Returns zero if `start_date` is after `semester_end`.
///
/// # Errors
///
/// Returns `InvalidRange` for `semesterEnd` if the window spans more than
/// [`MAX_PROJECTION_DAYS`] days, and for `timetable` if the count does not
/// fit in a `u32`.
pub fn count_remaining_classes(
    timetable: &Timetable,
    start_date: Date,
    semester_end: Date,
    exceptions: &ExceptionDates,
) -> Result<u32, DomainError> {
    let Some(window) = ProjectionWindow::new(start_date, semester_end) else {
        return Ok(0);
    };

    let span_days: i64 = (semester_end - start_date).whole_days() + 1;
    if span_days > MAX_PROJECTION_DAYS {
        return Err(DomainError::InvalidRange {
            field: String::from("semesterEnd"),
            reason: format!(
                "projection from {start_date} to {semester_end} spans {span_days} days, \
                 at most {MAX_PROJECTION_DAYS} are allowed"
            ),
        });
    }

    window
        .dates()
        .filter(|date| is_instructional_day(*date, exceptions))
        .try_fold(0_u32, |acc, date| acc.checked_add(timetable.classes_on(date.weekday())))
        .ok_or_else(|| DomainError::InvalidRange {
            field: String::from("timetable"),
            reason: format!("remaining classes up to {semester_end} exceed {}", u32::MAX),
        })
}

/// Returns whether classes are held on `date` at all.
///
/// Sundays, second and fourth Saturdays and declared holidays are not
/// instructional days.
#[must_use]
pub fn is_instructional_day(date: Date, exceptions: &ExceptionDates) -> bool {
    match date.weekday() {
        Weekday::Sunday => false,
        Weekday::Saturday if is_second_or_fourth_saturday(date) => false,
        _ => !exceptions.contains(date),
    }
}

/// Returns whether `date` is the second or fourth Saturday of its month.
#[must_use]
pub fn is_second_or_fourth_saturday(date: Date) -> bool {
    date.weekday() == Weekday::Saturday && matches!(date.day(), 8..=14 | 22..=28)
}

/// Determines the first date to project from.
///
/// Once the local time of `now` reaches 17:00 the rest of today is no longer
/// actionable, so the projection starts tomorrow.
///
/// # Errors
///
/// Returns an error if the local date cannot be represented as a calendar date.
pub fn projection_start_date<Z: TimeZone>(now: &DateTime<Z>) -> Result<Date, DomainError> {
    let today: Date = to_calendar_date(now.date_naive())?;

    if now.hour() < DAY_CUTOFF_HOUR {
        return Ok(today);
    }

    today
        .next_day()
        .ok_or_else(|| DomainError::UnresolvableInstant {
            reason: format!("no calendar date follows {today}"),
        })
}

/// Returns the UTC instant of local midnight on `date` in `tz`.
///
/// # Errors
///
/// Returns an error if local midnight does not exist on `date` in `tz`.
pub fn start_of_day(date: Date, tz: &Tz) -> Result<DateTime<Utc>, DomainError> {
    let naive: NaiveDate = NaiveDate::from_ymd_opt(
        date.year(),
        u32::from(u8::from(date.month())),
        u32::from(date.day()),
    )
    .ok_or_else(|| DomainError::UnresolvableInstant {
        reason: format!("{date} is not a valid date"),
    })?;

    let local = naive
        .and_hms_opt(0, 0, 0)
        .ok_or_else(|| DomainError::UnresolvableInstant {
            reason: format!("midnight on {date}"),
        })?;

    tz.from_local_datetime(&local)
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
        .ok_or_else(|| DomainError::UnresolvableInstant {
            reason: format!("midnight on {date} does not exist in {tz}"),
        })
}

/// Parses an ISO 8601 calendar date such as `2025-11-28`.
///
/// # Errors
///
/// Returns `InvalidDate` if the string is not a valid calendar date.
pub fn parse_calendar_date(value: &str) -> Result<Date, DomainError> {
    let trimmed: &str = value.trim();

    Date::parse(
        trimmed,
        &time::format_description::well_known::Iso8601::DEFAULT,
    )
    .map_err(|e| DomainError::InvalidDate {
        date_string: value.to_string(),
        error: e.to_string(),
    })
}

/// Parses an IANA time zone name such as `Asia/Kolkata`.
///
/// # Errors
///
/// Returns `InvalidTimeZone` if the name is unknown.
pub fn parse_time_zone(name: &str) -> Result<Tz, DomainError> {
    name.parse()
        .map_err(|_| DomainError::InvalidTimeZone(name.to_string()))
}

/// Converts a chrono date into a `time` calendar date.
fn to_calendar_date(date: NaiveDate) -> Result<Date, DomainError> {
    let invalid = || DomainError::UnresolvableInstant {
        reason: format!("{date} is outside the supported calendar range"),
    };

    let month: Month = u8::try_from(date.month())
        .ok()
        .and_then(|m| Month::try_from(m).ok())
        .ok_or_else(invalid)?;
    let day: u8 = u8::try_from(date.day()).map_err(|_| invalid())?;

    Date::from_calendar_date(date.year(), month, day).map_err(|_| invalid())
}
