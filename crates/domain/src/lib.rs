// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod calendar;
mod error;
mod feasibility;
mod percentage;
mod simulation;
mod types;

#[cfg(test)]
mod tests;

pub use calendar::{
    DAY_CUTOFF_HOUR, MAX_PROJECTION_DAYS, Projection, ProjectionWindow, count_remaining_classes,
    is_instructional_day, is_second_or_fourth_saturday, parse_calendar_date, parse_time_zone,
    project_remaining_classes, projection_start_date, start_of_day,
};
pub use error::DomainError;
pub use feasibility::{
    FeasibilityResult, SAFETY_MARGIN, SAFETY_MARGIN_THRESHOLD, apply_safety_margin, solve,
};
pub use percentage::{Percentage, percent_after_skipping, raw_percent};
pub use simulation::simulate;
pub use types::{
    AttendanceSnapshot, ExceptionDates, MAX_CLASSES_PER_DAY, SubjectRecord, TargetPercent,
    Timetable,
};

// Re-exported so callers can name calendar types without a direct dependency.
pub use chrono_tz::Tz;
pub use time::{Date, Weekday};
