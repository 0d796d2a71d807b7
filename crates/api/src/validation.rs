// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Conversion of wire inputs into validated domain values.
//!
//! Every check happens here, before any calculation runs. A request either
//! converts completely or fails with the first offending field.

use crate::error::{ApiError, translate_field_error};
use crate::request_response::{AttendanceInput, PlanSettings, TimetableInput};
use bunk_planner_domain::{
    AttendanceSnapshot, Date, DomainError, ExceptionDates, MAX_CLASSES_PER_DAY, SubjectRecord,
    TargetPercent, Timetable, Weekday, parse_calendar_date,
};

/// Planning settings after validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedSettings {
    /// Last day of the semester.
    pub semester_end: Date,
    /// Weekly class counts.
    pub timetable: Timetable,
    /// Declared holidays.
    pub holidays: ExceptionDates,
    /// Target attendance percentage.
    pub target: TargetPercent,
    /// Classes to skip in a what-if simulation, if one was requested.
    pub simulate: Option<u32>,
}

/// Validates an attendance snapshot.
///
/// # Errors
///
/// Returns an error if any count is negative or too large, if attended
/// exceeds held for the total or any subject, or if no classes have been held.
pub fn validate_attendance(input: &AttendanceInput) -> Result<AttendanceSnapshot, ApiError> {
    let subjects: Vec<SubjectRecord> = input
        .subjects
        .iter()
        .enumerate()
        .map(|(index, subject)| {
            let field: String = format!("subjects[{index}]");
            let attended: u32 = validate_count(&format!("{field}.attended"), subject.attended)?;
            let total: u32 = validate_count(&format!("{field}.total"), subject.total)?;
            SubjectRecord::new(subject.name.clone(), attended, total)
                .map_err(|e| translate_field_error(&field, e))
        })
        .collect::<Result<_, _>>()?;

    let past_attended: u32 = validate_count("pastAttended", input.past_attended)?;
    let past_total: u32 = validate_count("pastTotal", input.past_total)?;

    let snapshot: AttendanceSnapshot = AttendanceSnapshot::new(past_attended, past_total, subjects)
        .map_err(|e| translate_field_error("pastAttended", e))?;

    Ok(match &input.student_id {
        Some(student_id) => snapshot.with_student_id(student_id.clone()),
        None => snapshot,
    })
}

/// Validates planning settings.
///
/// # Errors
///
/// Returns an error if a date does not parse, a count is negative, a weekday
/// name is unknown or repeated, or the target lies outside `[0, 100]`.
pub fn validate_settings(settings: &PlanSettings) -> Result<ValidatedSettings, ApiError> {
    let semester_end: Date = parse_calendar_date(&settings.semester_end)
        .map_err(|e| translate_field_error("semesterEnd", e))?;

    let timetable: Timetable = validate_timetable(&settings.timetable)?;

    let holidays: ExceptionDates = ExceptionDates::parse(settings.holidays.as_slice())
        .map_err(|e| translate_field_error("holidays", e))?;

    let target: TargetPercent = TargetPercent::new(settings.target_percent)
        .map_err(|e| translate_field_error("targetPercent", e))?;

    let simulate: u32 = validate_count("simulate", settings.simulate)?;

    Ok(ValidatedSettings {
        semester_end,
        timetable,
        holidays,
        target,
        simulate: (simulate > 0).then_some(simulate),
    })
}

/// Validates a weekly timetable.
///
/// # Errors
///
/// Returns an error if a weekday name is unknown or appears twice, or if a
/// class count is negative or above [`MAX_CLASSES_PER_DAY`].
pub fn validate_timetable(input: &TimetableInput) -> Result<Timetable, ApiError> {
    let mut timetable: Timetable = Timetable::new();
    let mut seen: Vec<Weekday> = Vec::with_capacity(input.0.len());

    for (name, count) in &input.0 {
        let field: String = format!("timetable.{name}");
        let weekday: Weekday = parse_weekday(name).ok_or_else(|| ApiError::InvalidInput {
            field: field.clone(),
            message: format!("'{name}' is not a weekday"),
        })?;

        if seen.contains(&weekday) {
            return Err(ApiError::InvalidInput {
                field,
                message: format!("{weekday} is listed more than once"),
            });
        }
        seen.push(weekday);

        let classes: u32 = validate_count(&field, *count)?;
        if classes > MAX_CLASSES_PER_DAY {
            return Err(translate_field_error(
                &field,
                DomainError::InvalidRange {
                    field: field.clone(),
                    reason: format!("must be at most {MAX_CLASSES_PER_DAY}, got {classes}"),
                },
            ));
        }
        timetable.set_classes(weekday, classes);
    }

    Ok(timetable)
}

/// Parses a weekday from its short (`Mon`) or full (`Monday`) English name,
/// ignoring case.
#[must_use]
pub fn parse_weekday(name: &str) -> Option<Weekday> {
    match name.trim().to_ascii_lowercase().as_str() {
        "mon" | "monday" => Some(Weekday::Monday),
        "tue" | "tues" | "tuesday" => Some(Weekday::Tuesday),
        "wed" | "wednesday" => Some(Weekday::Wednesday),
        "thu" | "thur" | "thurs" | "thursday" => Some(Weekday::Thursday),
        "fri" | "friday" => Some(Weekday::Friday),
        "sat" | "saturday" => Some(Weekday::Saturday),
        "sun" | "sunday" => Some(Weekday::Sunday),
        _ => None,
    }
}

/// Validates a non-negative class count.
///
/// # Errors
///
/// Returns `InvalidInput` if the value is negative or does not fit in a `u32`.
pub fn validate_count(field: &str, value: i64) -> Result<u32, ApiError> {
    u32::try_from(value).map_err(|_| {
        translate_field_error(
            field,
            DomainError::InvalidRange {
                field: field.to_string(),
                reason: if value < 0 {
                    format!("must not be negative, got {value}")
                } else {
                    format!("must be at most {}, got {value}", u32::MAX)
                },
            },
        )
    })
}
