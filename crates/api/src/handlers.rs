// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Request handling: validate, project, solve, simulate.

use crate::error::{ApiError, translate_domain_error};
use crate::request_response::{
    AttendanceInput, AttendanceSummaryResponse, GetConfigResponse, PlanRequest, PlanResponse,
    SaveConfigRequest, SubjectSummary, UserConfig,
};
use crate::store::ConfigStore;
use crate::validation::{ValidatedSettings, validate_attendance, validate_settings};
use bunk_planner_domain::{
    AttendanceSnapshot, FeasibilityResult, Projection, Tz, project_remaining_classes, simulate,
    solve, start_of_day,
};
use chrono::{DateTime, Utc};
use tracing::{debug, info};

/// Summarises a student's current attendance.
///
/// # Errors
///
/// Returns an error if the attendance snapshot is invalid.
pub fn summarize_attendance(
    input: &AttendanceInput,
) -> Result<AttendanceSummaryResponse, ApiError> {
    let snapshot: AttendanceSnapshot = validate_attendance(input)?;
    Ok(summarize_snapshot(&snapshot))
}

/// Computes a bunk plan from attendance and settings supplied together.
///
/// # Arguments
///
/// * `request` - Attendance and planning settings
/// * `now` - The current instant
/// * `zone` - The reference time zone for the 17:00 cutoff
///
/// # Errors
///
/// Returns an error if any input is invalid or a percentage is undefined.
pub fn plan_bunks(
    request: &PlanRequest,
    now: DateTime<Utc>,
    zone: Tz,
) -> Result<PlanResponse, ApiError> {
    let snapshot: AttendanceSnapshot = validate_attendance(&request.attendance)?;
    let settings: ValidatedSettings = validate_settings(&request.settings)?;

    compute_plan(&snapshot, &settings, now, zone)
}

/// Returns the settings saved for `username`.
///
/// A user without saved settings yields `config: None`.
///
/// # Errors
///
/// Returns an error if the username is blank or the store cannot be read.
pub fn get_config<S: ConfigStore + ?Sized>(
    store: &S,
    username: &str,
) -> Result<GetConfigResponse, ApiError> {
    let username: &str = validate_username(username)?;
    let config: Option<UserConfig> = store.get(username)?;

    debug!(username = %username, found = config.is_some(), "Loaded user config");

    Ok(GetConfigResponse { config })
}

/// A validated save request, with its plan already computed.
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedConfig {
    /// The settings record to store.
    pub config: UserConfig,
    /// The plan computed from those settings.
    pub plan: PlanResponse,
}

/// Validates a save request and computes its plan.
///
/// The store is not involved, so callers can run this before taking any
/// lock on it.
///
/// # Errors
///
/// Returns an error if the username is blank or any input is invalid.
pub fn prepare_config(
    request: &SaveConfigRequest,
    now: DateTime<Utc>,
    zone: Tz,
) -> Result<PreparedConfig, ApiError> {
    let username: &str = validate_username(&request.username)?;
    let snapshot: AttendanceSnapshot = validate_attendance(&request.attendance)?;
    let settings: ValidatedSettings = validate_settings(&request.settings)?;

    let plan: PlanResponse = compute_plan(&snapshot, &settings, now, zone)?;

    Ok(PreparedConfig {
        config: UserConfig {
            username: username.to_string(),
            settings: request.settings.clone(),
            last_updated: now.to_rfc3339(),
        },
        plan,
    })
}

/// Stores prepared settings and returns their plan.
///
/// # Errors
///
/// Returns an error if the store rejects the settings.
pub fn save_config<S: ConfigStore + ?Sized>(
    store: &mut S,
    prepared: PreparedConfig,
) -> Result<PlanResponse, ApiError> {
    let PreparedConfig { config, plan } = prepared;
    let username: String = config.username.clone();

    store.upsert(config)?;

    info!(username = %username, "Saved user config");

    Ok(plan)
}

fn compute_plan(
    snapshot: &AttendanceSnapshot,
    settings: &ValidatedSettings,
    now: DateTime<Utc>,
    zone: Tz,
) -> Result<PlanResponse, ApiError> {
    let projection: Projection = project_remaining_classes(
        &settings.timetable,
        settings.semester_end,
        &settings.holidays,
        &now.with_timezone(&zone),
    )
    .map_err(translate_domain_error)?;

    debug!(
        start_date = %projection.start_date,
        semester_end = %settings.semester_end,
        holidays = settings.holidays.len(),
        remaining_classes = projection.remaining_classes,
        "Projected remaining classes"
    );

    let feasibility: FeasibilityResult =
        solve(snapshot, projection.remaining_classes, settings.target)
            .map_err(translate_domain_error)?;

    let simulated_attendance: Option<String> = settings
        .simulate
        .map(|skip_count| simulate(snapshot, projection.remaining_classes, skip_count))
        .transpose()
        .map_err(translate_domain_error)?
        .map(|percentage| percentage.to_string());

    let start_date: DateTime<Utc> =
        start_of_day(projection.start_date, &zone).map_err(translate_domain_error)?;

    info!(
        remaining_classes = projection.remaining_classes,
        bunkable = feasibility.bunkable,
        reachable = feasibility.reachable,
        target_percent = settings.target.value(),
        "Computed bunk plan"
    );

    Ok(PlanResponse {
        attendance: summarize_snapshot(snapshot),
        remaining_classes: projection.remaining_classes,
        start_date: start_date.to_rfc3339(),
        bunkable: feasibility.bunkable,
        reachable: feasibility.reachable,
        max_possible_attendance: feasibility.max_possible_attendance.to_string(),
        simulated_attendance,
    })
}

fn summarize_snapshot(snapshot: &AttendanceSnapshot) -> AttendanceSummaryResponse {
    AttendanceSummaryResponse {
        student_id: snapshot.student_id().map(str::to_string),
        past_attended: snapshot.past_attended(),
        past_total: snapshot.past_total(),
        subjects: snapshot
            .subjects()
            .iter()
            .map(|subject| SubjectSummary {
                name: subject.name().to_string(),
                attended: subject.attended(),
                total: subject.total(),
                percentage: subject.percentage().map(|p| p.to_string()),
            })
            .collect(),
        current_attendance: snapshot.current_percentage().to_string(),
    }
}

fn validate_username(username: &str) -> Result<&str, ApiError> {
    let trimmed: &str = username.trim();
    if trimmed.is_empty() {
        return Err(ApiError::InvalidInput {
            field: String::from("username"),
            message: String::from("Username cannot be empty"),
        });
    }
    Ok(trimmed)
}
