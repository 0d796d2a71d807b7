// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.
//!
//! Wire fields use camelCase. Counts arrive as signed integers so that
//! negative values can be reported as range errors instead of being rejected
//! by the deserializer.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Attendance for a single subject as reported by the attendance source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubjectInput {
    /// The subject name.
    #[serde(alias = "subject")]
    pub name: String,
    /// Classes attended.
    pub attended: i64,
    /// Classes held.
    pub total: i64,
}

/// The attendance snapshot as supplied by the attendance source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceInput {
    /// Identifier of the student, passed through unchanged.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub student_id: Option<String>,
    /// Classes attended so far.
    pub past_attended: i64,
    /// Classes held so far.
    pub past_total: i64,
    /// Per-subject attendance.
    #[serde(default)]
    pub subjects: Vec<SubjectInput>,
}

/// Weekly timetable keyed by weekday name (`Mon` or `Monday`).
///
/// Weekdays that are absent hold no classes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TimetableInput(pub BTreeMap<String, i64>);

/// Planning settings a user keeps between sessions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanSettings {
    /// Last day of the semester (ISO 8601 date).
    pub semester_end: String,
    /// Weekly class counts.
    #[serde(default)]
    pub timetable: TimetableInput,
    /// Declared holidays (ISO 8601 dates).
    #[serde(default)]
    pub holidays: Vec<String>,
    /// Target attendance percentage.
    #[serde(default = "default_target_percent")]
    pub target_percent: f64,
    /// Classes to skip in a what-if simulation; zero requests none.
    #[serde(default)]
    pub simulate: i64,
}

const fn default_target_percent() -> f64 {
    bunk_planner_domain::TargetPercent::DEFAULT_VALUE
}

/// API request to compute a bunk plan without saving settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanRequest {
    /// Past attendance.
    pub attendance: AttendanceInput,
    /// Planning settings.
    #[serde(flatten)]
    pub settings: PlanSettings,
}

/// API request to save a user's settings and compute a plan from them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveConfigRequest {
    /// The user the settings belong to.
    pub username: String,
    /// Past attendance.
    pub attendance: AttendanceInput,
    /// Planning settings.
    #[serde(flatten)]
    pub settings: PlanSettings,
}

/// Stored per-user settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserConfig {
    /// The user the settings belong to.
    pub username: String,
    /// Planning settings.
    #[serde(flatten)]
    pub settings: PlanSettings,
    /// When the settings were last saved (RFC 3339).
    pub last_updated: String,
}

/// API response for a configuration lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GetConfigResponse {
    /// The stored settings, or `None` if the user has none.
    pub config: Option<UserConfig>,
}

/// Attendance for a single subject, with its percentage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubjectSummary {
    /// The subject name.
    pub name: String,
    /// Classes attended.
    pub attended: u32,
    /// Classes held.
    pub total: u32,
    /// Attendance percentage (two decimals), or `None` if no classes were held.
    pub percentage: Option<String>,
}

/// API response describing current attendance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceSummaryResponse {
    /// Identifier of the student, if supplied.
    pub student_id: Option<String>,
    /// Classes attended so far.
    pub past_attended: u32,
    /// Classes held so far.
    pub past_total: u32,
    /// Per-subject attendance.
    pub subjects: Vec<SubjectSummary>,
    /// Current overall percentage (two decimals).
    pub current_attendance: String,
}

/// API response for a computed bunk plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanResponse {
    /// The attendance the plan was computed from.
    #[serde(flatten)]
    pub attendance: AttendanceSummaryResponse,
    /// Class instances still to be held.
    pub remaining_classes: u32,
    /// Start of the projection (RFC 3339, local midnight in the reference zone).
    pub start_date: String,
    /// Classes that may be skipped.
    pub bunkable: u32,
    /// Whether attending every remaining class meets the target.
    pub reachable: bool,
    /// Final percentage if every remaining class is attended (two decimals).
    pub max_possible_attendance: String,
    /// Final percentage for the requested simulation (two decimals).
    pub simulated_attendance: Option<String>,
}
