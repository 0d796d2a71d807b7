// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{
    create_test_attendance, create_test_plan_request, monday_evening, monday_morning, test_zone,
};
use crate::{
    ApiError, AttendanceSummaryResponse, PlanRequest, PlanResponse, plan_bunks,
    summarize_attendance,
};

#[test]
fn test_plan_from_monday_morning() {
    let request: PlanRequest = create_test_plan_request();

    let response: PlanResponse = plan_bunks(&request, monday_morning(), test_zone()).unwrap();

    assert_eq!(response.remaining_classes, 5);
    assert_eq!(response.start_date, "2025-11-23T18:30:00+00:00");
    assert_eq!(response.bunkable, 1);
    assert!(response.reachable);
    assert_eq!(response.max_possible_attendance, "76.47");
    assert_eq!(response.simulated_attendance, None);
    assert_eq!(response.attendance.current_attendance, "75.00");
    assert_eq!(response.attendance.student_id.as_deref(), Some("22071A0501"));
}

#[test]
fn test_plan_from_monday_evening_starts_tomorrow() {
    let request: PlanRequest = create_test_plan_request();

    let response: PlanResponse = plan_bunks(&request, monday_evening(), test_zone()).unwrap();

    assert_eq!(response.remaining_classes, 4);
    assert_eq!(response.start_date, "2025-11-24T18:30:00+00:00");
    // 63 / 84 is exactly 75%
    assert_eq!(response.bunkable, 1);
    assert_eq!(response.max_possible_attendance, "76.19");
}

#[test]
fn test_plan_with_simulation() {
    let mut request: PlanRequest = create_test_plan_request();
    request.settings.simulate = 2;

    let response: PlanResponse = plan_bunks(&request, monday_morning(), test_zone()).unwrap();

    assert_eq!(response.simulated_attendance.as_deref(), Some("74.12"));
}

#[test]
fn test_plan_with_holiday() {
    let mut request: PlanRequest = create_test_plan_request();
    request.settings.holidays = vec![String::from("2025-11-26")];

    let response: PlanResponse = plan_bunks(&request, monday_morning(), test_zone()).unwrap();

    assert_eq!(response.remaining_classes, 4);
}

#[test]
fn test_plan_after_semester_end() {
    let mut request: PlanRequest = create_test_plan_request();
    request.settings.semester_end = String::from("2025-11-20");

    let response: PlanResponse = plan_bunks(&request, monday_morning(), test_zone()).unwrap();

    assert_eq!(response.remaining_classes, 0);
    assert_eq!(response.bunkable, 0);
    assert_eq!(response.max_possible_attendance, "75.00");
    assert!(response.reachable);
}

#[test]
fn test_plan_rejects_invalid_semester_end() {
    let mut request: PlanRequest = create_test_plan_request();
    request.settings.semester_end = String::from("28/11/2025");

    let err: ApiError = plan_bunks(&request, monday_morning(), test_zone()).unwrap_err();

    assert!(matches!(err, ApiError::InvalidInput { ref field, .. } if field == "semesterEnd"));
}

#[test]
fn test_plan_rejects_semester_end_beyond_projection_limit() {
    let mut request: PlanRequest = create_test_plan_request();
    request.settings.semester_end = String::from("2027-11-24");

    let err: ApiError = plan_bunks(&request, monday_morning(), test_zone()).unwrap_err();

    assert!(matches!(err, ApiError::InvalidInput { ref field, .. } if field == "semesterEnd"));
    assert!(err.to_string().contains("366"));
}

#[test]
fn test_plan_accepts_semester_end_at_projection_limit() {
    let mut request: PlanRequest = create_test_plan_request();
    request.settings.semester_end = String::from("2026-11-24");

    let response: PlanResponse = plan_bunks(&request, monday_morning(), test_zone()).unwrap();

    assert!(response.remaining_classes > 0);
}

#[test]
fn test_plan_rejects_invalid_holiday() {
    let mut request: PlanRequest = create_test_plan_request();
    request.settings.holidays = vec![String::from("2025-11-26"), String::from("Diwali")];

    let err: ApiError = plan_bunks(&request, monday_morning(), test_zone()).unwrap_err();

    assert!(matches!(err, ApiError::InvalidInput { ref field, .. } if field == "holidays"));
    assert!(err.to_string().contains("Diwali"));
}

#[test]
fn test_plan_rejects_target_out_of_range() {
    let mut request: PlanRequest = create_test_plan_request();
    request.settings.target_percent = 120.0;

    let err: ApiError = plan_bunks(&request, monday_morning(), test_zone()).unwrap_err();

    assert!(matches!(err, ApiError::InvalidInput { ref field, .. } if field == "targetPercent"));
}

#[test]
fn test_plan_rejects_negative_simulation() {
    let mut request: PlanRequest = create_test_plan_request();
    request.settings.simulate = -1;

    let err: ApiError = plan_bunks(&request, monday_morning(), test_zone()).unwrap_err();

    assert!(matches!(err, ApiError::InvalidInput { ref field, .. } if field == "simulate"));
}

#[test]
fn test_plan_rejects_zero_past_total() {
    let mut request: PlanRequest = create_test_plan_request();
    request.attendance.past_attended = 0;
    request.attendance.past_total = 0;
    request.attendance.subjects.clear();

    let err: ApiError = plan_bunks(&request, monday_morning(), test_zone()).unwrap_err();

    assert!(matches!(
        err,
        ApiError::DomainRuleViolation { ref rule, .. } if rule == "division_undefined"
    ));
}

#[test]
fn test_plan_response_uses_camel_case() {
    let mut request: PlanRequest = create_test_plan_request();
    request.settings.simulate = 2;
    let response: PlanResponse = plan_bunks(&request, monday_morning(), test_zone()).unwrap();

    let json: serde_json::Value = serde_json::to_value(&response).unwrap();

    assert_eq!(json["remainingClasses"], 5);
    assert_eq!(json["bunkable"], 1);
    assert_eq!(json["reachable"], true);
    assert_eq!(json["maxPossibleAttendance"], "76.47");
    assert_eq!(json["simulatedAttendance"], "74.12");
    assert_eq!(json["currentAttendance"], "75.00");
    assert_eq!(json["pastAttended"], 60);
    assert_eq!(json["studentId"], "22071A0501");
    assert_eq!(json["subjects"][0]["percentage"], "87.50");
}

#[test]
fn test_plan_request_defaults() {
    let json: &str = r#"{
        "attendance": {
            "pastAttended": 60,
            "pastTotal": 80,
            "subjects": [{ "subject": "Compiler Design", "attended": 35, "total": 40 }]
        },
        "semesterEnd": "2025-11-28",
        "timetable": { "Mon": 1, "Tue": 1 }
    }"#;

    let request: PlanRequest = serde_json::from_str(json).unwrap();

    assert!((request.settings.target_percent - 75.0).abs() < f64::EPSILON);
    assert_eq!(request.settings.simulate, 0);
    assert!(request.settings.holidays.is_empty());
    assert_eq!(request.attendance.student_id, None);
    assert_eq!(request.attendance.subjects[0].name, "Compiler Design");

    let response: PlanResponse = plan_bunks(&request, monday_morning(), test_zone()).unwrap();
    assert_eq!(response.remaining_classes, 2);
}

#[test]
fn test_summarize_attendance() {
    let summary: AttendanceSummaryResponse =
        summarize_attendance(&create_test_attendance()).unwrap();

    assert_eq!(summary.current_attendance, "75.00");
    assert_eq!(summary.subjects.len(), 2);
    assert_eq!(summary.subjects[0].percentage.as_deref(), Some("87.50"));
    assert_eq!(summary.subjects[1].percentage.as_deref(), Some("62.50"));
}

#[test]
fn test_summarize_attendance_unheld_subject_has_no_percentage() {
    let mut attendance = create_test_attendance();
    attendance.subjects[1].attended = 0;
    attendance.subjects[1].total = 0;

    let summary: AttendanceSummaryResponse = summarize_attendance(&attendance).unwrap();

    assert_eq!(summary.subjects[1].percentage, None);
}
