// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use bunk_planner_domain::Tz;
use chrono::{DateTime, TimeZone, Utc};
use chrono_tz::Asia::Kolkata;
use std::collections::BTreeMap;

use crate::{
    AttendanceInput, PlanRequest, PlanSettings, SaveConfigRequest, SubjectInput, TimetableInput,
};

pub const fn test_zone() -> Tz {
    Kolkata
}

/// Monday 2025-11-24, 09:00 in Kolkata.
pub fn monday_morning() -> DateTime<Utc> {
    Kolkata
        .with_ymd_and_hms(2025, 11, 24, 9, 0, 0)
        .unwrap()
        .with_timezone(&Utc)
}

/// Monday 2025-11-24, 18:00 in Kolkata.
pub fn monday_evening() -> DateTime<Utc> {
    Kolkata
        .with_ymd_and_hms(2025, 11, 24, 18, 0, 0)
        .unwrap()
        .with_timezone(&Utc)
}

pub fn create_test_attendance() -> AttendanceInput {
    AttendanceInput {
        student_id: Some(String::from("22071A0501")),
        past_attended: 60,
        past_total: 80,
        subjects: vec![
            SubjectInput {
                name: String::from("Compiler Design"),
                attended: 35,
                total: 40,
            },
            SubjectInput {
                name: String::from("Computer Networks"),
                attended: 25,
                total: 40,
            },
        ],
    }
}

pub fn create_test_timetable() -> TimetableInput {
    let mut days: BTreeMap<String, i64> = BTreeMap::new();
    for day in ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat"] {
        days.insert(day.to_string(), 1);
    }
    days.insert(String::from("Sun"), 0);
    TimetableInput(days)
}

pub fn create_test_settings() -> PlanSettings {
    PlanSettings {
        semester_end: String::from("2025-11-28"),
        timetable: create_test_timetable(),
        holidays: Vec::new(),
        target_percent: 75.0,
        simulate: 0,
    }
}

pub fn create_test_plan_request() -> PlanRequest {
    PlanRequest {
        attendance: create_test_attendance(),
        settings: create_test_settings(),
    }
}

pub fn create_test_save_request(username: &str) -> SaveConfigRequest {
    SaveConfigRequest {
        username: username.to_string(),
        attendance: create_test_attendance(),
        settings: create_test_settings(),
    }
}
