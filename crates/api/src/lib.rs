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
    clippy::all
)]

mod clock;
mod error;
mod handlers;
mod request_response;
mod store;
mod validation;

#[cfg(test)]
mod tests;

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{ApiError, translate_domain_error, translate_field_error};
pub use handlers::{
    PreparedConfig, get_config, plan_bunks, prepare_config, save_config, summarize_attendance,
};
pub use request_response::{
    AttendanceInput, AttendanceSummaryResponse, GetConfigResponse, PlanRequest, PlanResponse,
    PlanSettings, SaveConfigRequest, SubjectInput, SubjectSummary, TimetableInput, UserConfig,
};
pub use store::{ConfigStore, InMemoryConfigStore, StoreError};
pub use validation::{
    ValidatedSettings, parse_weekday, validate_attendance, validate_count, validate_settings,
    validate_timetable,
};
