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
#![allow(clippy::multiple_crate_versions)]

use axum::{
    Json, Router,
    extract::{Path, State as AxumState},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use bunk_planner_api::{
    ApiError, AttendanceInput, AttendanceSummaryResponse, Clock, GetConfigResponse,
    InMemoryConfigStore, PlanRequest, PlanResponse, PreparedConfig, SaveConfigRequest,
    SystemClock, get_config, plan_bunks, prepare_config, save_config, summarize_attendance,
};
use bunk_planner_domain::{Tz, parse_time_zone};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{error, info, warn};

/// Bunk Planner Server - HTTP server for attendance bunk planning
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Address to bind the server to
    #[arg(short, long, default_value = "127.0.0.1")]
    bind: IpAddr,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// IANA time zone in which the daily 17:00 cutoff is evaluated
    #[arg(short, long, default_value = "Asia/Kolkata")]
    timezone: String,

    /// Maximum number of users whose settings are kept in memory
    #[arg(long, default_value_t = 10_000)]
    max_users: usize,
}

/// Application state shared across handlers.
///
/// The configuration store is wrapped in a Mutex to allow safe concurrent
/// access. The clock and time zone are fixed for the life of the process.
#[derive(Clone)]
struct AppState {
    /// Per-user planning settings.
    store: Arc<Mutex<InMemoryConfigStore>>,
    /// Source of the current instant.
    clock: Arc<dyn Clock>,
    /// Reference time zone for projections.
    zone: Tz,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct HealthResponse {
    /// Always `ok` while the server is running.
    status: String,
}

/// Error response type.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Error indicator.
    error: bool,
    /// Error message.
    message: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::InvalidInput { .. } => {
                warn!(error = %err, "Rejected invalid input");
                Self {
                    status: StatusCode::BAD_REQUEST,
                    message: err.to_string(),
                }
            }
            ApiError::DomainRuleViolation { .. } => {
                warn!(error = %err, "Rejected request");
                Self {
                    status: StatusCode::UNPROCESSABLE_ENTITY,
                    message: err.to_string(),
                }
            }
            ApiError::Internal { .. } => {
                error!(error = %err, "Internal error");
                Self {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    message: err.to_string(),
                }
            }
        }
    }
}

/// Handler for GET `/health` endpoint.
async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: String::from("ok"),
    })
}

/// Handler for POST `/attendance/summary` endpoint.
///
/// Reports current overall and per-subject attendance.
async fn handle_attendance_summary(
    Json(req): Json<AttendanceInput>,
) -> Result<Json<AttendanceSummaryResponse>, HttpError> {
    info!(
        student_id = ?req.student_id,
        subjects = req.subjects.len(),
        "Handling attendance summary request"
    );

    let summary: AttendanceSummaryResponse = summarize_attendance(&req)?;

    Ok(Json(summary))
}

/// Handler for POST `/plan` endpoint.
///
/// Computes a bunk plan without saving any settings.
async fn handle_plan(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<PlanRequest>,
) -> Result<Json<PlanResponse>, HttpError> {
    info!(
        student_id = ?req.attendance.student_id,
        semester_end = %req.settings.semester_end,
        "Handling plan request"
    );

    let plan: PlanResponse = plan_bunks(&req, app_state.clock.now(), app_state.zone)?;

    Ok(Json(plan))
}

/// Handler for GET `/config/{username}` endpoint.
///
/// Returns the saved settings for a user, or `null` if none exist.
async fn handle_get_config(
    AxumState(app_state): AxumState<AppState>,
    Path(username): Path<String>,
) -> Result<Json<GetConfigResponse>, HttpError> {
    info!(username = %username, "Handling get_config request");

    let store = app_state.store.lock().await;
    let response: GetConfigResponse = get_config(&*store, &username)?;
    drop(store);

    Ok(Json(response))
}

/// Handler for POST `/save-config` endpoint.
///
/// Saves a user's settings and returns the plan computed from them.
///
/// The plan is computed before the store lock is taken; the lock covers only
/// the write.
async fn handle_save_config(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<SaveConfigRequest>,
) -> Result<Json<PlanResponse>, HttpError> {
    info!(username = %req.username, "Handling save_config request");

    let now = app_state.clock.now();
    let prepared: PreparedConfig = prepare_config(&req, now, app_state.zone)?;

    let mut store = app_state.store.lock().await;
    let plan: PlanResponse = save_config(&mut *store, prepared)?;
    drop(store);

    info!(
        username = %req.username,
        remaining_classes = plan.remaining_classes,
        bunkable = plan.bunkable,
        "Successfully saved config"
    );

    Ok(Json(plan))
}

/// Builds the application router.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(handle_health))
        .route("/attendance/summary", post(handle_attendance_summary))
        .route("/plan", post(handle_plan))
        .route("/config/{username}", get(handle_get_config))
        .route("/save-config", post(handle_save_config))
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Bunk Planner Server");

    let zone: Tz = parse_time_zone(&args.timezone)?;
    info!(timezone = %zone, max_users = args.max_users, "Using in-memory config store");

    let app_state: AppState = AppState {
        store: Arc::new(Mutex::new(InMemoryConfigStore::new(args.max_users))),
        clock: Arc::new(SystemClock),
        zone,
    };

    // Build router
    let app: Router = build_router(app_state);

    // Bind to address
    let addr: SocketAddr = SocketAddr::new(args.bind, args.port);
    info!("Server listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
