//! HTTP request handlers for the crew hours API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::Utc;
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::EngineResult;
use crate::export::CsvExport;
use crate::models::{DailyReport, MonthlyReport, WeeklyReport};

use super::request::{
    ClockInRequest, ClockOutRequest, DailyReportQuery, MonthlyReportQuery, WeeklyReportQuery,
};
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/reports/daily", get(daily_report_handler))
        .route("/reports/daily/csv", get(daily_csv_handler))
        .route("/reports/weekly", get(weekly_report_handler))
        .route("/reports/weekly/csv", get(weekly_csv_handler))
        .route("/reports/monthly", get(monthly_report_handler))
        .route("/reports/monthly/csv", get(monthly_csv_handler))
        .route("/dashboard/active", get(active_dashboard_handler))
        .route("/time-entries/clock-in", post(clock_in_handler))
        .route("/time-entries/:id/clock-out", post(clock_out_handler))
        .with_state(state)
}

async fn daily_report(state: &AppState, query: &DailyReportQuery) -> EngineResult<DailyReport> {
    let (date, employee_id) = query.parse()?;
    state.reports().daily_report(date, employee_id).await
}

async fn weekly_report(state: &AppState, query: &WeeklyReportQuery) -> EngineResult<WeeklyReport> {
    let (date, employee_id) = query.parse()?;
    state.reports().weekly_report(date, employee_id).await
}

async fn monthly_report(
    state: &AppState,
    query: &MonthlyReportQuery,
) -> EngineResult<MonthlyReport> {
    let (year, month, employee_id) = query.parse()?;
    state.reports().monthly_report(year, month, employee_id).await
}

/// Handler for `GET /reports/daily`.
async fn daily_report_handler(
    State(state): State<AppState>,
    query: Result<Query<DailyReportQuery>, QueryRejection>,
) -> Response {
    let call = Call::start("daily");
    match query {
        Ok(Query(query)) => call.json(daily_report(&state, &query).await),
        Err(rejection) => call.query_rejected(rejection),
    }
}

/// Handler for `GET /reports/daily/csv`.
async fn daily_csv_handler(
    State(state): State<AppState>,
    query: Result<Query<DailyReportQuery>, QueryRejection>,
) -> Response {
    let call = Call::start("daily_csv");
    match query {
        Ok(Query(query)) => call.csv(daily_report(&state, &query).await),
        Err(rejection) => call.query_rejected(rejection),
    }
}

/// Handler for `GET /reports/weekly`.
async fn weekly_report_handler(
    State(state): State<AppState>,
    query: Result<Query<WeeklyReportQuery>, QueryRejection>,
) -> Response {
    let call = Call::start("weekly");
    match query {
        Ok(Query(query)) => call.json(weekly_report(&state, &query).await),
        Err(rejection) => call.query_rejected(rejection),
    }
}

/// Handler for `GET /reports/weekly/csv`.
async fn weekly_csv_handler(
    State(state): State<AppState>,
    query: Result<Query<WeeklyReportQuery>, QueryRejection>,
) -> Response {
    let call = Call::start("weekly_csv");
    match query {
        Ok(Query(query)) => call.csv(weekly_report(&state, &query).await),
        Err(rejection) => call.query_rejected(rejection),
    }
}

/// Handler for `GET /reports/monthly`.
async fn monthly_report_handler(
    State(state): State<AppState>,
    query: Result<Query<MonthlyReportQuery>, QueryRejection>,
) -> Response {
    let call = Call::start("monthly");
    match query {
        Ok(Query(query)) => call.json(monthly_report(&state, &query).await),
        Err(rejection) => call.query_rejected(rejection),
    }
}

/// Handler for `GET /reports/monthly/csv`.
async fn monthly_csv_handler(
    State(state): State<AppState>,
    query: Result<Query<MonthlyReportQuery>, QueryRejection>,
) -> Response {
    let call = Call::start("monthly_csv");
    match query {
        Ok(Query(query)) => call.csv(monthly_report(&state, &query).await),
        Err(rejection) => call.query_rejected(rejection),
    }
}

/// Handler for `GET /dashboard/active`.
async fn active_dashboard_handler(State(state): State<AppState>) -> Response {
    let call = Call::start("active_dashboard");
    call.json(state.reports().active_dashboard(Utc::now()).await)
}

/// Handler for `POST /time-entries/clock-in`.
///
/// Returns `201 Created` with the open entry.
async fn clock_in_handler(
    State(state): State<AppState>,
    payload: Result<Json<ClockInRequest>, JsonRejection>,
) -> Response {
    let call = Call::start("clock_in");
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return call.json_rejected(rejection),
    };

    let result = match request.into_new_entry(Utc::now()) {
        Ok(entry) => state.store().clock_in(entry).await,
        Err(err) => Err(err),
    };
    call.respond(StatusCode::CREATED, result)
}

/// Handler for `POST /time-entries/:id/clock-out`.
///
/// The body is optional; without one the entry is closed at the server time.
async fn clock_out_handler(
    State(state): State<AppState>,
    Path(entry_id): Path<String>,
    payload: Result<Json<ClockOutRequest>, JsonRejection>,
) -> Response {
    let call = Call::start("clock_out");
    let request = match payload {
        Ok(Json(request)) => request,
        Err(JsonRejection::MissingJsonContentType(_)) => ClockOutRequest::default(),
        Err(rejection) => return call.json_rejected(rejection),
    };

    let at = request.clock_out_time.unwrap_or_else(Utc::now);
    let result = state.store().clock_out(&entry_id, at).await;
    call.respond(StatusCode::OK, result)
}

/// Per-request bookkeeping: correlation ID and timing.
struct Call {
    correlation_id: Uuid,
    operation: &'static str,
    started: Instant,
}

impl Call {
    fn start(operation: &'static str) -> Self {
        let correlation_id = Uuid::new_v4();
        info!(correlation_id = %correlation_id, operation = operation, "Processing request");
        Self {
            correlation_id,
            operation,
            started: Instant::now(),
        }
    }

    fn json<T: Serialize>(self, result: EngineResult<T>) -> Response {
        self.respond(StatusCode::OK, result)
    }

    fn respond<T: Serialize>(self, status: StatusCode, result: EngineResult<T>) -> Response {
        match result {
            Ok(body) => {
                self.completed();
                (status, [(header::CONTENT_TYPE, "application/json")], Json(body)).into_response()
            }
            Err(err) => self.failed(err.into()),
        }
    }

    fn csv<R: CsvExport>(self, result: EngineResult<R>) -> Response {
        match result {
            Ok(report) => {
                let disposition = format!("attachment; filename=\"{}\"", report.csv_filename());
                let body = report.to_csv();
                self.completed();
                (
                    StatusCode::OK,
                    [
                        (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
                        (header::CONTENT_DISPOSITION, disposition),
                    ],
                    body,
                )
                    .into_response()
            }
            Err(err) => self.failed(err.into()),
        }
    }

    fn query_rejected(self, rejection: QueryRejection) -> Response {
        self.failed(ApiErrorResponse::bad_request(ApiError::validation_error(
            rejection.body_text(),
        )))
    }

    fn json_rejected(self, rejection: JsonRejection) -> Response {
        let error = match rejection {
            JsonRejection::JsonDataError(err) => {
                // serde reports missing or mistyped fields here
                ApiError::validation_error(err.body_text())
            }
            JsonRejection::JsonSyntaxError(err) => {
                ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
            }
            JsonRejection::MissingJsonContentType(_) => {
                ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
            }
            _ => ApiError::malformed_json("Failed to parse request body"),
        };
        self.failed(ApiErrorResponse::bad_request(error))
    }

    fn completed(&self) {
        info!(
            correlation_id = %self.correlation_id,
            operation = self.operation,
            duration_us = self.started.elapsed().as_micros() as u64,
            "Request completed successfully"
        );
    }

    fn failed(self, response: ApiErrorResponse) -> Response {
        warn!(
            correlation_id = %self.correlation_id,
            operation = self.operation,
            status = response.status.as_u16(),
            code = %response.error.code,
            error = %response.error.message,
            "Request failed"
        );
        response.into_response()
    }
}
