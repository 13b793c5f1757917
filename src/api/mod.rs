//! HTTP API module for the crew hours engine.
//!
//! This module provides the REST endpoints for the daily, weekly and monthly
//! reports (JSON and CSV), the active-crew dashboard, and the clock-in and
//! clock-out lifecycle.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    ClockInRequest, ClockOutRequest, DailyReportQuery, MonthlyReportQuery, WeeklyReportQuery,
};
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
