//! HTTP request handlers for the attendance API.

use std::borrow::Cow;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::compute_attendance;
use crate::models::{Employee, HolidayCalendar, PublicHoliday};

use super::request::ComputeRequest;
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/attendance/compute", post(compute_handler))
        .with_state(state)
}

/// Handler for POST /attendance/compute.
///
/// Accepts an employee and one attendance and returns the derived hours
/// with their audit trace.
async fn compute_handler(
    State(state): State<AppState>,
    payload: Result<Json<ComputeRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing attendance request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = rejection_to_error(rejection);
            warn!(
                correlation_id = %correlation_id,
                code = %error.code,
                error = %error.message,
                "Rejected request body"
            );
            return ApiErrorResponse::bad_request(error).into_response();
        }
    };

    let employee: Employee = request.employee.into();
    let shift = match request.shift.into_shift(&employee.id) {
        Ok(shift) => shift,
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Invalid shift payload");
            return ApiErrorResponse::from(err).into_response();
        }
    };

    let config = state.config();
    let holidays = request_calendar(config.holidays(), &employee, request.public_holidays);

    match compute_attendance(&shift, &employee, config.company(), &*holidays) {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                employee_id = %employee.id,
                shift_id = %shift.id,
                date_type = %result.hours.date_type,
                total_hours = result.hours.worked_hours_total,
                duration_us = result.audit_trace.duration_us,
                "Attendance computed"
            );
            (StatusCode::OK, Json(result)).into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Attendance computation failed"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Translates a body extraction failure into an API error.
fn rejection_to_error(rejection: JsonRejection) -> ApiError {
    match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    }
}

/// Returns the configured calendar, widened with the request's holidays and
/// the employee's region when either is present.
fn request_calendar<'a>(
    base: &'a HolidayCalendar,
    employee: &Employee,
    extra: Vec<PublicHoliday>,
) -> Cow<'a, HolidayCalendar> {
    if extra.is_empty() && employee.region.is_none() {
        return Cow::Borrowed(base);
    }

    let mut calendar = base.clone();
    calendar.extend(extra);
    if let Some(region) = &employee.region {
        calendar = calendar.with_employee_region(employee.id.clone(), region.clone());
    }
    Cow::Owned(calendar)
}
