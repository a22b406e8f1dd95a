//! HTTP request handlers for the payroll engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::calculate_payroll;
use crate::error::EngineResult;
use crate::models::{CalculationResult, WorkerType};
use crate::report::generate_report_with_calendar;

use super::request::CalculationRequest;
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate", post(calculate_handler))
        .route("/report", post(report_handler))
        .with_state(state)
}

/// Handler for POST /calculate endpoint.
///
/// Accepts a calculation request and returns the payroll result as JSON.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

    let request = match extract_request(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response,
    };

    match perform_calculation(&state, &request) {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                worker_type = %result.worker_type,
                gross_pay = %result.summary.gross_pay(),
                net_pay = %result.summary.net_pay(),
                duration_us = result.audit_trace.duration_us,
                "Calculation completed successfully"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(result),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Calculation failed"
            );
            json_error(err.into())
        }
    }
}

/// Handler for POST /report endpoint.
///
/// Accepts the same body as `/calculate` and returns the text report. Input
/// failures are part of the report text, so a well-formed request always
/// gets a 200.
async fn report_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing report request");

    let request = match extract_request(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let calendar = request.calendar(state.calendar());
    let report = generate_report_with_calendar(&request.fields, &request.worker_type, &calendar);

    info!(
        correlation_id = %correlation_id,
        worker_type = %request.worker_type,
        "Report generated"
    );

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        report,
    )
        .into_response()
}

/// Runs the pipeline for a request and wraps it with timing information.
fn perform_calculation(
    state: &AppState,
    request: &CalculationRequest,
) -> EngineResult<CalculationResult> {
    let start_time = Instant::now();

    let worker_type: WorkerType = request.worker_type.parse()?;
    let calendar = request.calendar(state.calendar());
    let calculation = calculate_payroll(&request.fields, worker_type, &calendar)?;

    let duration_us = start_time.elapsed().as_micros() as u64;
    Ok(CalculationResult::from_calculation(calculation, duration_us))
}

/// Unwraps the JSON body or builds the 400 response for a rejected one.
fn extract_request(
    payload: Result<Json<CalculationRequest>, JsonRejection>,
    correlation_id: Uuid,
) -> Result<CalculationRequest, Response> {
    let rejection = match payload {
        Ok(Json(request)) => return Ok(request),
        Err(rejection) => rejection,
    };

    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };

    Err(json_error(ApiErrorResponse {
        status: StatusCode::BAD_REQUEST,
        error,
    }))
}

fn json_error(api_error: ApiErrorResponse) -> Response {
    (
        api_error.status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(api_error.error),
    )
        .into_response()
}
