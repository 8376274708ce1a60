use crate::response::ApiResponse;
use crate::routes::events::attendance::common::AttendanceRecordItem;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::Utc;
use common::format_validation_errors;
use common::qr;
use db::models::attendance_record::{AttendanceError, Model as AttendanceRecordModel};
use serde::Deserialize;
use util::state::AppState;
use validator::Validate;

/// POST /api/events/{event_id}/attendance/check-in
///
/// Records a check-in from a scanned QR badge. The request body is the raw
/// payload text exactly as read by the scanner, not a JSON envelope.
///
/// ### Responses
/// - `201 Created` → created record in `data`
/// - `400 Bad Request` → undecodable payload (`reason: parse_error`)
/// - `404 Not Found` → unknown event (`reason: event_not_found`)
/// - `409 Conflict` → closed event, duplicate scan or completed record
///   (`reason: event_not_accepting_checkins` / `duplicate_check_in` /
///   `already_completed`)
/// - `500 Internal Server Error` → database error
pub async fn check_in(
    State(app_state): State<AppState>,
    Path(event_id): Path<i64>,
    body: String,
) -> impl IntoResponse {
    let db = app_state.db();

    let identity = match qr::decode(&body) {
        Ok(identity) => identity,
        Err(e) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ApiResponse::<AttendanceRecordItem>::error_with_reason(
                    format!("Invalid QR payload: {e}"),
                    "parse_error",
                )),
            );
        }
    };

    match AttendanceRecordModel::check_in(db, event_id, &identity, Utc::now()).await {
        Ok(record) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(
                AttendanceRecordItem::from(record),
                "Check-in recorded successfully",
            )),
        ),
        Err(e) => attendance_error(e),
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct CheckOutRequest {
    #[validate(length(min = 1, message = "Student ID is required"))]
    pub student_id: String,
}

/// POST /api/events/{event_id}/attendance/check-out
///
/// Completes a student's attendance record by stamping the time out. The
/// record is terminal afterwards.
///
/// ### Responses
/// - `200 OK` → updated record in `data`
/// - `400 Bad Request` → validation failure
/// - `404 Not Found` → no open record (`reason: not_checked_in`)
/// - `409 Conflict` → record already completed (`reason: already_completed`)
/// - `500 Internal Server Error` → database error
pub async fn check_out(
    State(app_state): State<AppState>,
    Path(event_id): Path<i64>,
    Json(req): Json<CheckOutRequest>,
) -> impl IntoResponse {
    let db = app_state.db();

    if let Err(e) = req.validate() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<AttendanceRecordItem>::error(
                format_validation_errors(&e),
            )),
        );
    }

    match AttendanceRecordModel::check_out(db, event_id, &req.student_id, Utc::now()).await {
        Ok(record) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                AttendanceRecordItem::from(record),
                "Check-out recorded successfully",
            )),
        ),
        Err(e) => attendance_error(e),
    }
}

/// Maps business outcomes of the attendance flow onto HTTP statuses and the
/// machine-readable reason codes scanners branch on.
fn attendance_error(e: AttendanceError) -> (StatusCode, Json<ApiResponse<AttendanceRecordItem>>) {
    let (status, reason) = match &e {
        AttendanceError::EventNotFound => (StatusCode::NOT_FOUND, "event_not_found"),
        AttendanceError::EventNotAcceptingCheckins => {
            (StatusCode::CONFLICT, "event_not_accepting_checkins")
        }
        AttendanceError::DuplicateCheckIn => (StatusCode::CONFLICT, "duplicate_check_in"),
        AttendanceError::AlreadyCompleted => (StatusCode::CONFLICT, "already_completed"),
        AttendanceError::NotCheckedIn => (StatusCode::NOT_FOUND, "not_checked_in"),
        AttendanceError::Db(e) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<AttendanceRecordItem>::error(format!(
                    "Database error: {e}"
                ))),
            );
        }
    };

    (
        status,
        Json(ApiResponse::<AttendanceRecordItem>::error_with_reason(
            e.to_string(),
            reason,
        )),
    )
}
