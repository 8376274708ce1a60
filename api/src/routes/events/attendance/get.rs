use crate::response::ApiResponse;
use crate::routes::events::attendance::common::AttendanceRecordItem;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use db::models::attendance_record::{AttendanceCounts, Model as AttendanceRecordModel};
use serde::Serialize;
use util::state::AppState;

#[derive(Debug, Serialize, Default)]
pub struct AttendanceListResponse {
    pub records: Vec<AttendanceRecordItem>,
    pub counts: AttendanceCounts,
}

/// GET /api/events/{event_id}/attendance
///
/// Lists an event's attendance records, most recently updated first,
/// together with live tallies.
///
/// ### Responses
/// - `200 OK` → `{ records, counts }`
/// - `500 Internal Server Error` → database error
pub async fn list_attendance(
    State(app_state): State<AppState>,
    Path(event_id): Path<i64>,
) -> impl IntoResponse {
    let db = app_state.db();

    let records = match AttendanceRecordModel::list_for_event(db, event_id).await {
        Ok(records) => records,
        Err(e) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<AttendanceListResponse>::error(format!(
                    "Database error: {e}"
                ))),
            );
        }
    };

    let counts = match AttendanceRecordModel::counts_for_event(db, event_id).await {
        Ok(counts) => counts,
        Err(e) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<AttendanceListResponse>::error(format!(
                    "Database error: {e}"
                ))),
            );
        }
    };

    let records = records.into_iter().map(AttendanceRecordItem::from).collect();

    (
        StatusCode::OK,
        Json(ApiResponse::success(
            AttendanceListResponse { records, counts },
            "Attendance retrieved successfully",
        )),
    )
}
