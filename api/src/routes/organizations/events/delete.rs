use crate::auth::guards::Empty;
use crate::response::ApiResponse;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use db::models::event::Entity as EventEntity;
use sea_orm::{EntityTrait, ModelTrait};
use util::state::AppState;

/// DELETE /api/organizations/{organization_id}/events/{event_id}
///
/// Deletes an event and, via cascade, its attendance records. Requires org
/// admin.
///
/// ### Responses
/// - `200 OK` → event deleted
/// - `404 Not Found` → event does not exist in this organization
/// - `500 Internal Server Error` → database error
pub async fn delete_event(
    State(app_state): State<AppState>,
    Path((organization_id, event_id)): Path<(i64, i64)>,
) -> impl IntoResponse {
    let db = app_state.db();

    let event = match EventEntity::find_by_id(event_id).one(db).await {
        Ok(Some(event)) if event.organization_id == organization_id => event,
        Ok(_) => {
            return (
                StatusCode::NOT_FOUND,
                Json(ApiResponse::<Empty>::error("Event not found")),
            );
        }
        Err(e) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<Empty>::error(format!("Database error: {e}"))),
            );
        }
    };

    match event.delete(db).await {
        Ok(_) => (
            StatusCode::OK,
            Json(ApiResponse::success(Empty, "Event deleted successfully")),
        ),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<Empty>::error(format!("Database error: {e}"))),
        ),
    }
}
