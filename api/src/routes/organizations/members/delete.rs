use crate::auth::guards::Empty;
use crate::response::ApiResponse;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use db::DomainError;
use db::models::organization_member::Model as MemberModel;
use util::state::AppState;

/// DELETE /api/organizations/{organization_id}/members/{user_id}
///
/// Removes a member from the organization.
///
/// ### Responses
/// - `200 OK` → member removed
/// - `404 Not Found` → membership does not exist
/// - `500 Internal Server Error` → database error
pub async fn remove_member(
    State(app_state): State<AppState>,
    Path((organization_id, user_id)): Path<(i64, i64)>,
) -> impl IntoResponse {
    let db = app_state.db();

    match MemberModel::remove(db, organization_id, user_id).await {
        Ok(()) => (
            StatusCode::OK,
            Json(ApiResponse::success(Empty, "Member removed successfully")),
        ),
        Err(DomainError::NotFound(_)) => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::<Empty>::error("Membership not found")),
        ),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<Empty>::error(format!("Database error: {e}"))),
        ),
    }
}
