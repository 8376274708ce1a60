use crate::auth::guards::Empty;
use crate::response::ApiResponse;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use db::models::user::Entity as UserEntity;
use sea_orm::{EntityTrait, ModelTrait};
use util::state::AppState;

/// DELETE /api/users/{user_id}
///
/// Deletes a user. Requires admin privileges.
///
/// ### Responses
/// - `200 OK` → user deleted
/// - `404 Not Found` → user does not exist
/// - `500 Internal Server Error` → database error
pub async fn delete_user(
    State(app_state): State<AppState>,
    Path(user_id): Path<i64>,
) -> impl IntoResponse {
    let db = app_state.db();

    let Some(user) = UserEntity::find_by_id(user_id).one(db).await.ok().flatten() else {
        return (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::<Empty>::error("User not found")),
        );
    };

    match user.delete(db).await {
        Ok(_) => (
            StatusCode::OK,
            Json(ApiResponse::success(Empty, "User deleted successfully")),
        ),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<Empty>::error(format!("Database error: {e}"))),
        ),
    }
}
