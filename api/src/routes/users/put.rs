use crate::response::ApiResponse;
use crate::routes::users::common::UserItem;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::Utc;
use common::format_validation_errors;
use db::models::user::{ActiveModel as UserActiveModel, Entity as UserEntity};
use sea_orm::{ActiveModelTrait, EntityTrait, Set, SqlErr};
use serde::Deserialize;
use util::state::AppState;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateUserRequest {
    #[validate(length(min = 3, max = 64, message = "Username must be 3 to 64 characters"))]
    pub username: Option<String>,
    #[validate(email(message = "Invalid email address"))]
    pub email: Option<String>,
    pub admin: Option<bool>,
}

/// PUT /api/users/{user_id}
///
/// Partially updates a user's username, email or admin flag. Requires admin
/// privileges.
///
/// ### Responses
/// - `200 OK` → updated user in `data`
/// - `400 Bad Request` → validation failure
/// - `404 Not Found` → user does not exist
/// - `409 Conflict` → username or email already taken
/// - `500 Internal Server Error` → database error
pub async fn update_user(
    State(app_state): State<AppState>,
    Path(user_id): Path<i64>,
    Json(req): Json<UpdateUserRequest>,
) -> impl IntoResponse {
    let db = app_state.db();

    if let Err(e) = req.validate() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<UserItem>::error(format_validation_errors(&e))),
        );
    }

    let Some(user) = UserEntity::find_by_id(user_id).one(db).await.ok().flatten() else {
        return (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::<UserItem>::error("User not found")),
        );
    };

    let mut user: UserActiveModel = user.into();
    if let Some(username) = req.username {
        user.username = Set(username);
    }
    if let Some(email) = req.email {
        user.email = Set(email.to_lowercase());
    }
    if let Some(admin) = req.admin {
        user.admin = Set(admin);
    }
    user.updated_at = Set(Utc::now());

    match user.update(db).await {
        Ok(user) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                UserItem::from(user),
                "User updated successfully",
            )),
        ),
        Err(e) if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => (
            StatusCode::CONFLICT,
            Json(ApiResponse::<UserItem>::error(
                "Username or email is already taken",
            )),
        ),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<UserItem>::error(format!(
                "Database error: {e}"
            ))),
        ),
    }
}
