use crate::auth::generate_jwt;
use crate::response::ApiResponse;
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use common::format_validation_errors;
use db::models::user::Model as UserModel;
use serde::{Deserialize, Serialize};
use util::state::AppState;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 3, max = 64, message = "Username must be 3 to 64 characters"))]
    pub username: String,
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Account payload returned by both register and login, token included.
#[derive(Debug, Serialize, Default)]
pub struct UserResponse {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub admin: bool,
    pub token: String,
    pub expires_at: String,
}

impl UserResponse {
    fn from_user(user: &UserModel, token: String, expires_at: String) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            email: user.email.clone(),
            admin: user.admin,
            token,
            expires_at,
        }
    }
}

/// POST /api/auth/register
///
/// Creates a new account and issues a JWT.
///
/// ### Responses
/// - `201 Created` → account created, token in `data`
/// - `400 Bad Request` → validation failure
/// - `409 Conflict` → username or email already taken
/// - `500 Internal Server Error` → database error
pub async fn register(
    State(app_state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> impl IntoResponse {
    let db = app_state.db();

    if let Err(e) = req.validate() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<UserResponse>::error(
                format_validation_errors(&e),
            )),
        );
    }

    match UserModel::get_by_username(db, &req.username).await {
        Ok(Some(_)) => {
            return (
                StatusCode::CONFLICT,
                Json(ApiResponse::<UserResponse>::error(
                    "Username is already taken",
                )),
            );
        }
        Ok(None) => {}
        Err(e) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<UserResponse>::error(format!(
                    "Database error: {e}"
                ))),
            );
        }
    }

    match UserModel::get_by_email(db, &req.email).await {
        Ok(Some(_)) => {
            return (
                StatusCode::CONFLICT,
                Json(ApiResponse::<UserResponse>::error(
                    "Email is already registered",
                )),
            );
        }
        Ok(None) => {}
        Err(e) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<UserResponse>::error(format!(
                    "Database error: {e}"
                ))),
            );
        }
    }

    let user = match UserModel::create(db, &req.username, &req.email, &req.password, false).await {
        Ok(user) => user,
        Err(e) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<UserResponse>::error(format!(
                    "Database error: {e}"
                ))),
            );
        }
    };

    let (token, expires_at) = generate_jwt(user.id, user.admin);

    (
        StatusCode::CREATED,
        Json(ApiResponse::success(
            UserResponse::from_user(&user, token, expires_at),
            "User registered successfully",
        )),
    )
}

/// POST /api/auth/login
///
/// Verifies credentials and issues a JWT.
///
/// ### Responses
/// - `200 OK` → token in `data`
/// - `400 Bad Request` → validation failure
/// - `401 Unauthorized` → unknown username or wrong password (indistinguishable)
/// - `500 Internal Server Error` → database error
pub async fn login(
    State(app_state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> impl IntoResponse {
    let db = app_state.db();

    if let Err(e) = req.validate() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<UserResponse>::error(
                format_validation_errors(&e),
            )),
        );
    }

    let user = match UserModel::verify_credentials(db, &req.username, &req.password).await {
        Ok(Some(user)) => user,
        Ok(None) => {
            return (
                StatusCode::UNAUTHORIZED,
                Json(ApiResponse::<UserResponse>::error(
                    "Invalid username or password",
                )),
            );
        }
        Err(e) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<UserResponse>::error(format!(
                    "Database error: {e}"
                ))),
            );
        }
    };

    let (token, expires_at) = generate_jwt(user.id, user.admin);

    (
        StatusCode::OK,
        Json(ApiResponse::success(
            UserResponse::from_user(&user, token, expires_at),
            "Login successful",
        )),
    )
}
