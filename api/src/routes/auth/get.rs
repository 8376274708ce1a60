use crate::auth::claims::AuthUser;
use crate::response::ApiResponse;
use axum::{Extension, Json, extract::State, http::StatusCode, response::IntoResponse};
use db::models::{
    organization_member::{MemberStatus, Model as MemberModel, Role},
    user::Model as UserModel,
};
use serde::Serialize;
use util::state::AppState;

#[derive(Debug, Serialize)]
pub struct MembershipItem {
    pub organization_id: i64,
    pub role: Role,
    pub status: MemberStatus,
}

#[derive(Debug, Serialize, Default)]
pub struct MeResponse {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub admin: bool,
    pub created_at: String,
    pub updated_at: String,
    pub memberships: Vec<MembershipItem>,
}

/// GET /api/auth/me
///
/// Returns the authenticated user's profile together with their organization
/// memberships.
///
/// ### Responses
/// - `200 OK` → profile in `data`
/// - `401 Unauthorized` → missing or invalid token
/// - `404 Not Found` → token subject no longer exists
pub async fn me(
    State(app_state): State<AppState>,
    Extension(AuthUser(claims)): Extension<AuthUser>,
) -> impl IntoResponse {
    let db = app_state.db();

    let user = match UserModel::get_by_id(db, claims.sub).await {
        Ok(Some(user)) => user,
        Ok(None) => {
            return (
                StatusCode::NOT_FOUND,
                Json(ApiResponse::<MeResponse>::error("User not found")),
            );
        }
        Err(e) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<MeResponse>::error(format!(
                    "Database error: {e}"
                ))),
            );
        }
    };

    let memberships = MemberModel::list_for_user(db, user.id)
        .await
        .unwrap_or_default()
        .into_iter()
        .map(|m| MembershipItem {
            organization_id: m.organization_id,
            role: m.role,
            status: m.status,
        })
        .collect();

    (
        StatusCode::OK,
        Json(ApiResponse::success(
            MeResponse {
                id: user.id,
                username: user.username,
                email: user.email,
                admin: user.admin,
                created_at: user.created_at.to_rfc3339(),
                updated_at: user.updated_at.to_rfc3339(),
                memberships,
            },
            "Profile retrieved successfully",
        )),
    )
}
