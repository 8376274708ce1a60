use crate::response::ApiResponse;
use crate::routes::organizations::members::common::MemberItem;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use db::DomainError;
use db::models::organization_member::{MemberStatus, Model as MemberModel, Role};
use db::models::user::Model as UserModel;
use serde::Deserialize;
use util::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AddMemberRequest {
    pub user_id: i64,
    pub role: Option<Role>,
}

/// POST /api/organizations/{organization_id}/members
///
/// Adds a user to the organization. Admin-added members start `active`;
/// the role defaults to `member` when omitted.
///
/// ### Responses
/// - `201 Created` → membership in `data`
/// - `404 Not Found` → user does not exist
/// - `409 Conflict` → user is already a member
/// - `500 Internal Server Error` → database error
pub async fn add_member(
    State(app_state): State<AppState>,
    Path(organization_id): Path<i64>,
    Json(req): Json<AddMemberRequest>,
) -> impl IntoResponse {
    let db = app_state.db();

    let user = match UserModel::get_by_id(db, req.user_id).await {
        Ok(Some(user)) => user,
        Ok(None) => {
            return (
                StatusCode::NOT_FOUND,
                Json(ApiResponse::<MemberItem>::error("User not found")),
            );
        }
        Err(e) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<MemberItem>::error(format!(
                    "Database error: {e}"
                ))),
            );
        }
    };

    let role = req.role.unwrap_or(Role::Member);

    match MemberModel::add(db, organization_id, user.id, role, MemberStatus::Active).await {
        Ok(member) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(
                MemberItem::from_parts(member, Some(user)),
                "Member added successfully",
            )),
        ),
        Err(DomainError::Conflict(msg)) => (
            StatusCode::CONFLICT,
            Json(ApiResponse::<MemberItem>::error(msg)),
        ),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<MemberItem>::error(format!(
                "Database error: {e}"
            ))),
        ),
    }
}
