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
use serde::Deserialize;
use util::state::AppState;

#[derive(Debug, Deserialize)]
pub struct UpdateMemberRequest {
    pub role: Option<Role>,
    pub status: Option<MemberStatus>,
}

/// PUT /api/organizations/{organization_id}/members/{user_id}
///
/// Changes a member's role and/or status. At least one field must be
/// provided.
///
/// ### Responses
/// - `200 OK` → updated membership in `data`
/// - `400 Bad Request` → neither field provided
/// - `404 Not Found` → membership does not exist
/// - `500 Internal Server Error` → database error
pub async fn update_member(
    State(app_state): State<AppState>,
    Path((organization_id, user_id)): Path<(i64, i64)>,
    Json(req): Json<UpdateMemberRequest>,
) -> impl IntoResponse {
    let db = app_state.db();

    let result = match (req.role, req.status) {
        (None, None) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ApiResponse::<MemberItem>::error(
                    "Provide at least one of 'role' or 'status'",
                )),
            );
        }
        (Some(role), None) => MemberModel::set_role(db, organization_id, user_id, role).await,
        (None, Some(status)) => {
            MemberModel::set_status(db, organization_id, user_id, status).await
        }
        (Some(role), Some(status)) => {
            match MemberModel::set_role(db, organization_id, user_id, role).await {
                Ok(_) => MemberModel::set_status(db, organization_id, user_id, status).await,
                Err(e) => Err(e),
            }
        }
    };

    match result {
        Ok(member) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                MemberItem::from(member),
                "Member updated successfully",
            )),
        ),
        Err(DomainError::NotFound(_)) => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::<MemberItem>::error("Membership not found")),
        ),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<MemberItem>::error(format!(
                "Database error: {e}"
            ))),
        ),
    }
}
