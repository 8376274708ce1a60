use crate::response::ApiResponse;
use crate::routes::organizations::members::common::MemberItem;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use db::models::organization_member::{Column as MemberColumn, Entity as MemberEntity};
use db::models::user::Entity as UserEntity;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};
use serde::Serialize;
use util::state::AppState;

#[derive(Debug, Serialize, Default)]
pub struct MembersListResponse {
    pub members: Vec<MemberItem>,
    pub total: usize,
}

/// GET /api/organizations/{organization_id}/members
///
/// Lists all members of an organization together with their user details,
/// ordered by join date.
///
/// ### Responses
/// - `200 OK` → `{ members, total }`
/// - `500 Internal Server Error` → database error
pub async fn list_members(
    State(app_state): State<AppState>,
    Path(organization_id): Path<i64>,
) -> impl IntoResponse {
    let db = app_state.db();

    let rows = MemberEntity::find()
        .filter(MemberColumn::OrganizationId.eq(organization_id))
        .order_by_asc(MemberColumn::CreatedAt)
        .find_also_related(UserEntity)
        .all(db)
        .await;

    match rows {
        Ok(rows) => {
            let members: Vec<MemberItem> = rows
                .into_iter()
                .map(|(member, user)| MemberItem::from_parts(member, user))
                .collect();
            let total = members.len();

            (
                StatusCode::OK,
                Json(ApiResponse::success(
                    MembersListResponse { members, total },
                    "Members retrieved successfully",
                )),
            )
        }
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<MembersListResponse>::error(format!(
                "Database error: {e}"
            ))),
        ),
    }
}
