use crate::auth::guards::Empty;
use crate::response::ApiResponse;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use db::models::organization::Entity as OrgEntity;
use sea_orm::{EntityTrait, ModelTrait};
use util::state::AppState;

/// DELETE /api/organizations/{organization_id}
///
/// Deletes an organization and, via cascade, its members, subscriptions and
/// events. Requires org admin.
///
/// ### Responses
/// - `200 OK` → organization deleted
/// - `404 Not Found` → organization does not exist
/// - `500 Internal Server Error` → database error
pub async fn delete_organization(
    State(app_state): State<AppState>,
    Path(organization_id): Path<i64>,
) -> impl IntoResponse {
    let db = app_state.db();

    let Some(org) = OrgEntity::find_by_id(organization_id)
        .one(db)
        .await
        .ok()
        .flatten()
    else {
        return (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::<Empty>::error("Organization not found")),
        );
    };

    match org.delete(db).await {
        Ok(_) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                Empty,
                "Organization deleted successfully",
            )),
        ),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<Empty>::error(format!("Database error: {e}"))),
        ),
    }
}
