use crate::response::ApiResponse;
use crate::routes::organizations::common::OrganizationItem;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use common::format_validation_errors;
use db::DomainError;
use db::models::organization::Model as OrganizationModel;
use serde::Deserialize;
use util::state::AppState;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct EditOrganizationRequest {
    #[validate(length(min = 1, max = 128, message = "Name must be 1 to 128 characters"))]
    pub name: String,
    pub description: Option<String>,
    pub logo: Option<String>,
}

/// PUT /api/organizations/{organization_id}
///
/// Replaces an organization's editable fields. Requires org admin.
///
/// ### Responses
/// - `200 OK` → updated organization in `data`
/// - `400 Bad Request` → validation failure
/// - `404 Not Found` → organization does not exist
/// - `409 Conflict` → name already taken
/// - `500 Internal Server Error` → database error
pub async fn edit_organization(
    State(app_state): State<AppState>,
    Path(organization_id): Path<i64>,
    Json(req): Json<EditOrganizationRequest>,
) -> impl IntoResponse {
    let db = app_state.db();

    if let Err(e) = req.validate() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<OrganizationItem>::error(
                format_validation_errors(&e),
            )),
        );
    }

    match OrganizationModel::edit(
        db,
        organization_id,
        &req.name,
        req.description.as_deref(),
        req.logo.as_deref(),
    )
    .await
    {
        Ok(org) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                OrganizationItem::from(org),
                "Organization updated successfully",
            )),
        ),
        Err(DomainError::NotFound(_)) => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::<OrganizationItem>::error(
                "Organization not found",
            )),
        ),
        Err(DomainError::Conflict(msg)) => (
            StatusCode::CONFLICT,
            Json(ApiResponse::<OrganizationItem>::error(msg)),
        ),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<OrganizationItem>::error(format!(
                "Database error: {e}"
            ))),
        ),
    }
}
