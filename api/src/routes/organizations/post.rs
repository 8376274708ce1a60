use crate::auth::claims::AuthUser;
use crate::response::ApiResponse;
use crate::routes::organizations::common::OrganizationItem;
use axum::{Extension, Json, extract::State, http::StatusCode, response::IntoResponse};
use common::format_validation_errors;
use db::DomainError;
use db::models::organization::Model as OrganizationModel;
use serde::Deserialize;
use util::state::AppState;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateOrganizationRequest {
    #[validate(length(min = 1, max = 128, message = "Name must be 1 to 128 characters"))]
    pub name: String,
    pub description: Option<String>,
    pub logo: Option<String>,
}

/// POST /api/organizations
///
/// Creates an organization. The caller becomes an active `admin` member.
///
/// ### Responses
/// - `201 Created` → organization in `data`
/// - `400 Bad Request` → validation failure
/// - `409 Conflict` → name already taken
/// - `500 Internal Server Error` → database error
pub async fn create_organization(
    State(app_state): State<AppState>,
    Extension(AuthUser(claims)): Extension<AuthUser>,
    Json(req): Json<CreateOrganizationRequest>,
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

    match OrganizationModel::create(
        db,
        &req.name,
        req.description.as_deref(),
        req.logo.as_deref(),
        claims.sub,
    )
    .await
    {
        Ok(org) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(
                OrganizationItem::from(org),
                "Organization created successfully",
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
