use crate::auth::claims::AuthUser;
use crate::response::ApiResponse;
use crate::routes::organizations::events::common::EventItem;
use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::{DateTime, Utc};
use common::format_validation_errors;
use db::DomainError;
use db::models::event::Model as EventModel;
use serde::Deserialize;
use util::state::AppState;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateEventRequest {
    #[validate(length(min = 1, max = 128, message = "Name must be 1 to 128 characters"))]
    pub name: String,
    pub description: Option<String>,
    pub start_datetime: DateTime<Utc>,
    pub end_datetime: DateTime<Utc>,
    pub location: Option<String>,
    #[validate(url(message = "Banner must be a valid URL"))]
    pub banner: Option<String>,
}

/// POST /api/organizations/{organization_id}/events
///
/// Creates an event for the organization. New events start as `draft` and
/// must be activated before they accept check-ins.
///
/// ### Responses
/// - `201 Created` → event in `data`
/// - `400 Bad Request` → validation failure or end date not after start date
/// - `500 Internal Server Error` → database error
pub async fn create_event(
    State(app_state): State<AppState>,
    Extension(AuthUser(claims)): Extension<AuthUser>,
    Path(organization_id): Path<i64>,
    Json(req): Json<CreateEventRequest>,
) -> impl IntoResponse {
    let db = app_state.db();

    if let Err(e) = req.validate() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<EventItem>::error(format_validation_errors(
                &e,
            ))),
        );
    }

    match EventModel::create(
        db,
        organization_id,
        &req.name,
        req.description.as_deref(),
        req.start_datetime,
        req.end_datetime,
        req.location.as_deref(),
        req.banner.as_deref(),
        claims.sub,
    )
    .await
    {
        Ok(event) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(
                EventItem::from(event),
                "Event created successfully",
            )),
        ),
        Err(DomainError::InvalidDateRange) => (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<EventItem>::error(
                "End datetime must be after start datetime",
            )),
        ),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<EventItem>::error(format!(
                "Database error: {e}"
            ))),
        ),
    }
}
