use crate::response::ApiResponse;
use crate::routes::organizations::events::common::EventItem;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::{DateTime, Utc};
use common::format_validation_errors;
use db::DomainError;
use db::models::event::{Entity as EventEntity, EventStatus, Model as EventModel};
use sea_orm::EntityTrait;
use serde::Deserialize;
use util::state::AppState;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct EditEventRequest {
    #[validate(length(min = 1, max = 128, message = "Name must be 1 to 128 characters"))]
    pub name: String,
    pub description: Option<String>,
    pub status: EventStatus,
    pub start_datetime: DateTime<Utc>,
    pub end_datetime: DateTime<Utc>,
    pub location: Option<String>,
    #[validate(url(message = "Banner must be a valid URL"))]
    pub banner: Option<String>,
}

/// PUT /api/organizations/{organization_id}/events/{event_id}
///
/// Replaces an event's editable fields, including its status. Moving the
/// status to `active` is what opens the event for check-ins.
///
/// ### Responses
/// - `200 OK` → updated event in `data`
/// - `400 Bad Request` → validation failure or end date not after start date
/// - `404 Not Found` → event does not exist in this organization
/// - `500 Internal Server Error` → database error
pub async fn edit_event(
    State(app_state): State<AppState>,
    Path((organization_id, event_id)): Path<(i64, i64)>,
    Json(req): Json<EditEventRequest>,
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

    match EventEntity::find_by_id(event_id).one(db).await {
        Ok(Some(event)) if event.organization_id == organization_id => {}
        Ok(_) => {
            return (
                StatusCode::NOT_FOUND,
                Json(ApiResponse::<EventItem>::error("Event not found")),
            );
        }
        Err(e) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<EventItem>::error(format!(
                    "Database error: {e}"
                ))),
            );
        }
    }

    match EventModel::edit(
        db,
        event_id,
        &req.name,
        req.description.as_deref(),
        req.status,
        req.start_datetime,
        req.end_datetime,
        req.location.as_deref(),
        req.banner.as_deref(),
    )
    .await
    {
        Ok(event) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                EventItem::from(event),
                "Event updated successfully",
            )),
        ),
        Err(DomainError::InvalidDateRange) => (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<EventItem>::error(
                "End datetime must be after start datetime",
            )),
        ),
        Err(DomainError::NotFound(_)) => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::<EventItem>::error("Event not found")),
        ),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<EventItem>::error(format!(
                "Database error: {e}"
            ))),
        ),
    }
}
