use crate::response::ApiResponse;
use crate::routes::organizations::events::common::EventItem;
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use common::format_validation_errors;
use db::models::event::{Column as EventColumn, Entity as EventEntity, EventStatus};
use sea_orm::{ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder};
use serde::{Deserialize, Serialize};
use util::state::AppState;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct ListEventsQuery {
    #[validate(range(min = 1))]
    pub page: Option<u64>,
    #[validate(range(min = 1, max = 100))]
    pub per_page: Option<u64>,
    pub query: Option<String>,
    pub status: Option<EventStatus>,
    pub sort: Option<String>,
}

#[derive(Debug, Serialize, Default)]
pub struct EventsListResponse {
    pub events: Vec<EventItem>,
    pub page: u64,
    pub per_page: u64,
    pub total: u64,
}

/// GET /api/organizations/{organization_id}/events
///
/// Retrieve a paginated list of the organization's events.
///
/// ### Query Parameters
/// - `page` / `per_page`: pagination (defaults 1 / 20)
/// - `query`: partial match on name
/// - `status`: filter by lifecycle status
/// - `sort`: comma-separated fields, `-` prefix for descending
///   (`name`, `start_datetime`, `created_at`)
///
/// ### Responses
/// - `200 OK` → `{ events, page, per_page, total }`
/// - `400 Bad Request` → invalid query parameters
pub async fn list_events(
    State(app_state): State<AppState>,
    Path(organization_id): Path<i64>,
    Query(query): Query<ListEventsQuery>,
) -> impl IntoResponse {
    let db = app_state.db();

    if let Err(e) = query.validate() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<EventsListResponse>::error(
                format_validation_errors(&e),
            )),
        );
    }

    let page = query.page.unwrap_or(1);
    let per_page = query.per_page.unwrap_or(20);

    let mut condition = Condition::all().add(EventColumn::OrganizationId.eq(organization_id));
    if let Some(q) = &query.query {
        condition = condition.add(EventColumn::Name.contains(q));
    }
    if let Some(status) = query.status {
        condition = condition.add(EventColumn::Status.eq(status));
    }

    let mut query_builder = EventEntity::find().filter(condition);

    if let Some(sort_param) = &query.sort {
        for sort_field in sort_param.split(',') {
            let (field, desc) = if let Some(stripped) = sort_field.strip_prefix('-') {
                (stripped, true)
            } else {
                (sort_field, false)
            };

            let column = match field {
                "name" => EventColumn::Name,
                "start_datetime" => EventColumn::StartDatetime,
                "created_at" => EventColumn::CreatedAt,
                _ => continue,
            };

            query_builder = if desc {
                query_builder.order_by_desc(column)
            } else {
                query_builder.order_by_asc(column)
            };
        }
    } else {
        query_builder = query_builder.order_by_asc(EventColumn::StartDatetime);
    }

    let paginator = query_builder.paginate(db, per_page);
    let total = paginator.num_items().await.unwrap_or(0);
    let events = paginator.fetch_page(page - 1).await.unwrap_or_default();
    let events = events.into_iter().map(EventItem::from).collect();

    (
        StatusCode::OK,
        Json(ApiResponse::success(
            EventsListResponse {
                events,
                page,
                per_page,
                total,
            },
            "Events retrieved successfully",
        )),
    )
}

/// GET /api/organizations/{organization_id}/events/{event_id}
///
/// Fetch a single event. The event must belong to the organization in the
/// path.
///
/// ### Responses
/// - `200 OK` → event in `data`
/// - `404 Not Found` → event does not exist in this organization
/// - `500 Internal Server Error` → database error
pub async fn get_event(
    State(app_state): State<AppState>,
    Path((organization_id, event_id)): Path<(i64, i64)>,
) -> impl IntoResponse {
    let db = app_state.db();

    match EventEntity::find_by_id(event_id).one(db).await {
        Ok(Some(event)) if event.organization_id == organization_id => (
            StatusCode::OK,
            Json(ApiResponse::success(
                EventItem::from(event),
                "Event retrieved successfully",
            )),
        ),
        Ok(_) => (
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
