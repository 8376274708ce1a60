use crate::response::ApiResponse;
use crate::routes::organizations::common::OrganizationItem;
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use common::format_validation_errors;
use db::models::organization::{Column as OrgColumn, Entity as OrgEntity};
use sea_orm::{ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder};
use serde::{Deserialize, Serialize};
use util::state::AppState;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct ListOrganizationsQuery {
    #[validate(range(min = 1))]
    pub page: Option<u64>,
    #[validate(range(min = 1, max = 100))]
    pub per_page: Option<u64>,
    pub query: Option<String>,
    pub sort: Option<String>,
}

#[derive(Debug, Serialize, Default)]
pub struct OrganizationsListResponse {
    pub organizations: Vec<OrganizationItem>,
    pub page: u64,
    pub per_page: u64,
    pub total: u64,
}

/// GET /api/organizations
///
/// Retrieve a paginated list of organizations with optional name search and
/// sorting.
///
/// ### Query Parameters
/// - `page` / `per_page`: pagination (defaults 1 / 20)
/// - `query`: partial match on name
/// - `sort`: comma-separated fields, `-` prefix for descending
///   (`name`, `created_at`)
///
/// ### Responses
/// - `200 OK` → `{ organizations, page, per_page, total }`
/// - `400 Bad Request` → invalid query parameters
pub async fn list_organizations(
    State(app_state): State<AppState>,
    Query(query): Query<ListOrganizationsQuery>,
) -> impl IntoResponse {
    let db = app_state.db();

    if let Err(e) = query.validate() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<OrganizationsListResponse>::error(
                format_validation_errors(&e),
            )),
        );
    }

    let page = query.page.unwrap_or(1);
    let per_page = query.per_page.unwrap_or(20);

    let mut condition = Condition::all();
    if let Some(q) = &query.query {
        condition = condition.add(OrgColumn::Name.contains(q));
    }

    let mut query_builder = OrgEntity::find().filter(condition);

    if let Some(sort_param) = &query.sort {
        for sort_field in sort_param.split(',') {
            let (field, desc) = if let Some(stripped) = sort_field.strip_prefix('-') {
                (stripped, true)
            } else {
                (sort_field, false)
            };

            let column = match field {
                "name" => OrgColumn::Name,
                "created_at" => OrgColumn::CreatedAt,
                _ => continue,
            };

            query_builder = if desc {
                query_builder.order_by_desc(column)
            } else {
                query_builder.order_by_asc(column)
            };
        }
    } else {
        query_builder = query_builder.order_by_asc(OrgColumn::Id);
    }

    let paginator = query_builder.paginate(db, per_page);
    let total = paginator.num_items().await.unwrap_or(0);
    let organizations = paginator.fetch_page(page - 1).await.unwrap_or_default();
    let organizations = organizations.into_iter().map(OrganizationItem::from).collect();

    (
        StatusCode::OK,
        Json(ApiResponse::success(
            OrganizationsListResponse {
                organizations,
                page,
                per_page,
                total,
            },
            "Organizations retrieved successfully",
        )),
    )
}

/// GET /api/organizations/{organization_id}
///
/// Fetch a single organization by ID.
///
/// ### Responses
/// - `200 OK` → organization in `data`
/// - `404 Not Found` → organization does not exist
/// - `500 Internal Server Error` → database error
pub async fn get_organization(
    State(app_state): State<AppState>,
    Path(organization_id): Path<i64>,
) -> impl IntoResponse {
    let db = app_state.db();

    match OrgEntity::find_by_id(organization_id).one(db).await {
        Ok(Some(org)) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                OrganizationItem::from(org),
                "Organization retrieved successfully",
            )),
        ),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::<OrganizationItem>::error(
                "Organization not found",
            )),
        ),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<OrganizationItem>::error(format!(
                "Database error: {e}"
            ))),
        ),
    }
}
