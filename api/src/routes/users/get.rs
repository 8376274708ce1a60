use crate::response::ApiResponse;
use crate::routes::users::common::UserItem;
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use common::format_validation_errors;
use db::models::user::{Column as UserColumn, Entity as UserEntity};
use sea_orm::{ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder};
use serde::{Deserialize, Serialize};
use util::state::AppState;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct ListUsersQuery {
    #[validate(range(min = 1))]
    pub page: Option<u64>,
    #[validate(range(min = 1, max = 100))]
    pub per_page: Option<u64>,
    pub sort: Option<String>,
    pub query: Option<String>,
    pub email: Option<String>,
    pub username: Option<String>,
    pub admin: Option<bool>,
}

#[derive(Debug, Serialize, Default)]
pub struct UsersListResponse {
    pub users: Vec<UserItem>,
    pub page: u64,
    pub per_page: u64,
    pub total: u64,
}

/// GET /api/users
///
/// Retrieve a paginated list of users with optional filtering and sorting.
/// Requires admin privileges.
///
/// ### Query Parameters
/// - `page` (optional): Page number (default: 1, min: 1)
/// - `per_page` (optional): Items per page (default: 20, min: 1, max: 100)
/// - `query` (optional): Case-insensitive partial match against email OR username
/// - `email` (optional): Partial match on email
/// - `username` (optional): Partial match on username
/// - `admin` (optional): Filter by admin flag
/// - `sort` (optional): Comma-separated sort fields, `-` prefix for descending
///   (`email`, `username`, `created_at`, `admin`)
///
/// ### Responses
/// - `200 OK` → `{ users, page, per_page, total }`
/// - `400 Bad Request` → invalid query parameters
/// - `401 Unauthorized` / `403 Forbidden`
pub async fn list_users(
    State(app_state): State<AppState>,
    Query(query): Query<ListUsersQuery>,
) -> impl IntoResponse {
    let db = app_state.db();

    if let Err(e) = query.validate() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<UsersListResponse>::error(
                format_validation_errors(&e),
            )),
        );
    }

    let page = query.page.unwrap_or(1);
    let per_page = query.per_page.unwrap_or(20);

    let mut condition = Condition::all();

    if let Some(q) = &query.query {
        let pattern = q.to_lowercase();
        condition = condition.add(
            Condition::any()
                .add(UserColumn::Email.contains(&pattern))
                .add(UserColumn::Username.contains(&pattern)),
        );
    }

    if let Some(email) = &query.email {
        condition = condition.add(UserColumn::Email.contains(email));
    }

    if let Some(username) = &query.username {
        condition = condition.add(UserColumn::Username.contains(username));
    }

    if let Some(admin) = query.admin {
        condition = condition.add(UserColumn::Admin.eq(admin));
    }

    let mut query_builder = UserEntity::find().filter(condition);

    if let Some(sort_param) = &query.sort {
        for sort_field in sort_param.split(',') {
            let (field, desc) = if let Some(stripped) = sort_field.strip_prefix('-') {
                (stripped, true)
            } else {
                (sort_field, false)
            };

            let column = match field {
                "email" => UserColumn::Email,
                "username" => UserColumn::Username,
                "created_at" => UserColumn::CreatedAt,
                "admin" => UserColumn::Admin,
                _ => continue,
            };

            query_builder = if desc {
                query_builder.order_by_desc(column)
            } else {
                query_builder.order_by_asc(column)
            };
        }
    } else {
        query_builder = query_builder.order_by_asc(UserColumn::Id);
    }

    let paginator = query_builder.paginate(db, per_page);
    let total = paginator.num_items().await.unwrap_or(0);
    let users = paginator.fetch_page(page - 1).await.unwrap_or_default();
    let users = users.into_iter().map(UserItem::from).collect();

    (
        StatusCode::OK,
        Json(ApiResponse::success(
            UsersListResponse {
                users,
                page,
                per_page,
                total,
            },
            "Users retrieved successfully",
        )),
    )
}

/// GET /api/users/{user_id}
///
/// Fetch a single user by ID. Requires admin privileges.
///
/// ### Responses
/// - `200 OK` → user found
/// - `404 Not Found` → user does not exist
/// - `500 Internal Server Error` → database error
pub async fn get_user(
    State(app_state): State<AppState>,
    Path(user_id): Path<i64>,
) -> impl IntoResponse {
    let db = app_state.db();

    match UserEntity::find_by_id(user_id).one(db).await {
        Ok(Some(user)) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                UserItem::from(user),
                "User retrieved successfully",
            )),
        ),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::<UserItem>::error("User not found")),
        ),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<UserItem>::error(format!(
                "Database error: {e}"
            ))),
        ),
    }
}
