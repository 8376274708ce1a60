use crate::response::ApiResponse;
use crate::routes::organizations::subscriptions::common::SubscriptionItem;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use db::models::subscription::Model as SubscriptionModel;
use serde::Serialize;
use util::state::AppState;

#[derive(Debug, Serialize, Default)]
pub struct SubscriptionsListResponse {
    pub subscriptions: Vec<SubscriptionItem>,
    pub total: usize,
}

/// GET /api/organizations/{organization_id}/subscriptions
///
/// Lists an organization's subscriptions, newest first.
///
/// ### Responses
/// - `200 OK` → `{ subscriptions, total }`
/// - `500 Internal Server Error` → database error
pub async fn list_subscriptions(
    State(app_state): State<AppState>,
    Path(organization_id): Path<i64>,
) -> impl IntoResponse {
    let db = app_state.db();

    match SubscriptionModel::list_for_organization(db, organization_id).await {
        Ok(subs) => {
            let subscriptions: Vec<SubscriptionItem> =
                subs.into_iter().map(SubscriptionItem::from).collect();
            let total = subscriptions.len();

            (
                StatusCode::OK,
                Json(ApiResponse::success(
                    SubscriptionsListResponse {
                        subscriptions,
                        total,
                    },
                    "Subscriptions retrieved successfully",
                )),
            )
        }
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<SubscriptionsListResponse>::error(format!(
                "Database error: {e}"
            ))),
        ),
    }
}
