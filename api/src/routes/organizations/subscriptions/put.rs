use crate::response::ApiResponse;
use crate::routes::organizations::subscriptions::common::SubscriptionItem;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use db::DomainError;
use db::models::subscription::{
    Entity as SubscriptionEntity, Model as SubscriptionModel, SubscriptionStatus,
};
use sea_orm::EntityTrait;
use serde::Deserialize;
use util::state::AppState;

#[derive(Debug, Deserialize)]
pub struct UpdateSubscriptionRequest {
    pub status: SubscriptionStatus,
}

/// PUT /api/organizations/{organization_id}/subscriptions/{subscription_id}
///
/// Updates a subscription's status. The subscription must belong to the
/// organization in the path.
///
/// ### Responses
/// - `200 OK` → updated subscription in `data`
/// - `404 Not Found` → subscription does not exist in this organization
/// - `500 Internal Server Error` → database error
pub async fn update_subscription_status(
    State(app_state): State<AppState>,
    Path((organization_id, subscription_id)): Path<(i64, i64)>,
    Json(req): Json<UpdateSubscriptionRequest>,
) -> impl IntoResponse {
    let db = app_state.db();

    match SubscriptionEntity::find_by_id(subscription_id).one(db).await {
        Ok(Some(sub)) if sub.organization_id == organization_id => {}
        Ok(_) => {
            return (
                StatusCode::NOT_FOUND,
                Json(ApiResponse::<SubscriptionItem>::error(
                    "Subscription not found",
                )),
            );
        }
        Err(e) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<SubscriptionItem>::error(format!(
                    "Database error: {e}"
                ))),
            );
        }
    }

    match SubscriptionModel::set_status(db, subscription_id, req.status).await {
        Ok(sub) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                SubscriptionItem::from(sub),
                "Subscription updated successfully",
            )),
        ),
        Err(DomainError::NotFound(_)) => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::<SubscriptionItem>::error(
                "Subscription not found",
            )),
        ),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<SubscriptionItem>::error(format!(
                "Database error: {e}"
            ))),
        ),
    }
}
