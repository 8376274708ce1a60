use crate::response::ApiResponse;
use crate::routes::organizations::subscriptions::common::SubscriptionItem;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::{DateTime, Utc};
use common::format_validation_errors;
use db::DomainError;
use db::models::subscription::Model as SubscriptionModel;
use serde::Deserialize;
use util::state::AppState;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateSubscriptionRequest {
    #[validate(range(min = 1, max = 60, message = "Duration must be 1 to 60 months"))]
    pub duration_months: i32,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    #[validate(range(min = 0.0, message = "Payment amount cannot be negative"))]
    pub payment_amount: f64,
}

/// POST /api/organizations/{organization_id}/subscriptions
///
/// Creates a subscription for the organization. New subscriptions start
/// `pending`.
///
/// ### Responses
/// - `201 Created` → subscription in `data`
/// - `400 Bad Request` → validation failure or end date not after start date
/// - `500 Internal Server Error` → database error
pub async fn create_subscription(
    State(app_state): State<AppState>,
    Path(organization_id): Path<i64>,
    Json(req): Json<CreateSubscriptionRequest>,
) -> impl IntoResponse {
    let db = app_state.db();

    if let Err(e) = req.validate() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<SubscriptionItem>::error(
                format_validation_errors(&e),
            )),
        );
    }

    match SubscriptionModel::create(
        db,
        organization_id,
        req.duration_months,
        req.start_date,
        req.end_date,
        req.payment_amount,
    )
    .await
    {
        Ok(sub) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(
                SubscriptionItem::from(sub),
                "Subscription created successfully",
            )),
        ),
        Err(DomainError::InvalidDateRange) => (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<SubscriptionItem>::error(
                "End date must be after start date",
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
