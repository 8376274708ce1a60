use crate::auth::guards::Empty;
use crate::response::ApiResponse;
use axum::{
    Json, Router, extract::State, http::StatusCode, response::IntoResponse, routing::get,
};
use util::state::AppState;

/// Builds the `/news` route group.
pub fn news_routes() -> Router<AppState> {
    Router::new().route("/", get(get_news))
}

/// GET /api/news
///
/// Returns the cached campus news feed. The cache refetches past its TTL; a
/// failed refresh serves the last known items with `stale: true`.
///
/// ### Responses
/// - `200 OK` → `{ items, fetched_at, stale }`
/// - `503 Service Unavailable` → nothing has ever been fetched successfully
async fn get_news(State(app_state): State<AppState>) -> impl IntoResponse {
    match app_state.news().latest().await {
        Some(snapshot) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                snapshot,
                "News retrieved successfully",
            )),
        )
            .into_response(),
        None => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ApiResponse::<Empty>::error("News feed unavailable")),
        )
            .into_response(),
    }
}
