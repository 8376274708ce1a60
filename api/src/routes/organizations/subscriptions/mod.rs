//! # Subscriptions Routes Module
//!
//! Nested under `/api/organizations/{organization_id}/subscriptions`.
//!
//! ## Structure
//! - `get.rs` — list an organization's subscriptions
//! - `post.rs` — create a subscription
//! - `put.rs` — update a subscription's status
//!
//! The whole group requires the `ManageSubscriptions` action (org admins).

use crate::auth::guards::allow_manage_subscriptions;
use axum::{
    Router,
    middleware::from_fn_with_state,
    routing::{get, post, put},
};
use get::list_subscriptions;
use post::create_subscription;
use put::update_subscription_status;
use util::state::AppState;

pub mod common;
pub mod get;
pub mod post;
pub mod put;

/// Builds and returns the `/subscriptions` route group.
///
/// Routes:
/// - `GET  /subscriptions`                     → list (org admin)
/// - `POST /subscriptions`                     → create (org admin)
/// - `PUT  /subscriptions/{subscription_id}`   → update status (org admin)
pub fn subscription_routes(app_state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(list_subscriptions))
        .route("/", post(create_subscription))
        .route("/{subscription_id}", put(update_subscription_status))
        .route_layer(from_fn_with_state(app_state, allow_manage_subscriptions))
}
