//! # Organizations Routes Module
//!
//! Defines and wires up routes for the `/api/organizations` endpoint group.
//!
//! ## Structure
//! - `post.rs` — POST handlers (create organization)
//! - `get.rs` — GET handlers (list, fetch one)
//! - `put.rs` — PUT handlers (edit organization)
//! - `delete.rs` — DELETE handlers (delete organization)
//! - `members/` — nested membership routes under `/{organization_id}/members`
//! - `subscriptions/` — nested under `/{organization_id}/subscriptions`
//! - `events/` — nested under `/{organization_id}/events`
//!
//! Listing and creating are open to any authenticated user; everything that
//! mutates an existing organization goes through the org-scoped guards.

use crate::auth::guards::allow_org_admin;
use axum::{
    Router,
    middleware::from_fn_with_state,
    routing::{delete, get, post, put},
};
use delete::delete_organization;
use get::{get_organization, list_organizations};
use post::create_organization;
use put::edit_organization;
use util::state::AppState;

pub mod common;
pub mod delete;
pub mod events;
pub mod get;
pub mod members;
pub mod post;
pub mod put;
pub mod subscriptions;

/// Builds and returns the `/organizations` route group.
///
/// Routes:
/// - `GET    /organizations`                    → list (authenticated)
/// - `POST   /organizations`                    → create; creator becomes org admin
/// - `GET    /organizations/{organization_id}`  → fetch one (authenticated)
/// - `PUT    /organizations/{organization_id}`  → edit (org admin)
/// - `DELETE /organizations/{organization_id}`  → delete (org admin)
///
/// Nested groups: `/members`, `/subscriptions`, `/events`.
pub fn organization_routes(app_state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(list_organizations))
        .route("/", post(create_organization))
        .route("/{organization_id}", get(get_organization))
        .route(
            "/{organization_id}",
            put(edit_organization)
                .route_layer(from_fn_with_state(app_state.clone(), allow_org_admin)),
        )
        .route(
            "/{organization_id}",
            delete(delete_organization)
                .route_layer(from_fn_with_state(app_state.clone(), allow_org_admin)),
        )
        .nest(
            "/{organization_id}/members",
            members::member_routes(app_state.clone()),
        )
        .nest(
            "/{organization_id}/subscriptions",
            subscriptions::subscription_routes(app_state.clone()),
        )
        .nest(
            "/{organization_id}/events",
            events::org_event_routes(app_state),
        )
}
