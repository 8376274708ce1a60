//! # Organization Events Routes Module
//!
//! Nested under `/api/organizations/{organization_id}/events`. Attendance
//! endpoints live under the top-level `/api/events` group instead; this
//! group owns the event lifecycle.
//!
//! ## Structure
//! - `get.rs` — list and fetch events
//! - `post.rs` — create an event
//! - `put.rs` — edit an event, including status transitions
//! - `delete.rs` — delete an event
//!
//! Reading requires the `ViewEvents` action, creating and editing require
//! `ManageEvents` (officers and admins), deleting requires org admin.

use crate::auth::guards::{allow_manage_events, allow_org_admin, allow_view_events};
use axum::{
    Router,
    middleware::from_fn_with_state,
    routing::{delete, get, post, put},
};
use delete::delete_event;
use get::{get_event, list_events};
use post::create_event;
use put::edit_event;
use util::state::AppState;

pub mod common;
pub mod delete;
pub mod get;
pub mod post;
pub mod put;

/// Builds and returns the org-scoped `/events` route group.
///
/// Routes:
/// - `GET    /events`             → list (member)
/// - `POST   /events`             → create (officer+)
/// - `GET    /events/{event_id}`  → fetch one (member)
/// - `PUT    /events/{event_id}`  → edit, incl. status (officer+)
/// - `DELETE /events/{event_id}`  → delete (org admin)
pub fn org_event_routes(app_state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(list_events).route_layer(from_fn_with_state(app_state.clone(), allow_view_events)),
        )
        .route(
            "/",
            post(create_event)
                .route_layer(from_fn_with_state(app_state.clone(), allow_manage_events)),
        )
        .route(
            "/{event_id}",
            get(get_event).route_layer(from_fn_with_state(app_state.clone(), allow_view_events)),
        )
        .route(
            "/{event_id}",
            put(edit_event)
                .route_layer(from_fn_with_state(app_state.clone(), allow_manage_events)),
        )
        .route(
            "/{event_id}",
            delete(delete_event).route_layer(from_fn_with_state(app_state, allow_org_admin)),
        )
}
