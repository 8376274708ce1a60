//! # Organization Members Routes Module
//!
//! Nested under `/api/organizations/{organization_id}/members`.
//!
//! ## Structure
//! - `get.rs` — list members with their user details
//! - `post.rs` — add a member
//! - `put.rs` — change a member's role or status
//! - `delete.rs` — remove a member
//!
//! Listing is open to any active member; mutations require the
//! `ManageMembers` action (org admins).

use crate::auth::guards::{allow_manage_members, allow_org_member};
use axum::{
    Router,
    middleware::from_fn_with_state,
    routing::{delete, get, post, put},
};
use delete::remove_member;
use get::list_members;
use post::add_member;
use put::update_member;
use util::state::AppState;

pub mod common;
pub mod delete;
pub mod get;
pub mod post;
pub mod put;

/// Builds and returns the `/members` route group.
///
/// Routes:
/// - `GET    /members`            → list (active member)
/// - `POST   /members`            → add (org admin)
/// - `PUT    /members/{user_id}`  → change role/status (org admin)
/// - `DELETE /members/{user_id}`  → remove (org admin)
pub fn member_routes(app_state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(list_members)
                .route_layer(from_fn_with_state(app_state.clone(), allow_org_member)),
        )
        .route(
            "/",
            post(add_member)
                .route_layer(from_fn_with_state(app_state.clone(), allow_manage_members)),
        )
        .route(
            "/{user_id}",
            put(update_member)
                .route_layer(from_fn_with_state(app_state.clone(), allow_manage_members)),
        )
        .route(
            "/{user_id}",
            delete(remove_member)
                .route_layer(from_fn_with_state(app_state, allow_manage_members)),
        )
}
