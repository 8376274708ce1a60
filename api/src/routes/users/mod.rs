//! # Users Routes Module
//!
//! Defines and wires up routes for the `/api/users` endpoint group.
//!
//! ## Structure
//! - `get.rs` — GET handlers (list users, fetch one)
//! - `put.rs` — PUT handlers (update user)
//! - `delete.rs` — DELETE handlers (delete user)
//!
//! The whole group is nested behind the `allow_admin` guard.

use axum::{
    Router,
    routing::{delete, get, put},
};
use delete::delete_user;
use get::{get_user, list_users};
use put::update_user;
use util::state::AppState;

pub mod common;
pub mod delete;
pub mod get;
pub mod put;

/// Builds the `/users` route group, mapping HTTP methods to handlers.
///
/// - `GET    /users`           → `list_users` (admin only)
/// - `GET    /users/{user_id}` → `get_user` (admin only)
/// - `PUT    /users/{user_id}` → `update_user` (admin only)
/// - `DELETE /users/{user_id}` → `delete_user` (admin only)
pub fn users_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users))
        .route("/{user_id}", get(get_user))
        .route("/{user_id}", put(update_user))
        .route("/{user_id}", delete(delete_user))
}
