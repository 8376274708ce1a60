//! # Auth Routes Module
//!
//! Defines and wires up routes for the `/api/auth` endpoint group.
//!
//! ## Structure
//! - `post.rs` — POST handlers (register, login)
//! - `get.rs` — GET handlers (authenticated profile)
//!
//! `/register` and `/login` are public; `/me` requires a valid token.

use crate::auth::guards::allow_authenticated;
use axum::{
    Router,
    middleware::from_fn,
    routing::{get, post},
};
use get::me;
use post::{login, register};
use util::state::AppState;

pub mod get;
pub mod post;

/// Builds the `/auth` route group.
///
/// - `POST /auth/register` → create an account, returns a JWT
/// - `POST /auth/login` → verify credentials, returns a JWT
/// - `GET  /auth/me` → profile echo with organization memberships
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/me", get(me).route_layer(from_fn(allow_authenticated)))
}
