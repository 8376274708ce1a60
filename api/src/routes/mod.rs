//! HTTP route entry point for `/api/...`.
//!
//! Routes are organized by domain, each protected via the appropriate access
//! control middleware:
//! - `/health` → liveness check (public)
//! - `/auth` → register, login, profile (public except `/auth/me`)
//! - `/users` → user administration (platform admins only)
//! - `/organizations` → organization CRUD plus nested members, subscriptions
//!   and events (authenticated; org-scoped guards per route)
//! - `/events/{event_id}/attendance` → check-in/check-out/listing (org role
//!   resolved through the event)
//! - `/news` → cached campus news feed (authenticated)

use crate::auth::guards::{allow_admin, allow_authenticated};
use axum::{Router, middleware::from_fn};
use util::state::AppState;

pub mod auth;
pub mod events;
pub mod health;
pub mod news;
pub mod organizations;
pub mod users;

/// Builds the complete application router for all HTTP endpoints.
///
/// The returned router is fully stateful; `main` nests it under `/api` and
/// layers logging and CORS on top.
pub fn routes(app_state: AppState) -> Router {
    Router::new()
        .nest("/health", health::health_routes())
        .nest("/auth", auth::auth_routes())
        .nest(
            "/users",
            users::users_routes().route_layer(from_fn(allow_admin)),
        )
        .nest(
            "/organizations",
            organizations::organization_routes(app_state.clone())
                .route_layer(from_fn(allow_authenticated)),
        )
        .nest(
            "/events",
            events::event_routes(app_state.clone()).route_layer(from_fn(allow_authenticated)),
        )
        .nest(
            "/news",
            news::news_routes().route_layer(from_fn(allow_authenticated)),
        )
        .with_state(app_state)
}
