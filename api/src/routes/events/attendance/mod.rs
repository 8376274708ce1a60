//! # Attendance Routes Module
//!
//! Nested under `/api/events/{event_id}/attendance`. This is the surface a
//! scanning device talks to during an event.
//!
//! ## Structure
//! - `post.rs` — check-in (raw QR payload body) and check-out
//! - `get.rs` — attendance listing with live tallies
//!
//! Recording requires the `RecordAttendance` action (officers and admins of
//! the event's organization); viewing requires `ViewAttendance`.

use crate::auth::guards::{allow_record_attendance, allow_view_attendance};
use axum::{
    Router,
    middleware::from_fn_with_state,
    routing::{get, post},
};
use get::list_attendance;
use post::{check_in, check_out};
use util::state::AppState;

pub mod common;
pub mod get;
pub mod post;

/// Builds and returns the `/attendance` route group.
///
/// Routes:
/// - `POST /attendance/check-in`   → record a scan (officer+)
/// - `POST /attendance/check-out`  → complete a record (officer+)
/// - `GET  /attendance`            → list records and counts (member)
pub fn attendance_routes(app_state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            "/check-in",
            post(check_in).route_layer(from_fn_with_state(
                app_state.clone(),
                allow_record_attendance,
            )),
        )
        .route(
            "/check-out",
            post(check_out).route_layer(from_fn_with_state(
                app_state.clone(),
                allow_record_attendance,
            )),
        )
        .route(
            "/",
            get(list_attendance)
                .route_layer(from_fn_with_state(app_state, allow_view_attendance)),
        )
}
