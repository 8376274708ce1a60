//! # Events Routes Module
//!
//! Defines and wires up routes for the top-level `/api/events` endpoint
//! group. Event lifecycle management lives under
//! `/api/organizations/{organization_id}/events`; this group exposes the
//! scanner-facing attendance surface, addressed by event id alone.
//!
//! ## Structure
//! - `attendance/` — nested check-in/check-out/listing routes under
//!   `/{event_id}/attendance`

use axum::Router;
use util::state::AppState;

pub mod attendance;

/// Builds and returns the `/events` route group.
///
/// Nested groups: `/{event_id}/attendance`.
pub fn event_routes(app_state: AppState) -> Router<AppState> {
    Router::new().nest(
        "/{event_id}/attendance",
        attendance::attendance_routes(app_state),
    )
}
