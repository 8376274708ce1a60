//! Route-layer access guards.
//!
//! `allow_authenticated` / `allow_admin` gate on the JWT alone. The
//! organization- and event-scoped guards resolve the caller's active
//! membership and consult the policy table in [`crate::auth::policy`].
//! Platform admins and configured superusers bypass membership checks.

use crate::auth::claims::AuthUser;
use crate::auth::policy::{self, Action};
use crate::response::ApiResponse;
use axum::{
    Json,
    body::Body,
    extract::{FromRequestParts, Path, State},
    http::{Request, StatusCode},
    middleware::Next,
    response::Response,
};
use db::models::{event::Entity as EventEntity, organization_member};
use once_cell::sync::Lazy;
use sea_orm::{DatabaseConnection, EntityTrait};
use std::collections::{HashMap, HashSet};
use util::{config::AppConfig, state::AppState};

/// Platform-wide superuser IDs, loaded from configuration on first use.
pub static SUPERUSER_IDS: Lazy<HashSet<i64>> =
    Lazy::new(|| AppConfig::global().super_users.iter().copied().collect());

pub fn is_superuser(user_id: i64) -> bool {
    SUPERUSER_IDS.contains(&user_id)
}

#[derive(serde::Serialize, Default)]
pub struct Empty;

/// Validates the bearer token and inserts the `AuthUser` into request
/// extensions so downstream handlers can read it.
async fn extract_and_insert_authuser(
    req: Request<Body>,
) -> Result<(Request<Body>, AuthUser), (StatusCode, Json<ApiResponse<Empty>>)> {
    let (mut parts, body) = req.into_parts();
    let user = AuthUser::from_request_parts(&mut parts, &())
        .await
        .map_err(|_| {
            (
                StatusCode::UNAUTHORIZED,
                Json(ApiResponse::error("Authentication required")),
            )
        })?;

    let mut req = Request::from_parts(parts, body);
    req.extensions_mut().insert(user.clone());
    Ok((req, user))
}

/// The caller's active membership in an organization, or `None`.
///
/// A database failure denies access rather than propagating (fail-safe).
async fn active_membership(
    db: &DatabaseConnection,
    organization_id: i64,
    user_id: i64,
) -> Option<organization_member::Model> {
    match organization_member::Model::find_active(db, organization_id, user_id).await {
        Ok(membership) => membership,
        Err(e) => {
            tracing::warn!(
                error = %e,
                user_id,
                organization_id,
                "DB error while resolving membership; denying access"
            );
            None
        }
    }
}

/// Basic guard to ensure the request is authenticated.
pub async fn allow_authenticated(
    req: Request<Body>,
    next: Next,
) -> Result<Response, (StatusCode, Json<ApiResponse<Empty>>)> {
    let (req, _user) = extract_and_insert_authuser(req).await?;

    Ok(next.run(req).await)
}

/// Platform-admin-only guard.
pub async fn allow_admin(
    req: Request<Body>,
    next: Next,
) -> Result<Response, (StatusCode, Json<ApiResponse<Empty>>)> {
    let (req, user) = extract_and_insert_authuser(req).await?;

    if !user.0.admin {
        return Err((
            StatusCode::FORBIDDEN,
            Json(ApiResponse::error("Admin access required")),
        ));
    }

    Ok(next.run(req).await)
}

/// Base guard for routes scoped by an `{organization_id}` path parameter.
///
/// `action: None` only requires an active membership of any role.
async fn allow_org_action_base(
    app_state: AppState,
    params: HashMap<String, String>,
    req: Request<Body>,
    next: Next,
    action: Option<Action>,
    failure_msg: &str,
) -> Result<Response, (StatusCode, Json<ApiResponse<Empty>>)> {
    let db = app_state.db();

    let (req, user) = extract_and_insert_authuser(req).await?;

    let organization_id = params
        .get("organization_id")
        .and_then(|s| s.parse::<i64>().ok())
        .ok_or((
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::error("Missing or invalid organization_id")),
        ))?;

    if user.0.admin || is_superuser(user.0.sub) {
        return Ok(next.run(req).await);
    }

    let allowed = match active_membership(db, organization_id, user.0.sub).await {
        Some(membership) => action.is_none_or(|a| policy::allows(membership.role, a)),
        None => false,
    };

    if allowed {
        Ok(next.run(req).await)
    } else {
        Err((StatusCode::FORBIDDEN, Json(ApiResponse::error(failure_msg))))
    }
}

/// Base guard for routes scoped by an `{event_id}` path parameter.
///
/// Resolves the owning organization through the event, so attendance routes
/// can live under `/events/{event_id}` without carrying the organization in
/// the path.
async fn allow_event_action_base(
    app_state: AppState,
    params: HashMap<String, String>,
    req: Request<Body>,
    next: Next,
    action: Action,
    failure_msg: &str,
) -> Result<Response, (StatusCode, Json<ApiResponse<Empty>>)> {
    let db = app_state.db();

    let (req, user) = extract_and_insert_authuser(req).await?;

    let event_id = params
        .get("event_id")
        .and_then(|s| s.parse::<i64>().ok())
        .ok_or((
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::error("Missing or invalid event_id")),
        ))?;

    let event = EventEntity::find_by_id(event_id)
        .one(db)
        .await
        .map_err(|_| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::error("Database error while checking event")),
            )
        })?
        .ok_or((
            StatusCode::NOT_FOUND,
            Json(ApiResponse::error_with_reason(
                "Event not found",
                "event_not_found",
            )),
        ))?;

    if user.0.admin || is_superuser(user.0.sub) {
        return Ok(next.run(req).await);
    }

    let allowed = active_membership(db, event.organization_id, user.0.sub)
        .await
        .is_some_and(|membership| policy::allows(membership.role, action));

    if allowed {
        Ok(next.run(req).await)
    } else {
        Err((StatusCode::FORBIDDEN, Json(ApiResponse::error(failure_msg))))
    }
}

/// Any active membership in the organization.
pub async fn allow_org_member(
    State(app_state): State<AppState>,
    Path(params): Path<HashMap<String, String>>,
    req: Request<Body>,
    next: Next,
) -> Result<Response, (StatusCode, Json<ApiResponse<Empty>>)> {
    allow_org_action_base(
        app_state,
        params,
        req,
        next,
        None,
        "Active membership in this organization required",
    )
    .await
}

/// Organization admin role required.
pub async fn allow_org_admin(
    State(app_state): State<AppState>,
    Path(params): Path<HashMap<String, String>>,
    req: Request<Body>,
    next: Next,
) -> Result<Response, (StatusCode, Json<ApiResponse<Empty>>)> {
    allow_org_action_base(
        app_state,
        params,
        req,
        next,
        Some(Action::ManageOrganization),
        "Organization admin access required",
    )
    .await
}

/// Organization admin role required to manage members.
pub async fn allow_manage_members(
    State(app_state): State<AppState>,
    Path(params): Path<HashMap<String, String>>,
    req: Request<Body>,
    next: Next,
) -> Result<Response, (StatusCode, Json<ApiResponse<Empty>>)> {
    allow_org_action_base(
        app_state,
        params,
        req,
        next,
        Some(Action::ManageMembers),
        "Organization admin access required to manage members",
    )
    .await
}

/// Organization admin role required to manage subscriptions.
pub async fn allow_manage_subscriptions(
    State(app_state): State<AppState>,
    Path(params): Path<HashMap<String, String>>,
    req: Request<Body>,
    next: Next,
) -> Result<Response, (StatusCode, Json<ApiResponse<Empty>>)> {
    allow_org_action_base(
        app_state,
        params,
        req,
        next,
        Some(Action::ManageSubscriptions),
        "Organization admin access required to manage subscriptions",
    )
    .await
}

/// Officer (or higher) role required to manage events.
pub async fn allow_manage_events(
    State(app_state): State<AppState>,
    Path(params): Path<HashMap<String, String>>,
    req: Request<Body>,
    next: Next,
) -> Result<Response, (StatusCode, Json<ApiResponse<Empty>>)> {
    allow_org_action_base(
        app_state,
        params,
        req,
        next,
        Some(Action::ManageEvents),
        "Officer (or higher) access required to manage events",
    )
    .await
}

/// View access to an organization's events.
pub async fn allow_view_events(
    State(app_state): State<AppState>,
    Path(params): Path<HashMap<String, String>>,
    req: Request<Body>,
    next: Next,
) -> Result<Response, (StatusCode, Json<ApiResponse<Empty>>)> {
    allow_org_action_base(
        app_state,
        params,
        req,
        next,
        Some(Action::ViewEvents),
        "Active membership in this organization required",
    )
    .await
}

/// Officer (or higher) role in the event's organization, resolved via the
/// event. Gate for check-in and check-out.
pub async fn allow_record_attendance(
    State(app_state): State<AppState>,
    Path(params): Path<HashMap<String, String>>,
    req: Request<Body>,
    next: Next,
) -> Result<Response, (StatusCode, Json<ApiResponse<Empty>>)> {
    allow_event_action_base(
        app_state,
        params,
        req,
        next,
        Action::RecordAttendance,
        "Officer (or higher) access required to record attendance",
    )
    .await
}

/// View access to an event's attendance, resolved via the event.
pub async fn allow_view_attendance(
    State(app_state): State<AppState>,
    Path(params): Path<HashMap<String, String>>,
    req: Request<Body>,
    next: Next,
) -> Result<Response, (StatusCode, Json<ApiResponse<Empty>>)> {
    allow_event_action_base(
        app_state,
        params,
        req,
        next,
        Action::ViewAttendance,
        "Active membership in this organization required",
    )
    .await
}
