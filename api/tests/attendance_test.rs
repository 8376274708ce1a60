mod helpers;

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use chrono::{Duration, Utc};
use common::qr::{self, StudentIdentity};
use db::models::event::{EventStatus, Model as EventModel};
use db::models::organization::Model as OrganizationModel;
use db::models::organization_member::{MemberStatus, Model as MemberModel, Role};
use db::models::user::Model as UserModel;
use helpers::make_test_app;
use serde_json::{Value, json};
use tower::ServiceExt;

fn check_in_request(event_id: i64, token: &str, payload: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(format!("/api/events/{event_id}/attendance/check-in"))
        .header("Authorization", format!("Bearer {token}"))
        .header("Content-Type", "text/plain")
        .body(Body::from(payload.to_owned()))
        .unwrap()
}

fn check_out_request(event_id: i64, token: &str, student_id: &str) -> Request<Body> {
    let body = json!({ "student_id": student_id });
    Request::builder()
        .method("POST")
        .uri(format!("/api/events/{event_id}/attendance/check-out"))
        .header("Authorization", format!("Bearer {token}"))
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn list_request(event_id: i64, token: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(format!("/api/events/{event_id}/attendance"))
        .header("Authorization", format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn sample_identity() -> StudentIdentity {
    StudentIdentity {
        student_id: "s2301234".to_owned(),
        first_name: "Naledi".to_owned(),
        last_name: "Mokoena".to_owned(),
        course_id: 12,
        year_level: 2,
        avatar: None,
    }
}

struct Fixture {
    event_id: i64,
    draft_event_id: i64,
    officer_token: String,
    member_token: String,
}

async fn seed_active_event(state: &util::state::AppState) -> Fixture {
    let db = state.db();
    let admin = UserModel::create(db, "orgadmin", "orgadmin@example.com", "password123", false)
        .await
        .unwrap();
    let officer = UserModel::create(db, "scanner", "scanner@example.com", "password123", false)
        .await
        .unwrap();
    let member = UserModel::create(db, "member", "member@example.com", "password123", false)
        .await
        .unwrap();
    let org = OrganizationModel::create(db, "Chess Club", None, None, admin.id)
        .await
        .unwrap();
    MemberModel::add(db, org.id, officer.id, Role::Officer, MemberStatus::Active)
        .await
        .unwrap();
    MemberModel::add(db, org.id, member.id, Role::Member, MemberStatus::Active)
        .await
        .unwrap();

    let start = Utc::now() - Duration::hours(1);
    let event = EventModel::create(
        db,
        org.id,
        "Weekly Blitz",
        None,
        start,
        start + Duration::hours(3),
        Some("Hall B"),
        None,
        admin.id,
    )
    .await
    .unwrap();
    EventModel::set_status(db, event.id, EventStatus::Active)
        .await
        .unwrap();

    let draft = EventModel::create(
        db,
        org.id,
        "Next Week Blitz",
        None,
        start + Duration::days(7),
        start + Duration::days(7) + Duration::hours(3),
        None,
        None,
        admin.id,
    )
    .await
    .unwrap();

    let (officer_token, _) = api::auth::generate_jwt(officer.id, officer.admin);
    let (member_token, _) = api::auth::generate_jwt(member.id, member.admin);
    Fixture {
        event_id: event.id,
        draft_event_id: draft.id,
        officer_token,
        member_token,
    }
}

#[tokio::test]
async fn test_check_in_records_scan() {
    let (app, state) = make_test_app().await;
    let fx = seed_active_event(&state).await;

    let payload = qr::encode(&sample_identity());
    let response = app
        .oneshot(check_in_request(fx.event_id, &fx.officer_token, &payload))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["data"]["student_id"], "s2301234");
    assert_eq!(json["data"]["first_name"], "Naledi");
    assert!(json["data"]["time_in"].as_str().is_some());
    assert!(json["data"]["time_out"].is_null());
}

#[tokio::test]
async fn test_check_in_rejects_malformed_payload() {
    let (app, state) = make_test_app().await;
    let fx = seed_active_event(&state).await;

    let response = app
        .oneshot(check_in_request(fx.event_id, &fx.officer_token, "not-json"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["reason"], "parse_error");
}

#[tokio::test]
async fn test_check_in_unknown_event() {
    let (app, state) = make_test_app().await;
    let fx = seed_active_event(&state).await;

    let payload = qr::encode(&sample_identity());
    let response = app
        .oneshot(check_in_request(9999, &fx.officer_token, &payload))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["reason"], "event_not_found");
}

#[tokio::test]
async fn test_check_in_draft_event_is_rejected() {
    let (app, state) = make_test_app().await;
    let fx = seed_active_event(&state).await;

    let payload = qr::encode(&sample_identity());
    let response = app
        .oneshot(check_in_request(fx.draft_event_id, &fx.officer_token, &payload))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let json = body_json(response).await;
    assert_eq!(json["reason"], "event_not_accepting_checkins");
}

#[tokio::test]
async fn test_duplicate_check_in_is_rejected() {
    let (app, state) = make_test_app().await;
    let fx = seed_active_event(&state).await;

    let payload = qr::encode(&sample_identity());
    let response = app
        .clone()
        .oneshot(check_in_request(fx.event_id, &fx.officer_token, &payload))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app
        .oneshot(check_in_request(fx.event_id, &fx.officer_token, &payload))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let json = body_json(response).await;
    assert_eq!(json["reason"], "duplicate_check_in");
}

#[tokio::test]
async fn test_check_out_completes_the_visit() {
    let (app, state) = make_test_app().await;
    let fx = seed_active_event(&state).await;
    let identity = sample_identity();
    let payload = qr::encode(&identity);

    let response = app
        .clone()
        .oneshot(check_in_request(fx.event_id, &fx.officer_token, &payload))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app
        .clone()
        .oneshot(check_out_request(
            fx.event_id,
            &fx.officer_token,
            &identity.student_id,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert!(json["data"]["time_out"].as_str().is_some());

    // The pair's record is terminal: both operations now report completion.
    let response = app
        .clone()
        .oneshot(check_out_request(
            fx.event_id,
            &fx.officer_token,
            &identity.student_id,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);
    let json = body_json(response).await;
    assert_eq!(json["reason"], "already_completed");

    let response = app
        .oneshot(check_in_request(fx.event_id, &fx.officer_token, &payload))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);
    let json = body_json(response).await;
    assert_eq!(json["reason"], "already_completed");
}

#[tokio::test]
async fn test_check_out_without_check_in() {
    let (app, state) = make_test_app().await;
    let fx = seed_active_event(&state).await;

    let response = app
        .oneshot(check_out_request(fx.event_id, &fx.officer_token, "s9999999"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["reason"], "not_checked_in");
}

#[tokio::test]
async fn test_list_attendance_reports_counts() {
    let (app, state) = make_test_app().await;
    let fx = seed_active_event(&state).await;

    let first = sample_identity();
    let second = StudentIdentity {
        student_id: "s2309876".to_owned(),
        first_name: "Sipho".to_owned(),
        last_name: "Dlamini".to_owned(),
        course_id: 7,
        year_level: 3,
        avatar: None,
    };

    for identity in [&first, &second] {
        let response = app
            .clone()
            .oneshot(check_in_request(
                fx.event_id,
                &fx.officer_token,
                &qr::encode(identity),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
    }
    let response = app
        .clone()
        .oneshot(check_out_request(
            fx.event_id,
            &fx.officer_token,
            &first.student_id,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .oneshot(list_request(fx.event_id, &fx.member_token))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["records"].as_array().unwrap().len(), 2);
    assert_eq!(json["data"]["counts"]["total"], 2);
    assert_eq!(json["data"]["counts"]["checked_in_count"], 1);
    assert_eq!(json["data"]["counts"]["checked_out_count"], 1);
}

#[tokio::test]
async fn test_plain_member_cannot_record_attendance() {
    let (app, state) = make_test_app().await;
    let fx = seed_active_event(&state).await;

    let payload = qr::encode(&sample_identity());
    let response = app
        .oneshot(check_in_request(fx.event_id, &fx.member_token, &payload))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_outsider_cannot_view_attendance() {
    let (app, state) = make_test_app().await;
    let fx = seed_active_event(&state).await;
    let outsider = UserModel::create(
        state.db(),
        "outsider",
        "outsider@example.com",
        "password123",
        false,
    )
    .await
    .unwrap();
    let (token, _) = api::auth::generate_jwt(outsider.id, outsider.admin);

    let response = app
        .oneshot(list_request(fx.event_id, &token))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_platform_admin_bypasses_membership() {
    let (app, state) = make_test_app().await;
    let fx = seed_active_event(&state).await;
    let root = UserModel::create(state.db(), "root", "root@example.com", "password123", true)
        .await
        .unwrap();
    let (token, _) = api::auth::generate_jwt(root.id, root.admin);

    let payload = qr::encode(&sample_identity());
    let response = app
        .oneshot(check_in_request(fx.event_id, &token, &payload))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
}
