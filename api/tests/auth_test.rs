mod helpers;

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use db::models::organization::Model as OrganizationModel;
use db::models::user::Model as UserModel;
use helpers::make_test_app;
use serde_json::{Value, json};
use tower::ServiceExt;

fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_register_returns_token() {
    let (app, _state) = make_test_app().await;

    let body = json!({
        "username": "lerato",
        "email": "Lerato@Example.com",
        "password": "password123",
    });
    let response = app.oneshot(post_json("/api/auth/register", &body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["data"]["username"], "lerato");
    // emails are stored lowercased
    assert_eq!(json["data"]["email"], "lerato@example.com");
    assert_eq!(json["data"]["admin"], false);
    assert!(json["data"]["token"].as_str().is_some_and(|t| !t.is_empty()));
    assert!(json["data"]["expires_at"].as_str().is_some());
}

#[tokio::test]
async fn test_register_rejects_taken_username() {
    let (app, state) = make_test_app().await;
    UserModel::create(state.db(), "taken", "taken@example.com", "password123", false)
        .await
        .unwrap();

    let body = json!({
        "username": "taken",
        "email": "other@example.com",
        "password": "password123",
    });
    let response = app.oneshot(post_json("/api/auth/register", &body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_register_rejects_short_password() {
    let (app, _state) = make_test_app().await;

    let body = json!({
        "username": "shortpw",
        "email": "shortpw@example.com",
        "password": "short",
    });
    let response = app.oneshot(post_json("/api/auth/register", &body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_login_round_trip() {
    let (app, state) = make_test_app().await;
    UserModel::create(state.db(), "thabo", "thabo@example.com", "password123", false)
        .await
        .unwrap();

    let body = json!({ "username": "thabo", "password": "password123" });
    let response = app
        .clone()
        .oneshot(post_json("/api/auth/login", &body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["data"]["username"], "thabo");

    let wrong = json!({ "username": "thabo", "password": "wrong-password" });
    let response = app.oneshot(post_json("/api/auth/login", &wrong)).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_login_unknown_user_is_unauthorized() {
    let (app, _state) = make_test_app().await;

    let body = json!({ "username": "ghost", "password": "password123" });
    let response = app.oneshot(post_json("/api/auth/login", &body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_me_includes_memberships() {
    let (app, state) = make_test_app().await;
    let user = UserModel::create(state.db(), "founder", "founder@example.com", "password123", false)
        .await
        .unwrap();
    let org = OrganizationModel::create(state.db(), "Chess Club", None, None, user.id)
        .await
        .unwrap();

    let (token, _) = api::auth::generate_jwt(user.id, user.admin);
    let request = Request::builder()
        .method("GET")
        .uri("/api/auth/me")
        .header("Authorization", format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["username"], "founder");
    let memberships = json["data"]["memberships"].as_array().unwrap();
    assert_eq!(memberships.len(), 1);
    assert_eq!(memberships[0]["organization_id"], org.id);
    assert_eq!(memberships[0]["role"], "admin");
    assert_eq!(memberships[0]["status"], "active");
}

#[tokio::test]
async fn test_me_requires_token() {
    let (app, _state) = make_test_app().await;

    let request = Request::builder()
        .method("GET")
        .uri("/api/auth/me")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
