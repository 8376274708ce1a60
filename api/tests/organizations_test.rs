mod helpers;

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use db::models::organization::Model as OrganizationModel;
use db::models::organization_member::{MemberStatus, Model as MemberModel, Role};
use db::models::user::Model as UserModel;
use helpers::make_test_app;
use serde_json::{Value, json};
use tower::ServiceExt;

fn request_with_token(method: &str, uri: &str, token: &str, body: Option<&Value>) -> Request<Body> {
    let builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("Authorization", format!("Bearer {token}"));

    match body {
        Some(body) => builder
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn seed_user(state: &util::state::AppState, username: &str) -> (UserModel, String) {
    let email = format!("{username}@example.com");
    let user = UserModel::create(state.db(), username, &email, "password123", false)
        .await
        .unwrap();
    let (token, _) = api::auth::generate_jwt(user.id, user.admin);
    (user, token)
}

#[tokio::test]
async fn test_create_organization_makes_creator_admin() {
    let (app, state) = make_test_app().await;
    let (user, token) = seed_user(&state, "founder").await;

    let body = json!({ "name": "Debate Union", "description": "Weekly debates" });
    let response = app
        .oneshot(request_with_token("POST", "/api/organizations", &token, Some(&body)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["data"]["name"], "Debate Union");
    let org_id = json["data"]["id"].as_i64().unwrap();

    let membership = MemberModel::find(state.db(), org_id, user.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(membership.role, Role::Admin);
    assert_eq!(membership.status, MemberStatus::Active);
}

#[tokio::test]
async fn test_create_organization_rejects_duplicate_name() {
    let (app, state) = make_test_app().await;
    let (user, token) = seed_user(&state, "founder").await;
    OrganizationModel::create(state.db(), "Chess Club", None, None, user.id)
        .await
        .unwrap();

    let body = json!({ "name": "Chess Club" });
    let response = app
        .oneshot(request_with_token("POST", "/api/organizations", &token, Some(&body)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_list_organizations_with_search_and_sort() {
    let (app, state) = make_test_app().await;
    let (user, token) = seed_user(&state, "founder").await;
    OrganizationModel::create(state.db(), "Chess Club", None, None, user.id)
        .await
        .unwrap();
    OrganizationModel::create(state.db(), "Hiking Society", None, None, user.id)
        .await
        .unwrap();

    let response = app
        .clone()
        .oneshot(request_with_token(
            "GET",
            "/api/organizations?query=Chess",
            &token,
            None,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["total"], 1);
    assert_eq!(json["data"]["organizations"][0]["name"], "Chess Club");

    let response = app
        .oneshot(request_with_token(
            "GET",
            "/api/organizations?sort=-name",
            &token,
            None,
        ))
        .await
        .unwrap();
    let json = body_json(response).await;
    assert_eq!(json["data"]["organizations"][0]["name"], "Hiking Society");
}

#[tokio::test]
async fn test_get_organization_not_found() {
    let (app, state) = make_test_app().await;
    let (_, token) = seed_user(&state, "founder").await;

    let response = app
        .oneshot(request_with_token("GET", "/api/organizations/9999", &token, None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_edit_organization_requires_org_admin() {
    let (app, state) = make_test_app().await;
    let (founder, founder_token) = seed_user(&state, "founder").await;
    let (member, member_token) = seed_user(&state, "regular").await;
    let org = OrganizationModel::create(state.db(), "Chess Club", None, None, founder.id)
        .await
        .unwrap();
    MemberModel::add(state.db(), org.id, member.id, Role::Member, MemberStatus::Active)
        .await
        .unwrap();

    let body = json!({ "name": "Chess & Go Club" });
    let uri = format!("/api/organizations/{}", org.id);

    let response = app
        .clone()
        .oneshot(request_with_token("PUT", &uri, &member_token, Some(&body)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = app
        .oneshot(request_with_token("PUT", &uri, &founder_token, Some(&body)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["name"], "Chess & Go Club");
}

#[tokio::test]
async fn test_delete_organization() {
    let (app, state) = make_test_app().await;
    let (founder, token) = seed_user(&state, "founder").await;
    let org = OrganizationModel::create(state.db(), "Chess Club", None, None, founder.id)
        .await
        .unwrap();

    let uri = format!("/api/organizations/{}", org.id);
    let response = app
        .clone()
        .oneshot(request_with_token("DELETE", &uri, &token, None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .oneshot(request_with_token("GET", &uri, &token, None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
