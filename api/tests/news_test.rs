mod helpers;

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use chrono::Utc;
use db::models::user::Model as UserModel;
use helpers::make_test_app;
use serde_json::Value;
use tower::ServiceExt;
use util::news::NewsItem;

fn news_request(token: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri("/api/news")
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

async fn seed_token(state: &util::state::AppState) -> String {
    let user = UserModel::create(state.db(), "reader", "reader@example.com", "password123", false)
        .await
        .unwrap();
    let (token, _) = api::auth::generate_jwt(user.id, user.admin);
    token
}

#[tokio::test]
async fn test_news_unavailable_when_never_fetched() {
    let (app, state) = make_test_app().await;
    let token = seed_token(&state).await;

    let response = app.oneshot(news_request(&token)).await.unwrap();
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn test_news_serves_primed_cache() {
    let (app, state) = make_test_app().await;
    let token = seed_token(&state).await;

    state
        .news()
        .prime(
            vec![NewsItem {
                title: "Orientation week schedule".to_owned(),
                url: "https://news.example.com/orientation".to_owned(),
                summary: None,
                published_at: None,
            }],
            Utc::now(),
        )
        .await;

    let response = app.oneshot(news_request(&token)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["stale"], false);
    let items = json["data"]["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["title"], "Orientation week schedule");
}

#[tokio::test]
async fn test_news_requires_authentication() {
    let (app, _state) = make_test_app().await;

    let request = Request::builder()
        .method("GET")
        .uri("/api/news")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
