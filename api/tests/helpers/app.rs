use api::routes::routes;
use axum::Router;
use std::sync::Once;
use std::time::Duration;
use util::news::NewsCache;
use util::state::AppState;

static INIT: Once = Once::new();

fn init_test_env() {
    INIT.call_once(|| unsafe {
        std::env::set_var("DATABASE_PATH", "data/test.db");
        std::env::set_var("JWT_SECRET", "test-secret-key");
    });
}

/// Fresh app router over an in-memory database, plus the state behind it.
///
/// The news cache points at an unroutable URL; tests that need news prime
/// the cache instead of fetching.
pub async fn make_test_app() -> (Router, AppState) {
    init_test_env();

    let db = db::test_utils::setup_test_db().await;
    let news = NewsCache::new("http://127.0.0.1:1/feed.json", Duration::from_secs(300));
    let app_state = AppState::new(db, news);

    let router = Router::new().nest("/api", routes(app_state.clone()));
    (router, app_state)
}
