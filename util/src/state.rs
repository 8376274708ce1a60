//! Application state container shared across Axum route handlers.

use crate::news::NewsCache;
use sea_orm::DatabaseConnection;

/// Central application state shared across the server.
///
/// Holds the SeaORM connection and the news cache. Cheap to clone; handlers
/// receive it via Axum's `State<T>` extractor.
#[derive(Clone)]
pub struct AppState {
    db: DatabaseConnection,
    news: NewsCache,
}

impl AppState {
    pub fn new(db: DatabaseConnection, news: NewsCache) -> Self {
        Self { db, news }
    }

    /// Returns a shared reference to the internal `DatabaseConnection`.
    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    /// Returns a cloned copy of the database connection.
    ///
    /// Useful for spawned tasks that require ownership.
    pub fn db_clone(&self) -> DatabaseConnection {
        self.db.clone()
    }

    pub fn news(&self) -> &NewsCache {
        &self.news
    }
}
