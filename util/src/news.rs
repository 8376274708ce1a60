//! Stale-tolerant cache over the campus news JSON feed.
//!
//! Holds a single entry of `(items, fetched_at)`. A read past the TTL
//! triggers a refetch; if the feed is down the last known value is served
//! with `stale: true` instead of failing the request. This is deliberately
//! not a general-purpose cache.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use crate::config::AppConfig;

/// One entry of the upstream news feed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewsItem {
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
}

/// What a reader gets back: the items, when they were fetched, and whether
/// the refresh that should have replaced them failed.
#[derive(Clone, Debug, Serialize)]
pub struct NewsSnapshot {
    pub items: Vec<NewsItem>,
    pub fetched_at: DateTime<Utc>,
    pub stale: bool,
}

#[derive(Clone)]
pub struct NewsCache {
    entry: Arc<RwLock<Option<(Vec<NewsItem>, DateTime<Utc>)>>>,
    client: reqwest::Client,
    feed_url: String,
    ttl: Duration,
}

impl NewsCache {
    pub fn new(feed_url: impl Into<String>, ttl: Duration) -> Self {
        Self {
            entry: Arc::new(RwLock::new(None)),
            client: reqwest::Client::new(),
            feed_url: feed_url.into(),
            ttl,
        }
    }

    /// Builds the cache from `NEWS_FEED_URL` / `NEWS_CACHE_SECONDS`.
    pub fn from_config() -> Self {
        let cfg = AppConfig::global();
        Self::new(
            cfg.news_feed_url.clone(),
            Duration::from_secs(cfg.news_cache_seconds),
        )
    }

    /// Seeds the cache with a known value, bypassing the feed. Used by tests
    /// and by startup warm-up.
    pub async fn prime(&self, items: Vec<NewsItem>, fetched_at: DateTime<Utc>) {
        *self.entry.write().await = Some((items, fetched_at));
    }

    /// Returns the current news, refetching when the entry is older than the
    /// TTL. `None` only when nothing has ever been fetched successfully.
    pub async fn latest(&self) -> Option<NewsSnapshot> {
        let now = Utc::now();

        if let Some((items, fetched_at)) = self.entry.read().await.as_ref() {
            let age = (now - *fetched_at).to_std().unwrap_or_default();
            if age <= self.ttl {
                return Some(NewsSnapshot {
                    items: items.clone(),
                    fetched_at: *fetched_at,
                    stale: false,
                });
            }
        }

        match self.fetch().await {
            Ok(items) => {
                self.prime(items.clone(), now).await;
                Some(NewsSnapshot {
                    items,
                    fetched_at: now,
                    stale: false,
                })
            }
            Err(e) => {
                tracing::warn!("news feed refresh failed: {e}");
                self.entry
                    .read()
                    .await
                    .as_ref()
                    .map(|(items, fetched_at)| NewsSnapshot {
                        items: items.clone(),
                        fetched_at: *fetched_at,
                        stale: true,
                    })
            }
        }
    }

    async fn fetch(&self) -> Result<Vec<NewsItem>, reqwest::Error> {
        self.client
            .get(&self.feed_url)
            .send()
            .await?
            .error_for_status()?
            .json::<Vec<NewsItem>>()
            .await
    }
}
