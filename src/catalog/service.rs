//! Movie Catalog Service
//!
//! Cached, retrying access to the catalog. One instance is built at startup
//! and shared by every request.

use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use crate::cache::{CacheStats, Clock, SystemClock, TtlCache, DEFAULT_TTL_SECS};
use crate::error::{RecommendationError, Result};

use super::client::{MovieApi, UpstreamError};
use super::retry::{retry_with_backoff, RetryPolicy, Sleeper, TokioSleeper};
use super::types::{MovieDetail, MovieId, MovieSummary};

/// Key of the single popular movies entry.
pub const POPULAR_MOVIES_KEY: &str = "popular_movies";

/// Hit/miss counters of both cache namespaces.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogCacheStats {
    pub popular_movies: CacheStats,
    pub movie_details: CacheStats,
}

// == Movie Catalog ==
pub struct MovieCatalog {
    api: Arc<dyn MovieApi>,
    popular: RwLock<TtlCache<&'static str, Vec<MovieSummary>>>,
    details: RwLock<TtlCache<MovieId, Option<MovieDetail>>>,
    retry: RetryPolicy,
    sleeper: Arc<dyn Sleeper>,
}

impl MovieCatalog {
    /// Wall clock, tokio sleeps, default retry policy and TTL.
    pub fn new(api: Arc<dyn MovieApi>) -> Self {
        Self::builder(api).build()
    }

    pub fn builder(api: Arc<dyn MovieApi>) -> MovieCatalogBuilder {
        MovieCatalogBuilder {
            api,
            ttl: Duration::from_secs(DEFAULT_TTL_SECS),
            clock: Arc::new(SystemClock),
            retry: RetryPolicy::default(),
            sleeper: Arc::new(TokioSleeper),
        }
    }

    // == Popular Movies ==
    /// Returns the catalog, from cache when fresh.
    ///
    /// Every failed attempt is translated before the retry policy sees it, so
    /// the message of the last attempt is what the caller gets. Failures are
    /// never cached.
    pub async fn get_popular_movies(&self) -> Result<Vec<MovieSummary>> {
        if let Some(movies) = self.popular.write().await.get(&POPULAR_MOVIES_KEY) {
            debug!("Popular movies cache hit ({} movies)", movies.len());
            return Ok(movies);
        }

        debug!("Popular movies cache miss, fetching from catalog");
        let api = &self.api;
        let movies = retry_with_backoff(&self.retry, self.sleeper.as_ref(), || async move {
            api.popular_movies().await.map_err(translate_catalog_error)
        })
        .await?;

        info!("Fetched {} popular movies from catalog", movies.len());
        self.popular
            .write()
            .await
            .insert(POPULAR_MOVIES_KEY, movies.clone());

        Ok(movies)
    }

    // == Movie Details ==
    /// Returns rating and runtime of one movie, or `None` when the catalog has
    /// nothing usable for it.
    ///
    /// Not found and transport failures resolve to `None` on the spot, without
    /// retrying, and that `None` is cached like any other answer. Unexpected
    /// status codes are retried and surface as an error once attempts run out.
    pub async fn get_movie_details(&self, movie_id: &MovieId) -> Result<Option<MovieDetail>> {
        if let Some(detail) = self.details.write().await.get(movie_id) {
            debug!("Movie details cache hit for {}", movie_id);
            return Ok(detail);
        }

        debug!("Movie details cache miss for {}", movie_id);
        let api = &self.api;
        let detail = retry_with_backoff(&self.retry, self.sleeper.as_ref(), || async move {
            match api.movie_details(movie_id).await {
                Ok(detail) => Ok(Some(detail)),
                Err(UpstreamError::Status { message, .. }) => {
                    Err(RecommendationError::DetailFetch(message))
                }
                Err(err) => {
                    warn!("No details available for movie {}: {}", movie_id, err);
                    Ok(None)
                }
            }
        })
        .await?;

        self.details.write().await.insert(movie_id.clone(), detail);
        Ok(detail)
    }

    // == Clear Cache ==
    /// Drops every entry of both namespaces.
    pub async fn clear_cache(&self) {
        self.popular.write().await.clear();
        self.details.write().await.clear();
        info!("Cache cleared");
    }

    // == Cleanup Expired ==
    /// Purges expired entries of both namespaces, returning how many went.
    pub async fn cleanup_expired(&self) -> usize {
        let popular = self.popular.write().await.cleanup_expired();
        let details = self.details.write().await.cleanup_expired();
        popular + details
    }

    pub async fn cache_stats(&self) -> CatalogCacheStats {
        CatalogCacheStats {
            popular_movies: self.popular.read().await.stats(),
            movie_details: self.details.read().await.stats(),
        }
    }
}

fn translate_catalog_error(err: UpstreamError) -> RecommendationError {
    match err {
        UpstreamError::Timeout => RecommendationError::Timeout,
        UpstreamError::Connect(_) => RecommendationError::Connection,
        other => RecommendationError::CatalogFetch(other.to_string()),
    }
}

// == Builder ==
/// Overrides for the collaborators of a [`MovieCatalog`].
pub struct MovieCatalogBuilder {
    api: Arc<dyn MovieApi>,
    ttl: Duration,
    clock: Arc<dyn Clock>,
    retry: RetryPolicy,
    sleeper: Arc<dyn Sleeper>,
}

impl MovieCatalogBuilder {
    pub fn ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    pub fn sleeper(mut self, sleeper: Arc<dyn Sleeper>) -> Self {
        self.sleeper = sleeper;
        self
    }

    pub fn build(self) -> MovieCatalog {
        MovieCatalog {
            api: self.api,
            popular: RwLock::new(TtlCache::new(self.ttl, self.clock.clone())),
            details: RwLock::new(TtlCache::new(self.ttl, self.clock)),
            retry: self.retry,
            sleeper: self.sleeper,
        }
    }
}
