//! API Handlers
//!
//! HTTP request handlers for each endpoint.

use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::{Query, State},
    Json,
};

use crate::catalog::{HttpMovieApi, MovieCatalog};
use crate::config::Config;
use crate::error::Result;
use crate::models::{
    CacheStatsResponse, ClearCacheResponse, HealthResponse, RecommendationQuery, Recommendations,
};
use crate::recommend::get_recommendations;

/// Application state shared across all handlers.
///
/// Holds the catalog service, whose caches outlive every request.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<MovieCatalog>,
}

impl AppState {
    pub fn new(catalog: MovieCatalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
        }
    }

    /// Builds the HTTP catalog client and caches from configuration.
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let api = HttpMovieApi::new(
            config.api_base_url.clone(),
            config.api_token.clone(),
            config.request_timeout(),
        )?;
        let catalog = MovieCatalog::builder(Arc::new(api))
            .ttl(config.cache_ttl())
            .retry_policy(config.retry_policy())
            .build();
        Ok(Self::new(catalog))
    }
}

/// Runs the pipeline and stamps the elapsed time on the result.
pub async fn timed_recommendations(
    catalog: &MovieCatalog,
    genre: &str,
    limit: usize,
) -> Result<Recommendations> {
    let start = Instant::now();
    let recommendations = get_recommendations(catalog, genre, limit).await?;
    Ok(recommendations.with_response_time(start.elapsed()))
}

/// Handler for GET /api/movie-recommendations
pub async fn recommendations_handler(
    State(state): State<AppState>,
    Query(query): Query<RecommendationQuery>,
) -> Result<Json<Recommendations>> {
    let (genre, limit) = query.validate()?;
    let recommendations = timed_recommendations(&state.catalog, &genre, limit).await?;
    Ok(Json(recommendations))
}

/// Handler for POST /api/clear-cache
pub async fn clear_cache_handler(State(state): State<AppState>) -> Json<ClearCacheResponse> {
    state.catalog.clear_cache().await;
    Json(ClearCacheResponse::cleared())
}

/// Handler for GET /api/cache-stats
pub async fn cache_stats_handler(State(state): State<AppState>) -> Json<CacheStatsResponse> {
    let stats = state.catalog.cache_stats().await;
    Json(CacheStatsResponse::new(stats))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{MovieDetail, MovieSummary, RetryPolicy};
    use crate::error::RecommendationError;
    use crate::test_support::FakeMovieApi;

    fn test_state() -> (AppState, Arc<FakeMovieApi>) {
        let api = Arc::new(
            FakeMovieApi::new(vec![
                MovieSummary::new(1u64, "Heat", "Action"),
                MovieSummary::new(2u64, "Speed", "Action"),
            ])
            .with_detail(1u64, MovieDetail::new(8.3, 170))
            .with_detail(2u64, MovieDetail::new(7.2, 116)),
        );
        let catalog = MovieCatalog::builder(api.clone())
            .retry_policy(RetryPolicy::no_retry())
            .build();
        (AppState::new(catalog), api)
    }

    fn query(genre: &str, limit: &str) -> Query<RecommendationQuery> {
        Query(RecommendationQuery {
            genre: Some(genre.to_string()),
            limit: Some(limit.to_string()),
        })
    }

    #[tokio::test]
    async fn test_recommendations_handler() {
        let (state, _) = test_state();

        let Json(recs) = recommendations_handler(State(state), query("Action", "1"))
            .await
            .unwrap();

        assert_eq!(recs.results.len(), 1);
        assert_eq!(recs.results[0].title, "Heat");
        assert_eq!(recs.metrics.total_run_time_minutes, 286);
        assert!(recs.metrics.response_time_ms.is_some());
    }

    #[tokio::test]
    async fn test_recommendations_handler_rejects_invalid_limit() {
        let (state, api) = test_state();

        let result = recommendations_handler(State(state), query("Action", "11")).await;

        assert!(matches!(result, Err(RecommendationError::InvalidRequest(_))));
        assert_eq!(api.popular_calls(), 0);
    }

    #[tokio::test]
    async fn test_clear_cache_handler() {
        let (state, api) = test_state();

        recommendations_handler(State(state.clone()), query("Action", "5"))
            .await
            .unwrap();
        let Json(resp) = clear_cache_handler(State(state.clone())).await;
        recommendations_handler(State(state), query("Action", "5"))
            .await
            .unwrap();

        assert_eq!(resp.message, "Cache cleared successfully");
        assert_eq!(api.popular_calls(), 2);
    }

    #[tokio::test]
    async fn test_cache_stats_handler() {
        let (state, _) = test_state();

        recommendations_handler(State(state.clone()), query("Action", "5"))
            .await
            .unwrap();
        let Json(resp) = cache_stats_handler(State(state)).await;

        assert_eq!(resp.stats.popular_movies.total_entries, 1);
        assert_eq!(resp.stats.movie_details.total_entries, 2);
    }

    #[tokio::test]
    async fn test_health_handler() {
        let response = health_handler().await;
        assert_eq!(response.status, "healthy");
    }

    #[test]
    fn test_app_state_from_default_config() {
        let state = AppState::from_config(&Config::default());
        assert!(state.is_ok());
    }
}
