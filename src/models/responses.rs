//! Response DTOs for the recommendation API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::{Deserialize, Serialize};

use crate::catalog::CatalogCacheStats;

/// One ranked movie.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub title: String,
    /// Requested genre, lowercased
    pub genre: String,
    pub rating: f64,
    /// `rating` minus the request's average rating, one decimal
    pub relative_rating: f64,
    /// Runtime as `"<H>h <M>min"`
    pub run_time: String,
}

/// Aggregate figures of a recommendation request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    /// Runtime sum of every matching movie with details, before truncation
    pub total_run_time_minutes: u64,
    /// Wall time of the pipeline, set by the caller
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_time_ms: Option<f64>,
}

/// Response body of `GET /api/movie-recommendations`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendations {
    pub metrics: Metrics,
    pub results: Vec<Recommendation>,
}

impl Recommendations {
    /// Records the elapsed time, rounded to two decimals.
    pub fn with_response_time(mut self, elapsed: std::time::Duration) -> Self {
        let ms = elapsed.as_secs_f64() * 1000.0;
        self.metrics.response_time_ms = Some((ms * 100.0).round() / 100.0);
        self
    }
}

/// Response body of `POST /api/clear-cache`.
#[derive(Debug, Clone, Serialize)]
pub struct ClearCacheResponse {
    pub message: String,
}

impl ClearCacheResponse {
    pub fn cleared() -> Self {
        Self {
            message: "Cache cleared successfully".to_string(),
        }
    }
}

/// Response body for the cache stats endpoint (GET /api/cache-stats)
#[derive(Debug, Clone, Serialize)]
pub struct CacheStatsResponse {
    #[serde(flatten)]
    pub stats: CatalogCacheStats,
    /// Combined hit rate over both namespaces
    pub hit_rate: f64,
}

impl CacheStatsResponse {
    pub fn new(stats: CatalogCacheStats) -> Self {
        let hit_rate = stats
            .popular_movies
            .merged(&stats.movie_details)
            .hit_rate();
        Self { stats, hit_rate }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::CacheStats;
    use std::time::Duration;

    fn sample() -> Recommendations {
        Recommendations {
            metrics: Metrics {
                total_run_time_minutes: 255,
                response_time_ms: None,
            },
            results: vec![Recommendation {
                title: "Heat".to_string(),
                genre: "action".to_string(),
                rating: 8.3,
                relative_rating: 0.4,
                run_time: "2h 50min".to_string(),
            }],
        }
    }

    #[test]
    fn test_recommendations_serialize_without_response_time() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["metrics"]["total_run_time_minutes"], 255);
        assert!(json["metrics"].get("response_time_ms").is_none());
        assert_eq!(json["results"][0]["run_time"], "2h 50min");
    }

    #[test]
    fn test_response_time_rounded_to_two_decimals() {
        let recs = sample().with_response_time(Duration::from_micros(12_345_678));
        assert_eq!(recs.metrics.response_time_ms, Some(12345.68));
    }

    #[test]
    fn test_clear_cache_response_serialize() {
        let json = serde_json::to_string(&ClearCacheResponse::cleared()).unwrap();
        assert_eq!(json, r#"{"message":"Cache cleared successfully"}"#);
    }

    #[test]
    fn test_cache_stats_response_hit_rate() {
        let resp = CacheStatsResponse::new(CatalogCacheStats {
            popular_movies: CacheStats {
                hits: 3,
                misses: 1,
                total_entries: 1,
            },
            movie_details: CacheStats {
                hits: 5,
                misses: 1,
                total_entries: 4,
            },
        });
        assert!((resp.hit_rate - 0.8).abs() < 0.001);

        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["movie_details"]["total_entries"], 4);
    }

    #[test]
    fn test_cache_stats_response_without_lookups() {
        let resp = CacheStatsResponse::new(CatalogCacheStats {
            popular_movies: CacheStats::new(),
            movie_details: CacheStats::new(),
        });
        assert_eq!(resp.hit_rate, 0.0);
    }

    #[test]
    fn test_health_response_serialize() {
        let resp = HealthResponse::healthy();
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("healthy"));
        assert!(json.contains("timestamp"));
    }

    #[test]
    fn test_error_response_serialize() {
        let resp = ErrorResponse::new("Something went wrong");
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("Something went wrong"));
    }
}
