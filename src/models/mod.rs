//! Request and Response models for the recommendation API
//!
//! This module defines the DTOs (Data Transfer Objects) used for
//! serializing/deserializing HTTP request and response bodies.

pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::{RecommendationQuery, DEFAULT_LIMIT};
pub use responses::{
    CacheStatsResponse, ClearCacheResponse, ErrorResponse, HealthResponse, Metrics,
    Recommendation, Recommendations,
};
