//! Error types for the recommendation service
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

// == Recommendation Error Enum ==
/// Request-level failures of the recommendation pipeline.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RecommendationError {
    /// Invalid genre or limit supplied by the caller
    #[error("{0}")]
    InvalidRequest(String),

    /// The catalog request did not answer in time
    #[error("Request timed out. Please try again later.")]
    Timeout,

    /// The catalog service could not be reached
    #[error("Unable to connect to the server. Please check your internet connection.")]
    Connection,

    /// Any other failure while fetching the popular movies list
    #[error("Failed to fetch popular movies: {0}")]
    CatalogFetch(String),

    /// A movie detail lookup failed with an unexpected status
    #[error("Failed to fetch movie details: {0}")]
    DetailFetch(String),

    /// No catalog entry matched the genre
    #[error("No movies found for genre: {0}")]
    NoMoviesFound(String),

    /// Every matching movie lacked details
    #[error("No movie details found for genre: {0}")]
    NoDetailsFound(String),
}

impl RecommendationError {
    /// HTTP status this error maps to.
    pub fn status_code(&self) -> StatusCode {
        match self {
            RecommendationError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for RecommendationError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorResponse::new(self.to_string()));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the recommendation service.
pub type Result<T> = std::result::Result<T, RecommendationError>;
