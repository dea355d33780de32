//! Request DTOs for the recommendation API
//!
//! Defines the query string accepted by the recommendations endpoint.

use serde::Deserialize;

use crate::error::{RecommendationError, Result};
use crate::recommend::{parse_limit, validate_genre, validate_limit};

/// Limit used when the query string has none (or an unparsable one).
pub const DEFAULT_LIMIT: i64 = 5;

/// Query string of `GET /api/movie-recommendations`.
///
/// Both fields are kept raw so that a malformed `limit` falls back to the
/// default instead of rejecting the whole request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecommendationQuery {
    /// Requested genre, untrimmed
    #[serde(default)]
    pub genre: Option<String>,
    /// Requested number of results
    #[serde(default)]
    pub limit: Option<String>,
}

impl RecommendationQuery {
    /// Trims and checks both parameters, returning `(genre, limit)`.
    pub fn validate(&self) -> Result<(String, usize)> {
        let genre = self.genre.as_deref().unwrap_or("").trim().to_string();
        if !validate_genre(&genre) {
            return Err(RecommendationError::InvalidRequest(
                "Invalid genre. Please enter a valid genre with only letters and spaces."
                    .to_string(),
            ));
        }

        let limit = self
            .limit
            .as_deref()
            .and_then(parse_limit)
            .unwrap_or(DEFAULT_LIMIT);
        let limit = validate_limit(limit).ok_or_else(|| {
            RecommendationError::InvalidRequest("Limit must be between 1 and 10.".to_string())
        })?;

        Ok((genre, limit))
    }
}
