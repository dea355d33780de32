//! Catalog Module
//!
//! Client for the remote movie catalog, the retry wrapper around it, and the
//! cached service the recommender reads from.

mod client;
mod retry;
mod service;
mod types;

pub use client::{HttpMovieApi, MovieApi, UpstreamError};
pub use retry::{retry_with_backoff, RetryPolicy, Sleeper, TokioSleeper};
pub use service::{CatalogCacheStats, MovieCatalog, MovieCatalogBuilder, POPULAR_MOVIES_KEY};
pub use types::{MovieDetail, MovieId, MovieSummary};
