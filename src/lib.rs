//! Movie Recs - genre based movie recommendations
//!
//! Aggregates a remote movie catalog into ranked recommendations, with
//! TTL caching and retry around the upstream calls.

pub mod api;
pub mod cache;
pub mod catalog;
pub mod config;
pub mod error;
pub mod models;
pub mod recommend;
pub mod tasks;

#[cfg(test)]
pub(crate) mod test_support;

pub use api::AppState;
pub use config::Config;
pub use error::RecommendationError;
pub use tasks::spawn_cleanup_task;
