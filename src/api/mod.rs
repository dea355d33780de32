//! API Module
//!
//! HTTP handlers and routing for the recommendation REST API.
//!
//! # Endpoints
//! - `GET /api/movie-recommendations?genre=&limit=` - Ranked movies for a genre
//! - `POST /api/clear-cache` - Clear both caches
//! - `GET /api/cache-stats` - Cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
