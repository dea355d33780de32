//! Catalog Client
//!
//! Talks to the remote movie catalog over HTTP.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header, StatusCode};
use thiserror::Error;
use tracing::debug;

use super::types::{
    DetailBody, MovieDetail, MovieDetailsRequest, MovieId, MovieSummary, MoviesEnvelope,
};

// == Upstream Error ==
/// Failure of a single upstream call, before any policy is applied.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UpstreamError {
    #[error("request timed out")]
    Timeout,

    #[error("connection failed: {0}")]
    Connect(String),

    #[error("resource not found")]
    NotFound,

    #[error("HTTP status {status}: {message}")]
    Status { status: u16, message: String },

    #[error("invalid response body: {0}")]
    Decode(String),

    #[error("details body carried no rating or runtime")]
    EmptyDetail,

    #[error("transport error: {0}")]
    Transport(String),
}

impl From<reqwest::Error> for UpstreamError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            UpstreamError::Timeout
        } else if err.is_connect() {
            UpstreamError::Connect(err.to_string())
        } else if let Some(status) = err.status() {
            if status == StatusCode::NOT_FOUND {
                UpstreamError::NotFound
            } else {
                UpstreamError::Status {
                    status: status.as_u16(),
                    message: err.to_string(),
                }
            }
        } else if err.is_decode() {
            UpstreamError::Decode(err.to_string())
        } else {
            UpstreamError::Transport(err.to_string())
        }
    }
}

// == Movie API Trait ==
/// The two catalog endpoints the recommender depends on.
#[async_trait]
pub trait MovieApi: Send + Sync {
    /// `GET /movies`
    async fn popular_movies(&self) -> Result<Vec<MovieSummary>, UpstreamError>;

    /// `POST /movieDetails`
    async fn movie_details(&self, movie_id: &MovieId) -> Result<MovieDetail, UpstreamError>;
}

// == HTTP Implementation ==
/// `MovieApi` backed by reqwest.
#[derive(Debug, Clone)]
pub struct HttpMovieApi {
    client: reqwest::Client,
    base_url: String,
    token: String,
}

impl HttpMovieApi {
    /// Builds a client whose every request is bounded by `timeout`.
    pub fn new(
        base_url: impl Into<String>,
        token: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, UpstreamError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| UpstreamError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: token.into(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }
}

#[async_trait]
impl MovieApi for HttpMovieApi {
    async fn popular_movies(&self) -> Result<Vec<MovieSummary>, UpstreamError> {
        let url = self.url("movies");
        debug!("GET {}", url);

        let envelope: MoviesEnvelope = self
            .client
            .get(&url)
            .header(header::AUTHORIZATION, &self.token)
            .header(header::CONTENT_TYPE, "application/json")
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(envelope.movies)
    }

    async fn movie_details(&self, movie_id: &MovieId) -> Result<MovieDetail, UpstreamError> {
        let url = self.url("movieDetails");
        debug!("POST {} movie_id={}", url, movie_id);

        let body: DetailBody = self
            .client
            .post(&url)
            .header(header::AUTHORIZATION, &self.token)
            .json(&MovieDetailsRequest { movie_id })
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        body.into_detail().ok_or(UpstreamError::EmptyDetail)
    }
}
