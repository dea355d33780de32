//! In-memory collaborators shared by unit tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use crate::catalog::{MovieApi, MovieDetail, MovieId, MovieSummary, Sleeper, UpstreamError};

/// Records requested delays instead of sleeping.
#[derive(Debug, Default)]
pub struct RecordingSleeper {
    delays: Mutex<Vec<Duration>>,
}

impl RecordingSleeper {
    pub fn delays(&self) -> Vec<Duration> {
        self.delays.lock().unwrap().clone()
    }
}

#[async_trait]
impl Sleeper for RecordingSleeper {
    async fn sleep(&self, delay: Duration) {
        self.delays.lock().unwrap().push(delay);
    }
}

/// Catalog that answers from memory and counts calls.
///
/// Movies without a registered detail answer `NotFound`.
#[derive(Debug, Clone, Default)]
pub struct FakeMovieApi {
    movies: Vec<MovieSummary>,
    details: HashMap<MovieId, MovieDetail>,
    popular_failure: Option<(UpstreamError, usize)>,
    detail_failures: HashMap<MovieId, UpstreamError>,
    popular_calls: Arc<AtomicUsize>,
    detail_calls: Arc<Mutex<HashMap<MovieId, usize>>>,
}

impl FakeMovieApi {
    pub fn new(movies: Vec<MovieSummary>) -> Self {
        Self {
            movies,
            ..Self::default()
        }
    }

    pub fn with_detail(mut self, id: impl Into<MovieId>, detail: MovieDetail) -> Self {
        self.details.insert(id.into(), detail);
        self
    }

    /// The first `times` catalog calls fail with `err`.
    pub fn fail_popular(mut self, err: UpstreamError, times: usize) -> Self {
        self.popular_failure = Some((err, times));
        self
    }

    /// Every detail call for `id` fails with `err`.
    pub fn fail_detail(mut self, id: impl Into<MovieId>, err: UpstreamError) -> Self {
        self.detail_failures.insert(id.into(), err);
        self
    }

    pub fn popular_calls(&self) -> usize {
        self.popular_calls.load(Ordering::SeqCst)
    }

    pub fn detail_calls(&self, id: &MovieId) -> usize {
        self.detail_calls.lock().unwrap().get(id).copied().unwrap_or(0)
    }

    pub fn total_detail_calls(&self) -> usize {
        self.detail_calls.lock().unwrap().values().sum()
    }
}

#[async_trait]
impl MovieApi for FakeMovieApi {
    async fn popular_movies(&self) -> Result<Vec<MovieSummary>, UpstreamError> {
        let call = self.popular_calls.fetch_add(1, Ordering::SeqCst);
        match &self.popular_failure {
            Some((err, times)) if call < *times => Err(err.clone()),
            _ => Ok(self.movies.clone()),
        }
    }

    async fn movie_details(&self, movie_id: &MovieId) -> Result<MovieDetail, UpstreamError> {
        *self
            .detail_calls
            .lock()
            .unwrap()
            .entry(movie_id.clone())
            .or_insert(0) += 1;

        if let Some(err) = self.detail_failures.get(movie_id) {
            return Err(err.clone());
        }
        self.details
            .get(movie_id)
            .copied()
            .ok_or(UpstreamError::NotFound)
    }
}
