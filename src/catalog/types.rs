//! Catalog Types
//!
//! Shapes of the data returned by the movie catalog service.

use std::fmt;

use serde::{Deserialize, Serialize};

// == Movie Id ==
/// Identifier of a catalog movie.
///
/// The catalog is not strict about the JSON type of ids, so any number
/// (negative and fractional ones included) or string is accepted and sent back
/// the way it arrived.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MovieId {
    Number(serde_json::Number),
    Text(String),
}

impl fmt::Display for MovieId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MovieId::Number(n) => write!(f, "{n}"),
            MovieId::Text(s) => f.write_str(s),
        }
    }
}

impl From<u64> for MovieId {
    fn from(id: u64) -> Self {
        MovieId::Number(id.into())
    }
}

impl From<&str> for MovieId {
    fn from(id: &str) -> Self {
        MovieId::Text(id.to_string())
    }
}

// == Movie Summary ==
/// One entry of the popular movies list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieSummary {
    pub id: MovieId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub genre: String,
}

impl MovieSummary {
    pub fn new(id: impl Into<MovieId>, title: impl Into<String>, genre: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            genre: genre.into(),
        }
    }

    /// Case-insensitive exact genre comparison.
    pub fn has_genre(&self, genre: &str) -> bool {
        self.genre.to_lowercase() == genre.to_lowercase()
    }
}

// == Movie Detail ==
/// Per-movie rating and runtime.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct MovieDetail {
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub run_time_minutes: u32,
}

impl MovieDetail {
    pub fn new(rating: f64, run_time_minutes: u32) -> Self {
        Self {
            rating,
            run_time_minutes,
        }
    }
}

// == Wire Envelopes ==
/// Raw body of `POST /movieDetails`, before deciding whether it says anything.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct DetailBody {
    pub rating: Option<f64>,
    pub run_time_minutes: Option<u32>,
}

impl DetailBody {
    /// A body carrying neither field is no detail at all.
    pub fn into_detail(self) -> Option<MovieDetail> {
        match (self.rating, self.run_time_minutes) {
            (None, None) => None,
            (rating, minutes) => Some(MovieDetail::new(
                rating.unwrap_or_default(),
                minutes.unwrap_or_default(),
            )),
        }
    }
}

/// Body of `GET /movies`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MoviesEnvelope {
    #[serde(default)]
    pub movies: Vec<MovieSummary>,
}

/// Body of `POST /movieDetails`.
#[derive(Debug, Clone, Serialize)]
pub struct MovieDetailsRequest<'a> {
    pub movie_id: &'a MovieId,
}
