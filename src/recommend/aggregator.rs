//! Recommendation Aggregator
//!
//! Fetch, filter by genre, enrich with details, rank and truncate.

use tracing::{debug, info};

use crate::catalog::{MovieCatalog, MovieSummary};
use crate::error::{RecommendationError, Result};
use crate::models::{Metrics, Recommendation, Recommendations};

use super::format::{format_runtime, relative_rating};

/// Builds the ranked recommendation list for `genre`.
///
/// Movies without details are skipped. `total_run_time_minutes` covers every
/// matching movie with details, including those cut by `limit`. Entries with
/// equal relative rating keep catalog order.
pub async fn get_recommendations(
    catalog: &MovieCatalog,
    genre: &str,
    limit: usize,
) -> Result<Recommendations> {
    let movies = catalog.get_popular_movies().await?;

    let matching: Vec<&MovieSummary> = movies.iter().filter(|m| m.has_genre(genre)).collect();
    if matching.is_empty() {
        return Err(RecommendationError::NoMoviesFound(genre.to_string()));
    }
    debug!("{} catalog movies match genre {:?}", matching.len(), genre);

    let genre_lower = genre.to_lowercase();
    let mut total_run_time_minutes: u64 = 0;
    let mut results = Vec::with_capacity(matching.len());

    for movie in matching {
        let Some(detail) = catalog.get_movie_details(&movie.id).await? else {
            continue;
        };

        total_run_time_minutes += u64::from(detail.run_time_minutes);
        results.push(Recommendation {
            title: movie.title.clone(),
            genre: genre_lower.clone(),
            rating: detail.rating,
            relative_rating: 0.0,
            run_time: format_runtime(detail.run_time_minutes),
        });
    }

    if results.is_empty() {
        return Err(RecommendationError::NoDetailsFound(genre.to_string()));
    }

    let average = results.iter().map(|r| r.rating).sum::<f64>() / results.len() as f64;
    for entry in &mut results {
        entry.relative_rating = relative_rating(entry.rating, average);
    }

    // sort_by is stable
    results.sort_by(|a, b| b.relative_rating.total_cmp(&a.relative_rating));
    results.truncate(limit);

    info!(
        "Recommended {} {} movies (average rating {:.2})",
        results.len(),
        genre_lower,
        average
    );

    Ok(Recommendations {
        metrics: Metrics {
            total_run_time_minutes,
            response_time_ms: None,
        },
        results,
    })
}
