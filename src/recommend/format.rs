//! Formatting helpers for recommendation entries.

/// Renders minutes as `"<H>h <M>min"`.
pub fn format_runtime(minutes: u32) -> String {
    format!("{}h {}min", minutes / 60, minutes % 60)
}

/// `rating - average`, rounded to one decimal.
///
/// Rounds the exact binary difference, sending exact halves to the even
/// digit: a difference of 0.25 becomes 0.2, 0.75 becomes 0.8.
pub fn relative_rating(rating: f64, average: f64) -> f64 {
    let diff = rating - average;
    format!("{diff:.1}").parse().unwrap_or(diff)
}
