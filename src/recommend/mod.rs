//! Recommend Module
//!
//! Turns the catalog into a ranked, genre specific recommendation list.

mod aggregator;
mod format;
mod validate;


pub use aggregator::get_recommendations;
pub use format::{format_runtime, relative_rating};
pub use validate::{parse_limit, validate_genre, validate_limit, MAX_LIMIT, MIN_LIMIT};
