//! Input checks applied before the pipeline runs.

use std::num::IntErrorKind;

use lazy_static::lazy_static;
use regex::Regex;

pub const MIN_LIMIT: usize = 1;
pub const MAX_LIMIT: usize = 10;

lazy_static! {
    static ref GENRE_RE: Regex = Regex::new(r"^[a-zA-Z\s]+$").unwrap();
}

/// Letters and whitespace only; the empty string is rejected.
pub fn validate_genre(genre: &str) -> bool {
    GENRE_RE.is_match(genre)
}

/// Parses a raw limit. Integers too large for `i64` saturate so that they
/// still read as out of range; anything that is not an integer is `None`.
pub fn parse_limit(raw: &str) -> Option<i64> {
    match raw.trim().parse::<i64>() {
        Ok(limit) => Some(limit),
        Err(err) => match err.kind() {
            IntErrorKind::PosOverflow => Some(i64::MAX),
            IntErrorKind::NegOverflow => Some(i64::MIN),
            _ => None,
        },
    }
}

/// Returns the limit as `usize` when it lies in `1..=10`.
pub fn validate_limit(limit: i64) -> Option<usize> {
    usize::try_from(limit)
        .ok()
        .filter(|limit| (MIN_LIMIT..=MAX_LIMIT).contains(limit))
}
