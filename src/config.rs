//! Configuration Module
//!
//! Handles loading service configuration from environment variables.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::catalog::RetryPolicy;

/// Base URL of the movie catalog service.
pub const DEFAULT_BASE_URL: &str = "https://us-central1-creator-studio-workflows.cloudfunctions.net";

/// Service configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Catalog service base URL, without trailing slash
    pub api_base_url: String,
    /// Static credential sent in the `Authorization` header
    pub api_token: String,
    /// Per upstream call timeout in seconds
    pub request_timeout: u64,
    /// TTL in seconds of both cache namespaces
    pub cache_ttl: u64,
    /// Total attempts per upstream call
    pub retry_attempts: usize,
    /// Backoff table in seconds; entry i is slept before retry i
    pub retry_delays: Vec<u64>,
    /// HTTP server port
    pub server_port: u16,
    /// Background cleanup task interval in seconds
    pub cleanup_interval: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `MOVIE_API_BASE_URL` - Catalog service base URL
    /// - `MOVIE_API_TOKEN` - Authorization header value (default: xyz)
    /// - `REQUEST_TIMEOUT` - Upstream timeout in seconds (default: 10)
    /// - `CACHE_TTL` - Cache TTL in seconds (default: 300)
    /// - `RETRY_ATTEMPTS` - Attempts per upstream call (default: 3)
    /// - `RETRY_DELAYS` - Comma separated backoff seconds (default: 1,3,5)
    /// - `SERVER_PORT` - HTTP server port (default: 5001)
    /// - `CLEANUP_INTERVAL` - Cleanup frequency in seconds (default: 60)
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            api_base_url: env::var("MOVIE_API_BASE_URL")
                .ok()
                .map(|v| v.trim_end_matches('/').to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or(defaults.api_base_url),
            api_token: env::var("MOVIE_API_TOKEN").unwrap_or(defaults.api_token),
            request_timeout: parse_var("REQUEST_TIMEOUT").unwrap_or(defaults.request_timeout),
            cache_ttl: parse_var("CACHE_TTL").unwrap_or(defaults.cache_ttl),
            retry_attempts: parse_var("RETRY_ATTEMPTS")
                .filter(|attempts| *attempts > 0)
                .unwrap_or(defaults.retry_attempts),
            retry_delays: env::var("RETRY_DELAYS")
                .ok()
                .and_then(|v| parse_delays(&v))
                .unwrap_or(defaults.retry_delays),
            server_port: parse_var("SERVER_PORT").unwrap_or(defaults.server_port),
            cleanup_interval: parse_var("CLEANUP_INTERVAL")
                .filter(|secs| *secs > 0)
                .unwrap_or(defaults.cleanup_interval),
        }
    }

    /// Retry policy for upstream calls.
    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy::new(
            self.retry_attempts,
            self.retry_delays.iter().map(|s| Duration::from_secs(*s)).collect(),
        )
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout)
    }

    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_BASE_URL.to_string(),
            api_token: "xyz".to_string(),
            request_timeout: 10,
            cache_ttl: 300,
            retry_attempts: 3,
            retry_delays: vec![1, 3, 5],
            server_port: 5001,
            cleanup_interval: 60,
        }
    }
}

fn parse_var<T: FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.trim().parse().ok())
}

/// Parses `"1,3,5"` into `[1, 3, 5]`. Any bad element rejects the whole list.
fn parse_delays(raw: &str) -> Option<Vec<u64>> {
    let delays: Option<Vec<u64>> = raw.split(',').map(|s| s.trim().parse().ok()).collect();
    delays.filter(|d| !d.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.api_base_url, DEFAULT_BASE_URL);
        assert_eq!(config.api_token, "xyz");
        assert_eq!(config.request_timeout(), Duration::from_secs(10));
        assert_eq!(config.cache_ttl(), Duration::from_secs(300));
        assert_eq!(config.retry_attempts, 3);
        assert_eq!(config.retry_delays, vec![1, 3, 5]);
        assert_eq!(config.server_port, 5001);
    }

    #[test]
    fn test_config_from_env_defaults() {
        // Clear any existing env vars to test defaults
        for name in [
            "MOVIE_API_BASE_URL",
            "MOVIE_API_TOKEN",
            "REQUEST_TIMEOUT",
            "CACHE_TTL",
            "RETRY_ATTEMPTS",
            "RETRY_DELAYS",
            "SERVER_PORT",
            "CLEANUP_INTERVAL",
        ] {
            env::remove_var(name);
        }

        let config = Config::from_env();
        assert_eq!(config.api_base_url, DEFAULT_BASE_URL);
        assert_eq!(config.cache_ttl, 300);
        assert_eq!(config.server_port, 5001);
        assert_eq!(config.cleanup_interval, 60);
    }

    #[test]
    fn test_parse_delays() {
        assert_eq!(parse_delays("1,3,5"), Some(vec![1, 3, 5]));
        assert_eq!(parse_delays(" 2 , 4 "), Some(vec![2, 4]));
        assert_eq!(parse_delays("1,x"), None);
        assert_eq!(parse_delays(""), None);
    }

    #[test]
    fn test_retry_policy_from_config() {
        let policy = Config::default().retry_policy();
        assert_eq!(policy.max_attempts(), 3);
        assert_eq!(policy.delay_before_retry(0), Duration::from_secs(1));
        assert_eq!(policy.delay_before_retry(1), Duration::from_secs(3));
    }
}
