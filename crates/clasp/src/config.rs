//! Runtime configuration for the query pipeline.
//!
//! Configuration can be loaded from environment variables or constructed
//! programmatically.

use std::env;

/// Feature flags for selector queries.
#[derive(Clone, Copy, Debug)]
pub struct ClaspConfig {
    /// Whether per-selector match results are memoized between queries
    pub query_cache_enabled: bool,
    /// Whether single-simple-selector queries take the direct walk path
    pub query_fast_paths: bool,
}

impl Default for ClaspConfig {
    fn default() -> Self {
        Self {
            query_cache_enabled: true,
            query_fast_paths: true,
        }
    }
}

impl ClaspConfig {
    /// Load configuration from environment variables.
    ///
    /// Reads the following environment variables:
    /// - `CLASP_QUERY_CACHE`: set to "0" to disable match memoization (default: enabled)
    /// - `CLASP_FAST_PATHS`: set to "0" to disable direct walks (default: enabled)
    #[inline]
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let query_cache_enabled = env::var("CLASP_QUERY_CACHE")
            .map_or(defaults.query_cache_enabled, |value| value != "0");
        let query_fast_paths = env::var("CLASP_FAST_PATHS")
            .map_or(defaults.query_fast_paths, |value| value != "0");
        Self {
            query_cache_enabled,
            query_fast_paths,
        }
    }
}
