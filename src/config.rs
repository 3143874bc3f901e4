//! Configuration for the Spotify library client.
//!
//! This module provides the immutable configuration passed to the client at
//! construction time. Values are resolved following a hierarchical approach:
//! 1. Explicit values passed to [`Config::new`] (highest priority)
//! 2. Environment variables, optionally loaded from a `.env` file
//! 3. The official Spotify Web API defaults

use std::env;

/// Base URL of the official Spotify Web API.
pub const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";

/// Immutable client configuration.
///
/// Holds the base URL all library requests are issued against. The
/// configuration is captured once at client construction and never mutated
/// afterwards; pointing the client at a different host requires building a
/// new client.
#[derive(Debug, Clone)]
pub struct Config {
    api_url: String,
}

impl Config {
    /// Creates a configuration with an explicit API base URL.
    ///
    /// A trailing slash on the URL is stripped so endpoint paths can be
    /// appended verbatim.
    ///
    /// # Example
    ///
    /// ```
    /// let config = Config::new("http://127.0.0.1:8080");
    /// ```
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Builds a configuration from the environment.
    ///
    /// Loads a `.env` file from the working directory when present, then
    /// reads the `SPOTIFY_API_URL` variable. Falls back to the official
    /// API URL when the variable is not set.
    ///
    /// # Example
    ///
    /// ```
    /// let config = Config::from_env(); // e.g. "https://api.spotify.com/v1"
    /// ```
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();
        let api_url = env::var("SPOTIFY_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        Self::new(api_url)
    }

    /// Returns the API base URL requests are issued against.
    pub fn api_url(&self) -> &str {
        &self.api_url
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}
