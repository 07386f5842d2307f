//! API endpoint and image configuration.

use serde::{Deserialize, Serialize};

/// Base URL of the image CDN.
pub const IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p";

/// Image size segment used for grid posters.
pub const POSTER_SIZE: &str = "w500";

/// Image size segment used for detail backdrops.
pub const BACKDROP_SIZE: &str = "original";

/// Configuration for the remote search API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the search API (no trailing slash).
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Bearer token presented on every request.
    #[serde(default)]
    pub bearer_token: Option<String>,

    /// Result language passed to the endpoint.
    #[serde(default = "default_language")]
    pub language: String,

    /// Whether adult titles are included in results.
    #[serde(default)]
    pub include_adult: bool,
}

impl ApiConfig {
    /// Build a config with the token baked in at compile time from the
    /// `CINEGRID_TMDB_TOKEN` environment variable.
    ///
    /// A missing token is not an error here; it surfaces on the first
    /// request instead, through the adapter's error path.
    pub fn from_build_env() -> Self {
        Self {
            bearer_token: option_env!("CINEGRID_TMDB_TOKEN").map(str::to_owned),
            ..Self::default()
        }
    }

    /// Replace the bearer token.
    pub fn with_bearer_token(mut self, token: impl Into<String>) -> Self {
        self.bearer_token = Some(token.into());
        self
    }

    /// Replace the base URL, stripping any trailing slash.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            bearer_token: None,
            language: default_language(),
            include_adult: false,
        }
    }
}

// Default value functions
fn default_base_url() -> String {
    "https://api.themoviedb.org/3".to_string()
}

fn default_language() -> String {
    "en-US".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ApiConfig::default();
        assert_eq!(config.base_url, "https://api.themoviedb.org/3");
        assert_eq!(config.language, "en-US");
        assert!(config.bearer_token.is_none());
        assert!(!config.include_adult);
    }

    #[test]
    fn test_with_bearer_token() {
        let config = ApiConfig::default().with_bearer_token("secret");
        assert_eq!(config.bearer_token.as_deref(), Some("secret"));
    }

    #[test]
    fn test_with_base_url_strips_trailing_slash() {
        let config = ApiConfig::default().with_base_url("https://example.com/api/");
        assert_eq!(config.base_url, "https://example.com/api");
    }

    #[test]
    fn test_config_deserializes_with_defaults() {
        let config: ApiConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, ApiConfig::default());
    }
}
