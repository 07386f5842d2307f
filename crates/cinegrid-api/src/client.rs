//! HTTP client for the remote movie search endpoint.

use cinegrid_core::{ApiConfig, MoviePage, SearchQuery};
use gloo_net::http::Request;

use crate::cache::{PageCache, PageKey};
use crate::error::{ApiError, Result};

/// Client for the `/search/movie` endpoint.
///
/// Wraps `gloo-net` with bearer authentication and a keyed response cache.
/// Cloning is cheap; clones share the cache.
#[derive(Debug, Clone)]
pub struct TmdbClient {
    config: ApiConfig,
    cache: PageCache,
}

impl TmdbClient {
    /// Create a client from an API configuration.
    pub fn new(config: ApiConfig) -> Self {
        Self {
            config,
            cache: PageCache::new(),
        }
    }

    /// The configuration this client was built with.
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Fetch one page of search results.
    ///
    /// A cached page for the same `(query, page)` key is returned without a
    /// network round trip. Successful responses are cached before being
    /// returned.
    pub async fn search_movies(&self, query: &SearchQuery, page: u32) -> Result<MoviePage> {
        let key = PageKey::new(query.as_str(), page);

        if let Some(hit) = self.cache.get(&key).await {
            log::debug!("cache hit for {:?} page {page}", query.as_str());
            return Ok(hit);
        }

        let token = self
            .config
            .bearer_token
            .as_deref()
            .ok_or(ApiError::MissingToken)?;

        let url = format!("{}/search/movie", self.config.base_url);
        let page_param = page.to_string();
        let include_adult = if self.config.include_adult {
            "true"
        } else {
            "false"
        };

        log::debug!("fetching {:?} page {page}", query.as_str());

        let response = Request::get(&url)
            .query([
                ("query", query.as_str()),
                ("include_adult", include_adult),
                ("language", &self.config.language),
                ("page", &page_param),
            ])
            .header("Authorization", &format!("Bearer {token}"))
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(ApiError::Status {
                status: response.status(),
            });
        }

        let result_page: MoviePage = response
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;

        self.cache.insert(key, result_page.clone()).await;

        Ok(result_page)
    }
}

#[cfg(test)]
mod tests {
    use cinegrid_core::Movie;

    use super::*;

    fn one_result_page() -> MoviePage {
        MoviePage {
            page: 1,
            results: vec![Movie {
                id: 603,
                title: "The Matrix".to_string(),
                overview: String::new(),
                poster_path: None,
                backdrop_path: None,
                release_date: None,
                vote_average: 0.0,
            }],
            total_pages: 3,
            total_results: 42,
        }
    }

    #[test]
    fn test_new_stores_config() {
        let config = ApiConfig::default().with_bearer_token("secret");
        let client = TmdbClient::new(config.clone());
        assert_eq!(client.config(), &config);
    }

    #[test]
    fn test_clones_share_the_cache() {
        let client = TmdbClient::new(ApiConfig::default());
        let clone = client.clone();

        client
            .cache
            .insert_sync(PageKey::new("matrix", 1), one_result_page());

        let hit = clone.cache.get_sync(&PageKey::new("matrix", 1)).unwrap();
        assert_eq!(hit.results.len(), 1);
        assert_eq!(hit.total_pages, 3);
    }
}
