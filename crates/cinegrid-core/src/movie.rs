//! Movie records and result pages as returned by the search endpoint.

use serde::{Deserialize, Serialize};

use crate::config;

/// A single movie record.
///
/// Mirrors the wire shape of the remote search endpoint; fields that the
/// endpoint may omit are defaulted so partial records still deserialize.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    /// Stable identifier assigned by the remote database.
    pub id: u64,

    /// Display title.
    pub title: String,

    /// Plot summary, possibly empty.
    #[serde(default)]
    pub overview: String,

    /// Poster image path fragment (e.g. `/abc123.jpg`).
    #[serde(default)]
    pub poster_path: Option<String>,

    /// Backdrop image path fragment.
    #[serde(default)]
    pub backdrop_path: Option<String>,

    /// Release date in `YYYY-MM-DD` form, when known.
    #[serde(default)]
    pub release_date: Option<String>,

    /// Average user rating on a 0-10 scale.
    #[serde(default)]
    pub vote_average: f64,
}

impl Movie {
    /// Full URL of the grid-sized poster image, if the record has one.
    pub fn poster_url(&self) -> Option<String> {
        self.poster_path
            .as_deref()
            .map(|path| image_url(config::POSTER_SIZE, path))
    }

    /// Full URL of the full-width backdrop image, if the record has one.
    pub fn backdrop_url(&self) -> Option<String> {
        self.backdrop_path
            .as_deref()
            .map(|path| image_url(config::BACKDROP_SIZE, path))
    }
}

/// One page of search results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoviePage {
    /// 1-based index of this page.
    pub page: u32,

    /// Movies on this page, in relevance order.
    pub results: Vec<Movie>,

    /// Total number of pages available for the query.
    pub total_pages: u32,

    /// Total number of matching movies across all pages.
    #[serde(default)]
    pub total_results: u64,
}

impl MoviePage {
    /// Whether this page carries no results at all.
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

/// Join the image base URL, a size segment, and a path fragment.
fn image_url(size: &str, path: &str) -> String {
    format!("{}/{size}{path}", config::IMAGE_BASE_URL)
}
