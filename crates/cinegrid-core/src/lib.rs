//! Cinegrid Core
//!
//! Shared domain types and configuration for the Cinegrid movie search
//! frontend.
//!
//! # Modules
//!
//! - [`movie`] - Movie records and result pages as returned by the search API
//! - [`query`] - Validated search query text
//! - [`config`] - API endpoint and image configuration

pub mod config;
pub mod movie;
pub mod query;

pub use config::ApiConfig;
pub use movie::{Movie, MoviePage};
pub use query::SearchQuery;
