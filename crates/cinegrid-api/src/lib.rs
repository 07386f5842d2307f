//! Cinegrid API Adapter
//!
//! Browser-side access to the remote movie search endpoint.
//!
//! # Features
//!
//! - **TmdbClient**: thin `gloo-net` wrapper over the `/search/movie`
//!   endpoint
//! - **PageCache**: keyed `(query, page)` response cache so repeated inputs
//!   reuse the last successful page instead of re-fetching
//!
//! The adapter never panics on remote failure; every outcome is an
//! [`ApiError`] the UI can render declaratively.

pub mod cache;
pub mod client;
pub mod error;

pub use cache::{PageCache, PageKey};
pub use client::TmdbClient;
pub use error::{ApiError, Result};
