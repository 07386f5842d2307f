//! Cinegrid UI Components
//!
//! Leptos components for the Cinegrid frontend.
//!
//! # Components
//!
//! ## Search
//! - [`SearchBar`] - Query input form, emits submitted text
//!
//! ## Results
//! - [`MovieGrid`] - Poster grid, emits the clicked movie
//! - [`Pagination`] - Page controls, hidden when there is a single page
//!
//! ## Detail
//! - [`MovieModal`] - Overlay with movie details (Esc / backdrop close)
//!
//! ## Feedback
//! - [`Loader`] - Loading indicator
//! - [`ErrorMessage`] - Generic error indicator
//! - [`Toaster`] / [`Toasts`] - Transient, auto-expiring notifications
//!
//! # Example
//!
//! ```ignore
//! use leptos::prelude::*;
//! use cinegrid_ui::{SearchBar, MovieGrid, Toaster, Toasts};
//!
//! #[component]
//! fn App() -> impl IntoView {
//!     provide_context(Toasts::new());
//!     let movies = Signal::derive(|| vec![]);
//!
//!     view! {
//!         <Toaster />
//!         <SearchBar on_submit=move |text: String| log::info!("{text}") />
//!         <MovieGrid movies=movies on_select=move |_| {} />
//!     }
//! }
//! ```

pub mod grid;
pub mod modal;
pub mod pagination;
pub mod search;
pub mod status;
pub mod toast;

pub use grid::MovieGrid;
pub use modal::MovieModal;
pub use pagination::{PageItem, Pagination, page_items};
pub use search::SearchBar;
pub use status::{ErrorMessage, Loader};
pub use toast::{Toast, ToastKind, Toaster, Toasts};
