//! Search view state.
//!
//! Holds the (query, page, selection) trio behind reactive signals and runs
//! the paged fetch as a side effect, so the render layer stays a pure
//! function of [`SearchPhase`].

use cinegrid_api::TmdbClient;
use cinegrid_core::{Movie, MoviePage, SearchQuery};
use cinegrid_ui::Toasts;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Phase of the visible result area for the current `(query, page)` key.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SearchPhase {
    /// No query submitted yet.
    #[default]
    Idle,

    /// A fetch is in flight; `previous` keeps the last shown page visible
    /// so the layout does not flicker between pages.
    Loading { previous: Option<MoviePage> },

    /// The fetch resolved with at least one result.
    Loaded(MoviePage),

    /// The fetch resolved successfully but matched nothing.
    Empty,

    /// The fetch failed.
    Failed(String),
}

impl SearchPhase {
    /// The page that should currently be rendered, if any.
    pub fn visible_page(&self) -> Option<&MoviePage> {
        match self {
            SearchPhase::Loaded(page) => Some(page),
            SearchPhase::Loading { previous } => previous.as_ref(),
            _ => None,
        }
    }

    /// Whether a fetch is in flight.
    pub fn is_loading(&self) -> bool {
        matches!(self, SearchPhase::Loading { .. })
    }

    /// Whether the last fetch failed.
    pub fn is_failed(&self) -> bool {
        matches!(self, SearchPhase::Failed(_))
    }

    fn into_visible_page(self) -> Option<MoviePage> {
        match self {
            SearchPhase::Loaded(page) => Some(page),
            SearchPhase::Loading { previous } => previous,
            _ => None,
        }
    }
}

/// The search state holder.
///
/// All mutation goes through the operations below; the render layer only
/// reads the signals. Cloning shares the signals, the client, and the
/// toast queue.
#[derive(Clone)]
pub struct SearchController {
    /// Current query text; empty until the first accepted submit.
    pub query: RwSignal<String>,

    /// Current 1-based page, reset to 1 on every new query.
    pub page: RwSignal<u32>,

    /// Movie shown in the detail overlay.
    pub selected: RwSignal<Option<Movie>>,

    /// Phase of the visible result area.
    pub phase: RwSignal<SearchPhase>,

    client: TmdbClient,
    toasts: Toasts,
}

impl SearchController {
    /// Create a controller in the initial (no query) state.
    pub fn new(client: TmdbClient, toasts: Toasts) -> Self {
        Self {
            query: RwSignal::new(String::new()),
            page: RwSignal::new(1),
            selected: RwSignal::new(None),
            phase: RwSignal::new(SearchPhase::Idle),
            client,
            toasts,
        }
    }

    /// Accept a submitted query.
    ///
    /// Whitespace-only input is discarded without touching any state. An
    /// accepted query always resets the page to 1.
    pub fn submit_query(&self, raw: &str) {
        let Some(query) = SearchQuery::parse(raw) else {
            return;
        };

        self.query.set(query.into_inner());
        self.page.set(1);
    }

    /// Jump to a page of the current query.
    pub fn change_page(&self, page: u32) {
        self.page.set(page);
    }

    /// Open the detail overlay for a movie.
    pub fn select(&self, movie: Movie) {
        self.selected.set(Some(movie));
    }

    /// Close the detail overlay.
    pub fn close_detail(&self) {
        self.selected.set(None);
    }

    /// Install the fetch side effect.
    ///
    /// The effect watches `(query, page)` and spawns a fetch for every new
    /// key while the query is non-empty. Must be called from the component
    /// tree so the effect has a reactive owner.
    pub fn bind(&self) {
        let this = self.clone();

        Effect::new(move |_| {
            let raw = this.query.get();
            let page = this.page.get();

            let Some(query) = SearchQuery::parse(&raw) else {
                this.phase.set(SearchPhase::Idle);
                return;
            };

            this.phase.update(|phase| {
                let previous = std::mem::take(phase).into_visible_page();
                *phase = SearchPhase::Loading { previous };
            });

            let this = this.clone();
            spawn_local(async move {
                let outcome = this.client.search_movies(&query, page).await;
                this.commit(&query, page, outcome);
            });
        });
    }

    /// Commit a fetch outcome for the key it was issued under.
    ///
    /// A response whose key no longer matches the current `(query, page)`
    /// is stale and dropped, so late arrivals never overwrite newer state.
    /// Notifications fire here, exactly once per committed outcome.
    fn commit(&self, query: &SearchQuery, page: u32, outcome: cinegrid_api::Result<MoviePage>) {
        if self.query.get_untracked() != query.as_str() || self.page.get_untracked() != page {
            return;
        }

        match outcome {
            Ok(result) if result.is_empty() => {
                self.phase.set(SearchPhase::Empty);
                self.toasts
                    .info(format!("No movies found for \"{query}\"."));
            }
            Ok(result) => {
                self.phase.set(SearchPhase::Loaded(result));
            }
            Err(err) => {
                log::warn!("search failed: {err}");
                self.phase.set(SearchPhase::Failed(err.to_string()));
                self.toasts.error("Search failed. Please try again.");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use cinegrid_api::ApiError;
    use cinegrid_core::ApiConfig;
    use cinegrid_ui::ToastKind;

    use super::*;

    fn controller() -> SearchController {
        SearchController::new(TmdbClient::new(ApiConfig::default()), Toasts::new())
    }

    fn page_of(titles: &[&str], total_pages: u32) -> MoviePage {
        MoviePage {
            page: 1,
            results: titles
                .iter()
                .enumerate()
                .map(|(i, title)| Movie {
                    id: i as u64 + 1,
                    title: (*title).to_string(),
                    overview: String::new(),
                    poster_path: None,
                    backdrop_path: None,
                    release_date: None,
                    vote_average: 0.0,
                })
                .collect(),
            total_pages,
            total_results: titles.len() as u64,
        }
    }

    #[test]
    fn test_whitespace_submit_leaves_state_unchanged() {
        let search = controller();
        search.submit_query("matrix");
        search.change_page(3);

        search.submit_query("   \t");

        assert_eq!(search.query.get_untracked(), "matrix");
        assert_eq!(search.page.get_untracked(), 3);
    }

    #[test]
    fn test_new_query_resets_page_to_one() {
        let search = controller();
        search.submit_query("matrix");
        search.change_page(7);

        search.submit_query("  dune ");

        assert_eq!(search.query.get_untracked(), "dune");
        assert_eq!(search.page.get_untracked(), 1);
    }

    #[test]
    fn test_change_page_keeps_query() {
        let search = controller();
        search.submit_query("matrix");

        search.change_page(2);

        assert_eq!(search.query.get_untracked(), "matrix");
        assert_eq!(search.page.get_untracked(), 2);
    }

    #[test]
    fn test_select_and_close_detail() {
        let search = controller();
        let movie = page_of(&["The Matrix"], 1).results.remove(0);

        search.select(movie.clone());
        assert_eq!(search.selected.get_untracked(), Some(movie));

        search.close_detail();
        assert_eq!(search.selected.get_untracked(), None);
    }

    #[test]
    fn test_commit_nonempty_result_loads_without_toast() {
        let search = controller();
        search.submit_query("matrix");
        let query = SearchQuery::parse("matrix").unwrap();

        search.commit(&query, 1, Ok(page_of(&["The Matrix"], 3)));

        assert!(matches!(
            search.phase.get_untracked(),
            SearchPhase::Loaded(_)
        ));
        assert!(search.toasts.items().get_untracked().is_empty());
    }

    #[test]
    fn test_commit_empty_result_fires_one_info_toast() {
        let search = controller();
        search.submit_query("zzzz");
        let query = SearchQuery::parse("zzzz").unwrap();

        search.commit(&query, 1, Ok(page_of(&[], 0)));

        assert_eq!(search.phase.get_untracked(), SearchPhase::Empty);
        let toasts = search.toasts.items().get_untracked();
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].kind, ToastKind::Info);
    }

    #[test]
    fn test_commit_failure_fires_one_error_toast() {
        let search = controller();
        search.submit_query("matrix");
        let query = SearchQuery::parse("matrix").unwrap();

        search.commit(&query, 1, Err(ApiError::Status { status: 502 }));

        assert!(search.phase.get_untracked().is_failed());
        let toasts = search.toasts.items().get_untracked();
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].kind, ToastKind::Error);
    }

    #[test]
    fn test_stale_commit_is_dropped() {
        let search = controller();
        search.submit_query("matrix");
        search.change_page(2);
        let stale = SearchQuery::parse("matrix").unwrap();

        // Page moved on since this response was issued
        search.commit(&stale, 1, Ok(page_of(&["The Matrix"], 3)));

        assert_eq!(search.phase.get_untracked(), SearchPhase::Idle);
        assert!(search.toasts.items().get_untracked().is_empty());
    }

    #[test]
    fn test_loading_keeps_previous_page_visible() {
        let shown = page_of(&["The Matrix"], 3);
        let phase = SearchPhase::Loading {
            previous: Some(shown.clone()),
        };

        assert!(phase.is_loading());
        assert_eq!(phase.visible_page(), Some(&shown));
    }

    #[test]
    fn test_terminal_phases_expose_no_page_except_loaded() {
        assert_eq!(SearchPhase::Idle.visible_page(), None);
        assert_eq!(SearchPhase::Empty.visible_page(), None);
        assert_eq!(SearchPhase::Failed("boom".to_string()).visible_page(), None);

        let loaded = SearchPhase::Loaded(page_of(&["The Matrix"], 1));
        assert!(loaded.visible_page().is_some());
    }
}
