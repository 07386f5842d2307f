//! Cinegrid application root.
//!
//! Wires the search state holder to the UI components: input events flow
//! into [`SearchController`], and the result area renders as a pure
//! function of [`SearchPhase`].

use cinegrid_api::TmdbClient;
use cinegrid_core::{ApiConfig, Movie};
use cinegrid_ui::{
    ErrorMessage, Loader, MovieGrid, MovieModal, Pagination, SearchBar, Toaster, Toasts,
};
use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

pub mod state;

pub use state::{SearchController, SearchPhase};

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let toasts = Toasts::new();
    provide_context(toasts);

    let search = SearchController::new(TmdbClient::new(ApiConfig::from_build_env()), toasts);
    search.bind();

    let phase = search.phase;
    let selected = search.selected;
    let current_page = search.page;

    let movies = Signal::derive(move || {
        phase.with(|phase| {
            phase
                .visible_page()
                .map(|page| page.results.clone())
                .unwrap_or_default()
        })
    });

    let total_pages = Signal::derive(move || {
        phase.with(|phase| phase.visible_page().map(|page| page.total_pages).unwrap_or(0))
    });

    let on_submit = {
        let search = search.clone();
        Callback::new(move |text: String| search.submit_query(&text))
    };
    let on_page = {
        let search = search.clone();
        Callback::new(move |page: u32| search.change_page(page))
    };
    let on_select = {
        let search = search.clone();
        Callback::new(move |movie: Movie| search.select(movie))
    };
    let on_close = {
        let search = search.clone();
        Callback::new(move |()| search.close_detail())
    };

    view! {
      <Title text="Cinegrid" />
      <Toaster />
      <SearchBar on_submit=on_submit />

      <main class="cinegrid-main">
        <Show when=move || phase.with(|phase| phase.is_failed())>
          <ErrorMessage />
        </Show>

        <Show when=move || movies.with(|movies| !movies.is_empty())>
          <MovieGrid movies=movies on_select=on_select />
          <Pagination current=current_page total_pages=total_pages on_page=on_page />
        </Show>

        <Show when=move || phase.with(|phase| phase.is_loading())>
          <Loader />
        </Show>
      </main>

      {move || {
        selected
          .get()
          .map(|movie| view! { <MovieModal movie=movie on_close=on_close /> })
      }}
    }
}
