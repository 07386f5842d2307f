//! Results grid components.

use cinegrid_core::Movie;
use leptos::prelude::*;

/// Poster grid.
///
/// Pure rendering: one card per movie, keyed by id; clicking a card emits
/// that movie through `on_select`.
#[component]
pub fn MovieGrid(
    /// The movies to display, in result order.
    #[prop(into)]
    movies: Signal<Vec<Movie>>,
    /// Called with the clicked movie.
    #[prop(into)]
    on_select: Callback<Movie>,
) -> impl IntoView {
    view! {
      <ul class="cinegrid-grid">
        <For
          each=move || movies.get()
          key=|movie| movie.id
          children=move |movie| {
            view! { <MovieCard movie=movie on_select=on_select /> }
          }
        />

      </ul>
    }
}

/// Individual grid cell.
#[component]
fn MovieCard(
    /// The movie to display.
    movie: Movie,
    /// Called when the card is clicked.
    on_select: Callback<Movie>,
) -> impl IntoView {
    let poster = movie.poster_url();
    let title = movie.title.clone();
    let alt = title.clone();

    let select = {
        let movie = movie.clone();
        move |_| on_select.run(movie.clone())
    };

    view! {
      <li class="cinegrid-card" on:click=select>
        {match poster {
          Some(url) => {
            view! { <img class="cinegrid-poster" src=url alt=alt loading="lazy" /> }.into_any()
          }
          None => {
            view! { <div class="cinegrid-poster cinegrid-poster-missing">{alt}</div> }.into_any()
          }
        }}
        <p class="cinegrid-card-title">{title}</p>
      </li>
    }
}
