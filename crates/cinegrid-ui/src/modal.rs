//! Detail overlay for a selected movie.

use cinegrid_core::Movie;
use leptos::prelude::*;

/// Detail overlay.
///
/// Renders the selected movie; emits a close request on the close button,
/// a click on the overlay backdrop, or the Escape key. Performs no data
/// fetching of its own.
#[component]
pub fn MovieModal(
    /// The movie to display.
    movie: Movie,
    /// Called when the user asks to close the overlay.
    #[prop(into)]
    on_close: Callback<()>,
) -> impl IntoView {
    // Close on Escape while the overlay is mounted
    Effect::new(move |_| {
        use wasm_bindgen::{JsCast, prelude::*};

        let handler =
            Closure::<dyn Fn(web_sys::KeyboardEvent)>::new(move |ev: web_sys::KeyboardEvent| {
                if ev.key() == "Escape" {
                    on_close.run(());
                }
            });

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("keydown", handler.as_ref().unchecked_ref());
        }

        on_cleanup(move || {
            if let Some(window) = web_sys::window() {
                let _ = window
                    .remove_event_listener_with_callback("keydown", handler.as_ref().unchecked_ref());
            }
        });
    });

    // Close when clicking the overlay backdrop
    let on_overlay_click = move |_| on_close.run(());

    // Prevent closing when clicking the modal content
    let on_content_click = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
    };

    let backdrop = movie.backdrop_url();
    let title = movie.title.clone();
    let alt = title.clone();
    let overview = movie.overview.clone();
    let release_date = movie.release_date.clone();
    let has_release_date = release_date.is_some();
    let rating = format!("{:.1}/10", movie.vote_average);

    view! {
      <div class="cinegrid-modal-overlay" on:click=on_overlay_click role="dialog" aria-modal="true">
        <div class="cinegrid-modal" on:click=on_content_click>
          <button
            class="cinegrid-modal-close"
            on:click=move |_| on_close.run(())
            aria-label="Close details"
          >
            "×"
          </button>

          {backdrop
            .map(|url| {
              view! { <img class="cinegrid-modal-backdrop" src=url alt=alt.clone() /> }
            })}

          <div class="cinegrid-modal-body">
            <h2 class="cinegrid-modal-title">{title}</h2>
            <p class="cinegrid-modal-overview">{overview}</p>
            <Show when=move || has_release_date>
              <p class="cinegrid-modal-meta">
                "Release date: " {release_date.clone().unwrap_or_default()}
              </p>
            </Show>
            <p class="cinegrid-modal-meta">"Rating: " {rating.clone()}</p>
          </div>
        </div>
      </div>
    }
}
