//! Loading and error indicators.

use leptos::prelude::*;

/// Loading indicator shown while a results page is in flight.
#[component]
pub fn Loader() -> impl IntoView {
    view! {
      <div class="cinegrid-loader" role="status">
        <span class="cinegrid-spinner" aria-label="Loading"></span>
        <p>"Loading movies, please wait..."</p>
      </div>
    }
}

/// Generic error indicator that replaces the grid on a failed fetch.
#[component]
pub fn ErrorMessage(
    /// Optional detail line under the generic message.
    #[prop(optional)]
    detail: Option<String>,
) -> impl IntoView {
    let has_detail = detail.is_some();
    let detail_text = detail.unwrap_or_default();

    view! {
      <div class="cinegrid-error" role="alert">
        <p>"There was an error, please try again..."</p>
        <Show when=move || has_detail>
          <p class="cinegrid-error-detail">{detail_text.clone()}</p>
        </Show>
      </div>
    }
}
