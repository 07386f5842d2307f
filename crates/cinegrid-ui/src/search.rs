//! Search input component.

use leptos::prelude::*;

/// Query input form.
///
/// Emits the raw input text on submit; validation and trimming are owned by
/// the state holder, so this component stays a dumb input.
#[component]
pub fn SearchBar(
    /// Called with the raw input text when the form is submitted.
    #[prop(into)]
    on_submit: Callback<String>,
    /// Placeholder text for the input.
    #[prop(default = "Search movies...".to_string())]
    placeholder: String,
) -> impl IntoView {
    let input_ref = NodeRef::<leptos::html::Input>::new();

    // Focus input on mount
    Effect::new(move |_| {
        if let Some(input) = input_ref.get() {
            let _ = input.focus();
        }
    });

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if let Some(input) = input_ref.get() {
            on_submit.run(input.value());
        }
    };

    view! {
      <header class="cinegrid-searchbar">
        <form class="cinegrid-search-form" on:submit=submit>
          <input
            node_ref=input_ref
            type="text"
            name="query"
            class="cinegrid-search-input"
            placeholder=placeholder
            autocomplete="off"
          />
          <button type="submit" class="cinegrid-search-button">
            "Search"
          </button>
        </form>
      </header>
    }
}
