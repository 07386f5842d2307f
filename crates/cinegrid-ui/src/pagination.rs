//! Page controls for paged search results.

use leptos::prelude::*;

/// Pages shown in the sliding window around the current page.
const PAGE_WINDOW: u32 = 5;

/// Pages always shown at each end of the range.
const MARGIN_PAGES: u32 = 1;

/// One rendered pager control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    /// A numbered page button (1-based).
    Page(u32),
    /// A non-interactive separator between page groups.
    Ellipsis,
}

/// Compute the pager controls for `current` of `total` pages.
///
/// Small ranges render every page. Larger ranges render `margin` pages at
/// each end plus a `window`-wide group around the current page, with one
/// ellipsis per gap. The window is clamped so it never runs past either end.
pub fn page_items(current: u32, total: u32, window: u32, margin: u32) -> Vec<PageItem> {
    if total <= window + 2 * margin {
        return (1..=total).map(PageItem::Page).collect();
    }

    let half = window / 2;
    let window_start = current.saturating_sub(half).clamp(1, total - window + 1);
    let window_end = window_start + window - 1;

    let included =
        |page: u32| page <= margin || page > total - margin || (window_start..=window_end).contains(&page);

    let mut items = Vec::new();
    let mut in_gap = false;
    for page in 1..=total {
        if included(page) {
            items.push(PageItem::Page(page));
            in_gap = false;
        } else if !in_gap {
            items.push(PageItem::Ellipsis);
            in_gap = true;
        }
    }
    items
}

/// Page controls.
///
/// Renders nothing when there is at most one page. Emits the chosen 1-based
/// page index through `on_page`.
#[component]
pub fn Pagination(
    /// The current 1-based page.
    #[prop(into)]
    current: Signal<u32>,
    /// Total number of pages for the query.
    #[prop(into)]
    total_pages: Signal<u32>,
    /// Called with the newly chosen page.
    #[prop(into)]
    on_page: Callback<u32>,
) -> impl IntoView {
    view! {
      <Show when=move || { total_pages.get() > 1 }>
        <nav class="cinegrid-pagination" aria-label="Search result pages">
          <button
            class="cinegrid-page-arrow"
            disabled=move || { current.get() <= 1 }
            on:click=move |_| {
              let page = current.get();
              if page > 1 {
                on_page.run(page - 1);
              }
            }
          >
            "←"
          </button>

          {move || {
            page_items(current.get(), total_pages.get(), PAGE_WINDOW, MARGIN_PAGES)
              .into_iter()
              .map(|item| match item {
                PageItem::Page(page) => {
                  let active = page == current.get();
                  view! {
                    <button
                      class="cinegrid-page"
                      class:active=active
                      aria-current=move || { if active { Some("page") } else { None } }
                      on:click=move |_| on_page.run(page)
                    >
                      {page}
                    </button>
                  }
                    .into_any()
                }
                PageItem::Ellipsis => {
                  view! { <span class="cinegrid-page-break">"…"</span> }.into_any()
                }
              })
              .collect_view()
          }}

          <button
            class="cinegrid-page-arrow"
            disabled=move || { current.get() >= total_pages.get() }
            on:click=move |_| {
              let page = current.get();
              if page < total_pages.get() {
                on_page.run(page + 1);
              }
            }
          >
            "→"
          </button>
        </nav>
      </Show>
    }
}
