//! Transient notification layer.
//!
//! A [`Toasts`] handle lives in context; pushing through it is the only way
//! the app surfaces zero-result and error conditions. Toasts stack top-right,
//! dismiss on click, and auto-expire.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

/// How long a toast stays on screen before auto-expiring.
const TOAST_TTL_MS: u32 = 4_000;

/// Visual category of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    /// Neutral information (e.g. a search returned nothing).
    Info,
    /// A failed operation.
    Error,
}

/// A single queued notification.
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    /// Monotonically increasing id, unique within the session.
    pub id: u64,

    /// Visual category.
    pub kind: ToastKind,

    /// Message text.
    pub message: String,
}

/// Context handle for pushing and dismissing toasts.
///
/// `Copy`, so closures can capture it freely.
#[derive(Clone, Copy)]
pub struct Toasts {
    items: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u64>,
}

impl Toasts {
    /// Create an empty toast queue.
    pub fn new() -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(0),
        }
    }

    /// Queue an informational toast, returning its id.
    pub fn info(&self, message: impl Into<String>) -> u64 {
        self.push(ToastKind::Info, message.into())
    }

    /// Queue an error toast, returning its id.
    pub fn error(&self, message: impl Into<String>) -> u64 {
        self.push(ToastKind::Error, message.into())
    }

    /// Remove the toast with the given id, if it is still queued.
    pub fn dismiss(&self, id: u64) {
        self.items.update(|items| items.retain(|toast| toast.id != id));
    }

    /// The queued toasts, oldest first.
    pub fn items(&self) -> Signal<Vec<Toast>> {
        self.items.into()
    }

    fn push(&self, kind: ToastKind, message: String) -> u64 {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);

        self.items.update(|items| {
            items.push(Toast { id, kind, message });
        });

        id
    }
}

impl Default for Toasts {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders the toast stack from the [`Toasts`] context.
#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = expect_context::<Toasts>();

    view! {
      <div class="cinegrid-toaster">
        <For
          each=move || toasts.items().get()
          key=|toast| toast.id
          children=move |toast| {
            view! { <ToastItem toast=toast /> }
          }
        />

      </div>
    }
}

/// A single toast; arms its expiry timer on mount.
#[component]
fn ToastItem(
    /// The toast to display.
    toast: Toast,
) -> impl IntoView {
    let toasts = expect_context::<Toasts>();
    let id = toast.id;

    Effect::new(move |_| {
        Timeout::new(TOAST_TTL_MS, move || toasts.dismiss(id)).forget();
    });

    let kind_class = match toast.kind {
        ToastKind::Info => "cinegrid-toast-info",
        ToastKind::Error => "cinegrid-toast-error",
    };

    view! {
      <div
        class=format!("cinegrid-toast {kind_class}")
        role="status"
        on:click=move |_| toasts.dismiss(id)
      >
        {toast.message.clone()}
      </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_info_queues_a_toast() {
        let toasts = Toasts::new();
        toasts.info("nothing found");

        let items = toasts.items().get_untracked();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].kind, ToastKind::Info);
        assert_eq!(items[0].message, "nothing found");
    }

    #[test]
    fn test_ids_increase_monotonically() {
        let toasts = Toasts::new();
        let first = toasts.info("a");
        let second = toasts.error("b");
        assert!(second > first);
    }

    #[test]
    fn test_dismiss_removes_only_the_matching_toast() {
        let toasts = Toasts::new();
        let first = toasts.info("a");
        let second = toasts.error("b");

        toasts.dismiss(first);

        let items = toasts.items().get_untracked();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, second);
    }

    #[test]
    fn test_dismissing_unknown_id_is_a_no_op() {
        let toasts = Toasts::new();
        toasts.info("a");

        toasts.dismiss(99);
        assert_eq!(toasts.items().get_untracked().len(), 1);
    }
}
