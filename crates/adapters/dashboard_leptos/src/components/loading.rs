//! Request-in-flight indicator.

use leptos::prelude::*;

/// A spinner shown while requests are pending.
#[component]
pub fn Loading(
    /// Whether any request is in flight.
    #[prop(into)]
    loading: Signal<bool>,
) -> impl IntoView {
    view! {
        <Show when=move || loading.get()>
            <div class="loading">
                <span class="spinner"></span>
                <span>"Loading…"</span>
            </div>
        </Show>
    }
}
