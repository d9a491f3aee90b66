//! Simulated progress bar of the paste page.

use leptos::prelude::*;
use plwrd_domain::progress;

/// Horizontal bar filled to the current percentage, hidden when idle.
#[component]
pub fn ProgressBar(
    /// Bar state to render.
    #[prop(into)]
    bar: Signal<progress::ProgressBar>,
) -> impl IntoView {
    let width = move || format!("{}%", bar.with(progress::ProgressBar::value));
    let label = move || bar.with(progress::ProgressBar::label);

    view! {
        <div
            id="progressbar"
            class="progressbar"
            class:hidden=move || !bar.with(progress::ProgressBar::is_visible)
        >
            <div class="progressbar-value" style:width=width></div>
            <span class="progressbar-label">{label}</span>
        </div>
    }
}
