//! TopHeader component - application top bar.

use leptos::prelude::*;

/// Top bar with the service brand. The dashboard page renders its own
/// subtitle below the tab selectors, so the bar stays static.
#[component]
pub fn TopHeader() -> impl IntoView {
    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <span class="top-header__title">"Register RAG"</span>
            </div>
        </div>
    }
}
