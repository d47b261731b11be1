//! Tab selector bar for the dashboard page.

use crate::dashboard::context::DashboardContext;
use crate::dashboard::tabs::dom::TabElements;
use crate::dashboard::tabs::render::render_plan;
use crate::dashboard::tabs::ActiveTab;
use leptos::prelude::*;

/// The two tab selectors and the subtitle line.
///
/// The visual state (selector highlight, subtitle text, upload panel
/// visibility) is not templated here: an effect computes the patch plan for
/// the active tab and pushes it through the DOM binding. The effect runs
/// once after mount, which paints the initial Upload state, and again on
/// every transition.
#[component]
pub fn TabBar() -> impl IntoView {
    let ctx = use_context::<DashboardContext>().expect("DashboardContext not found");

    Effect::new(move |_| {
        let plan = render_plan(ctx.active.get());
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            TabElements::bind(&document).apply(&plan);
        }
    });

    view! {
        <div class="dashboard-tabs">
            <button
                type="button"
                id="upload-tab"
                class="dashboard-tabs__selector"
                on:click=move |_| ctx.select_upload()
            >
                {ActiveTab::Upload.label()}
            </button>
            <button
                type="button"
                id="response-tab"
                class="dashboard-tabs__selector"
                on:click=move |_| ctx.select_response()
            >
                {ActiveTab::Response.label()}
            </button>
        </div>
        <h2 id="sub-title" class="dashboard-tabs__subtitle"></h2>
    }
}
