//! Dashboard page: tab bar, upload panel, response panel.

use super::response_panel::ResponsePanel;
use super::tab_bar::TabBar;
use super::upload_panel::UploadPanel;
use crate::dashboard::context::DashboardContext;
use crate::dashboard::tabs::ActiveTab;
use leptos::prelude::*;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let ctx = use_context::<DashboardContext>().expect("DashboardContext not found");

    view! {
        <div class="dashboard">
            <TabBar />

            // Upload container: its visibility is owned by the tab toggle.
            // Hidden keeps the layout space, the page does not reflow.
            <div id="upload" class="dashboard__upload">
                <UploadPanel />
            </div>

            <div
                class="dashboard__response"
                style=move || if ctx.active.get() == ActiveTab::Response { "" } else { "display: none;" }
            >
                <ResponsePanel />
            </div>
        </div>
    }
}
