use crate::dashboard::context::DashboardContext;
use crate::dashboard::ui::DashboardPage;
use crate::layout::Shell;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide the dashboard store to the whole app via context.
    provide_context(DashboardContext::new());

    view! {
        <Shell>
            <DashboardPage />
        </Shell>
    }
}
