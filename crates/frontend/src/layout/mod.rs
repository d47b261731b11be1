pub mod top_header;

use leptos::prelude::*;
use top_header::TopHeader;

/// Page chrome shared by the whole application.
///
/// Layout structure:
/// ```text
/// +------------------------------------------+
/// |              TopHeader                    |
/// +------------------------------------------+
/// |              Content                      |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <TopHeader />

            <div class="app-body">
                <div class="app-main">{children()}</div>
            </div>
        </div>
    }
}
