//! Response panel: answer queries from the knowledge base.

use crate::dashboard::api;
use crate::dashboard::context::DashboardContext;
use contracts::service::GetResponseRequest;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::{Button, ButtonAppearance, Space};

#[component]
pub fn ResponsePanel() -> impl IntoView {
    let ctx = use_context::<DashboardContext>().expect("DashboardContext not found");

    let (query, set_query) = signal(String::new());
    let (answer, set_answer) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);
    let (error, set_error) = signal(Option::<String>::None);

    let handle_ask = move |_| {
        let request = GetResponseRequest::new(ctx.app_name.get(), query.get());
        if let Err(e) = request.validate() {
            set_error.set(Some(e.to_string()));
            return;
        }

        set_is_loading.set(true);
        set_error.set(None);

        spawn_local(async move {
            match api::get_response_from_llm(request).await {
                Ok(text) => set_answer.set(Some(text)),
                Err(e) => set_error.set(Some(e)),
            }
            set_is_loading.set(false);
        });
    };

    view! {
        <div class="response-panel">
            <div class="form-group">
                <label for="query">"Query"</label>
                <textarea
                    id="query"
                    placeholder="Ask about the uploaded documents"
                    prop:value=move || query.get()
                    on:input=move |ev| set_query.set(event_target_value(&ev))
                    disabled=move || is_loading.get()
                ></textarea>
            </div>

            <Space>
                {view! {
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=handle_ask
                        disabled=is_loading
                    >
                        {move || if is_loading.get() { "Waiting..." } else { "Response" }}
                    </Button>
                }.into_any()}
            </Space>

            <div class="response-panel__result">
                {move || {
                    if is_loading.get() {
                        view! {
                            <div class="loading-state">
                                <div class="spinner"></div>
                                <p>"Generating response..."</p>
                            </div>
                        }.into_any()
                    } else if let Some(err) = error.get() {
                        view! {
                            <div class="error-state">
                                <p class="error-title">"Error"</p>
                                <p class="error-message">{err}</p>
                            </div>
                        }.into_any()
                    } else if let Some(text) = answer.get() {
                        view! {
                            <div class="response-panel__answer">
                                <p>{text}</p>
                            </div>
                        }.into_any()
                    } else {
                        view! {
                            <div class="empty-state">
                                <p>"Ask a question to get an answer from the register"</p>
                            </div>
                        }.into_any()
                    }
                }}
            </div>
        </div>
    }
}
