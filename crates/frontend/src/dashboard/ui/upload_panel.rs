//! Upload panel: send Q&A documents to the knowledge base.

use crate::dashboard::api;
use crate::dashboard::context::{DashboardContext, UploadedDoc};
use crate::shared::date_utils::format_timestamp;
use contracts::service::InsertDocRequest;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::{Button, ButtonAppearance, Space};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

/// File content is read as text immediately on selection, so the rest of the
/// panel only deals with plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
struct SelectedFile {
    name: String,
    size: u64,
    content: String,
}

#[component]
pub fn UploadPanel() -> impl IntoView {
    let ctx = use_context::<DashboardContext>().expect("DashboardContext not found");

    let (selected, set_selected) = signal(Option::<SelectedFile>::None);
    let (is_reading, set_is_reading) = signal(false);
    let (is_uploading, set_is_uploading) = signal(false);
    let (error, set_error) = signal(Option::<String>::None);
    let (notice, set_notice) = signal(Option::<String>::None);

    let handle_file_select = move |ev: web_sys::Event| {
        let input = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok());
        let file = input.and_then(|input| input.files()).and_then(|files| files.get(0));

        let Some(file) = file else {
            set_selected.set(None);
            return;
        };

        set_error.set(None);
        set_notice.set(None);
        set_is_reading.set(true);

        spawn_local(async move {
            let name = file.name();
            let size = file.size() as u64;
            match JsFuture::from(file.text()).await {
                Ok(value) => match value.as_string() {
                    Some(content) => set_selected.set(Some(SelectedFile { name, size, content })),
                    None => set_error.set(Some("File is not readable as text".to_string())),
                },
                Err(e) => set_error.set(Some(format!("Failed to read file: {:?}", e))),
            }
            set_is_reading.set(false);
        });
    };

    let handle_upload = move |_| {
        let Some(file) = selected.get() else {
            set_error.set(Some("Select a file first".to_string()));
            return;
        };

        let request = InsertDocRequest::text(ctx.app_name.get(), file.name.clone(), file.content);
        if let Err(e) = request.validate() {
            set_error.set(Some(e.to_string()));
            return;
        }

        set_is_uploading.set(true);
        set_error.set(None);
        set_notice.set(None);

        spawn_local(async move {
            match api::insert_doc_to_store(request).await {
                Ok(()) => {
                    ctx.push_uploaded(file.name, file.size);
                    set_notice.set(Some("Process success!".to_string()));
                }
                Err(e) => set_error.set(Some(e)),
            }
            set_is_uploading.set(false);
        });
    };

    let upload_disabled = Signal::derive(move || {
        selected.get().is_none() || is_reading.get() || is_uploading.get()
    });

    view! {
        <div class="upload-panel">
            <div class="form-group">
                <label for="app-name">"Application"</label>
                <input
                    type="text"
                    id="app-name"
                    placeholder="e.g. 'qa-register'"
                    value=move || ctx.app_name.get()
                    on:input=move |ev| ctx.app_name.set(event_target_value(&ev))
                    disabled=move || is_uploading.get()
                />
            </div>

            <div class="form-group">
                <label for="upload-file">"Q&A file"</label>
                <input
                    type="file"
                    id="upload-file"
                    on:change=handle_file_select
                    disabled=move || is_uploading.get()
                />
                {move || selected.get().map(|file| view! {
                    <span class="upload-panel__file-meta">
                        {format!("{} ({} bytes)", file.name, file.size)}
                    </span>
                })}
            </div>

            <Space>
                {view! {
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=handle_upload
                        disabled=upload_disabled
                    >
                        {move || if is_uploading.get() { "Uploading..." } else { "Upload" }}
                    </Button>
                }.into_any()}
            </Space>

            {move || error.get().map(|err| view! {
                <div class="error-message">{err}</div>
            })}
            {move || notice.get().map(|text| view! {
                <div class="upload-panel__notice">{text}</div>
            })}

            <Show when=move || !ctx.uploaded.get().is_empty()>
                <ul class="upload-panel__docs">
                    <For
                        each=move || ctx.uploaded.get()
                        key=|doc| doc.id
                        children=move |doc: UploadedDoc| {
                            view! {
                                <li class="upload-panel__doc">
                                    <span class="upload-panel__doc-name">{doc.name.clone()}</span>
                                    <span class="upload-panel__doc-meta">
                                        {format!("{} bytes, {}", doc.size, format_timestamp(doc.uploaded_at))}
                                    </span>
                                </li>
                            }
                        }
                    />
                </ul>
            </Show>
        </div>
    }
}
