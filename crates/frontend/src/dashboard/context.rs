use super::tabs::ActiveTab;
use chrono::{DateTime, Utc};
use leptos::prelude::*;
use uuid::Uuid;

/// A document uploaded during this session, shown in the list under the
/// upload form. The id is a client-side list key only; the service assigns
/// its own document ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedDoc {
    pub id: Uuid,
    pub name: String,
    pub size: u64,
    pub uploaded_at: DateTime<Utc>,
}

/// Dashboard-wide store, provided to the whole app via context.
#[derive(Clone, Copy)]
pub struct DashboardContext {
    pub active: RwSignal<ActiveTab>,
    /// Application routing key, shared by both panels.
    pub app_name: RwSignal<String>,
    pub uploaded: RwSignal<Vec<UploadedDoc>>,
}

impl DashboardContext {
    pub fn new() -> Self {
        Self {
            active: RwSignal::new(ActiveTab::default()),
            app_name: RwSignal::new(String::new()),
            uploaded: RwSignal::new(vec![]),
        }
    }

    pub fn select_upload(&self) {
        self.activate(ActiveTab::Upload);
    }

    pub fn select_response(&self) {
        self.activate(ActiveTab::Response);
    }

    fn activate(&self, tab: ActiveTab) {
        leptos::logging::log!("activate tab: {:?}", tab);
        self.active.set(tab);
    }

    /// Record a successful upload in the session list.
    pub fn push_uploaded(&self, name: String, size: u64) {
        let doc = UploadedDoc {
            id: Uuid::new_v4(),
            name,
            size,
            uploaded_at: Utc::now(),
        };
        self.uploaded.update(|docs| docs.push(doc));
    }
}
