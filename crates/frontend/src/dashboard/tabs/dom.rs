//! DOM adapter for the tab toggle.
//!
//! Holds the handles for the four toggle targets and applies patch plans to
//! them. Every handle is optional: a page variant missing one of the
//! elements keeps working and the corresponding patches are skipped.

use super::render::{Mutation, Patch, Target};
use wasm_bindgen::JsCast;
use web_sys::Document;

/// Minimal element surface the adapter needs. `web_sys::HtmlElement` is the
/// production implementation; tests substitute a recording fake.
pub trait ElementSink {
    fn set_style(&self, property: &str, value: &str);
    fn set_text(&self, text: &str);
}

impl ElementSink for web_sys::HtmlElement {
    fn set_style(&self, property: &str, value: &str) {
        let _ = self.style().set_property(property, value);
    }

    fn set_text(&self, text: &str) {
        self.set_text_content(Some(text));
    }
}

/// Handles for the toggle targets, injected rather than looked up by the
/// logic itself.
pub struct TabElements<E> {
    pub upload_selector: Option<E>,
    pub response_selector: Option<E>,
    pub sub_title: Option<E>,
    pub upload_panel: Option<E>,
}

impl<E: ElementSink> TabElements<E> {
    /// Whether `target` resolved to an element on this page.
    pub fn is_bound(&self, target: Target) -> bool {
        self.element(target).is_some()
    }

    /// Apply `plan` to the bound elements, skipping unbound targets.
    pub fn apply(&self, plan: &[Patch]) {
        for patch in plan {
            let Some(element) = self.element(patch.target) else {
                continue;
            };
            match patch.mutation {
                Mutation::Background(value) => element.set_style("background-color", value),
                Mutation::Visibility(value) => element.set_style("visibility", value),
                Mutation::Text(value) => element.set_text(value),
            }
        }
    }

    fn element(&self, target: Target) -> Option<&E> {
        match target {
            Target::UploadSelector => self.upload_selector.as_ref(),
            Target::ResponseSelector => self.response_selector.as_ref(),
            Target::SubTitle => self.sub_title.as_ref(),
            Target::UploadPanel => self.upload_panel.as_ref(),
        }
    }
}

impl TabElements<web_sys::HtmlElement> {
    /// Resolve the four targets by element id.
    pub fn bind(document: &Document) -> Self {
        let by_id = |target: Target| {
            document
                .get_element_by_id(target.element_id())
                .and_then(|element| element.dyn_into::<web_sys::HtmlElement>().ok())
        };

        Self {
            upload_selector: by_id(Target::UploadSelector),
            response_selector: by_id(Target::ResponseSelector),
            sub_title: by_id(Target::SubTitle),
            upload_panel: by_id(Target::UploadPanel),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::tabs::render::{render_plan, HIDDEN, HIGHLIGHT, NO_HIGHLIGHT, VISIBLE};
    use crate::dashboard::tabs::state::ActiveTab;
    use std::cell::RefCell;
    use std::collections::HashMap;

    #[derive(Default)]
    struct FakeElement {
        styles: RefCell<HashMap<String, String>>,
        text: RefCell<Option<String>>,
    }

    impl FakeElement {
        fn style(&self, property: &str) -> Option<String> {
            self.styles.borrow().get(property).cloned()
        }
    }

    impl ElementSink for FakeElement {
        fn set_style(&self, property: &str, value: &str) {
            self.styles
                .borrow_mut()
                .insert(property.to_string(), value.to_string());
        }

        fn set_text(&self, text: &str) {
            *self.text.borrow_mut() = Some(text.to_string());
        }
    }

    fn full_page() -> TabElements<FakeElement> {
        TabElements {
            upload_selector: Some(FakeElement::default()),
            response_selector: Some(FakeElement::default()),
            sub_title: Some(FakeElement::default()),
            upload_panel: Some(FakeElement::default()),
        }
    }

    #[test]
    fn applies_full_upload_state() {
        let page = full_page();
        page.apply(&render_plan(ActiveTab::Upload));

        let upload = page.upload_selector.as_ref().unwrap();
        let response = page.response_selector.as_ref().unwrap();
        let sub_title = page.sub_title.as_ref().unwrap();
        let panel = page.upload_panel.as_ref().unwrap();

        assert_eq!(upload.style("background-color").as_deref(), Some(HIGHLIGHT));
        assert_eq!(response.style("background-color").as_deref(), Some(NO_HIGHLIGHT));
        assert_eq!(sub_title.text.borrow().as_deref(), Some("Upload"));
        assert_eq!(panel.style("visibility").as_deref(), Some(VISIBLE));
    }

    #[test]
    fn response_then_upload_round_trips() {
        let page = full_page();
        page.apply(&render_plan(ActiveTab::Response));

        let panel = page.upload_panel.as_ref().unwrap();
        assert_eq!(panel.style("visibility").as_deref(), Some(HIDDEN));
        assert_eq!(
            page.sub_title.as_ref().unwrap().text.borrow().as_deref(),
            Some("Response")
        );

        page.apply(&render_plan(ActiveTab::Upload));
        assert_eq!(panel.style("visibility").as_deref(), Some(VISIBLE));
        assert_eq!(
            page.sub_title.as_ref().unwrap().text.borrow().as_deref(),
            Some("Upload")
        );
    }

    #[test]
    fn missing_sub_title_keeps_other_targets_working() {
        let page = TabElements {
            sub_title: None,
            ..full_page()
        };
        assert!(!page.is_bound(Target::SubTitle));

        page.apply(&render_plan(ActiveTab::Response));

        let response = page.response_selector.as_ref().unwrap();
        let panel = page.upload_panel.as_ref().unwrap();
        assert_eq!(response.style("background-color").as_deref(), Some(HIGHLIGHT));
        assert_eq!(panel.style("visibility").as_deref(), Some(HIDDEN));
    }

    #[test]
    fn empty_page_is_inert_not_an_error() {
        let page: TabElements<FakeElement> = TabElements {
            upload_selector: None,
            response_selector: None,
            sub_title: None,
            upload_panel: None,
        };

        page.apply(&render_plan(ActiveTab::Upload));
        page.apply(&render_plan(ActiveTab::Response));
    }
}
