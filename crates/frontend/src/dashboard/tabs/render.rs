//! Pure mapping from the active tab to the visual state of the page.
//!
//! The toggle owns four page elements. `render_plan` describes the complete
//! visual state for a tab as data; applying it to the DOM is the adapter's
//! job (`dom`). Keeping the mapping pure lets the toggle be tested without a
//! live page.

use super::state::ActiveTab;

/// Background of the selected tab button.
pub const HIGHLIGHT: &str = "lightblue";
/// Background of the unselected tab button.
pub const NO_HIGHLIGHT: &str = "transparent";
/// Content panel shown.
pub const VISIBLE: &str = "visible";
/// Content panel hidden; `visibility: hidden` keeps the layout space.
pub const HIDDEN: &str = "hidden";

/// Page elements addressed by the toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    UploadSelector,
    ResponseSelector,
    SubTitle,
    UploadPanel,
}

impl Target {
    /// Element id in the page markup. The ids are fixed: page styling and
    /// any external tooling key on them.
    pub fn element_id(self) -> &'static str {
        match self {
            Target::UploadSelector => "upload-tab",
            Target::ResponseSelector => "response-tab",
            Target::SubTitle => "sub-title",
            Target::UploadPanel => "upload",
        }
    }
}

/// A single visual mutation on a target element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mutation {
    /// Set the `background-color` style property.
    Background(&'static str),
    /// Set the `visibility` style property.
    Visibility(&'static str),
    /// Replace the element text.
    Text(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Patch {
    pub target: Target,
    pub mutation: Mutation,
}

/// Full visual state for `active`, as patch data.
///
/// The plan is total: it always covers both selectors, the subtitle and the
/// panel, so applying it never depends on the previous state and re-applying
/// it for the already-active tab changes nothing.
pub fn render_plan(active: ActiveTab) -> Vec<Patch> {
    let (upload_bg, response_bg, panel) = match active {
        ActiveTab::Upload => (HIGHLIGHT, NO_HIGHLIGHT, VISIBLE),
        ActiveTab::Response => (NO_HIGHLIGHT, HIGHLIGHT, HIDDEN),
    };

    vec![
        Patch {
            target: Target::UploadSelector,
            mutation: Mutation::Background(upload_bg),
        },
        Patch {
            target: Target::ResponseSelector,
            mutation: Mutation::Background(response_bg),
        },
        Patch {
            target: Target::SubTitle,
            mutation: Mutation::Text(active.label()),
        },
        Patch {
            target: Target::UploadPanel,
            mutation: Mutation::Visibility(panel),
        },
    ]
}
