/// The two mutually exclusive dashboard tabs.
///
/// Exactly one tab is active at any time; the page opens on `Upload` and
/// toggles for the lifetime of the page. Transitions happen only through
/// selector clicks, there are no automatic transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveTab {
    #[default]
    Upload,
    Response,
}

impl ActiveTab {
    /// Subtitle text shown while the tab is active.
    pub fn label(self) -> &'static str {
        match self {
            ActiveTab::Upload => "Upload",
            ActiveTab::Response => "Response",
        }
    }
}
