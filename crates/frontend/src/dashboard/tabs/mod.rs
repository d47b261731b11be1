//! Tab toggle for the dashboard page.
//!
//! Split into:
//! - `state` - the `ActiveTab` two-state machine
//! - `render` - pure mapping from state to a patch plan
//! - `dom` - binding to the page elements and patch application

pub mod dom;
pub mod render;
pub mod state;

pub use state::ActiveTab;
