//! Register-rag dashboard: Upload/Response tab toggle, the two panels and
//! the service API client.

pub mod api;
pub mod context;
pub mod tabs;
pub mod ui;
