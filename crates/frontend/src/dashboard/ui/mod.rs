pub mod page;
pub mod response_panel;
pub mod tab_bar;
pub mod upload_panel;

pub use page::DashboardPage;
