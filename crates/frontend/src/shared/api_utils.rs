//! Helpers for addressing the register-rag service.
//!
//! The frontend is served separately from the service, so request URLs are
//! derived from the current window location with the service port swapped in.

/// Port the register-rag service listens on.
const SERVICE_PORT: u16 = 8000;

/// Base URL of the register-rag service, like `http://localhost:8000`.
///
/// Falls back to an empty string when no window is available (relative URLs
/// still work in that case).
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, SERVICE_PORT)
}

/// Build a full service URL from an endpoint path such as
/// `/insertDocToStore`.
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}
