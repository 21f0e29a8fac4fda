//! API URL helpers.
//!
//! The backend serves the compiled frontend itself, so requests go to the
//! page's own origin.

/// Get the base URL for API requests
///
/// # Returns
/// - Origin like "http://localhost:8000" or "https://example.com"
/// - Empty string if window is not available
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    window.location().origin().unwrap_or_default()
}

/// Build a full API URL from a path
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/query");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}
