//! API URL construction.
//!
//! The console is served by the FuelLens host itself, so requests go to the
//! same origin the page was loaded from.

/// Origin of the current page, e.g. "https://fuellens.example".
///
/// Returns an empty string when no window is available, which keeps the
/// resulting URLs relative.
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    window.location().origin().unwrap_or_default()
}

/// Build a full URL from an endpoint path like "/compliance-check".
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}
