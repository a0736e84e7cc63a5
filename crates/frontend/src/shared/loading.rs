//! Loading indicator swap for named containers.
//!
//! Stateless: callers sequence `show`/`hide` themselves. Both operations are
//! no-ops when the container does not exist.

use web_sys::Document;

/// Markup injected by [`show`].
pub const LOADING_MARKUP: &str = r#"<div class="text-center"><div class="spinner-border" role="status"><span class="visually-hidden">Loading...</span></div></div>"#;

/// Replace the container's content with the loading marker.
pub fn show(document: &Document, element_id: &str) {
    if let Some(element) = document.get_element_by_id(element_id) {
        element.set_inner_html(LOADING_MARKUP);
    }
}

/// Replace the container's content with `content`, verbatim.
pub fn hide(document: &Document, element_id: &str, content: &str) {
    if let Some(element) = document.get_element_by_id(element_id) {
        element.set_inner_html(content);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loading_markup_shape() {
        assert!(LOADING_MARKUP.contains("spinner-border"));
        assert!(LOADING_MARKUP.contains(r#"role="status""#));
        assert!(LOADING_MARKUP.contains("Loading..."));
    }
}
