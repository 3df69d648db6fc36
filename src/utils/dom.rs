//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs; every helper degrades
//! to a no-op or a default when the API is unavailable.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement, Window};

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Get the document object.
#[inline]
pub fn document() -> Option<Document> {
    window()?.document()
}

/// Look up an element by id as an `HtmlElement`.
pub fn html_element_by_id(id: &str) -> Option<HtmlElement> {
    document()?
        .get_element_by_id(id)?
        .dyn_into::<HtmlElement>()
        .ok()
}

/// Read a `data-*` attribute from an element (`name` without the prefix,
/// camelCased as in `dataset`).
pub fn data_attribute(element: &HtmlElement, name: &str) -> Option<String> {
    element.dataset().get(name).filter(|v| !v.is_empty())
}

// =============================================================================
// Browser Navigation
// =============================================================================

/// Path of the current location (e.g. "/group/project/tree/master").
pub fn location_path() -> String {
    window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_default()
}

/// Query string of the current location, including the leading '?'.
pub fn location_search() -> String {
    window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default()
}

/// Push a history entry whose state is `{ key }`.
pub fn push_history_state(key: &str, url: &str) {
    let state = js_sys::Object::new();
    let _ = js_sys::Reflect::set(&state, &JsValue::from_str("key"), &JsValue::from_str(key));

    if let Some(window) = window()
        && let Ok(history) = window.history()
    {
        let _ = history.push_state_with_url(&state, "", Some(url));
    }
}

/// Set the document title.
pub fn set_document_title(title: &str) {
    if let Some(document) = document() {
        document.set_title(title);
    }
}

/// High-resolution milliseconds since page load.
pub fn performance_now() -> Option<f64> {
    Some(window()?.performance()?.now())
}

/// Scroll the tab strip so the newest tab is visible.
pub fn scroll_tabs_right(tabs_id: &str) {
    if let Some(tabs) = html_element_by_id(tabs_id) {
        tabs.set_scroll_left(tabs.scroll_width());
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn mount(id: &str) -> HtmlElement {
        let document = document().unwrap();
        let element = document
            .create_element("div")
            .unwrap()
            .dyn_into::<HtmlElement>()
            .unwrap();
        element.set_id(id);
        document.body().unwrap().append_child(&element).unwrap();
        element
    }

    #[wasm_bindgen_test]
    fn test_data_attribute() {
        let element = mount("dom-test-mount");
        element
            .set_attribute("data-project-url", "/group/project")
            .unwrap();
        element.set_attribute("data-path", "").unwrap();

        let found = html_element_by_id("dom-test-mount").unwrap();
        assert_eq!(
            data_attribute(&found, "projectUrl").as_deref(),
            Some("/group/project")
        );
        assert_eq!(data_attribute(&found, "path"), None);
        assert_eq!(data_attribute(&found, "missing"), None);
    }

    #[wasm_bindgen_test]
    fn test_document_title() {
        set_document_title("lib · master");
        assert_eq!(document().unwrap().title(), "lib · master");
    }
}
