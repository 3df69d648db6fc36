//! Browser history backed by the window.

use repoview_core::BrowserHistory;

use crate::utils::dom;

/// [`BrowserHistory`] over `window.history`, `performance` and `document`.
#[derive(Clone, Copy, Debug, Default)]
pub struct WindowHistory;

impl BrowserHistory for WindowHistory {
    fn high_res_now(&self) -> Option<f64> {
        dom::performance_now()
    }

    fn wall_clock_now(&self) -> f64 {
        js_sys::Date::now()
    }

    fn location_path(&self) -> String {
        dom::location_path()
    }

    fn push_state(&self, key: &str, url: &str) {
        dom::push_history_state(key, url);
    }

    fn set_title(&self, title: &str) {
        dom::set_document_title(title);
    }
}
