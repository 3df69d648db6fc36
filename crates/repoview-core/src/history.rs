//! Browser history synchronization.
//!
//! Keeps the address bar and the document title pointing at the entity the
//! tree last opened.

use tracing::debug;

use crate::ports::BrowserHistory;

/// Pushes history entries and updates the title for opened entities.
pub struct HistorySync<H> {
    browser: H,
}

impl<H: BrowserHistory> HistorySync<H> {
    pub fn new(browser: H) -> Self {
        Self { browser }
    }

    pub fn browser(&self) -> &H {
        &self.browser
    }

    /// Millisecond timestamp used as the history state key.
    ///
    /// Only locally monotonic; two entries may share a key.
    pub fn gen_key(&self) -> String {
        let now = self
            .browser
            .high_res_now()
            .unwrap_or_else(|| self.browser.wall_clock_now());
        format!("{:.3}", now)
    }

    /// Push `url` unless it is already the current location, then set the
    /// title if one is given.
    pub fn sync(&self, url: &str, title: Option<&str>) {
        if self.browser.location_path() != url {
            let key = self.gen_key();
            debug!(%url, %key, "pushing history entry");
            self.browser.push_state(&key, url);
        }

        if let Some(title) = title.filter(|t| !t.is_empty()) {
            self.browser.set_title(title);
        }
    }
}
