//! Capabilities the core consumes from its host.
//!
//! The browser build implements these on top of `web-sys`; tests use
//! in-memory fakes. All futures are single-threaded (`!Send`), matching the
//! browser event loop.

#![allow(async_fn_in_trait)]

use serde_json::Value;

use crate::error::FetchError;

// =============================================================================
// Transport
// =============================================================================

/// Headers of a content response that the loader reads.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResponseHeaders {
    /// `page-title`
    pub page_title: Option<String>,
    /// `is-root`, still in its string form
    pub is_root: Option<String>,
}

/// Body and headers of a content request.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContentResponse {
    pub data: Value,
    pub headers: ResponseHeaders,
}

/// Remote repository API.
pub trait Transport {
    /// Path the next [`Transport::get_content`] call will request.
    fn url(&self) -> String;

    /// Re-point the transport at another path.
    fn set_url(&self, url: &str);

    /// Fetch the JSON description of the current path.
    async fn get_content(&self) -> Result<ContentResponse, FetchError>;

    /// Fetch raw text from a raw-content path.
    async fn get_raw(&self, path: &str) -> Result<String, FetchError>;

    /// Fetch the content at a raw-content path, base64 encoded.
    async fn get_base64_content(&self, path: &str) -> Result<String, FetchError>;

    /// URL of the directory containing a blob or tree URL.
    fn blob_url_to_parent_tree(&self, url: &str) -> String;
}

// =============================================================================
// Editor
// =============================================================================

/// A syntax-highlighting language registered with the editor.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LanguageDescriptor {
    pub id: String,
    /// Extensions including the leading dot (e.g. ".md")
    pub extensions: Vec<String>,
}

impl LanguageDescriptor {
    pub fn new(id: impl Into<String>, extensions: &[&str]) -> Self {
        Self {
            id: id.into(),
            extensions: extensions.iter().map(|e| e.to_string()).collect(),
        }
    }
}

/// Code editor widget.
pub trait EditorWidget {
    /// Handle to a text model owned by the widget.
    type Model;

    /// Languages known to the widget.
    fn languages(&self) -> Vec<LanguageDescriptor>;

    /// Create a model holding `text`, highlighted as `language_id`.
    fn create_model(&self, text: &str, language_id: &str) -> Self::Model;

    /// Attach a model to the live editor instance, or detach with `None`.
    fn set_model(&self, model: Option<Self::Model>);

    /// Register the callback run with the full text after every user edit.
    /// A later registration replaces the earlier one.
    fn on_content_change(&self, handler: Box<dyn Fn(String)>);
}

// =============================================================================
// Notification
// =============================================================================

/// Non-blocking user notification (toast/flash). Fire-and-forget.
pub trait Notifier {
    fn notify(&self, message: &str);
}

// =============================================================================
// Browser History
// =============================================================================

/// Navigation history and document title.
pub trait BrowserHistory {
    /// High-resolution milliseconds since page load, when available.
    fn high_res_now(&self) -> Option<f64>;

    /// Wall-clock milliseconds since the Unix epoch.
    fn wall_clock_now(&self) -> f64;

    /// Path of the current location.
    fn location_path(&self) -> String;

    /// Push a history entry carrying `key` as its state.
    fn push_state(&self, key: &str, url: &str);

    fn set_title(&self, title: &str);
}
