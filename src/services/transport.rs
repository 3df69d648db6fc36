//! Repository API transport over the Fetch API.

use std::cell::RefCell;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use repoview_core::config::{IS_ROOT_HEADER, PAGE_TITLE_HEADER};
use repoview_core::{ContentResponse, FetchError, ResponseHeaders, Transport};
use tracing::debug;

use crate::utils::fetch::{fetch_bytes, fetch_response, fetch_text, header, read_text};
use crate::utils::url::{parent_tree_url, with_json_format};

/// Fetch-backed [`Transport`] remembering the last requested path.
pub struct WebTransport {
    url: RefCell<String>,
}

impl WebTransport {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: RefCell::new(url.into()),
        }
    }
}

impl Transport for WebTransport {
    fn url(&self) -> String {
        self.url.borrow().clone()
    }

    fn set_url(&self, url: &str) {
        *self.url.borrow_mut() = url.to_string();
    }

    async fn get_content(&self) -> Result<ContentResponse, FetchError> {
        let url = with_json_format(&self.url());
        debug!(%url, "GET content");

        let resp = fetch_response(&url).await?;
        // The server URI-encodes the title
        let page_title = header(&resp, PAGE_TITLE_HEADER).map(|title| {
            js_sys::decode_uri_component(&title)
                .map(String::from)
                .unwrap_or(title)
        });
        let headers = ResponseHeaders {
            page_title,
            is_root: header(&resp, IS_ROOT_HEADER),
        };

        let text = read_text(&resp).await?;
        let data = serde_json::from_str(&text).map_err(|_| FetchError::InvalidContent)?;

        Ok(ContentResponse { data, headers })
    }

    async fn get_raw(&self, path: &str) -> Result<String, FetchError> {
        debug!(%path, "GET raw");
        fetch_text(path).await
    }

    async fn get_base64_content(&self, path: &str) -> Result<String, FetchError> {
        debug!(%path, "GET raw (base64)");
        let bytes = fetch_bytes(path).await?;
        Ok(STANDARD.encode(bytes))
    }

    fn blob_url_to_parent_tree(&self, url: &str) -> String {
        parent_tree_url(url)
    }
}
