//! Content loading.
//!
//! [`ContentLoader`] fetches directory listings and file content through the
//! [`Transport`], decides between raw, rendered and binary handling, and
//! writes the results into the [`SharedStore`].
//!
//! # Ordering
//!
//! Suspension happens only at fetch boundaries. Between two awaits every
//! store mutation is synchronous, so a directory's children are assigned in
//! one step after its listing arrives.
//!
//! # Stale responses
//!
//! Each load takes a [`RequestTicket`] keyed by the target URL (the root
//! load uses the empty key). When [`LoaderOptions::discard_stale`] is set, a
//! response whose ticket was superseded is dropped before it touches state.

use std::rc::Rc;

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::LoaderOptions;
use crate::editor::LanguageBinding;
use crate::error::LoadError;
use crate::history::HistorySync;
use crate::models::{BlobPayload, NodeTarget, TreeListing, ViewMode};
use crate::ports::{BrowserHistory, EditorWidget, Transport};
use crate::serializer::listing_to_nodes;
use crate::store::{RequestTicket, SharedStore};

/// Request key of a root listing.
const ROOT_KEY: &str = "";

/// Coerce a permission-style header value: only `"true"` is true.
pub fn parse_permission_flag(value: &str) -> bool {
    value == "true"
}

/// What a successful load did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoadOutcome {
    /// A listing was assigned (to the roots or to a directory).
    Listed { entries: usize },
    /// A file was opened and made active.
    Opened { url: String },
    /// A file whose render failed was fetched while in edit view; nothing
    /// was opened.
    NotRendered { url: String },
    /// Base64 content was attached to an opened file.
    SideLoaded { url: String },
    /// The response was superseded (or its node vanished) and was dropped.
    Stale,
    /// Nothing needed fetching; only the view state may have changed.
    Unchanged,
}

fn decode<T: DeserializeOwned>(data: Value) -> Result<T, LoadError> {
    Ok(serde_json::from_value(data)?)
}

// =============================================================================
// ContentLoader
// =============================================================================

/// Loads trees and files into the store.
pub struct ContentLoader<T, E, H> {
    store: SharedStore,
    transport: T,
    binding: LanguageBinding<E>,
    history: HistorySync<H>,
    options: LoaderOptions,
}

impl<T, E, H> ContentLoader<T, E, H>
where
    T: Transport,
    E: EditorWidget,
    H: BrowserHistory,
{
    pub fn new(store: SharedStore, transport: T, editor: E, browser: H) -> Self {
        Self {
            store,
            transport,
            binding: LanguageBinding::new(editor),
            history: HistorySync::new(browser),
            options: LoaderOptions::default(),
        }
    }

    pub fn with_options(mut self, options: LoaderOptions) -> Self {
        self.options = options;
        self
    }

    pub fn store(&self) -> &SharedStore {
        &self.store
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn binding(&self) -> &LanguageBinding<E> {
        &self.binding
    }

    pub fn history(&self) -> &HistorySync<H> {
        &self.history
    }

    fn is_stale(&self, ticket: &RequestTicket) -> bool {
        if !self.options.discard_stale || self.store.borrow().is_current(ticket) {
            return false;
        }
        warn!(
            key = ticket.key(),
            generation = ticket.generation(),
            "discarding superseded response"
        );
        true
    }

    /// Load the transport's current path.
    ///
    /// `target` is the node that was activated; `None` means a root load
    /// (first page load or refresh).
    pub async fn load(&self, target: Option<&NodeTarget>) -> Result<LoadOutcome, LoadError> {
        let key = target.map_or(ROOT_KEY, |t| t.url.as_str());
        let ticket = {
            let mut store = self.store.borrow_mut();
            if store.files().is_empty() {
                store.set_loading_tree(true);
            }
            if let Some(target) = target {
                store.set_node_loading(&target.url, true);
            }
            store.begin_request(key)
        };

        let result = self.fetch_and_apply(target, &ticket).await;

        let mut store = self.store.borrow_mut();
        if let Some(target) = target {
            if store.is_current(&ticket) {
                store.set_node_loading(&target.url, false);
            }
        }
        store.finish_request(&ticket);
        result
    }

    async fn fetch_and_apply(
        &self,
        target: Option<&NodeTarget>,
        ticket: &RequestTicket,
    ) -> Result<LoadOutcome, LoadError> {
        debug!(url = %self.transport.url(), "fetching content");
        let response = self.transport.get_content().await?;
        if self.is_stale(ticket) {
            return Ok(LoadOutcome::Stale);
        }

        let is_root = response.headers.is_root.as_deref().filter(|v| !v.is_empty());
        if let Some(is_root) = is_root {
            self.store
                .borrow_mut()
                .set_is_root(parse_permission_flag(is_root));
        }
        let page_title = response.headers.page_title.filter(|t| !t.is_empty());

        match target {
            Some(target) if target.is_blob() => {
                let payload = decode::<BlobPayload>(response.data)?;
                self.load_file(target, payload, ticket).await
            }
            _ => {
                let listing = decode::<TreeListing>(response.data)?;
                Ok(self.load_directory(target, listing, page_title))
            }
        }
    }

    async fn load_file(
        &self,
        target: &NodeTarget,
        payload: BlobPayload,
        ticket: &RequestTicket,
    ) -> Result<LoadOutcome, LoadError> {
        let url = if target.url.is_empty() {
            self.transport.url()
        } else {
            target.url.clone()
        };
        let binary = payload.binary;
        let render_failed = payload.render_error.is_some();
        let raw_path = payload.raw_path.clone();

        let preview = {
            let mut store = self.store.borrow_mut();
            store.set_binary(binary);
            if binary {
                store.set_view_to_preview();
            }
            store.is_preview_view()
        };

        if preview {
            // Rendered content is already in the payload; raw text is
            // fetched when the file is first shown in the editor
            {
                let mut store = self.store.borrow_mut();
                store.set_blob_raw(String::new());
                store.activate_file(payload, None, &url);
            }
            if binary {
                self.side_load_base64(&url, &raw_path, Some(ticket)).await?;
            }
            return Ok(LoadOutcome::Opened { url });
        }

        if render_failed {
            debug!(%url, "render error in edit view, not opening");
            return Ok(LoadOutcome::NotRendered { url });
        }

        let raw = self.transport.get_raw(&raw_path).await?;
        if self.is_stale(ticket) {
            return Ok(LoadOutcome::Stale);
        }

        let mut store = self.store.borrow_mut();
        store.set_blob_raw(raw.clone());
        store.activate_file(payload, Some(raw), &url);
        self.binding.bind_language(&store);

        Ok(LoadOutcome::Opened { url })
    }

    /// Switch to edit view and show the active file in the editor.
    ///
    /// A file opened in preview has no raw text yet; it is fetched first.
    /// Binary files stay in preview.
    pub async fn enter_edit_view(&self) -> Result<LoadOutcome, LoadError> {
        let (url, pending) = {
            let mut store = self.store.borrow_mut();
            let Some(file) = store.active_file().cloned() else {
                store.set_view(ViewMode::Edit);
                return Ok(LoadOutcome::Unchanged);
            };
            if file.binary {
                store.set_view_to_preview();
                return Ok(LoadOutcome::Unchanged);
            }
            store.set_view(ViewMode::Edit);
            let pending = (!file.raw).then(|| (store.begin_request(&file.url), file.raw_path));
            (file.url, pending)
        };

        if let Some((ticket, raw_path)) = pending {
            debug!(url = ticket.key(), "fetching raw text for editor");
            let raw = self.transport.get_raw(&raw_path).await;
            if self.is_stale(&ticket) {
                return Ok(LoadOutcome::Stale);
            }
            let mut store = self.store.borrow_mut();
            store.finish_request(&ticket);
            match raw {
                Ok(raw) => {
                    store.set_file_plain(ticket.key(), raw);
                }
                Err(err) => {
                    // Nothing to edit, stay on the rendered content
                    if store.active_url() == Some(url.as_str()) {
                        store.set_view_to_preview();
                    }
                    return Err(err.into());
                }
            }
        }

        let mut store = self.store.borrow_mut();
        let Some(file) = store.active_file().filter(|f| f.url == url && f.raw) else {
            // The user moved on while the text was in flight
            return Ok(LoadOutcome::Stale);
        };
        let text = file.editor_text().to_string();
        if store.is_preview_view() {
            return Ok(LoadOutcome::Stale);
        }
        store.set_blob_raw(text);
        self.binding.bind_language(&store);

        Ok(LoadOutcome::Opened { url })
    }

    /// Record editor changes as pending edits of the active file.
    ///
    /// `notify` runs after each recorded edit.
    pub fn track_edits(&self, notify: impl Fn() + 'static) {
        let store = Rc::clone(&self.store);
        self.binding
            .editor()
            .on_content_change(Box::new(move |content| {
                let Ok(mut store) = store.try_borrow_mut() else {
                    warn!("store busy, edit not recorded");
                    return;
                };
                if store.binary() {
                    return;
                }
                let Some(url) = store.active_url().map(str::to_string) else {
                    return;
                };
                let recorded = store.update_new_content(&url, content);
                drop(store);
                if recorded {
                    notify();
                }
            }));
    }

    fn load_directory(
        &self,
        target: Option<&NodeTarget>,
        listing: TreeListing,
        page_title: Option<String>,
    ) -> LoadOutcome {
        self.store.borrow_mut().set_loading_tree(false);

        if let Some(target) = target {
            if !self.store.borrow_mut().open_directory(&target.url) {
                warn!(url = %target.url, "directory closed before its listing arrived");
                return LoadOutcome::Stale;
            }
            let title = page_title.unwrap_or_else(|| listing.name.clone());
            self.history.sync(&target.url, Some(&title));
        }

        let entries = {
            let mut store = self.store.borrow_mut();
            let level = target.map_or(0, |t| t.level + 1);
            let nodes = listing_to_nodes(&listing, level, store.project_url());
            let entries = nodes.len();
            match target {
                Some(target) => {
                    store.set_children(&target.url, nodes);
                }
                None => store.set_files(nodes),
            }
            entries
        };

        let parent = self
            .transport
            .blob_url_to_parent_tree(&self.transport.url());
        self.store.borrow_mut().set_prev_url(parent);

        debug!(entries, "listing applied");
        LoadOutcome::Listed { entries }
    }

    /// Fetch the base64 form of an opened file and attach it.
    pub async fn load_binary(&self, url: &str, raw_path: &str) -> Result<LoadOutcome, LoadError> {
        self.side_load_base64(url, raw_path, None).await
    }

    async fn side_load_base64(
        &self,
        url: &str,
        raw_path: &str,
        ticket: Option<&RequestTicket>,
    ) -> Result<LoadOutcome, LoadError> {
        let base64 = self.transport.get_base64_content(raw_path).await?;
        if ticket.is_some_and(|t| self.is_stale(t)) {
            return Ok(LoadOutcome::Stale);
        }

        let mut store = self.store.borrow_mut();
        store.set_blob_raw(base64.clone());
        store.set_file_base64(url, base64);

        Ok(LoadOutcome::SideLoaded {
            url: url.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_permission_flag() {
        assert!(parse_permission_flag("true"));
        assert!(!parse_permission_flag("false"));
        assert!(!parse_permission_flag("TRUE"));
        assert!(!parse_permission_flag(""));
    }
}
