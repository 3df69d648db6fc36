//! UI-facing boundary over the content loader.
//!
//! The loader reports failures as [`LoadError`](crate::LoadError) values;
//! this is the one place they are absorbed. Every failure is logged and
//! turned into a single generic notification, and every operation here
//! completes normally whatever happened underneath.

use tracing::{debug, warn};

use crate::config::LOAD_ERROR_MESSAGE;
use crate::error::LoadError;
use crate::loader::{ContentLoader, LoadOutcome};
use crate::models::{EntryKind, NodeTarget};
use crate::ports::{BrowserHistory, EditorWidget, Notifier, Transport};
use crate::store::SharedStore;

pub struct RepoController<T, E, H, N> {
    loader: ContentLoader<T, E, H>,
    notifier: N,
}

impl<T, E, H, N> RepoController<T, E, H, N>
where
    T: Transport,
    E: EditorWidget,
    H: BrowserHistory,
    N: Notifier,
{
    pub fn new(loader: ContentLoader<T, E, H>, notifier: N) -> Self {
        Self { loader, notifier }
    }

    pub fn loader(&self) -> &ContentLoader<T, E, H> {
        &self.loader
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn store(&self) -> &SharedStore {
        self.loader.store()
    }

    fn settle(&self, result: Result<LoadOutcome, LoadError>) -> Option<LoadOutcome> {
        match result {
            Ok(outcome) => {
                debug!(?outcome, "load settled");
                Some(outcome)
            }
            Err(err) => {
                warn!(error = %err, "load failed");
                self.notifier.notify(LOAD_ERROR_MESSAGE);
                None
            }
        }
    }

    /// Load whatever the transport currently points at as the tree root.
    pub async fn open_root(&self) -> Option<LoadOutcome> {
        self.settle(self.loader.load(None).await)
    }

    /// Re-point the transport and reload the tree from there.
    ///
    /// Used on browser back/forward, where the location already changed.
    pub async fn reload_at(&self, path: &str) -> Option<LoadOutcome> {
        self.loader.transport().set_url(path);
        self.open_root().await
    }

    /// Reload the tree one level up, at the recorded parent URL.
    pub async fn open_parent(&self) -> Option<LoadOutcome> {
        let parent = self.store().borrow().prev_url().to_string();
        if parent.is_empty() {
            return None;
        }
        self.reload_at(&parent).await
    }

    /// Navigate to a node and load it.
    pub async fn open(&self, target: NodeTarget) -> Option<LoadOutcome> {
        if target.kind == EntryKind::Submodule {
            debug!(url = %target.url, "submodules are not expanded");
            return None;
        }
        debug!(url = %target.url, kind = %target.kind, "opening node");
        self.loader.transport().set_url(&target.url);
        self.settle(self.loader.load(Some(&target)).await)
    }

    /// Open a closed directory, close an open one, load a file.
    pub async fn toggle(&self, target: NodeTarget) -> Option<LoadOutcome> {
        let opened = self
            .store()
            .borrow()
            .node(&target.url)
            .is_some_and(|n| n.is_tree() && n.opened);
        if opened {
            self.close_directory(&target.url);
            return None;
        }
        self.open(target).await
    }

    pub fn close_directory(&self, url: &str) {
        self.store().borrow_mut().close_directory(url);
    }

    /// Fetch base64 content for an already opened binary file.
    pub async fn load_binary(&self, url: &str) -> Option<LoadOutcome> {
        let raw_path = self
            .store()
            .borrow()
            .opened_files()
            .iter()
            .find(|f| f.url == url)
            .map(|f| f.raw_path.clone())?;
        self.settle(self.loader.load_binary(url, &raw_path).await)
    }

    /// Record editor changes against the active file; `notify` runs after
    /// each one.
    pub fn track_edits(&self, notify: impl Fn() + 'static) {
        self.loader.track_edits(notify);
    }

    /// Switch tabs to an already opened file.
    ///
    /// Binary tabs are shown in preview. In edit view a text tab is loaded
    /// into the editor, fetching its raw text if it was opened in preview.
    pub async fn activate_tab(&self, url: &str) -> Option<LoadOutcome> {
        let edit = {
            let mut store = self.store().borrow_mut();
            let file = store.opened_files().iter().find(|f| f.url == url).cloned()?;
            store.set_active_file(url);
            store.set_binary(file.binary);
            if file.binary {
                store.set_view_to_preview();
                store.set_blob_raw(file.base64.unwrap_or_default());
            } else {
                store.set_blob_raw(file.editor_text().to_string());
            }
            !file.binary && !store.is_preview_view()
        };
        if edit {
            return self.settle(self.loader.enter_edit_view().await);
        }
        Some(LoadOutcome::Opened {
            url: url.to_string(),
        })
    }

    /// Flip between edit and preview view.
    pub async fn toggle_view(&self) -> Option<LoadOutcome> {
        {
            let mut store = self.store().borrow_mut();
            if store.binary() {
                return Some(LoadOutcome::Unchanged);
            }
            if !store.is_preview_view() {
                store.toggle_view();
                return Some(LoadOutcome::Unchanged);
            }
        }
        self.settle(self.loader.enter_edit_view().await)
    }
}
