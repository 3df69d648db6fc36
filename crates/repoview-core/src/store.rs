//! Shared state of the repository browser.
//!
//! [`RepoStore`] is the single source of truth for the file tree and the
//! opened files. It lives for the whole page session and is shared as
//! [`SharedStore`]; every component mutates it only through the methods
//! below, and never holds a borrow across an `.await`.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::models::{BlobPayload, FileRecord, Node, ViewMode};

/// Store handle shared by the loader, the controller and the UI.
pub type SharedStore = Rc<RefCell<RepoStore>>;

/// Loading indicators.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoadingState {
    /// First tree load in flight
    pub tree: bool,
}

/// Ticket handed out when a request starts.
///
/// A response is current only while no newer ticket exists for its key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RequestTicket {
    key: String,
    generation: u64,
}

impl RequestTicket {
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

// =============================================================================
// RepoStore
// =============================================================================

#[derive(Debug, Default)]
pub struct RepoStore {
    files: Vec<Node>,
    opened_files: Vec<FileRecord>,
    /// URL of the active member of `opened_files`
    active_url: Option<String>,
    blob_raw: String,
    binary: bool,
    loading: LoadingState,
    is_root: bool,
    prev_url: String,
    project_url: String,
    view: ViewMode,
    generations: HashMap<String, u64>,
    next_generation: u64,
}

impl RepoStore {
    pub fn new(project_url: impl Into<String>) -> Self {
        Self {
            project_url: project_url.into(),
            ..Self::default()
        }
    }

    /// Wrap in a [`SharedStore`].
    pub fn shared(self) -> SharedStore {
        Rc::new(RefCell::new(self))
    }

    // -------------------------------------------------------------------------
    // Tree
    // -------------------------------------------------------------------------

    /// Root-level entries.
    pub fn files(&self) -> &[Node] {
        &self.files
    }

    pub fn set_files(&mut self, files: Vec<Node>) {
        self.files = files;
    }

    /// Find a node anywhere in the tree.
    pub fn node(&self, url: &str) -> Option<&Node> {
        self.files.iter().find_map(|node| node.find(url))
    }

    fn node_mut(&mut self, url: &str) -> Option<&mut Node> {
        self.files.iter_mut().find_map(|node| node.find_mut(url))
    }

    /// Replace a directory's children. Returns `false` if the node is gone.
    pub fn set_children(&mut self, url: &str, children: Vec<Node>) -> bool {
        match self.node_mut(url) {
            Some(node) => {
                node.children = children;
                true
            }
            None => false,
        }
    }

    /// Mark a directory open. Returns `false` if the node is gone.
    pub fn open_directory(&mut self, url: &str) -> bool {
        match self.node_mut(url) {
            Some(node) => {
                node.opened = true;
                true
            }
            None => false,
        }
    }

    /// Close a directory and drop its subtree.
    ///
    /// A listing still in flight for the directory is superseded, so its
    /// loading flag is cleared here.
    pub fn close_directory(&mut self, url: &str) -> bool {
        self.generations.remove(url);
        match self.node_mut(url) {
            Some(node) => {
                node.opened = false;
                node.loading = false;
                node.children.clear();
                true
            }
            None => false,
        }
    }

    pub fn set_node_loading(&mut self, url: &str, loading: bool) -> bool {
        match self.node_mut(url) {
            Some(node) => {
                node.loading = loading;
                true
            }
            None => false,
        }
    }

    // -------------------------------------------------------------------------
    // Opened files
    // -------------------------------------------------------------------------

    /// Opened files in open order.
    pub fn opened_files(&self) -> &[FileRecord] {
        &self.opened_files
    }

    pub fn active_url(&self) -> Option<&str> {
        self.active_url.as_deref()
    }

    /// The active opened file, if any.
    pub fn active_file(&self) -> Option<&FileRecord> {
        let url = self.active_url.as_deref()?;
        self.opened_files.iter().find(|file| file.url == url)
    }

    /// Append a file unless one with the same URL is already open, in which
    /// case that record is refreshed in place (keeping its tab position).
    pub fn add_to_opened_files(&mut self, file: FileRecord) {
        match self.opened_files.iter_mut().find(|f| f.url == file.url) {
            Some(existing) => *existing = file,
            None => self.opened_files.push(file),
        }
    }

    /// Make the opened file at `url` the only active one.
    ///
    /// Returns `false`, changing nothing, if no opened file has that URL.
    pub fn set_active_file(&mut self, url: &str) -> bool {
        if !self.opened_files.iter().any(|f| f.url == url) {
            return false;
        }
        for file in &mut self.opened_files {
            file.active = file.url == url;
        }
        self.active_url = Some(url.to_string());
        true
    }

    /// Open a loaded file under `url` and make it active.
    ///
    /// `plain` is the raw text when it was fetched; a file opened in preview
    /// has none yet. Pending edits are discarded; a `too_large`/`collapsed`
    /// render error marks the record too large.
    pub fn activate_file(&mut self, payload: BlobPayload, plain: Option<String>, url: &str) {
        let mut file = FileRecord::from_payload(payload, url);
        if let Some(plain) = plain {
            file.plain = plain;
            file.raw = true;
        }
        file.new_content.clear();
        self.add_to_opened_files(file);
        self.set_active_file(url);
    }

    /// Stamp late-fetched raw text onto an opened file.
    pub fn set_file_plain(&mut self, url: &str, plain: String) -> bool {
        match self.opened_files.iter_mut().find(|f| f.url == url) {
            Some(file) => {
                file.plain = plain;
                file.raw = true;
                file.changed = !file.new_content.is_empty() && file.new_content != file.plain;
                true
            }
            None => false,
        }
    }

    /// Attach side-loaded base64 content to an opened file.
    pub fn set_file_base64(&mut self, url: &str, base64: String) -> bool {
        match self.opened_files.iter_mut().find(|f| f.url == url) {
            Some(file) => {
                file.base64 = Some(base64);
                true
            }
            None => false,
        }
    }

    /// Record an edit to an opened file.
    pub fn update_new_content(&mut self, url: &str, content: String) -> bool {
        match self.opened_files.iter_mut().find(|f| f.url == url) {
            Some(file) => {
                file.set_new_content(content);
                true
            }
            None => false,
        }
    }

    // -------------------------------------------------------------------------
    // Scalars
    // -------------------------------------------------------------------------

    /// Raw text (or base64) of the active file.
    pub fn blob_raw(&self) -> &str {
        &self.blob_raw
    }

    pub fn set_blob_raw(&mut self, raw: String) {
        self.blob_raw = raw;
    }

    pub fn binary(&self) -> bool {
        self.binary
    }

    pub fn set_binary(&mut self, binary: bool) {
        self.binary = binary;
    }

    pub fn loading(&self) -> LoadingState {
        self.loading
    }

    pub fn set_loading_tree(&mut self, loading: bool) {
        self.loading.tree = loading;
    }

    pub fn is_root(&self) -> bool {
        self.is_root
    }

    pub fn set_is_root(&mut self, is_root: bool) {
        self.is_root = is_root;
    }

    /// Parent of the current URL, for back/breadcrumb navigation.
    pub fn prev_url(&self) -> &str {
        &self.prev_url
    }

    pub fn set_prev_url(&mut self, url: String) {
        self.prev_url = url;
    }

    pub fn project_url(&self) -> &str {
        &self.project_url
    }

    // -------------------------------------------------------------------------
    // View mode
    // -------------------------------------------------------------------------

    pub fn view(&self) -> ViewMode {
        self.view
    }

    pub fn set_view(&mut self, view: ViewMode) {
        self.view = view;
    }

    pub fn set_view_to_preview(&mut self) {
        self.view = ViewMode::Preview;
    }

    pub fn is_preview_view(&self) -> bool {
        self.view == ViewMode::Preview
    }

    pub fn toggle_view(&mut self) {
        self.view = self.view.toggled();
    }

    // -------------------------------------------------------------------------
    // Request generations
    // -------------------------------------------------------------------------

    /// Start a request for `key`, superseding any request already in flight
    /// for the same key.
    pub fn begin_request(&mut self, key: &str) -> RequestTicket {
        self.next_generation += 1;
        self.generations
            .insert(key.to_string(), self.next_generation);
        RequestTicket {
            key: key.to_string(),
            generation: self.next_generation,
        }
    }

    /// Whether no newer request has started for the ticket's key.
    pub fn is_current(&self, ticket: &RequestTicket) -> bool {
        self.generations.get(&ticket.key) == Some(&ticket.generation)
    }

    /// Forget a settled request. Only the current ticket clears its key.
    pub fn finish_request(&mut self, ticket: &RequestTicket) {
        if self.is_current(ticket) {
            self.generations.remove(&ticket.key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EntryKind, LastCommit, RenderError};

    fn tree(url: &str, level: usize) -> Node {
        Node {
            kind: EntryKind::Tree,
            name: url.to_string(),
            url: url.to_string(),
            level,
            icon: "fa-folder".to_string(),
            children: Vec::new(),
            opened: false,
            loading: false,
            last_commit: LastCommit::default(),
        }
    }

    fn payload(name: &str) -> BlobPayload {
        BlobPayload {
            name: name.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_open_and_close_directory() {
        let mut store = RepoStore::new("/p");
        store.set_files(vec![tree("/tree/lib", 0)]);

        assert!(store.open_directory("/tree/lib"));
        assert!(store.set_children("/tree/lib", vec![tree("/tree/lib/a", 1)]));
        assert!(store.node("/tree/lib/a").is_some());

        assert!(store.close_directory("/tree/lib"));
        let lib = store.node("/tree/lib").unwrap();
        assert!(!lib.opened);
        assert!(lib.children.is_empty());
        assert!(store.node("/tree/lib/a").is_none());
    }

    #[test]
    fn test_missing_node_mutations_report_false() {
        let mut store = RepoStore::new("/p");
        assert!(!store.open_directory("/nope"));
        assert!(!store.set_children("/nope", Vec::new()));
        assert!(!store.close_directory("/nope"));
        assert!(!store.set_node_loading("/nope", true));
    }

    #[test]
    fn test_single_active_file() {
        let mut store = RepoStore::new("/p");
        store.activate_file(payload("a.rb"), Some("a".to_string()), "/blob/a.rb");
        store.activate_file(payload("b.rb"), Some("b".to_string()), "/blob/b.rb");

        let active: Vec<&str> = store
            .opened_files()
            .iter()
            .filter(|f| f.active)
            .map(|f| f.url.as_str())
            .collect();
        assert_eq!(active, vec!["/blob/b.rb"]);
        assert_eq!(store.active_file().map(|f| f.name.as_str()), Some("b.rb"));
    }

    #[test]
    fn test_reopen_keeps_position_and_clears_edits() {
        let mut store = RepoStore::new("/p");
        store.activate_file(payload("a.rb"), Some("a".to_string()), "/blob/a.rb");
        store.activate_file(payload("b.rb"), Some("b".to_string()), "/blob/b.rb");
        store.update_new_content("/blob/a.rb", "edited".to_string());

        store.activate_file(payload("a.rb"), Some("a2".to_string()), "/blob/a.rb");

        let files = store.opened_files();
        assert_eq!(files.len(), 2);
        assert_eq!(files[0].url, "/blob/a.rb");
        assert_eq!(files[0].plain, "a2");
        assert!(files[0].new_content.is_empty());
        assert!(files[0].active);
        assert!(!files[1].active);
    }

    #[test]
    fn test_set_active_unknown_url() {
        let mut store = RepoStore::new("/p");
        store.activate_file(payload("a.rb"), None, "/blob/a.rb");
        assert!(!store.set_active_file("/blob/missing"));
        assert_eq!(store.active_url(), Some("/blob/a.rb"));
    }

    #[test]
    fn test_activate_marks_too_large() {
        let mut store = RepoStore::new("/p");
        let big = BlobPayload {
            render_error: Some(RenderError::Collapsed),
            ..payload("big.log")
        };
        store.activate_file(big, None, "/blob/big.log");
        assert!(store.active_file().unwrap().too_large);
    }

    #[test]
    fn test_request_generations() {
        let mut store = RepoStore::new("/p");
        let first = store.begin_request("/tree/lib");
        let other = store.begin_request("/tree/test");
        assert!(store.is_current(&first));

        let second = store.begin_request("/tree/lib");
        assert!(!store.is_current(&first));
        assert!(store.is_current(&second));
        assert!(store.is_current(&other));
        assert!(second.generation() > first.generation());
    }

    #[test]
    fn test_close_supersedes_pending_listing() {
        let mut store = RepoStore::new("/p");
        store.set_files(vec![tree("/tree/lib", 0)]);
        store.set_node_loading("/tree/lib", true);
        let ticket = store.begin_request("/tree/lib");
        store.close_directory("/tree/lib");
        assert!(!store.is_current(&ticket));
        assert!(!store.node("/tree/lib").unwrap().loading);
    }

    #[test]
    fn test_settled_requests_are_forgotten() {
        let mut store = RepoStore::new("/p");
        let first = store.begin_request("/tree/lib");
        let second = store.begin_request("/tree/lib");
        let other = store.begin_request("/tree/test");

        // A superseded ticket leaves the newer one in place
        store.finish_request(&first);
        assert!(store.is_current(&second));

        store.finish_request(&second);
        store.finish_request(&other);
        assert!(store.generations.is_empty());
        assert!(!store.is_current(&second));
    }

    #[test]
    fn test_plain_stamped_after_preview_open() {
        let mut store = RepoStore::new("/p");
        store.activate_file(payload("a.rb"), None, "/blob/a.rb");
        assert!(!store.active_file().unwrap().raw);

        assert!(store.set_file_plain("/blob/a.rb", "puts 1".to_string()));
        let file = store.active_file().unwrap();
        assert!(file.raw);
        assert_eq!(file.plain, "puts 1");
        assert!(!file.changed);
        assert!(!store.set_file_plain("/blob/missing", String::new()));
    }

    #[test]
    fn test_view_toggle() {
        let mut store = RepoStore::new("/p");
        assert_eq!(store.view(), ViewMode::Edit);
        store.toggle_view();
        assert!(store.is_preview_view());
        store.toggle_view();
        assert!(!store.is_preview_view());
        store.set_view_to_preview();
        store.set_view(ViewMode::Edit);
        assert_eq!(store.view(), ViewMode::Edit);
    }
}
