//! Platform-independent core of the repository browser.
//!
//! Owns the file-tree and open-file state and the logic that keeps it
//! consistent with the remote repository API:
//!
//! - [`serializer`] - Raw API entries to in-memory [`Node`]s
//! - [`store`] - The [`RepoStore`] state container
//! - [`loader`] - [`ContentLoader`] for directories, text and binary files
//! - [`controller`] - [`RepoController`], the UI-facing boundary that absorbs errors
//! - [`editor`] - Extension to editor language binding
//! - [`history`] - Browser history and title synchronization
//! - [`tracker`] - Lookups into the opened files
//!
//! Every browser or widget capability is reached through the traits in
//! [`ports`], so the whole core runs natively under test.

pub mod config;
pub mod controller;
pub mod editor;
pub mod error;
pub mod history;
pub mod loader;
pub mod models;
pub mod ports;
pub mod serializer;
pub mod store;
pub mod tracker;

pub use config::LoaderOptions;
pub use controller::RepoController;
pub use editor::LanguageBinding;
pub use error::{FetchError, LoadError};
pub use history::HistorySync;
pub use loader::{ContentLoader, LoadOutcome};
pub use models::{
    BlobPayload, EntryKind, FileRecord, LastCommit, Node, NodeTarget, RawCommit, RawEntry,
    RenderError, TreeListing, ViewMode,
};
pub use ports::{
    BrowserHistory, ContentResponse, EditorWidget, LanguageDescriptor, Notifier, ResponseHeaders,
    Transport,
};
pub use store::{RepoStore, SharedStore};
