//! Data models for the repository browser.
//!
//! Contains domain types for:
//! - [`RawEntry`], [`TreeListing`], [`BlobPayload`] - Wire shapes of the repository API
//! - [`Node`], [`EntryKind`], [`LastCommit`] - The in-memory file tree
//! - [`FileRecord`] - State of a file opened in the editor
//! - [`ViewMode`] - Edit vs. preview presentation

mod file;
mod node;
mod payload;
mod view;

pub use file::FileRecord;
pub use node::{EntryKind, LastCommit, Node, NodeTarget};
pub use payload::{BlobPayload, RawCommit, RawEntry, RenderError, TreeListing};
pub use view::ViewMode;
