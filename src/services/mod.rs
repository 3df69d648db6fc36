//! Browser implementations of the core's collaborator traits.
//!
//! - [`WebTransport`] - Repository API over `fetch`
//! - [`MonacoEditor`] - The page's Monaco instance
//! - [`WindowHistory`] - `history.pushState` and `document.title`
//! - [`ToastNotifier`] - Notifications rendered by the toast component

mod editor;
mod history;
mod notifier;
mod transport;

pub use editor::MonacoEditor;
pub use history::WindowHistory;
pub use notifier::ToastNotifier;
pub use transport::WebTransport;

/// The controller type the UI drives.
pub type WebController =
    repoview_core::RepoController<WebTransport, MonacoEditor, WindowHistory, ToastNotifier>;
