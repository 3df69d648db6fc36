//! Utility modules for web, DOM, and display operations.
//!
//! Provides:
//! - [`fetch`] - Network fetching with timeout
//! - [`dom`] - Window, document and history access
//! - [`log`] - `tracing` output to the browser console
//! - [`html`] - Sanitizing server-rendered previews
//! - [`url`] - Repository URL helpers
//! - [`format`] - Display formatting

pub mod dom;
pub mod fetch;
pub mod format;
pub mod html;
pub mod log;
pub mod url;
