//! UI components built with Leptos.
//!
//! - [`repo`] - File tree, tabs, content pane and notifications
//! - [`router`] - Browser back/forward handling
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod icons;
pub mod repo;
pub mod router;

pub use repo::RepoBrowser;
