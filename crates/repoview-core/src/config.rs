//! Core configuration.
//!
//! Constants shared by the loader and the UI boundary, plus the
//! [`LoaderOptions`] knobs.

// =============================================================================
// Presentation Constants
// =============================================================================

/// Namespace prefixed to raw icon identifiers (Font Awesome class names).
pub const ICON_PREFIX: &str = "fa-";

/// Editor language used when no registered language claims an extension.
pub const PLAINTEXT_LANGUAGE: &str = "plaintext";

/// Extensions that are shown rendered rather than as editable text.
pub const RENDERABLE_EXTENSIONS: &[&str] = &["md", "svg"];

/// The single user-facing failure message.
pub const LOAD_ERROR_MESSAGE: &str = "Unable to load this content at this time.";

// =============================================================================
// Response Headers
// =============================================================================

/// Header carrying the page title for the loaded entity.
pub const PAGE_TITLE_HEADER: &str = "page-title";

/// Header flagging whether the loaded path is the repository root.
pub const IS_ROOT_HEADER: &str = "is-root";

// =============================================================================
// Loader Options
// =============================================================================

/// Behavior switches for [`crate::ContentLoader`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoaderOptions {
    /// Drop responses superseded by a newer request for the same node or file.
    ///
    /// With `false`, every response is applied in arrival order, matching the
    /// historical behavior of the web client.
    pub discard_stale: bool,
}

impl Default for LoaderOptions {
    fn default() -> Self {
        Self {
            discard_stale: true,
        }
    }
}
