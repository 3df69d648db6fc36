//! Application configuration.
//!
//! Centralizes the constants of the browser build. Loader-level constants
//! (header names, notification text) live in `repoview_core::config`.

use crate::utils::dom;

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name, reported in logs.
pub const APP_NAME: &str = "repoview";

// =============================================================================
// DOM Anchors
// =============================================================================

/// Host element the app mounts into.
pub const APP_ELEMENT_ID: &str = "app";

/// Container the code editor attaches to.
pub const EDITOR_ELEMENT_ID: &str = "repoview-editor";

/// Scrollable tab strip.
pub const TABS_ELEMENT_ID: &str = "repoview-tabs";

// =============================================================================
// Network Configuration
// =============================================================================

/// Fetch request timeout in milliseconds.
pub const FETCH_TIMEOUT_MS: i32 = 10000;

// =============================================================================
// UI Configuration
// =============================================================================

/// How long a notification stays on screen, in milliseconds.
pub const TOAST_DURATION_MS: u32 = 5000;

/// Query flag enabling debug-level logging.
pub const DEBUG_QUERY_FLAG: &str = "debug";

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;

// =============================================================================
// Mount Configuration
// =============================================================================

/// Where the browser is pointed, read from the host element:
///
/// ```html
/// <div id="app" data-project-url="/group/project" data-path="/group/project/tree/master"></div>
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MountConfig {
    /// Project root, used to build commit links
    pub project_url: String,
    /// Path of the first content request
    pub path: String,
}

impl MountConfig {
    /// Read the mount from the DOM.
    ///
    /// Missing attributes fall back to `/` and the current location.
    pub fn from_dom() -> Self {
        let element = dom::html_element_by_id(APP_ELEMENT_ID);
        let attribute = |name: &str| element.as_ref().and_then(|e| dom::data_attribute(e, name));

        Self {
            project_url: attribute("projectUrl").unwrap_or_else(|| "/".to_string()),
            path: attribute("path").unwrap_or_else(dom::location_path),
        }
    }
}

/// Whether the page was opened with `?debug`.
pub fn debug_logging_requested() -> bool {
    dom::location_search()
        .trim_start_matches('?')
        .split('&')
        .any(|pair| pair.split('=').next() == Some(DEBUG_QUERY_FLAG))
}
