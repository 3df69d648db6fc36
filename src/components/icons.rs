//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.
//! Tree entries carry their own `fa-*` class from the server and do not go
//! through here.

use icondata::Icon;

use crate::config::IconTheme;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuChevronDown as ChevronDown, LuChevronRight as ChevronRight, LuCornerLeftUp as Parent,
        LuEye as Preview, LuLoader as Spinner, LuPencil as Edit, LuTriangleAlert as Warning,
        LuX as Close,
    };
}

mod bootstrap {
    pub use icondata::{
        BsArrowReturnLeft as Parent, BsArrowRepeat as Spinner, BsChevronDown as ChevronDown,
        BsChevronRight as ChevronRight, BsExclamationTriangle as Warning, BsEye as Preview,
        BsPencil as Edit, BsXLg as Close,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(CHEVRON_RIGHT, ChevronRight);
themed_icon!(CHEVRON_DOWN, ChevronDown);
themed_icon!(PARENT, Parent);
themed_icon!(SPINNER, Spinner);
themed_icon!(EDIT, Edit);
themed_icon!(PREVIEW, Preview);
themed_icon!(WARNING, Warning);
themed_icon!(CLOSE, Close);
