//! State of a file opened in the editor.

use super::payload::{BlobPayload, RenderError};

/// A file that has been opened, including unsaved edits.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FileRecord {
    /// Exactly one opened file is active at a time
    pub active: bool,
    pub binary: bool,
    pub extension: String,
    /// Server-rendered HTML used in preview mode
    pub html: String,
    pub mime_type: String,
    pub name: String,
    /// Raw text as loaded
    pub plain: String,
    pub size: u64,
    /// Canonical URL; identity of the record within the opened files
    pub url: String,
    /// Raw text has been fetched into `plain`
    pub raw: bool,
    pub raw_path: String,
    /// Pending edit buffer
    pub new_content: String,
    pub changed: bool,
    pub loading: bool,
    pub too_large: bool,
    pub render_error: Option<RenderError>,
    /// Base64 content of a binary file, once side-loaded
    pub base64: Option<String>,
}

impl FileRecord {
    /// Blank record used before any file is opened.
    pub fn default_active() -> Self {
        Self {
            active: true,
            ..Self::default()
        }
    }

    /// Build a record from a content response.
    pub fn from_payload(payload: BlobPayload, url: impl Into<String>) -> Self {
        Self {
            binary: payload.binary,
            extension: payload.extension,
            html: payload.html,
            mime_type: payload.mime_type,
            name: payload.name,
            size: payload.size,
            url: url.into(),
            raw_path: payload.raw_path,
            too_large: matches!(
                payload.render_error,
                Some(RenderError::TooLarge | RenderError::Collapsed)
            ),
            render_error: payload.render_error,
            ..Self::default()
        }
    }

    /// Text the editor should show: pending edits, else the loaded text.
    pub fn editor_text(&self) -> &str {
        if self.changed {
            &self.new_content
        } else {
            &self.plain
        }
    }

    /// Record an edit; `changed` tracks divergence from the loaded text.
    pub fn set_new_content(&mut self, content: impl Into<String>) {
        self.new_content = content.into();
        self.changed = self.new_content != self.plain;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_active() {
        let file = FileRecord::default_active();
        assert!(file.active);
        assert!(!file.binary);
        assert!(file.url.is_empty());
        assert_eq!(file.base64, None);
    }

    #[test]
    fn test_too_large_from_render_error() {
        for (error, expected) in [
            (Some(RenderError::TooLarge), true),
            (Some(RenderError::Collapsed), true),
            (Some(RenderError::Other), false),
            (None, false),
        ] {
            let payload = BlobPayload {
                render_error: error,
                ..Default::default()
            };
            assert_eq!(FileRecord::from_payload(payload, "/x").too_large, expected);
        }
    }

    #[test]
    fn test_changed_tracking() {
        let mut file = FileRecord {
            plain: "a".to_string(),
            ..Default::default()
        };
        file.set_new_content("ab");
        assert!(file.changed);
        file.set_new_content("a");
        assert!(!file.changed);
    }

    #[test]
    fn test_editor_text_prefers_edits() {
        let mut file = FileRecord {
            plain: "a".to_string(),
            ..Default::default()
        };
        assert_eq!(file.editor_text(), "a");
        file.set_new_content("ab");
        assert_eq!(file.editor_text(), "ab");
    }
}
