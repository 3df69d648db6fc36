//! Wire shapes returned by the repository content API.
//!
//! These are decoded from the JSON body at the transport boundary, so a
//! payload of the wrong shape fails before any state is touched.

use serde::{Deserialize, Serialize};

// =============================================================================
// Tree Listing
// =============================================================================

/// Last commit touching an entry, as sent by the API.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct RawCommit {
    /// Commit SHA
    pub id: String,
    /// Commit title
    #[serde(default)]
    pub message: String,
    /// ISO 8601 commit date
    #[serde(default)]
    pub committed_date: String,
}

/// One entry of a directory listing (tree, blob or submodule).
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct RawEntry {
    pub name: String,
    pub url: String,
    /// Icon identifier without namespace (e.g. "folder", "file-text-o")
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub last_commit: Option<RawCommit>,
}

/// Directory listing response.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct TreeListing {
    /// Directory name (used as a fallback page title)
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub trees: Vec<RawEntry>,
    #[serde(default)]
    pub blobs: Vec<RawEntry>,
    #[serde(default)]
    pub submodules: Vec<RawEntry>,
}

// =============================================================================
// Blob
// =============================================================================

/// Server-signaled condition under which a blob was not fully rendered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderError {
    TooLarge,
    Collapsed,
    #[serde(other)]
    Other,
}

/// File content response.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct BlobPayload {
    pub name: String,
    pub extension: String,
    /// Server-rendered HTML (markdown, highlighted source)
    pub html: String,
    pub mime_type: String,
    pub size: u64,
    pub binary: bool,
    /// Path of the raw content endpoint
    pub raw_path: String,
    pub render_error: Option<RenderError>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_defaults_missing_kinds() {
        let listing: TreeListing =
            serde_json::from_str(r#"{"name":"lib","trees":[{"name":"a","url":"/t/a"}]}"#)
                .unwrap();
        assert_eq!(listing.trees.len(), 1);
        assert!(listing.blobs.is_empty());
        assert!(listing.submodules.is_empty());
        assert_eq!(listing.trees[0].last_commit, None);
    }

    #[test]
    fn test_render_error_parsing() {
        let blob: BlobPayload =
            serde_json::from_str(r#"{"name":"big.txt","render_error":"too_large"}"#).unwrap();
        assert_eq!(blob.render_error, Some(RenderError::TooLarge));

        let blob: BlobPayload =
            serde_json::from_str(r#"{"name":"x","render_error":"server_side_but_stored_externally"}"#)
                .unwrap();
        assert_eq!(blob.render_error, Some(RenderError::Other));

        let blob: BlobPayload = serde_json::from_str(r#"{"render_error":null}"#).unwrap();
        assert_eq!(blob.render_error, None);
    }

    #[test]
    fn test_blob_rejects_wrong_shape() {
        assert!(serde_json::from_str::<BlobPayload>(r#"{"binary":"yes"}"#).is_err());
    }
}
