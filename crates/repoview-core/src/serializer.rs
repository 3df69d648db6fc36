//! Conversion of raw API entries into tree [`Node`]s.
//!
//! Everything here is pure: the same listing, level and project URL always
//! produce the same nodes.

use crate::config::ICON_PREFIX;
use crate::models::{EntryKind, LastCommit, Node, RawEntry, TreeListing};

/// Serialize one raw entry.
pub fn serialize(kind: EntryKind, entry: &RawEntry, level: usize, project_url: &str) -> Node {
    let last_commit = entry
        .last_commit
        .as_ref()
        .map(|commit| LastCommit {
            url: format!("{}/commit/{}", project_url, commit.id),
            message: commit.message.clone(),
            updated_at: commit.committed_date.clone(),
        })
        .unwrap_or_default();

    Node {
        kind,
        name: entry.name.clone(),
        url: entry.url.clone(),
        level,
        icon: format!("{}{}", ICON_PREFIX, entry.icon),
        children: Vec::new(),
        opened: false,
        loading: false,
        last_commit,
    }
}

pub fn serialize_tree(entry: &RawEntry, level: usize, project_url: &str) -> Node {
    serialize(EntryKind::Tree, entry, level, project_url)
}

pub fn serialize_blob(entry: &RawEntry, level: usize, project_url: &str) -> Node {
    serialize(EntryKind::Blob, entry, level, project_url)
}

pub fn serialize_submodule(entry: &RawEntry, level: usize, project_url: &str) -> Node {
    serialize(EntryKind::Submodule, entry, level, project_url)
}

/// Convert a listing to nodes: trees, then blobs, then submodules.
///
/// Renderers rely on this order; input order is kept within each kind.
pub fn listing_to_nodes(listing: &TreeListing, level: usize, project_url: &str) -> Vec<Node> {
    let trees = listing
        .trees
        .iter()
        .map(|tree| serialize_tree(tree, level, project_url));
    let blobs = listing
        .blobs
        .iter()
        .map(|blob| serialize_blob(blob, level, project_url));
    let submodules = listing
        .submodules
        .iter()
        .map(|submodule| serialize_submodule(submodule, level, project_url));

    trees.chain(blobs).chain(submodules).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RawCommit;

    const PROJECT: &str = "/group/project";

    fn entry(name: &str) -> RawEntry {
        RawEntry {
            name: name.to_string(),
            url: format!("/group/project/x/{}", name),
            icon: "file-o".to_string(),
            last_commit: None,
        }
    }

    #[test]
    fn test_serialize_copies_fields() {
        let node = serialize(EntryKind::Blob, &entry("a.rb"), 2, PROJECT);
        assert_eq!(node.kind, EntryKind::Blob);
        assert_eq!(node.name, "a.rb");
        assert_eq!(node.url, "/group/project/x/a.rb");
        assert_eq!(node.level, 2);
        assert_eq!(node.icon, "fa-file-o");
        assert!(node.children.is_empty());
        assert!(!node.opened);
        assert!(!node.loading);
    }

    #[test]
    fn test_last_commit_projection() {
        let mut raw = entry("lib");
        raw.last_commit = Some(RawCommit {
            id: "abc123".to_string(),
            message: "Add lib".to_string(),
            committed_date: "2017-05-01T10:00:00Z".to_string(),
        });

        let node = serialize_tree(&raw, 0, PROJECT);
        assert_eq!(node.last_commit.url, "/group/project/commit/abc123");
        assert_eq!(node.last_commit.message, "Add lib");
        assert_eq!(node.last_commit.updated_at, "2017-05-01T10:00:00Z");
    }

    #[test]
    fn test_missing_last_commit_is_empty() {
        let node = serialize_blob(&entry("a.rb"), 0, PROJECT);
        assert!(node.last_commit.is_empty());
    }

    #[test]
    fn test_listing_order() {
        let listing = TreeListing {
            name: "root".to_string(),
            blobs: vec![entry("z.rb"), entry("a.rb")],
            submodules: vec![entry("vendor")],
            trees: vec![entry("test"), entry("lib")],
        };

        let nodes = listing_to_nodes(&listing, 1, PROJECT);
        let summary: Vec<(EntryKind, &str)> =
            nodes.iter().map(|n| (n.kind, n.name.as_str())).collect();

        assert_eq!(
            summary,
            vec![
                (EntryKind::Tree, "test"),
                (EntryKind::Tree, "lib"),
                (EntryKind::Blob, "z.rb"),
                (EntryKind::Blob, "a.rb"),
                (EntryKind::Submodule, "vendor"),
            ]
        );
        assert!(nodes.iter().all(|n| n.level == 1));
    }

    #[test]
    fn test_empty_listing() {
        assert!(listing_to_nodes(&TreeListing::default(), 0, PROJECT).is_empty());
    }
}
