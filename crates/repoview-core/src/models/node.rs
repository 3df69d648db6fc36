//! The in-memory file tree.

use std::fmt;

// =============================================================================
// Entry Kind
// =============================================================================

/// Discriminant of a tree entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EntryKind {
    /// Directory
    Tree,
    /// File
    Blob,
    /// Git submodule (opaque link, never expanded)
    Submodule,
}

impl EntryKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Tree => "tree",
            Self::Blob => "blob",
            Self::Submodule => "submodule",
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Last Commit
// =============================================================================

/// Last commit touching an entry, projected for display.
///
/// Entries without commit information carry the empty value rather than
/// `None`, so renderers never branch on presence.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LastCommit {
    /// Link to the commit page
    pub url: String,
    pub message: String,
    pub updated_at: String,
}

impl LastCommit {
    pub fn is_empty(&self) -> bool {
        self.url.is_empty() && self.message.is_empty() && self.updated_at.is_empty()
    }
}

// =============================================================================
// Node
// =============================================================================

/// A directory entry shown in the file browser.
///
/// Nodes are mutated in place when opened or closed and are only dropped
/// when an ancestor directory is closed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node {
    pub kind: EntryKind,
    pub name: String,
    pub url: String,
    /// Depth in the tree; root entries are level 0
    pub level: usize,
    /// Namespaced icon class (e.g. "fa-folder")
    pub icon: String,
    /// Populated after a successful listing load, cleared on close
    pub children: Vec<Node>,
    pub opened: bool,
    pub loading: bool,
    pub last_commit: LastCommit,
}

impl Node {
    /// Check if this entry is a directory.
    pub fn is_tree(&self) -> bool {
        self.kind == EntryKind::Tree
    }

    /// Snapshot of the fields a load needs, detached from the tree.
    pub fn target(&self) -> NodeTarget {
        NodeTarget {
            kind: self.kind,
            url: self.url.clone(),
            level: self.level,
        }
    }

    /// Depth-first search of this node and its descendants by URL.
    pub fn find(&self, url: &str) -> Option<&Node> {
        if self.url == url {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(url))
    }

    /// Mutable variant of [`Node::find`].
    pub fn find_mut(&mut self, url: &str) -> Option<&mut Node> {
        if self.url == url {
            return Some(self);
        }
        self.children.iter_mut().find_map(|child| child.find_mut(url))
    }
}

/// Identifies the node a load is aimed at.
///
/// Loads run across await points, so they carry this snapshot instead of a
/// borrow into the store; the node is looked up again by URL when results
/// are applied.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NodeTarget {
    pub kind: EntryKind,
    pub url: String,
    pub level: usize,
}

impl NodeTarget {
    pub fn new(kind: EntryKind, url: impl Into<String>, level: usize) -> Self {
        Self {
            kind,
            url: url.into(),
            level,
        }
    }

    /// Check if this target is a file.
    pub fn is_blob(&self) -> bool {
        self.kind == EntryKind::Blob
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(kind: EntryKind, url: &str, level: usize) -> Node {
        Node {
            kind,
            name: url.rsplit('/').next().unwrap_or(url).to_string(),
            url: url.to_string(),
            level,
            icon: String::new(),
            children: Vec::new(),
            opened: false,
            loading: false,
            last_commit: LastCommit::default(),
        }
    }

    #[test]
    fn test_find_nested() {
        let mut root = node(EntryKind::Tree, "/tree/lib", 0);
        let mut sub = node(EntryKind::Tree, "/tree/lib/util", 1);
        sub.children.push(node(EntryKind::Blob, "/blob/lib/util/x.rb", 2));
        root.children.push(sub);

        assert_eq!(root.find("/blob/lib/util/x.rb").map(|n| n.level), Some(2));
        assert!(root.find("/blob/missing").is_none());

        root.find_mut("/tree/lib/util").unwrap().opened = true;
        assert!(root.children[0].opened);
    }

    #[test]
    fn test_last_commit_empty() {
        assert!(LastCommit::default().is_empty());
        let commit = LastCommit {
            message: "init".to_string(),
            ..Default::default()
        };
        assert!(!commit.is_empty());
    }

    #[test]
    fn test_target_snapshot() {
        let n = node(EntryKind::Blob, "/blob/a.rb", 3);
        let target = n.target();
        assert!(target.is_blob());
        assert_eq!(target, NodeTarget::new(EntryKind::Blob, "/blob/a.rb", 3));
    }
}
