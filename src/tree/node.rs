//! Filesystem node types

use std::path::{Path, PathBuf};

/// Node payload: file bytes or ordered children
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    File { content: Vec<u8> },
    Directory { children: Vec<Node> },
}

/// A file (leaf) or directory (internal node) in the Merkle tree.
///
/// Each node exclusively owns its children. A directory with zero children is
/// a leaf and hashes exactly like an empty file of the same name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub name: PathBuf,
    pub kind: NodeKind,
}

impl Node {
    pub fn file(name: impl Into<PathBuf>, content: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            kind: NodeKind::File {
                content: content.into(),
            },
        }
    }

    pub fn directory(name: impl Into<PathBuf>, children: Vec<Node>) -> Self {
        Self {
            name: name.into(),
            kind: NodeKind::Directory { children },
        }
    }

    pub fn name(&self) -> &Path {
        &self.name
    }

    /// A node is a leaf iff it has no children
    pub fn is_leaf(&self) -> bool {
        self.children().is_empty()
    }

    pub fn is_directory(&self) -> bool {
        matches!(self.kind, NodeKind::Directory { .. })
    }

    /// File bytes; empty for directories
    pub fn content(&self) -> &[u8] {
        match &self.kind {
            NodeKind::File { content } => content,
            NodeKind::Directory { .. } => &[],
        }
    }

    /// Ordered children; empty for files
    pub fn children(&self) -> &[Node] {
        match &self.kind {
            NodeKind::File { .. } => &[],
            NodeKind::Directory { children } => children,
        }
    }

    /// Number of nodes in this subtree, including itself
    pub fn node_count(&self) -> usize {
        1 + self.children().iter().map(Node::node_count).sum::<usize>()
    }

    /// Number of file nodes in this subtree
    pub fn file_count(&self) -> usize {
        match &self.kind {
            NodeKind::File { .. } => 1,
            NodeKind::Directory { children } => children.iter().map(Node::file_count).sum(),
        }
    }

    /// Total content bytes held by this subtree
    pub fn total_bytes(&self) -> u64 {
        match &self.kind {
            NodeKind::File { content } => content.len() as u64,
            NodeKind::Directory { children } => children.iter().map(Node::total_bytes).sum(),
        }
    }
}
