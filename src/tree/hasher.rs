//! Hash computation for filesystem nodes
//!
//! Leaf:     H(name || content)
//! Internal: H(name || H(child_1) || ... || H(child_k))
//!
//! Child digests are concatenated as raw 32-byte values in child order.

use crate::tree::node::{Node, NodeKind};
use crate::tree::path;
use crate::types::{Digest, HashAlgorithm};
use sha2::Digest as _;
use std::io;

/// Incremental hash state for one node
#[derive(Clone)]
pub enum NodeHasher {
    Sha256(sha2::Sha256),
    Blake3(Box<blake3::Hasher>),
}

impl NodeHasher {
    pub fn new(algorithm: HashAlgorithm) -> Self {
        match algorithm {
            HashAlgorithm::Sha256 => NodeHasher::Sha256(sha2::Sha256::new()),
            HashAlgorithm::Blake3 => NodeHasher::Blake3(Box::new(blake3::Hasher::new())),
        }
    }

    /// Start a node's hash with its name bytes
    pub fn for_node(algorithm: HashAlgorithm, name: &std::path::Path) -> Self {
        let mut hasher = Self::new(algorithm);
        hasher.update(&path::name_bytes(name));
        hasher
    }

    pub fn update(&mut self, data: &[u8]) {
        match self {
            NodeHasher::Sha256(h) => h.update(data),
            NodeHasher::Blake3(h) => {
                h.update(data);
            }
        }
    }

    pub fn finalize(self) -> Digest {
        match self {
            NodeHasher::Sha256(h) => h.finalize().into(),
            NodeHasher::Blake3(h) => *h.finalize().as_bytes(),
        }
    }
}

impl io::Write for NodeHasher {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.update(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Compute the digest of a node and, recursively, of its whole subtree
pub fn hash_node(node: &Node, algorithm: HashAlgorithm) -> Digest {
    let mut hasher = NodeHasher::for_node(algorithm, node.name());
    match &node.kind {
        NodeKind::File { content } => hasher.update(content),
        NodeKind::Directory { children } => {
            for child in children {
                hasher.update(&hash_node(child, algorithm));
            }
        }
    }
    hasher.finalize()
}

/// Compute a digest of arbitrary bytes
pub fn compute_hash(data: &[u8], algorithm: HashAlgorithm) -> Digest {
    let mut hasher = NodeHasher::new(algorithm);
    hasher.update(data);
    hasher.finalize()
}
