//! Filesystem Merkle Tree
//!
//! Represents a directory as a Merkle tree, where each node (file or
//! directory) has a deterministic hash based on its name, content and
//! structure.

pub mod builder;
pub mod hasher;
pub mod node;
pub mod path;
pub mod stream;
pub mod walker;

use crate::error::TreeError;
use crate::types::{Digest, HashOptions};
use std::path::PathBuf;

/// Compute the root digest of a directory with the given options.
///
/// Dispatches to the streaming hasher or the batch builder depending on
/// `options.streaming`; both yield the same digest.
pub fn digest_directory(root: PathBuf, options: &HashOptions) -> Result<Digest, TreeError> {
    if options.streaming {
        stream::StreamingHasher::new(root, options.clone()).digest()
    } else {
        builder::TreeBuilder::new(root)
            .with_options(options.clone())
            .compute_root()
    }
}

/// Hex-encoded variant of [`digest_directory`]
pub fn digest_directory_hex(root: PathBuf, options: &HashOptions) -> Result<String, TreeError> {
    digest_directory(root, options).map(hex::encode)
}
