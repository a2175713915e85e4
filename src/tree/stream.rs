//! Single-pass digest computation
//!
//! Folds walker events straight into hash states: each open directory holds
//! a running hasher seeded with its name, and file contents are streamed
//! through a buffer and dropped once hashed. Produces the same digest as
//! building the tree and hashing it.

use crate::error::TreeError;
use crate::tree::hasher::NodeHasher;
use crate::tree::walker::{WalkEvent, Walker};
use crate::types::{Digest, HashAlgorithm, HashOptions};
use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{error, info, instrument, trace};

/// Streaming digest computation for a directory
pub struct StreamingHasher {
    root: PathBuf,
    options: HashOptions,
}

impl StreamingHasher {
    pub fn new(root: PathBuf, options: HashOptions) -> Self {
        Self { root, options }
    }

    /// Walk the directory and return its root digest
    #[instrument(skip(self), fields(root = %self.root.display()))]
    pub fn digest(&self) -> Result<Digest, TreeError> {
        let start = Instant::now();
        info!("Starting streaming digest");

        let digest = self.fold().map_err(|e| {
            error!("Streaming digest failed: {}", e);
            e
        })?;

        info!(
            duration_ms = start.elapsed().as_millis(),
            "Streaming digest completed"
        );
        Ok(digest)
    }

    pub fn digest_hex(&self) -> Result<String, TreeError> {
        self.digest().map(hex::encode)
    }

    fn fold(&self) -> Result<Digest, TreeError> {
        let algorithm = self.options.algorithm;
        let walker = Walker::new(self.root.clone(), self.options.clone());
        let mut stack: Vec<NodeHasher> = Vec::new();

        for event in walker.events()? {
            match event? {
                WalkEvent::EnterDirectory { name } => {
                    stack.push(NodeHasher::for_node(algorithm, &name));
                }
                WalkEvent::File { name, path } => {
                    let digest = hash_file(algorithm, &name, &path)?;
                    match stack.last_mut() {
                        Some(parent) => parent.update(&digest),
                        None => unreachable!("walker emitted a file outside any directory"),
                    }
                }
                WalkEvent::LeaveDirectory => {
                    let Some(dir) = stack.pop() else {
                        unreachable!("walker closed more directories than it opened")
                    };
                    let digest = dir.finalize();
                    match stack.last_mut() {
                        Some(parent) => parent.update(&digest),
                        None => return Ok(digest),
                    }
                }
            }
        }

        unreachable!("walker ended without closing the root directory")
    }
}

/// Hash one file as a leaf: H(name || content), reading in buffered chunks
fn hash_file(algorithm: HashAlgorithm, name: &Path, path: &Path) -> Result<Digest, TreeError> {
    let read_error = |source: io::Error| TreeError::Read {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(read_error)?;
    let mut reader = BufReader::new(file);
    let mut hasher = NodeHasher::for_node(algorithm, name);
    let size = io::copy(&mut reader, &mut hasher).map_err(read_error)?;

    trace!(path = %path.display(), size, "Hashed file");
    Ok(hasher.finalize())
}
