//! Tree builder for constructing filesystem Merkle trees

use crate::error::TreeError;
use crate::tree::hasher;
use crate::tree::node::Node;
use crate::tree::walker::{WalkEvent, Walker};
use crate::types::{Digest, HashOptions};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, error, info, instrument, trace};

/// Complete Merkle tree structure
#[derive(Debug, Clone)]
pub struct Tree {
    root: Node,
    options: HashOptions,
}

impl Tree {
    /// Wrap an already built root node
    pub fn from_root(root: Node, options: HashOptions) -> Self {
        Self { root, options }
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    pub fn options(&self) -> &HashOptions {
        &self.options
    }

    pub fn node_count(&self) -> usize {
        self.root.node_count()
    }

    pub fn file_count(&self) -> usize {
        self.root.file_count()
    }

    pub fn total_bytes(&self) -> u64 {
        self.root.total_bytes()
    }

    /// Root digest of the whole tree
    pub fn digest(&self) -> Digest {
        hasher::hash_node(&self.root, self.options.algorithm)
    }

    /// Root digest as lowercase hex (64 characters)
    pub fn digest_hex(&self) -> String {
        hex::encode(self.digest())
    }
}

/// Tree builder for constructing filesystem Merkle trees
pub struct TreeBuilder {
    root: PathBuf,
    options: HashOptions,
}

/// A directory whose entries are still being collected
struct OpenDirectory {
    name: PathBuf,
    children: Vec<Node>,
}

impl TreeBuilder {
    /// Create a new tree builder for the given root path
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            options: HashOptions::default(),
        }
    }

    /// Set hashing options (algorithm, entry order, name normalization)
    pub fn with_options(mut self, options: HashOptions) -> Self {
        self.options = options;
        self
    }

    /// Build the complete Merkle tree from the filesystem
    ///
    /// Reads every file fully into memory. Any I/O error aborts the build and
    /// no partial tree is returned.
    #[instrument(skip(self), fields(root = %self.root.display()))]
    pub fn build(&self) -> Result<Tree, TreeError> {
        let start = Instant::now();
        info!("Starting tree build");

        let root = match self.collect() {
            Ok(root) => root,
            Err(e) => {
                error!("Tree build failed: {}", e);
                return Err(e);
            }
        };

        let tree = Tree::from_root(root, self.options.clone());
        info!(
            node_count = tree.node_count(),
            file_count = tree.file_count(),
            total_bytes = tree.total_bytes(),
            duration_ms = start.elapsed().as_millis(),
            "Tree build completed"
        );

        Ok(tree)
    }

    /// Compute the root digest of the directory
    ///
    /// This is a convenience method that builds the tree and hashes it.
    pub fn compute_root(&self) -> Result<Digest, TreeError> {
        let tree = self.build()?;
        Ok(tree.digest())
    }

    fn collect(&self) -> Result<Node, TreeError> {
        let walker = Walker::new(self.root.clone(), self.options.clone());
        let mut stack: Vec<OpenDirectory> = Vec::new();

        for event in walker.events()? {
            match event? {
                WalkEvent::EnterDirectory { name } => stack.push(OpenDirectory {
                    name,
                    children: Vec::new(),
                }),
                WalkEvent::File { name, path } => {
                    let node = read_file(name, &path)?;
                    match stack.last_mut() {
                        Some(parent) => parent.children.push(node),
                        None => unreachable!("walker emitted a file outside any directory"),
                    }
                }
                WalkEvent::LeaveDirectory => {
                    let Some(dir) = stack.pop() else {
                        unreachable!("walker closed more directories than it opened")
                    };
                    debug!(
                        name = %dir.name.display(),
                        children = dir.children.len(),
                        "Directory complete"
                    );
                    let node = Node::directory(dir.name, dir.children);
                    match stack.last_mut() {
                        Some(parent) => parent.children.push(node),
                        None => return Ok(node),
                    }
                }
            }
        }

        unreachable!("walker ended without closing the root directory")
    }
}

/// Read a file into a leaf node
fn read_file(name: PathBuf, path: &Path) -> Result<Node, TreeError> {
    let content = std::fs::read(path).map_err(|source| {
        error!(path = %path.display(), "Failed to read file: {}", source);
        TreeError::Read {
            path: path.to_path_buf(),
            source,
        }
    })?;
    trace!(path = %path.display(), size = content.len(), "Read file");
    Ok(Node::file(name, content))
}
