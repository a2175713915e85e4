//! Filesystem walker for traversing directory structures
//!
//! Flattens a depth-first `walkdir` traversal into enter/file/leave events so
//! both the tree builder and the streaming hasher can fold over it.

use crate::error::TreeError;
use crate::tree::path;
use crate::types::{EntryOrder, HashOptions};
use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use tracing::{debug, trace};
use walkdir::{DirEntry, WalkDir};

/// Traversal events in depth-first order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WalkEvent {
    /// A directory is opened; its entries follow until the matching leave
    EnterDirectory { name: PathBuf },
    /// A non-directory entry, with its hash name and the path to read it from
    File { name: PathBuf, path: PathBuf },
    /// The most recently entered directory has no more entries
    LeaveDirectory,
}

/// Filesystem walker
pub struct Walker {
    root: PathBuf,
    options: HashOptions,
}

impl Walker {
    /// Create a new walker for the given root path
    pub fn new(root: PathBuf, options: HashOptions) -> Self {
        Self { root, options }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Start walking. Fails up front if the root is not a readable directory.
    pub fn events(&self) -> Result<WalkEvents, TreeError> {
        let metadata = std::fs::metadata(&self.root).map_err(|source| TreeError::Traversal {
            path: self.root.clone(),
            source,
        })?;
        if !metadata.is_dir() {
            return Err(TreeError::NotADirectory(self.root.clone()));
        }

        let mut walker = WalkDir::new(&self.root).follow_links(false);
        if self.options.order == EntryOrder::Sorted {
            walker = walker.sort_by_file_name();
        }

        Ok(WalkEvents {
            inner: walker.into_iter(),
            open: Vec::new(),
            pending: VecDeque::new(),
            unicode_nfc: self.options.unicode_nfc,
            finished: false,
        })
    }
}

/// Iterator over [`WalkEvent`]s. Yields at most one error, then stops.
pub struct WalkEvents {
    inner: walkdir::IntoIter,
    /// Paths of the currently open directories, root first
    open: Vec<PathBuf>,
    pending: VecDeque<WalkEvent>,
    unicode_nfc: bool,
    finished: bool,
}

impl WalkEvents {
    fn push_entry(&mut self, entry: DirEntry) {
        let depth = entry.depth();

        if depth == 0 {
            debug!(path = %entry.path().display(), "Entering root directory");
            self.open.push(entry.into_path());
            self.pending.push_back(WalkEvent::EnterDirectory {
                name: path::root_name(),
            });
            return;
        }

        // Close every directory the walk has climbed out of
        while self.open.len() > depth {
            self.open.pop();
            self.pending.push_back(WalkEvent::LeaveDirectory);
        }

        let parent = match self.open.last() {
            Some(parent) => parent,
            None => return,
        };
        let name = path::child_name(parent, entry.file_name(), self.unicode_nfc);

        if entry.file_type().is_dir() {
            debug!(path = %entry.path().display(), "Entering directory");
            self.open.push(entry.into_path());
            self.pending.push_back(WalkEvent::EnterDirectory { name });
        } else {
            trace!(path = %entry.path().display(), "Found file");
            self.pending.push_back(WalkEvent::File {
                name,
                path: entry.into_path(),
            });
        }
    }
}

impl Iterator for WalkEvents {
    type Item = Result<WalkEvent, TreeError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(event) = self.pending.pop_front() {
                return Some(Ok(event));
            }
            if self.finished {
                return None;
            }
            match self.inner.next() {
                Some(Ok(entry)) => self.push_entry(entry),
                Some(Err(e)) => {
                    self.finished = true;
                    return Some(Err(TreeError::from(e)));
                }
                None => {
                    self.finished = true;
                    for _ in self.open.drain(..) {
                        self.pending.push_back(WalkEvent::LeaveDirectory);
                    }
                }
            }
        }
    }
}
