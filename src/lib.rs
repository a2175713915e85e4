//! treehash: Deterministic Directory Digests
//!
//! Builds a Merkle tree mirroring a directory's files and subdirectories and
//! reduces it to one 32-byte digest. Any change to a file's bytes, a name, or
//! the tree's shape changes the digest.
//!
//! ```no_run
//! use std::path::PathBuf;
//! use treehash::tree::builder::TreeBuilder;
//!
//! let tree = TreeBuilder::new(PathBuf::from("./")).build()?;
//! println!("{}", tree.digest_hex());
//! # Ok::<(), treehash::error::TreeError>(())
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod tree;
pub mod types;

pub use error::{ApiError, TreeError};
pub use tree::{digest_directory, digest_directory_hex};
pub use types::{Digest, EntryOrder, HashAlgorithm, HashOptions};
