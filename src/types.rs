//! Core types shared by the tree builder and hashers.

use serde::{Deserialize, Serialize};

/// Digest: fixed-size 256-bit output of the node hash function
pub type Digest = [u8; 32];

/// Hash function applied to every node of a tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HashAlgorithm {
    /// SHA-256
    #[default]
    Sha256,
    /// BLAKE3 with its default 32-byte output
    Blake3,
}

/// Order in which directory entries become children
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryOrder {
    /// Sorted by file name bytes
    #[default]
    Sorted,
    /// Whatever order the platform's directory listing returns
    Filesystem,
}

/// Options controlling how a tree is walked and hashed
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HashOptions {
    #[serde(default)]
    pub algorithm: HashAlgorithm,

    #[serde(default)]
    pub order: EntryOrder,

    /// Normalize node names to Unicode NFC before hashing
    #[serde(default)]
    pub unicode_nfc: bool,

    /// Fuse traversal and hashing instead of materializing the tree
    #[serde(default)]
    pub streaming: bool,
}

impl std::str::FromStr for HashAlgorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sha256" => Ok(HashAlgorithm::Sha256),
            "blake3" => Ok(HashAlgorithm::Blake3),
            other => Err(format!(
                "Invalid hash algorithm: {} (must be 'sha256' or 'blake3')",
                other
            )),
        }
    }
}

impl std::str::FromStr for EntryOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sorted" => Ok(EntryOrder::Sorted),
            "filesystem" => Ok(EntryOrder::Filesystem),
            other => Err(format!(
                "Invalid entry order: {} (must be 'sorted' or 'filesystem')",
                other
            )),
        }
    }
}
