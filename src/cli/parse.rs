//! CLI parse: clap types for treehash. No behavior; definitions only.

use crate::types::{EntryOrder, HashAlgorithm};
use clap::Parser;
use std::path::PathBuf;

/// treehash - Deterministic directory digests
#[derive(Debug, Parser)]
#[command(name = "treehash")]
#[command(about = "Compute a Merkle digest of a directory tree")]
pub struct Cli {
    /// Directory to hash
    #[arg(long, short = 'd')]
    pub dir: Option<PathBuf>,

    /// Hash function (sha256, blake3)
    #[arg(long)]
    pub algorithm: Option<HashAlgorithm>,

    /// Child order (sorted, filesystem)
    #[arg(long)]
    pub order: Option<EntryOrder>,

    /// Hash while walking instead of building the full tree in memory
    #[arg(long)]
    pub streaming: bool,

    /// Normalize names to Unicode NFC before hashing
    #[arg(long)]
    pub nfc: bool,

    /// Configuration file path (TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (default: off)
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stderr, file)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}
