//! CLI route: resolves configuration and runs the digest.

use crate::cli::parse::Cli;
use crate::config::{ConfigLoader, TreeHashConfig};
use crate::error::ApiError;
use crate::tree;
use tracing::{debug, info};

/// Merge CLI flags over the loaded configuration.
/// Precedence: CLI flags, then environment, then config file, then defaults.
pub fn resolve_config(cli: &Cli) -> Result<TreeHashConfig, ApiError> {
    let mut config = ConfigLoader::load(cli.config.as_deref())?;

    if let Some(ref dir) = cli.dir {
        config.root = dir.clone();
    }
    if let Some(algorithm) = cli.algorithm {
        config.hash.algorithm = algorithm;
    }
    if let Some(order) = cli.order {
        config.hash.order = order;
    }
    if cli.streaming {
        config.hash.streaming = true;
    }
    if cli.nfc {
        config.hash.unicode_nfc = true;
    }

    // Flags can only switch logging on; the config layers decide otherwise
    if cli.verbose || cli.log_level.is_some() {
        config.logging.enabled = true;
    }
    if cli.verbose {
        config.logging.level = "debug".to_string();
    }
    if let Some(ref level) = cli.log_level {
        config.logging.level = level.clone();
    }
    if let Some(ref format) = cli.log_format {
        config.logging.format = format.clone();
    }
    if let Some(ref output) = cli.log_output {
        config.logging.output = output.clone();
    }
    if let Some(ref file) = cli.log_file {
        config.logging.file = Some(file.clone());
    }

    config.validate()?;
    Ok(config)
}

/// Runtime context for one invocation
pub struct RunContext {
    config: TreeHashConfig,
}

impl RunContext {
    pub fn new(config: TreeHashConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TreeHashConfig {
        &self.config
    }

    /// Hash the configured root and return the lowercase hex digest
    pub fn execute(&self) -> Result<String, ApiError> {
        debug!(options = ?self.config.hash, "Resolved hash options");
        let digest = tree::digest_directory_hex(self.config.root.clone(), &self.config.hash)?;
        info!(root = %self.config.root.display(), digest = %digest, "Digest computed");
        Ok(digest)
    }
}
