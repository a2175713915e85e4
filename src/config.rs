//! Configuration System
//!
//! Layered configuration: built-in defaults, an optional TOML file named on
//! the command line, then `TREEHASH_`-prefixed environment variables
//! (`TREEHASH_HASH__ALGORITHM=blake3`). CLI flags are applied on top by the
//! binary.

use crate::error::ApiError;
use crate::logging::LoggingConfig;
use crate::types::HashOptions;
use config::{Config, ConfigBuilder, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeHashConfig {
    /// Directory to hash (defaults to `./`)
    #[serde(default = "default_root")]
    pub root: PathBuf,

    /// Hashing behavior
    #[serde(default)]
    pub hash: HashOptions,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

fn default_root() -> PathBuf {
    PathBuf::from("./")
}

impl Default for TreeHashConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            hash: HashOptions::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl TreeHashConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.root.as_os_str().is_empty() {
            return Err(ApiError::ConfigError(
                "Root directory cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Loads [`TreeHashConfig`] from its layered sources
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load defaults, then the given file (if any), then the environment
    pub fn load(config_file: Option<&Path>) -> Result<TreeHashConfig, ApiError> {
        let mut builder = builder_with_defaults()?;

        if let Some(path) = config_file {
            builder = builder.add_source(File::from(path).format(FileFormat::Toml).required(true));
        }

        builder = builder.add_source(
            Environment::with_prefix("TREEHASH")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config: TreeHashConfig = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Load only from a file, ignoring the environment
    pub fn load_from_file(path: &Path) -> Result<TreeHashConfig, ApiError> {
        let config: TreeHashConfig = builder_with_defaults()?
            .add_source(File::from(path).format(FileFormat::Toml).required(true))
            .build()?
            .try_deserialize()?;
        config.validate()?;
        Ok(config)
    }
}

/// Create a Config builder with defaults applied
fn builder_with_defaults() -> Result<ConfigBuilder<config::builder::DefaultState>, ApiError> {
    Ok(Config::builder()
        .set_default("root", "./")?
        .set_default("hash.algorithm", "sha256")?
        .set_default("hash.order", "sorted")?
        .set_default("hash.unicode_nfc", false)?
        .set_default("hash.streaming", false)?
        .set_default("logging.enabled", false)?)
}
