// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration loading for the `strmatch` binary.
//!
//! ```toml
//! version = 1
//!
//! [search]
//! algorithm = "boyer-moore"
//!
//! [rabin_karp]
//! base = 256
//! modulus = 1_000_000_007
//!
//! [output]
//! format = "json"
//! ```

pub mod defaults;

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::cli::OutputFormat;
use crate::error::MatchError;
use crate::pattern::{Algorithm, RabinKarpParams};

/// Top-level keys understood by [`parse`]. Anything else is warned about.
const KNOWN_KEYS: &[&str] = &["version", "search", "rabin_karp", "output"];

/// Error loading or validating configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error(
        "unsupported config version {0} (expected {expected})",
        expected = defaults::CONFIG_VERSION
    )]
    UnsupportedVersion(u32),

    #[error(transparent)]
    Invalid(#[from] MatchError),
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub version: u32,
    pub search: SearchConfig,
    pub rabin_karp: RabinKarpConfig,
    pub output: OutputConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: defaults::CONFIG_VERSION,
            search: SearchConfig::default(),
            rabin_karp: RabinKarpConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

/// `[search]` section.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Algorithm name, parsed with [`Algorithm::from_str`](std::str::FromStr).
    pub algorithm: Option<String>,
}

/// `[rabin_karp]` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RabinKarpConfig {
    pub base: u64,
    pub modulus: u64,
}

impl Default for RabinKarpConfig {
    fn default() -> Self {
        Self {
            base: defaults::rabin_karp::BASE,
            modulus: defaults::rabin_karp::MODULUS,
        }
    }
}

/// `[output]` section.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: Option<OutputFormat>,
}

impl Config {
    /// Configured default algorithm, or KMP.
    pub fn algorithm(&self) -> Result<Algorithm, MatchError> {
        match &self.search.algorithm {
            Some(name) => name.parse(),
            None => Ok(Algorithm::default()),
        }
    }

    pub fn rabin_karp_params(&self) -> Result<RabinKarpParams, MatchError> {
        RabinKarpParams::new(self.rabin_karp.base, self.rabin_karp.modulus)
    }

    pub fn output_format(&self) -> OutputFormat {
        self.output.format.unwrap_or_default()
    }

    /// Check every value that is parsed lazily, so bad config fails at load.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.version != defaults::CONFIG_VERSION {
            return Err(ConfigError::UnsupportedVersion(self.version));
        }
        self.algorithm()?;
        self.rabin_karp_params()?;
        Ok(())
    }
}

/// Load and validate a config file.
pub fn load(path: &Path) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse(&content, path)
}

/// Parse and validate config content. Unknown top-level keys are logged and ignored.
pub fn parse(content: &str, path: &Path) -> Result<Config, ConfigError> {
    let parse_err = |source: toml::de::Error| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    };

    let table: toml::Table = toml::from_str(content).map_err(parse_err)?;
    for key in table.keys() {
        if !KNOWN_KEYS.contains(&key.as_str()) {
            tracing::warn!("unknown config key in {}: {}", path.display(), key);
        }
    }

    let config: Config = toml::from_str(content).map_err(parse_err)?;
    config.validate()?;
    tracing::debug!("loaded config from {}", path.display());
    Ok(config)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
