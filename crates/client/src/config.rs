// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Client configuration: TOML file, then environment overrides.
//!
//! ```toml
//! address = "127.0.0.1:6379"
//! index = "products"
//! read_timeout_ms = 5000
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::env;

pub const DEFAULT_ADDRESS: &str = "127.0.0.1:6379";
pub const DEFAULT_READ_TIMEOUT_MS: u64 = 5_000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("no index name configured (set `index` or FTS_INDEX)")]
    MissingIndex,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClientConfig {
    pub address: String,
    pub index: String,
    pub read_timeout_ms: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            address: DEFAULT_ADDRESS.to_string(),
            index: String::new(),
            read_timeout_ms: DEFAULT_READ_TIMEOUT_MS,
        }
    }
}

impl ClientConfig {
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Load from an optional file, apply `FTS_*` overrides and validate
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => {
                let text = std::fs::read_to_string(path)
                    .map_err(|source| ConfigError::Read { path: path.to_path_buf(), source })?;
                Self::from_toml(&text)?
            }
            None => Self::default(),
        };
        config.apply_env();
        if config.index.is_empty() {
            return Err(ConfigError::MissingIndex);
        }
        tracing::debug!(address = %config.address, index = %config.index, "client config loaded");
        Ok(config)
    }

    /// Environment variables take precedence over file values
    pub fn apply_env(&mut self) {
        if let Some(address) = env::address() {
            self.address = address;
        }
        if let Some(index) = env::index() {
            self.index = index;
        }
        if let Some(timeout) = env::read_timeout() {
            self.read_timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX);
        }
    }

    pub fn read_timeout(&self) -> Duration {
        Duration::from_millis(self.read_timeout_ms)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
