// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Runtime configuration.
//!
//! A TOML file sets the baseline; `DASH_*` environment variables override
//! individual fields. Everything has a default, so embedders can also start
//! from `Config::default()`.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("parse {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// RPC endpoint, handed to the embedder's transport construction.
    pub endpoint: String,
    /// Event bus capacity; slow subscribers beyond it are skipped forward.
    pub channel_capacity: usize,
    /// Form submission channel capacity.
    pub form_buffer: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost:9090".to_string(),
            channel_capacity: 256,
            form_buffer: 16,
        }
    }
}

impl Config {
    /// Load from a TOML file, then apply environment overrides.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        let mut config: Config = toml::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })?;
        config.apply_env();
        Ok(config)
    }

    /// Defaults plus environment overrides, no file involved.
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env();
        config
    }

    fn apply_env(&mut self) {
        if let Ok(endpoint) = std::env::var("DASH_ENDPOINT") {
            if !endpoint.is_empty() {
                self.endpoint = endpoint;
            }
        }
        if let Some(capacity) = env_usize("DASH_CHANNEL_CAPACITY") {
            self.channel_capacity = capacity;
        }
        if let Some(buffer) = env_usize("DASH_FORM_BUFFER") {
            self.form_buffer = buffer;
        }
    }
}

fn env_usize(key: &str) -> Option<usize> {
    std::env::var(key).ok().and_then(|value| value.parse().ok())
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
