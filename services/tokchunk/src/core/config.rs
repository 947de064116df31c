//! Configuration management for tokchunk.
//!
//! This module handles loading configuration from TOML files and
//! environment variables, with sensible defaults for all settings.

use crate::core::chunker::WindowConfig;
use crate::core::error::{Result, TokChunkError};
use crate::core::types::ExecutionMode;
use crate::core::xdg::XdgDirs;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub chunking: ChunkingConfig,

    #[serde(default)]
    pub parallel: ParallelConfig,
}

/// Chunking configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ChunkingConfig {
    /// Tokens per chunk
    #[serde(default = "default_size")]
    pub size: usize,

    /// Tokens repeated at the start of the next chunk
    #[serde(default = "default_overlap")]
    pub overlap: usize,
}

/// Parallelism configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ParallelConfig {
    /// Window documents concurrently
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Worker threads for parallel runs (0 = rayon default)
    #[serde(default)]
    pub threads: usize,
}

// Default value functions
fn default_size() -> usize {
    100
}

fn default_overlap() -> usize {
    0
}

fn default_enabled() -> bool {
    true
}

impl Default for ChunkingConfig {
    fn default() -> Self {
        Self {
            size: default_size(),
            overlap: default_overlap(),
        }
    }
}

impl ChunkingConfig {
    /// Validated window for these settings
    pub fn window(&self) -> Result<WindowConfig> {
        WindowConfig::new(self.size, self.overlap)
    }
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            threads: 0,
        }
    }
}

impl ParallelConfig {
    /// Execution mode implied by the `enabled` flag
    pub fn mode(&self) -> ExecutionMode {
        if self.enabled {
            ExecutionMode::Parallel
        } else {
            ExecutionMode::Sequential
        }
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| TokChunkError::ConfigError(format!("Failed to read config file: {e}")))?;

        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load config with priority: env vars > TOML > defaults
    pub fn load() -> Result<Self> {
        let xdg = XdgDirs::new();
        Self::load_with_xdg(&xdg)
    }

    /// Load config with explicit XDG directories
    ///
    /// Priority order:
    /// 1. TOKCHUNK_CONFIG env var
    /// 2. XDG config file (~/.config/tokchunk/config.toml)
    /// 3. ./tokchunk.toml
    /// 4. Defaults
    ///
    /// The window is not validated here: command-line flags may still
    /// replace it. Call [`Config::validate`] on the effective values.
    pub fn load_with_xdg(xdg: &XdgDirs) -> Result<Self> {
        xdg.log_paths();

        let mut config = if let Ok(config_path) = env::var("TOKCHUNK_CONFIG") {
            Self::from_file(config_path)?
        } else {
            let xdg_config = xdg.config_file();
            if xdg_config.exists() {
                Self::from_file(xdg_config)?
            } else if Path::new("tokchunk.toml").exists() {
                Self::from_file("tokchunk.toml")?
            } else {
                Self::default()
            }
        };

        config.merge_env();

        Ok(config)
    }

    /// Merge configuration with environment variables
    pub fn merge_env(&mut self) {
        if let Some(size) = parse_env("TOKCHUNK_SIZE") {
            self.chunking.size = size;
        }
        if let Some(overlap) = parse_env("TOKCHUNK_OVERLAP") {
            self.chunking.overlap = overlap;
        }
        if let Some(enabled) = parse_env("TOKCHUNK_PARALLEL") {
            self.parallel.enabled = enabled;
        }
        if let Some(threads) = parse_env("TOKCHUNK_THREADS") {
            self.parallel.threads = threads;
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        self.chunking.window()?;
        Ok(())
    }

    /// Log configuration
    pub fn log_config(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Chunk size: {} tokens", self.chunking.size);
        tracing::info!("  Overlap: {} tokens", self.chunking.overlap);
        tracing::info!("  Mode: {}", self.parallel.mode());
        tracing::info!("  Threads: {}", self.parallel.threads);
    }
}

fn parse_env<V: std::str::FromStr>(key: &str) -> Option<V> {
    let raw = env::var(key).ok()?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!("Ignoring {}={:?}: not a valid value", key, raw);
            None
        }
    }
}
