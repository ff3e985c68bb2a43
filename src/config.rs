//! Configuration management for the StockFlow assistant.
//!
//! Handles loading configuration from a TOML file and environment
//! variables: LLM provider and model, plus the path to the SQLite store.
//! The Groq API key is never stored in the file; it is read from the
//! environment by the client factory.

use crate::error::{Result, StockflowError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// LLM provider configuration.
    #[serde(default)]
    pub llm: LlmConfig,

    /// Store location.
    #[serde(default)]
    pub database: DatabaseConfig,
}

/// LLM provider configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    /// LLM provider: "groq" or "mock".
    #[serde(default = "default_provider")]
    pub provider: String,

    /// Model name (e.g., "llama-3.3-70b-versatile").
    #[serde(default = "default_model")]
    pub model: String,
}

fn default_provider() -> String {
    "groq".to_string()
}

fn default_model() -> String {
    crate::llm::groq::DEFAULT_MODEL.to_string()
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            model: default_model(),
        }
    }
}

/// Store configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DatabaseConfig {
    /// Filesystem path to the StockFlow SQLite file.
    pub path: Option<PathBuf>,
}

impl Config {
    /// Returns the default config file path for the current platform.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("stockflow-ai")
            .join("config.toml")
    }

    /// Loads configuration from a TOML file.
    ///
    /// A missing file yields the defaults; a malformed file is an error.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| StockflowError::config(format!("Failed to read config file: {e}")))?;

        Self::parse_toml(&content, path)
    }

    /// Parses configuration from a TOML string.
    fn parse_toml(content: &str, path: &Path) -> Result<Self> {
        toml::from_str(content).map_err(|e| {
            StockflowError::config(format!(
                "Configuration error in {}:\n  {}",
                path.display(),
                e
            ))
        })
    }

    /// Resolves the store path from config and environment.
    ///
    /// Precedence: explicit override (CLI) > config file > `STOCKFLOW_DB`
    /// environment variable. No path at all is a configuration error.
    pub fn resolve_database_path(&self, override_path: Option<&Path>) -> Result<PathBuf> {
        if let Some(path) = override_path {
            return Ok(path.to_path_buf());
        }

        if let Some(path) = &self.database.path {
            return Ok(path.clone());
        }

        if let Ok(path) = std::env::var("STOCKFLOW_DB") {
            return Ok(PathBuf::from(path));
        }

        Err(StockflowError::config(
            "No database path configured. Pass --database, set [database] path in the config file, or set STOCKFLOW_DB.",
        ))
    }
}
