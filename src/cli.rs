//! Command-line argument parsing for the StockFlow assistant.

use clap::Parser;
use std::path::PathBuf;

/// Natural-language assistant for StockFlow inventory data.
#[derive(Parser, Debug)]
#[command(name = "stockflow")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Question to answer. When omitted, questions are read line by line
    /// from stdin.
    #[arg(value_name = "QUESTION")]
    pub question: Option<String>,

    /// Path to the StockFlow SQLite database
    ///
    /// `STOCKFLOW_DB` is not read here: the environment is the last resort
    /// during path resolution, after the config file.
    #[arg(short, long, value_name = "PATH")]
    pub database: Option<PathBuf>,

    /// Config file path
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// LLM provider to use (overrides config)
    #[arg(long, value_name = "PROVIDER")]
    pub llm: Option<String>,

    /// Model name (overrides config)
    #[arg(long, value_name = "MODEL")]
    pub model: Option<String>,
}

impl Cli {
    /// Parses command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Returns the config file path, defaulting to the platform path.
    pub fn config_path(&self) -> PathBuf {
        self.config
            .clone()
            .unwrap_or_else(crate::config::Config::default_path)
    }
}
