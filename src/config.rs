use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::eval::RelevanceAccumulator;

/// Environment variable naming an explicit config file
pub const CONFIG_ENV_VAR: &str = "IREVAL_CONFIG";

/// Config file picked up from the working directory when present
pub const DEFAULT_CONFIG_FILE: &str = "ireval.toml";

/// Main configuration structure
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub evaluation: EvaluationConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Where judgments come from and how they are commented
#[derive(Debug, Clone, Deserialize)]
pub struct InputConfig {
    #[serde(default = "default_judgments_path")]
    pub judgments_path: PathBuf,
    #[serde(default = "default_comment_prefix")]
    pub comment_prefix: String,
}

/// Evaluation parameters
#[derive(Debug, Clone, Deserialize)]
pub struct EvaluationConfig {
    /// Size of the ground-truth relevant set for every run (recall denominator).
    #[serde(default = "default_total_relevant")]
    pub total_relevant: u32,
    /// Number of records per run between precision/recall snapshots.
    #[serde(default = "default_snapshot_interval")]
    pub snapshot_interval: u64,
}

/// Report rendering configuration
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
    #[serde(default = "default_decimals")]
    pub decimals: usize,
}

/// Report output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// Tab-separated columns, ready for a plotting tool
    Tsv,
    /// Pretty-printed JSON
    Json,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_judgments_path() -> PathBuf {
    PathBuf::from("data/judgments.txt")
}

fn default_comment_prefix() -> String {
    "//".to_string()
}

fn default_total_relevant() -> u32 {
    RelevanceAccumulator::DEFAULT_TOTAL_RELEVANT
}

fn default_snapshot_interval() -> u64 {
    RelevanceAccumulator::DEFAULT_SNAPSHOT_INTERVAL
}

fn default_decimals() -> usize {
    3
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            input: InputConfig::default(),
            evaluation: EvaluationConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            judgments_path: default_judgments_path(),
            comment_prefix: default_comment_prefix(),
        }
    }
}

impl Default for EvaluationConfig {
    fn default() -> Self {
        Self {
            total_relevant: default_total_relevant(),
            snapshot_interval: default_snapshot_interval(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            decimals: default_decimals(),
        }
    }
}

impl Config {
    /// Load configuration
    ///
    /// Loads environment variables from .env file (if present) first.
    /// Looks for config in this order:
    /// 1. Path specified in IREVAL_CONFIG environment variable (must exist)
    /// 2. ./ireval.toml in current directory, if present
    /// 3. Built-in defaults
    pub fn load() -> Result<Self> {
        // .env is optional
        let _ = dotenv::dotenv();

        if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
            return Self::load_from(Path::new(&path));
        }

        let local = PathBuf::from(DEFAULT_CONFIG_FILE);
        if local.is_file() {
            return Self::load_from(&local);
        }

        log::debug!("No {} found, using built-in defaults", DEFAULT_CONFIG_FILE);
        let config = Self::default();
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from an explicit TOML file
    pub fn load_from(path: &Path) -> Result<Self> {
        let config_str = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_toml_str(&config_str)
            .with_context(|| format!("Invalid config file: {}", path.display()))
    }

    /// Parse and validate configuration from TOML text
    pub fn from_toml_str(config_str: &str) -> Result<Self> {
        let config: Config = toml::from_str(config_str).context("Failed to parse TOML")?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    fn validate(&self) -> Result<()> {
        if self.evaluation.total_relevant == 0 {
            anyhow::bail!("evaluation.total_relevant must be greater than 0");
        }

        if self.evaluation.snapshot_interval == 0 {
            anyhow::bail!("evaluation.snapshot_interval must be greater than 0");
        }

        if self.output.decimals > 12 {
            anyhow::bail!("output.decimals must be at most 12");
        }

        if self.input.comment_prefix.trim().is_empty() {
            anyhow::bail!("input.comment_prefix must not be empty");
        }

        Ok(())
    }

    /// Get the judgments file path
    pub fn judgments_path(&self) -> &Path {
        &self.input.judgments_path
    }
}
