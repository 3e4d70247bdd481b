//! # Receipt Configuration
//!
//! Where baskets come from, where receipts go, and what to do with a bad
//! basket.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Command-line flags (highest priority)                              │
//! │     --input ./baskets --format json                                    │
//! │                                                                         │
//! │  2. Environment Variables                                              │
//! │     RECEIPTS_INPUT_DIR=./baskets                                       │
//! │     RECEIPTS_ON_ERROR=abort                                            │
//! │                                                                         │
//! │  3. TOML Config File                                                   │
//! │     --config PATH, or                                                  │
//! │     ~/.config/receipts/receipts.toml (Linux)                           │
//! │     ~/Library/Application Support/com.receipts.receipts/receipts.toml  │
//! │                                                                         │
//! │  4. Default Values (lowest priority)                                   │
//! │     ./input → stdout, skip bad baskets                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # receipts.toml
//! [input]
//! dir = "./input"
//!
//! [output]
//! dir = "./output"
//! write_files = false
//! print = true
//! format = "text"           # text | json
//!
//! [processing]
//! on_error = "skip_basket"  # skip_basket | abort
//! ```
//!
//! Tax rates and the exemption list are not configurable.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;
use tracing::{debug, info};

/// File name looked up in the platform config directory.
pub const CONFIG_FILE_NAME: &str = "receipts.toml";

pub const ENV_INPUT_DIR: &str = "RECEIPTS_INPUT_DIR";
pub const ENV_OUTPUT_DIR: &str = "RECEIPTS_OUTPUT_DIR";
pub const ENV_WRITE_FILES: &str = "RECEIPTS_WRITE_FILES";
pub const ENV_FORMAT: &str = "RECEIPTS_FORMAT";
pub const ENV_ON_ERROR: &str = "RECEIPTS_ON_ERROR";

// =============================================================================
// Errors
// =============================================================================

/// Configuration error types.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("Unable to read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid value for {key}: '{value}'")]
    InvalidValue { key: String, value: String },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

// =============================================================================
// Output Format
// =============================================================================

/// How receipts are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// `Output <i>: ` followed by the receipt text.
    #[default]
    Text,

    /// One pretty-printed JSON array of receipts.
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(ConfigError::InvalidValue {
                key: "format".to_string(),
                value: other.to_string(),
            }),
        }
    }
}

// =============================================================================
// Error Policy
// =============================================================================

/// What happens to the run when a basket has a bad line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum ErrorPolicy {
    /// Report the basket and keep going with the others.
    #[default]
    SkipBasket,

    /// Stop at the first bad line; nothing is printed or written.
    Abort,
}

impl fmt::Display for ErrorPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorPolicy::SkipBasket => write!(f, "skip_basket"),
            ErrorPolicy::Abort => write!(f, "abort"),
        }
    }
}

impl FromStr for ErrorPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "skip_basket" | "skip-basket" | "skip" => Ok(ErrorPolicy::SkipBasket),
            "abort" | "fail_fast" | "fail-fast" => Ok(ErrorPolicy::Abort),
            other => Err(ConfigError::InvalidValue {
                key: "on_error".to_string(),
                value: other.to_string(),
            }),
        }
    }
}

// =============================================================================
// Sections
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputSettings {
    /// Directory holding one basket per file.
    pub dir: PathBuf,
}

impl Default for InputSettings {
    fn default() -> Self {
        InputSettings {
            dir: PathBuf::from("./input"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    /// Directory receiving `output<i>` files.
    pub dir: PathBuf,

    /// Write one file per receipt.
    pub write_files: bool,

    /// Print receipts to stdout.
    pub print: bool,

    pub format: OutputFormat,
}

impl Default for OutputSettings {
    fn default() -> Self {
        OutputSettings {
            dir: PathBuf::from("./output"),
            write_files: false,
            print: true,
            format: OutputFormat::Text,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessingSettings {
    pub on_error: ErrorPolicy,
}

// =============================================================================
// Receipt Configuration
// =============================================================================

/// Complete run configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiptConfig {
    #[serde(default)]
    pub input: InputSettings,

    #[serde(default)]
    pub output: OutputSettings,

    #[serde(default)]
    pub processing: ProcessingSettings,
}

impl ReceiptConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file: `config_path` if given (must exist), otherwise
    ///    `receipts.toml` in the platform config dir (optional)
    /// 3. Environment variables
    ///
    /// Command-line flags are applied on top by the caller, which then
    /// calls [`ReceiptConfig::validate`].
    pub fn load(config_path: Option<&Path>) -> ConfigResult<Self> {
        let mut config = match config_path {
            Some(path) => {
                if !path.exists() {
                    return Err(ConfigError::NotFound {
                        path: path.to_path_buf(),
                    });
                }
                Self::from_file(path)?
            }
            None => match Self::default_config_path() {
                Some(path) if path.exists() => Self::from_file(&path)?,
                Some(path) => {
                    debug!(?path, "Config file not found, using defaults");
                    Self::default()
                }
                None => Self::default(),
            },
        };

        config.apply_env_overrides()?;
        Ok(config)
    }

    /// Reads and parses a TOML file.
    pub fn from_file(path: &Path) -> ConfigResult<Self> {
        info!(?path, "Loading receipts config from file");
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Applies `RECEIPTS_*` environment variables.
    pub fn apply_env_overrides(&mut self) -> ConfigResult<()> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Applies overrides from any key lookup.
    ///
    /// Unparseable values are errors, not silently ignored.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> ConfigResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(dir) = lookup(ENV_INPUT_DIR) {
            debug!(dir = %dir, "Overriding input dir from environment");
            self.input.dir = PathBuf::from(dir);
        }

        if let Some(dir) = lookup(ENV_OUTPUT_DIR) {
            debug!(dir = %dir, "Overriding output dir from environment");
            self.output.dir = PathBuf::from(dir);
        }

        if let Some(flag) = lookup(ENV_WRITE_FILES) {
            self.output.write_files = parse_bool(ENV_WRITE_FILES, &flag)?;
        }

        if let Some(format) = lookup(ENV_FORMAT) {
            self.output.format = format.parse()?;
        }

        if let Some(policy) = lookup(ENV_ON_ERROR) {
            debug!(policy = %policy, "Overriding error policy from environment");
            self.processing.on_error = policy.parse()?;
        }

        Ok(())
    }

    /// Validates the configuration.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.input.dir.as_os_str().is_empty() {
            return Err(ConfigError::Invalid("input dir must not be empty".into()));
        }

        if self.output.write_files && self.output.dir.as_os_str().is_empty() {
            return Err(ConfigError::Invalid(
                "write_files is enabled but no output dir is set".into(),
            ));
        }

        Ok(())
    }

    /// Returns the default config file path.
    pub fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "receipts", "receipts")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }
}

fn parse_bool(key: &str, value: &str) -> ConfigResult<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
        }),
    }
}
