//! Configuration types for hwinv.
//!
//! [`Config::load`] layers an optional `hwinv.toml` (or an explicit file) over
//! the embedded defaults. [`Config::defaults`] returns the same defaults
//! without touching the filesystem (useful in tests).

use serde::Deserialize;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[scan]
root       = "."
extensions = ["htm", "html"]

[output]
path   = "Office_Computer_Inventory.csv"
format = "csv"

[extract]
known_models = [
    "DELL OptiPlex 7040",
    "DELL OptiPlex 3050",
    "DELL OptiPlex 7010",
    "HP Compaq Elite 8300 SFF",
]
"#;

/// Looked up in the working directory when no explicit file is given.
pub const LOCAL_CONFIG_FILE: &str = "hwinv.toml";

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub scan: ScanConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub extract: ExtractConfig,
}

/// `[scan]`: where reports are discovered.
#[derive(Debug, Clone, Deserialize)]
pub struct ScanConfig {
    #[serde(default = "default_root")]
    pub root: PathBuf,
    /// Matched case-insensitively, without the leading dot.
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
}

fn default_root() -> PathBuf { PathBuf::from(".") }
fn default_extensions() -> Vec<String> { vec!["htm".to_string(), "html".to_string()] }

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            extensions: default_extensions(),
        }
    }
}

/// `[output]`: where and how the table is written. `format` is parsed by
/// the export layer.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_output_path")]
    pub path: PathBuf,
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_output_path() -> PathBuf { PathBuf::from("Office_Computer_Inventory.csv") }
fn default_format() -> String { "csv".to_string() }

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: default_output_path(),
            format: default_format(),
        }
    }
}

/// `[extract]`: extractor tuning.
#[derive(Debug, Clone, Deserialize)]
pub struct ExtractConfig {
    /// Exact model strings, highest priority first.
    #[serde(default = "default_known_models")]
    pub known_models: Vec<String>,
}

fn default_known_models() -> Vec<String> {
    crate::extract::DEFAULT_KNOWN_MODELS
        .iter()
        .map(|m| m.to_string())
        .collect()
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            known_models: default_known_models(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load defaults, then `explicit` if given (must exist), otherwise
    /// `hwinv.toml` in the working directory if present.
    pub fn load(explicit: Option<&Path>) -> anyhow::Result<Self> {
        let file = match explicit {
            Some(path) => config::File::from(path).required(true),
            None => config::File::from(Path::new(LOCAL_CONFIG_FILE)).required(false),
        };

        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(file)
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
