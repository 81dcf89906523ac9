//! Configuration types

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::DeciderResult;

use super::loader::{self, ConfigWarning};

/// Default meal list file name
pub const DEFAULT_LIST_PATH: &str = "DinnerList.txt";

/// Where to find the meal list and how to treat a missing one
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListConfig {
    #[serde(default = "default_list_path")]
    pub path: PathBuf,

    /// Treat a missing meal list as fatal instead of an empty list
    #[serde(default)]
    pub strict: bool,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            path: default_list_path(),
            strict: false,
        }
    }
}

fn default_list_path() -> PathBuf {
    PathBuf::from(DEFAULT_LIST_PATH)
}

/// Random selection settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionConfig {
    /// Fixed seed for a reproducible pick
    #[serde(default)]
    pub seed: Option<u64>,
}

/// How the final decision is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub list: ListConfig,

    #[serde(default)]
    pub selection: SelectionConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> DeciderResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> DeciderResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Apply environment variable overrides (DINNER_DECIDER_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::apply_env_overrides(self, |key| std::env::var(key).ok())
    }
}
