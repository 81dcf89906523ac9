//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::error::{DeciderError, DeciderResult};

use super::types::{Config, OutputFormat};

/// Config file looked up in the working directory
pub const PROJECT_CONFIG_FILE: &str = "dinner-decider.toml";

pub const ENV_LIST: &str = "DINNER_DECIDER_LIST";
pub const ENV_SEED: &str = "DINNER_DECIDER_SEED";
pub const ENV_STRICT: &str = "DINNER_DECIDER_STRICT";
pub const ENV_FORMAT: &str = "DINNER_DECIDER_FORMAT";

const KNOWN_KEYS: &[&str] = &["list", "path", "strict", "selection", "seed", "output", "format"];

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown config key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> DeciderResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path).map_err(|e| DeciderError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| DeciderError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
                key,
                file: path.to_path_buf(),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Find the config file to use, if any
///
/// An explicit path always wins, even when it does not exist (loading it
/// then reports the error). Otherwise the working directory is checked,
/// then the user config directory.
pub fn discover(explicit: Option<&Path>, cwd: &Path) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }

    let project = cwd.join(PROJECT_CONFIG_FILE);
    if project.is_file() {
        return Some(project);
    }

    dirs::config_dir()
        .map(|dir| dir.join("dinner-decider").join("config.toml"))
        .filter(|path| path.is_file())
}

/// Apply environment variable overrides using the given lookup
///
/// Values that do not parse are ignored with a warning.
pub fn apply_env_overrides<F>(mut config: Config, lookup: F) -> Config
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(path) = lookup(ENV_LIST).filter(|p| !p.trim().is_empty()) {
        config.list.path = PathBuf::from(path);
    }

    if let Some(seed) = lookup(ENV_SEED) {
        match seed.trim().parse::<u64>() {
            Ok(seed) => config.selection.seed = Some(seed),
            Err(_) => warn!(var = ENV_SEED, value = %seed, "ignoring non-numeric seed"),
        }
    }

    if let Some(strict) = lookup(ENV_STRICT) {
        config.list.strict = !matches!(strict.trim().to_lowercase().as_str(), "" | "0" | "false");
    }

    if let Some(format) = lookup(ENV_FORMAT) {
        match format.trim().to_lowercase().as_str() {
            "text" => config.output.format = OutputFormat::Text,
            "json" => config.output.format = OutputFormat::Json,
            _ => warn!(var = ENV_FORMAT, value = %format, "ignoring unknown output format"),
        }
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    KNOWN_KEYS
        .iter()
        .map(|candidate| (*candidate, levenshtein(unknown, candidate)))
        .min_by_key(|(_, dist)| *dist)
        .filter(|(_, dist)| *dist <= 2)
        .map(|(candidate, _)| candidate.to_string())
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
