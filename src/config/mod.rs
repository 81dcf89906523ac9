//! Configuration for the dinner decider
//!
//! Precedence, highest first:
//! 1. CLI flags
//! 2. Environment variables (`DINNER_DECIDER_*`)
//! 3. Config file (`--config`, `./dinner-decider.toml`, or
//!    `<config dir>/dinner-decider/config.toml`)
//! 4. Built-in defaults

mod loader;
mod types;

pub use loader::{
    apply_env_overrides, discover, load_with_warnings, ConfigWarning, ENV_FORMAT, ENV_LIST,
    ENV_SEED, ENV_STRICT, PROJECT_CONFIG_FILE,
};
pub use types::{Config, ListConfig, OutputConfig, OutputFormat, SelectionConfig};
