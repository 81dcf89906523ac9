//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap. Every flag is optional;
//! anything not given falls back to the environment, then the config file.

use std::path::PathBuf;

use clap::Parser;

use crate::config::{Config, OutputFormat};

/// Dinner Decider - pick tonight's dinner from your meal list
#[derive(Parser, Debug, Default)]
#[command(name = "dinner-decider")]
#[command(author, version, about, long_about = None)]
#[command(
    after_help = "Each line of the meal list is a name followed by its tags, e.g. 'spaghetti-bolognese meat gluten'."
)]
pub struct Cli {
    /// Path to the meal list
    #[arg(short, long, value_name = "PATH")]
    pub list: Option<PathBuf>,

    /// Seed for a reproducible pick
    #[arg(long, value_name = "N")]
    pub seed: Option<u64>,

    /// Exit with an error if the meal list is missing
    #[arg(long)]
    pub strict: bool,

    /// Print the decision as JSON
    #[arg(long)]
    pub json: bool,

    /// Config file (default: ./dinner-decider.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Layer CLI flags over an already resolved configuration
    pub fn apply_to(&self, mut config: Config) -> Config {
        if let Some(list) = &self.list {
            config.list.path = list.clone();
        }
        if let Some(seed) = self.seed {
            config.selection.seed = Some(seed);
        }
        if self.strict {
            config.list.strict = true;
        }
        if self.json {
            config.output.format = OutputFormat::Json;
        }
        config
    }

    /// Default log filter for the `-v` count
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
