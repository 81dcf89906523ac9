//! Dinner Decider CLI
//!
//! Usage: dinner-decider [--list <PATH>] [--seed <N>] [--strict] [--json]

use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use is_terminal::IsTerminal;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use dinner_decider::config::{self, Config};
use dinner_decider::presentation::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_level());

    let config = resolve_config(&cli)?;
    let stdin = io::stdin();
    dinner_decider::run(&config, stdin.lock(), io::stdout().lock())?;

    Ok(())
}

fn init_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(false)
        .init();
}

/// Defaults, then config file, then environment, then CLI flags
fn resolve_config(cli: &Cli) -> Result<Config> {
    let cwd = std::env::current_dir().context("could not determine working directory")?;

    let config = match config::discover(cli.config.as_deref(), &cwd) {
        Some(path) => {
            let (config, warnings) = Config::load_with_warnings(&path)
                .with_context(|| format!("failed to load config {}", path.display()))?;
            for warning in &warnings {
                warn!("{}", warning);
            }
            config
        }
        None => Config::default(),
    };

    Ok(cli.apply_to(config.with_env_overrides()))
}
