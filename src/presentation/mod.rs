//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Rendering the final decision (text/JSON)

pub mod cli;
pub mod output;

pub use cli::Cli;
pub use output::{renderer_for, DecisionRenderer, JsonRenderer, TextRenderer};
