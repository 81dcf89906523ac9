//! The decide pipeline
//!
//! One straight pass: load the list, ask about tags, filter, format names,
//! pick a meal, print it.
//!
//! ```text
//! Start -> Loaded -> Filtered -> Formatted -> Decided -> End
//! ```

use std::fmt;
use std::io::{BufRead, Write};

use tracing::{debug, info, warn};

use crate::config::Config;
use crate::error::{DeciderError, DeciderResult};
use crate::filter;
use crate::format;
use crate::models::Catalog;
use crate::parser;
use crate::preferences::{self, ConsolePrompt};
use crate::presentation::renderer_for;
use crate::selector::{self, Decision};

pub const BANNER: &str = "Welcome to the Dinner Decider!";

/// Pipeline stage, reached in order exactly once per run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Start,
    Loaded,
    Filtered,
    Formatted,
    Decided,
    End,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Start => "start",
            Stage::Loaded => "loaded",
            Stage::Filtered => "filtered",
            Stage::Formatted => "formatted",
            Stage::Decided => "decided",
            Stage::End => "end",
        };
        f.write_str(name)
    }
}

/// Load the meal list, falling back to an empty catalog when it is missing
///
/// The fallback is reported on `output`. With `strict` set the
/// `SourceNotFound` error is returned instead.
pub fn load_stage<W: Write>(config: &Config, output: &mut W) -> DeciderResult<Catalog> {
    match parser::load_catalog(&config.list.path) {
        Ok(catalog) => Ok(catalog),
        Err(err @ DeciderError::SourceNotFound { .. }) if !config.list.strict => {
            warn!(path = %config.list.path.display(), "meal list not found, continuing with no meals");
            writeln!(output, "Error: {}", err)?;
            Ok(Catalog::new())
        }
        Err(err) => Err(err),
    }
}

/// Run the whole decision with the given console streams
pub fn run<R, W>(config: &Config, input: R, mut output: W) -> DeciderResult<Decision>
where
    R: BufRead,
    W: Write,
{
    debug!(stage = %Stage::Start);
    writeln!(output, "{}", BANNER)?;
    writeln!(output)?;

    let mut catalog = load_stage(config, &mut output)?;
    info!(stage = %Stage::Loaded, meals = catalog.len());

    let exclusions = {
        let mut prompt = ConsolePrompt::new(input, &mut output);
        preferences::collect_exclusions(&catalog, &mut prompt)?
    };
    writeln!(output)?;

    filter::apply(&mut catalog, &exclusions);
    info!(stage = %Stage::Filtered, survivors = catalog.len(), excluded = exclusions.len());

    let catalog = format::format_names(catalog);
    debug!(stage = %Stage::Formatted);

    let mut rng = selector::rng_from_seed(config.selection.seed);
    let decision = selector::choose(&catalog, &mut rng);
    info!(stage = %Stage::Decided, meal = ?decision.meal().map(|m| m.name()));

    renderer_for(config.output.format).render(&decision, &mut output)?;
    output.flush()?;
    debug!(stage = %Stage::End);

    Ok(decision)
}
