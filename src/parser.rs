//! Meal list parser
//!
//! One meal per line: the first whitespace-separated token is the name, any
//! remaining tokens are its tags.
//!
//! ```text
//! spaghetti-bolognese meat gluten
//! salad vegan
//! taco-night
//! ```

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{DeciderError, DeciderResult};
use crate::models::{Catalog, Meal};

/// Parse a single line into a meal
///
/// Returns `None` for lines with no tokens.
pub fn parse_line(line: &str) -> Option<Meal> {
    let mut tokens = line.split_ascii_whitespace();
    let name = tokens.next()?;
    Meal::try_new(name, tokens)
}

/// Parse a whole meal list, skipping blank lines
pub fn parse_catalog(content: &str) -> Catalog {
    content.lines().filter_map(parse_line).collect()
}

/// Load the meal list from disk
///
/// A missing or unreadable file is reported as `SourceNotFound`. Content that
/// is not UTF-8 is decoded lossily rather than rejected.
pub fn load_catalog(path: &Path) -> DeciderResult<Catalog> {
    let bytes = fs::read(path).map_err(|e| {
        debug!(path = %path.display(), error = %e, "meal list unreadable");
        DeciderError::SourceNotFound {
            path: path.to_path_buf(),
        }
    })?;

    let catalog = parse_catalog(&String::from_utf8_lossy(&bytes));
    debug!(path = %path.display(), meals = catalog.len(), "loaded meal list");
    Ok(catalog)
}
