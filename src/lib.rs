//! Dinner Decider - pick tonight's dinner from a tagged meal list
//!
//! The meal list is loaded, the user is asked which tags they have or want,
//! meals carrying an unwanted tag are dropped, and one of the survivors is
//! picked uniformly at random.

pub mod config;
pub mod error;
pub mod filter;
pub mod format;
pub mod models;
pub mod parser;
pub mod pipeline;
pub mod preferences;
pub mod presentation;
pub mod selector;

// Re-exports for convenience
pub use config::{Config, OutputFormat};
pub use error::{DeciderError, DeciderResult};
pub use format::display_name;
pub use models::{Catalog, ExclusionSet, Meal};
pub use parser::{load_catalog, parse_catalog, parse_line};
pub use pipeline::{run, Stage, BANNER};
pub use preferences::{collect_exclusions, ConsolePrompt, PreferencePrompt};
pub use selector::{choose, Decision, NO_MEALS_MESSAGE};
