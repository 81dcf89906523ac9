//! Display name formatting
//!
//! Meal names use hyphens in place of spaces in the list file; they are
//! turned back into spaces for display.

use crate::models::Catalog;

/// Replace every hyphen in a name with a space
pub fn display_name(name: &str) -> String {
    name.replace('-', " ")
}

/// Rename every meal in the catalog to its display name
pub fn format_names(catalog: Catalog) -> Catalog {
    catalog
        .into_iter()
        .map(|meal| {
            let name = display_name(meal.name());
            meal.renamed(name)
        })
        .collect()
}
