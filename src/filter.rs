//! Meal filtering
//!
//! A meal survives only if none of its tags are excluded.

use tracing::debug;

use crate::models::{Catalog, ExclusionSet, Meal};

/// Whether a meal survives the given exclusions
pub fn survives(meal: &Meal, exclusions: &ExclusionSet) -> bool {
    !meal.is_excluded_by(exclusions)
}

/// Remove every excluded meal from the catalog in place
///
/// Returns the number of meals removed.
pub fn apply(catalog: &mut Catalog, exclusions: &ExclusionSet) -> usize {
    let before = catalog.len();
    if !exclusions.is_empty() {
        catalog.retain(|meal| survives(meal, exclusions));
    }

    let removed = before - catalog.len();
    debug!(removed, survivors = catalog.len(), "filtered meals");
    removed
}
