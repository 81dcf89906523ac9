//! Dinner selection
//!
//! Picks one surviving meal uniformly at random.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::models::{Catalog, Meal};

/// Message shown when nothing is left to choose from
pub const NO_MEALS_MESSAGE: &str =
    "There are either no meals in your list, or they were all filtered out";

/// Outcome of the selection step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// The catalog was empty or everything was filtered out
    NoMeals,
    /// A meal was chosen from `survivors` candidates
    Chosen { meal: Meal, survivors: usize },
}

impl Decision {
    pub fn meal(&self) -> Option<&Meal> {
        match self {
            Decision::NoMeals => None,
            Decision::Chosen { meal, .. } => Some(meal),
        }
    }

    pub fn survivors(&self) -> usize {
        match self {
            Decision::NoMeals => 0,
            Decision::Chosen { survivors, .. } => *survivors,
        }
    }

    /// The line printed for this decision
    pub fn message(&self) -> String {
        match self {
            Decision::NoMeals => NO_MEALS_MESSAGE.to_string(),
            Decision::Chosen { meal, .. } => format!("Tonights Dinner is: {}", meal.name()),
        }
    }
}

/// Build the random source, seeded when a seed is given
pub fn rng_from_seed(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Choose one meal, each survivor with probability `1/N`
pub fn choose<R>(catalog: &Catalog, rng: &mut R) -> Decision
where
    R: Rng + ?Sized,
{
    let survivors = catalog.len();
    let index = match survivors {
        0 => return Decision::NoMeals,
        1 => 0,
        n => rng.gen_range(0..n),
    };

    debug!(index, survivors, "chose meal");
    match catalog.get(index) {
        Some(meal) => Decision::Chosen {
            meal: meal.clone(),
            survivors,
        },
        None => Decision::NoMeals,
    }
}
