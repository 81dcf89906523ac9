//! Core data models for the dinner decider
//!
//! - `Meal`: one candidate dinner with its category tags
//! - `Catalog`: the ordered list of meals still in the running
//! - `ExclusionSet`: tags the user does not want tonight

use std::collections::BTreeSet;

/// A single candidate meal
///
/// The name is never empty; the tag set may be. A meal with no tags can
/// never be excluded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Meal {
    name: String,
    tags: BTreeSet<String>,
}

impl Meal {
    /// Create a new meal from a name and any number of tags
    ///
    /// Duplicate tags collapse into one.
    ///
    /// # Panics
    ///
    /// Panics if `name` is empty. Use [`Meal::try_new`] for unchecked input.
    pub fn new<I, S>(name: impl Into<String>, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        match Self::try_new(name, tags) {
            Some(meal) => meal,
            None => panic!("meal name must not be empty"),
        }
    }

    /// Create a new meal, or `None` if `name` is empty
    pub fn try_new<I, S>(name: impl Into<String>, tags: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let name = name.into();
        if name.is_empty() {
            return None;
        }
        Some(Self {
            name,
            tags: tags.into_iter().map(Into::into).collect(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn tags(&self) -> &BTreeSet<String> {
        &self.tags
    }

    /// Consume this meal, returning one with the same tags and a new name
    pub fn renamed(self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tags: self.tags,
        }
    }

    /// Whether any of this meal's tags are in the exclusion set
    pub fn is_excluded_by(&self, exclusions: &ExclusionSet) -> bool {
        self.tags.iter().any(|tag| exclusions.contains(tag))
    }
}

/// Ordered collection of meals, in the order they were loaded
///
/// Meals are only ever removed from a catalog, never added, once loading
/// has finished. Positions carry no meaning beyond iteration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    meals: Vec<Meal>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.meals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.meals.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Meal> {
        self.meals.iter()
    }

    pub fn get(&self, index: usize) -> Option<&Meal> {
        self.meals.get(index)
    }

    /// Keep only the meals matching the predicate, preserving order
    pub fn retain<F>(&mut self, keep: F)
    where
        F: FnMut(&Meal) -> bool,
    {
        self.meals.retain(keep);
    }

    /// Every distinct tag carried by any meal, sorted
    pub fn distinct_tags(&self) -> BTreeSet<&str> {
        self.meals
            .iter()
            .flat_map(|meal| meal.tags.iter().map(String::as_str))
            .collect()
    }
}

impl From<Vec<Meal>> for Catalog {
    fn from(meals: Vec<Meal>) -> Self {
        Self { meals }
    }
}

impl FromIterator<Meal> for Catalog {
    fn from_iter<T: IntoIterator<Item = Meal>>(iter: T) -> Self {
        Self {
            meals: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Catalog {
    type Item = Meal;
    type IntoIter = std::vec::IntoIter<Meal>;

    fn into_iter(self) -> Self::IntoIter {
        self.meals.into_iter()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Meal;
    type IntoIter = std::slice::Iter<'a, Meal>;

    fn into_iter(self) -> Self::IntoIter {
        self.meals.iter()
    }
}

/// Tags the user does not want; built once per run and never changed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExclusionSet {
    tags: BTreeSet<String>,
}

impl ExclusionSet {
    pub fn contains(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for ExclusionSet {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self {
            tags: iter.into_iter().map(Into::into).collect(),
        }
    }
}
