//! Property tests for meal filtering.

use proptest::prelude::*;

use dinner_decider::filter;
use dinner_decider::{Catalog, ExclusionSet, Meal};

fn tag() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["meat", "fish", "vegan", "gluten", "dairy", "spicy"])
        .prop_map(str::to_string)
}

fn meal() -> impl Strategy<Value = Meal> {
    (
        "[a-z]{1,8}(-[a-z]{1,8}){0,2}",
        prop::collection::vec(tag(), 0..4),
    )
        .prop_map(|(name, tags)| Meal::new(name, tags))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: a meal survives iff none of its tags are excluded.
    #[test]
    fn property_survivor_iff_disjoint(
        meals in prop::collection::vec(meal(), 0..12),
        excluded in prop::collection::vec(tag(), 0..6),
    ) {
        let exclusions: ExclusionSet = excluded.iter().cloned().collect();
        let mut catalog: Catalog = meals.clone().into();

        filter::apply(&mut catalog, &exclusions);

        let expected: Vec<&Meal> = meals
            .iter()
            .filter(|meal| meal.tags().iter().all(|t| !exclusions.contains(t)))
            .collect();
        let actual: Vec<&Meal> = catalog.iter().collect();
        prop_assert_eq!(actual, expected);
    }

    /// PROPERTY: meals without tags are never removed.
    #[test]
    fn property_untagged_meals_always_survive(
        meals in prop::collection::vec(meal(), 0..12),
        excluded in prop::collection::vec(tag(), 0..6),
    ) {
        let exclusions: ExclusionSet = excluded.into_iter().collect();
        let untagged = meals.iter().filter(|m| m.tags().is_empty()).count();
        let mut catalog: Catalog = meals.into();

        filter::apply(&mut catalog, &exclusions);

        let surviving_untagged = catalog.iter().filter(|m| m.tags().is_empty()).count();
        prop_assert_eq!(surviving_untagged, untagged);
    }

    /// PROPERTY: filtering twice with the same exclusions changes nothing more.
    #[test]
    fn property_filter_idempotent(
        meals in prop::collection::vec(meal(), 0..12),
        excluded in prop::collection::vec(tag(), 0..6),
    ) {
        let exclusions: ExclusionSet = excluded.into_iter().collect();
        let mut catalog: Catalog = meals.into();

        filter::apply(&mut catalog, &exclusions);
        let once = catalog.clone();
        let removed = filter::apply(&mut catalog, &exclusions);

        prop_assert_eq!(removed, 0);
        prop_assert_eq!(catalog, once);
    }
}
