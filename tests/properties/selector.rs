//! Property tests for meal selection.

use proptest::prelude::*;

use dinner_decider::selector::rng_from_seed;
use dinner_decider::{choose, Catalog, Decision, Meal};

fn catalog_of(size: usize) -> Catalog {
    (0..size)
        .map(|i| Meal::new(format!("meal-{}", i), Vec::<String>::new()))
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: the chosen meal always comes from the catalog.
    #[test]
    fn property_choice_is_a_survivor(size in 1usize..20, seed in any::<u64>()) {
        let catalog = catalog_of(size);
        let decision = choose(&catalog, &mut rng_from_seed(Some(seed)));

        let meal = decision.meal().expect("non-empty catalog must yield a meal");
        prop_assert!(catalog.iter().any(|m| m == meal));
        prop_assert_eq!(decision.survivors(), size);
    }

    /// PROPERTY: a single survivor is always the one chosen.
    #[test]
    fn property_single_survivor_certain(seed in any::<u64>()) {
        let catalog = catalog_of(1);
        let decision = choose(&catalog, &mut rng_from_seed(Some(seed)));
        prop_assert_eq!(decision.meal().map(Meal::name), Some("meal-0"));
    }

    /// PROPERTY: every survivor is reachable, including the last one.
    #[test]
    fn property_every_survivor_reachable(size in 2usize..8, seed in any::<u64>()) {
        let catalog = catalog_of(size);
        let mut rng = rng_from_seed(Some(seed));
        let mut seen = vec![false; size];

        for _ in 0..(size * 200) {
            if let Decision::Chosen { meal, .. } = choose(&catalog, &mut rng) {
                let index = catalog.iter().position(|m| *m == meal).unwrap();
                seen[index] = true;
            }
        }

        prop_assert!(seen.iter().all(|s| *s), "seen: {:?}", seen);
    }
}

#[test]
fn empty_catalog_never_chooses() {
    let decision = choose(&Catalog::new(), &mut rng_from_seed(None));
    assert_eq!(decision, Decision::NoMeals);
}
