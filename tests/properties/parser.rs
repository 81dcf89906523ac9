//! Property tests for meal list parsing.

use proptest::prelude::*;

use dinner_decider::parse_catalog;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: `parse_catalog` never panics and never yields an empty name.
    #[test]
    fn property_parse_catalog_never_panics(content in "(?s).{0,512}") {
        let catalog = parse_catalog(&content);
        for meal in &catalog {
            prop_assert!(!meal.name().is_empty());
        }
    }

    /// PROPERTY: one meal per non-blank line, in order.
    #[test]
    fn property_one_meal_per_line(
        lines in prop::collection::vec(
            ("[a-z][a-z\\-]{0,12}", prop::collection::vec("[a-z]{1,6}", 0..4)),
            0..10,
        )
    ) {
        let content: String = lines
            .iter()
            .map(|(name, tags)| format!("{} {}\n", name, tags.join(" ")))
            .collect();

        let catalog = parse_catalog(&content);

        prop_assert_eq!(catalog.len(), lines.len());
        for (meal, (name, tags)) in catalog.iter().zip(&lines) {
            prop_assert_eq!(meal.name(), name.as_str());
            for tag in tags {
                prop_assert!(meal.tags().contains(tag));
            }
        }
    }
}
