//! Property tests for display name formatting.

use proptest::prelude::*;

use dinner_decider::display_name;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: formatting twice equals formatting once.
    #[test]
    fn property_display_name_idempotent(name in "(?s).{0,64}") {
        let once = display_name(&name);
        prop_assert_eq!(display_name(&once), once);
    }

    /// PROPERTY: no hyphens remain, and only hyphens change.
    #[test]
    fn property_only_hyphens_change(name in "[a-z\\-_ ]{0,40}") {
        let formatted = display_name(&name);

        prop_assert!(!formatted.contains('-'));
        prop_assert_eq!(formatted.chars().count(), name.chars().count());
        for (before, after) in name.chars().zip(formatted.chars()) {
            if before == '-' {
                prop_assert_eq!(after, ' ');
            } else {
                prop_assert_eq!(after, before);
            }
        }
    }
}
