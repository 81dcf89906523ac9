#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Parsing a meal list should never panic or yield an unnamed meal
        let catalog = dinner_decider::parse_catalog(content);
        for meal in &catalog {
            assert!(!meal.name().is_empty());
            let _ = dinner_decider::display_name(meal.name());
        }
    }
});
