//! Reusable meal lists.

#![allow(dead_code)]

/// The two-meal list used by most scenarios.
pub const PASTA_AND_SALAD: &str = "spaghetti-bolognese meat gluten\nsalad vegan\n";

/// A list where one meal carries no tags at all.
pub const WITH_UNTAGGED: &str = "steak meat\nfish-pie fish dairy\ntaco-night\n";

/// Several meals sharing overlapping tags.
pub const FAMILY_WEEK: &str = "\
spaghetti-bolognese meat gluten
mac-and-cheese dairy gluten
salad vegan
chicken-curry meat spicy
bean-chili vegan spicy
";
