//! Common test utilities for dinner-decider CLI tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated test environment with a temp working directory
//! - Fixtures: Reusable meal lists

pub mod fixtures;

#[allow(unused_imports)]
pub use env::*;
#[allow(unused_imports)]
pub use fixtures::*;
