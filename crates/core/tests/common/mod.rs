//! Common test utilities and helpers for integration tests.
//!
//! This module provides shared functionality across the init tests:
//! - Fixtures (default config, orchestrators over a mock registry)
//! - Event and filesystem assertions

pub mod assertions;
pub mod fixtures;

#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use fixtures::*;
