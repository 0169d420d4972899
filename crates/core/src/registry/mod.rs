//! Package registry abstraction.
//!
//! This module provides the `PackageRegistry` trait used to install editions
//! and starterkits, the npm-backed implementation, and a mock for tests.

pub mod base;
pub mod command;
pub mod mock;
pub mod npm;
pub mod package;

pub use base::{InstallContext, InstallError, PackageRegistry};
pub use mock::MockRegistry;
pub use npm::NpmRegistry;
pub use package::validate_package_name;
