//! Configuration handling.
//!
//! This module provides the default configuration, the path resolver that
//! roots it at a project directory, and the writer that persists the result
//! as `patternlab-config.json`.

pub mod defaults;
pub mod error;
pub mod resolver;
pub mod writer;

pub use defaults::load_default_config;
pub use error::{ConfigError, ConfigResult};
pub use resolver::{resolve_config_paths, resolve_with_layout};
pub use writer::write_config;
