//! # pl-protocol
//!
//! Shared data model for the Pattern Lab project initializer.
//!
//! This crate defines the structures passed between the CLI and the core:
//! - Invocation options and collected answers
//! - The project configuration persisted as `patternlab-config.json`
//! - Runtime state of an initialization run
//! - Progress events emitted while a run executes
//!
//! ## Modules
//!
//! - [`answers`]: `InitOptions` and `Answers`
//! - [`config_models`]: `ProjectConfig` and `DirectoryLayout`
//! - [`run_models`]: `InitRun` and `InitStage`
//! - [`ipc`]: `InitEvent` progress messages
//!
//! Types that cross into the JavaScript tooling derive `TS`.

pub mod answers;
pub mod config_models;
pub mod ipc;
pub mod run_models;

// Re-export all public types for convenience
pub use answers::*;
pub use config_models::*;
pub use ipc::*;
pub use run_models::*;
