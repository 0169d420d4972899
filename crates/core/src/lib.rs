//! # pl-core
//!
//! Core project initialization for Pattern Lab.
//!
//! This crate provides:
//! - The default configuration and the resolver that roots it at a project
//! - Directory scaffolding and the config writer
//! - Edition and starterkit installation behind a registry abstraction
//! - The orchestrator that runs an initialization and reports its progress
//!
//! ## Modules
//!
//! - [`config`]: Default configuration, path resolution and persistence
//! - [`init`]: Answers, prompting, scaffolding and the orchestrator
//! - [`registry`]: Package registry trait and implementations
//! - [`state`]: Run state transitions and event emission

pub mod config;
pub mod init;
pub mod registry;
pub mod state;
