//! Project initialization.
//!
//! This module turns options or prompted answers into an initialized Pattern
//! Lab project:
//! - Answer validation and defaults (`answers`)
//! - The prompt collaborator and the package choice lists (`prompt`)
//! - Directory scaffolding (`scaffold`)
//! - The orchestrator sequencing every step (`orchestrator`)
//!
//! # Example
//!
//! ```no_run
//! use pl_core::config::load_default_config;
//! use pl_core::init::{DefaultsPrompter, InitOrchestrator};
//! use pl_core::registry::NpmRegistry;
//! use pl_protocol::answers::InitOptions;
//! use std::sync::Arc;
//! use tokio::sync::mpsc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let orchestrator = InitOrchestrator::new(
//!     load_default_config(None)?,
//!     Arc::new(NpmRegistry::new()),
//!     Arc::new(DefaultsPrompter),
//! );
//!
//! let (tx, _rx) = mpsc::channel(100);
//! let options = InitOptions::for_project_dir("./demo").with_edition("@pattern-lab/edition-node");
//! orchestrator.run(options, tx).await?;
//! println!("Pattern Lab initialized successfully!");
//! # Ok(())
//! # }
//! ```

pub mod answers;
pub mod error;
pub mod orchestrator;
pub mod prompt;
pub mod scaffold;

pub use answers::{validate_answers, ValidatedAnswers, DEFAULT_PROJECT_DIR};
pub use error::{InitError, InitErrorKind, InitResult};
pub use orchestrator::InitOrchestrator;
pub use prompt::{DefaultsPrompter, Prompter, EDITIONS, STARTERKITS};
pub use scaffold::scaffold;
