//! Test fixtures for orchestrators, configurations and event collection.

use pl_core::config::load_default_config;
use pl_core::init::{DefaultsPrompter, InitOrchestrator, InitResult};
use pl_core::registry::MockRegistry;
use pl_protocol::answers::InitOptions;
use pl_protocol::config_models::ProjectConfig;
use pl_protocol::ipc::InitEvent;
use serde_json::Value;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::TempDir;
use tokio::sync::mpsc;

/// The embedded default configuration.
pub fn default_config() -> ProjectConfig {
    load_default_config(None).expect("embedded default config should load")
}

/// Build a config fragment from JSON.
#[allow(dead_code)]
pub fn fragment(value: Value) -> ProjectConfig {
    ProjectConfig::from_value(value).expect("fragment should be an object")
}

/// Orchestrator over `registry` with the non-interactive prompter.
pub fn orchestrator_with(registry: &MockRegistry) -> InitOrchestrator {
    InitOrchestrator::new(
        default_config(),
        Arc::new(registry.clone()),
        Arc::new(DefaultsPrompter),
    )
}

/// A fresh temporary workspace and the `demo` project path inside it.
///
/// The TempDir must be kept alive for the test duration.
pub fn workspace() -> (TempDir, PathBuf) {
    let temp_dir = tempfile::tempdir().expect("tempdir");
    let project = temp_dir.path().join("demo");
    (temp_dir, project)
}

/// Run `orchestrator` to completion and collect every event it emitted.
pub async fn run_collecting(
    orchestrator: &InitOrchestrator,
    options: InitOptions,
) -> (InitResult<bool>, Vec<InitEvent>) {
    let (tx, mut rx) = mpsc::channel(256);
    let result = orchestrator.run(options, tx).await;

    let mut events = Vec::new();
    while let Some(event) = rx.recv().await {
        events.push(event);
    }
    (result, events)
}

/// Parse the written `patternlab-config.json` of `project`.
pub fn read_written_config(project: &Path) -> Value {
    let content = std::fs::read_to_string(project.join("patternlab-config.json"))
        .expect("config file should exist");
    serde_json::from_str(&content).expect("config file should be valid JSON")
}
