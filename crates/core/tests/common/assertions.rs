//! Custom assertion helpers for init tests.

use pl_protocol::config_models::ProjectConfig;
use pl_protocol::ipc::InitEvent;
use pl_protocol::run_models::InitStage;
use serde_json::Value;
use std::path::Path;

/// Assert that events start with `RunStarted` and end with a terminal event.
pub fn assert_event_sequence(events: &[InitEvent]) {
    if events.is_empty() {
        panic!("Event sequence is empty");
    }

    assert!(
        matches!(events[0], InitEvent::RunStarted { .. }),
        "First event should be RunStarted, got: {:?}",
        events[0]
    );

    let last = events.last().unwrap();
    assert!(
        last.is_terminal(),
        "Last event should be RunCompleted or RunFailed, got: {:?}",
        last
    );

    let run_id = events[0].run_id();
    assert!(
        events.iter().all(|e| e.run_id() == run_id),
        "All events should carry the same run id"
    );
}

/// The stages entered, in order.
pub fn stages(events: &[InitEvent]) -> Vec<InitStage> {
    events
        .iter()
        .filter_map(|e| match e {
            InitEvent::StageChanged { stage, .. } => Some(*stage),
            _ => None,
        })
        .collect()
}

/// Progress and step messages, in order.
pub fn messages(events: &[InitEvent]) -> Vec<String> {
    events
        .iter()
        .filter_map(|e| match e {
            InitEvent::Progress { message, .. }
            | InitEvent::StepSucceeded { message, .. }
            | InitEvent::RunCompleted { message, .. } => Some(message.clone()),
            _ => None,
        })
        .collect()
}

/// Assert that the three layout directories exist under `project`.
pub fn assert_scaffolded(project: &Path) {
    for dir in ["source", "public", "pattern_exports"] {
        assert!(
            project.join(dir).is_dir(),
            "{} should exist",
            project.join(dir).display()
        );
    }
}

/// Assert that every path-valued field of `config` starts with `project`.
pub fn assert_paths_rooted(config: &Value, project: &Path) {
    let config = ProjectConfig::from_value(config.clone()).expect("config should be an object");
    let paths = config.path_values();
    assert!(!paths.is_empty(), "config should contain path values");

    let prefix = project.to_string_lossy();
    for (key, value) in paths {
        assert!(
            value.starts_with(prefix.as_ref()),
            "{} = '{}' should start with '{}'",
            key,
            value,
            prefix
        );
    }
}
