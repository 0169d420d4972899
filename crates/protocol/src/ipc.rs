//! Progress events emitted by the initializer.
//!
//! The orchestrator sends these over a channel as it moves between stages.
//! Receivers render them however they like (the CLI drives a spinner); a
//! dropped receiver is a valid no-op sink.

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::run_models::InitStage;

/// Events sent from the initializer to whoever renders progress.
///
/// Uses tagged enum serialization:
/// ```json
/// {
///   "type": "stageChanged",
///   "payload": { "run_id": "uuid-here", "stage": "SCAFFOLDING" }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "type", content = "payload", rename_all = "camelCase")]
pub enum InitEvent {
    /// A run has been created.
    RunStarted {
        #[ts(type = "string")]
        run_id: Uuid,
    },

    /// The run entered a new stage.
    StageChanged {
        #[ts(type = "string")]
        run_id: Uuid,
        stage: InitStage,
    },

    /// A milestone has started.
    Progress {
        #[ts(type = "string")]
        run_id: Uuid,
        message: String,
    },

    /// A milestone has finished successfully.
    StepSucceeded {
        #[ts(type = "string")]
        run_id: Uuid,
        message: String,
    },

    /// The whole run finished successfully.
    RunCompleted {
        #[ts(type = "string")]
        run_id: Uuid,
        message: String,
    },

    /// The run failed; `error` is the message of the first fatal error.
    RunFailed {
        #[ts(type = "string")]
        run_id: Uuid,
        error: String,
    },
}

impl InitEvent {
    pub fn run_id(&self) -> Uuid {
        match self {
            InitEvent::RunStarted { run_id }
            | InitEvent::StageChanged { run_id, .. }
            | InitEvent::Progress { run_id, .. }
            | InitEvent::StepSucceeded { run_id, .. }
            | InitEvent::RunCompleted { run_id, .. }
            | InitEvent::RunFailed { run_id, .. } => *run_id,
        }
    }

    /// Whether this event ends the run.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            InitEvent::RunCompleted { .. } | InitEvent::RunFailed { .. }
        )
    }
}
