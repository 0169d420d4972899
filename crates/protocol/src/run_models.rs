//! Runtime state of an initialization run.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// Stage of the initialization state machine.
///
/// A successful run moves through:
/// CollectingAnswers -> ResolvingConfig -> Scaffolding -> (InstallingEdition)
/// -> (InstallingStarterkit) -> WritingConfig -> Done
///
/// `Failed` is absorbing and reachable from any stage.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, TS)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InitStage {
    /// Answers are being taken from options or the prompt.
    CollectingAnswers,

    /// Default configuration paths are being rooted at the project directory.
    ResolvingConfig,

    /// The directory skeleton is being created.
    Scaffolding,

    /// An edition package is being installed.
    InstallingEdition,

    /// A starterkit package is being installed.
    InstallingStarterkit,

    /// `patternlab-config.json` is being written.
    WritingConfig,

    /// Every applicable step has completed.
    Done,

    /// A step failed; the run is over.
    Failed,
}

impl InitStage {
    pub fn is_terminal(self) -> bool {
        matches!(self, InitStage::Done | InitStage::Failed)
    }
}

/// A single initialization run.
#[derive(Serialize, Deserialize, Debug, Clone, TS)]
pub struct InitRun {
    #[ts(type = "string")]
    pub id: Uuid,

    /// Project directory, once answers have been collected.
    pub project_dir: Option<String>,

    pub stage: InitStage,

    /// Milestone messages in the order they were reported.
    pub logs: Vec<String>,

    pub started_at: DateTime<Utc>,

    pub completed_at: Option<DateTime<Utc>>,
}
