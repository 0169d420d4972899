//! Initialization run state machine.
//!
//! This module provides functions for managing the lifecycle of an InitRun,
//! including stage transitions and event emission. Every send ignores a
//! closed receiver, so dropping the receiver turns reporting into a no-op.

use chrono::Utc;
use pl_protocol::ipc::InitEvent;
use pl_protocol::run_models::{InitRun, InitStage};
use tokio::sync::mpsc::Sender;
use uuid::Uuid;

/// Create a new InitRun in the CollectingAnswers stage.
pub fn create_run() -> InitRun {
    InitRun {
        id: Uuid::new_v4(),
        project_dir: None,
        stage: InitStage::CollectingAnswers,
        logs: Vec::new(),
        started_at: Utc::now(),
        completed_at: None,
    }
}

/// Announce the run and its initial stage.
pub async fn start_run(run: &mut InitRun, events_tx: &Sender<InitEvent>) {
    let _ = events_tx.send(InitEvent::RunStarted { run_id: run.id }).await;
    let _ = events_tx
        .send(InitEvent::StageChanged {
            run_id: run.id,
            stage: run.stage,
        })
        .await;
}

/// Move the run to `stage` and emit event.
pub async fn enter_stage(run: &mut InitRun, events_tx: &Sender<InitEvent>, stage: InitStage) {
    tracing::info!(run_id = %run.id, stage = ?stage, "entering stage");
    run.stage = stage;
    let _ = events_tx
        .send(InitEvent::StageChanged {
            run_id: run.id,
            stage,
        })
        .await;
}

/// Record a milestone that has started and emit event.
pub async fn log_to_run(run: &mut InitRun, events_tx: &Sender<InitEvent>, message: String) {
    run.logs.push(message.clone());
    let _ = events_tx
        .send(InitEvent::Progress {
            run_id: run.id,
            message,
        })
        .await;
}

/// Record a milestone that has finished and emit event.
pub async fn succeed_step(run: &mut InitRun, events_tx: &Sender<InitEvent>, message: String) {
    run.logs.push(message.clone());
    let _ = events_tx
        .send(InitEvent::StepSucceeded {
            run_id: run.id,
            message,
        })
        .await;
}

/// Mark the run as done and emit completion events.
pub async fn complete_run(run: &mut InitRun, events_tx: &Sender<InitEvent>, message: String) {
    enter_stage(run, events_tx, InitStage::Done).await;
    run.completed_at = Some(Utc::now());
    run.logs.push(message.clone());
    let _ = events_tx
        .send(InitEvent::RunCompleted {
            run_id: run.id,
            message,
        })
        .await;
}

/// Mark the run as failed and emit error events.
pub async fn fail_run(run: &mut InitRun, events_tx: &Sender<InitEvent>, error: String) {
    tracing::warn!(run_id = %run.id, stage = ?run.stage, "initialization failed: {}", error);
    run.stage = InitStage::Failed;
    run.completed_at = Some(Utc::now());
    run.logs.push(error.clone());
    let _ = events_tx
        .send(InitEvent::StageChanged {
            run_id: run.id,
            stage: InitStage::Failed,
        })
        .await;
    let _ = events_tx
        .send(InitEvent::RunFailed {
            run_id: run.id,
            error,
        })
        .await;
}
