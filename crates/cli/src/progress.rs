//! Terminal rendering of initialization events.

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use pl_protocol::ipc::InitEvent;
use std::time::Duration;
use tokio::sync::mpsc::Receiver;

/// How a finished step is reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusLine {
    Succeeded(String),
    Failed(String),
}

impl StatusLine {
    fn render(&self) -> String {
        match self {
            StatusLine::Succeeded(message) => format!("{} {}", "✔".green().bold(), message),
            StatusLine::Failed(message) => format!("{} {}", "✖".red().bold(), message),
        }
    }
}

/// The line printed for `event`, if any.
pub fn status_line(event: &InitEvent) -> Option<StatusLine> {
    match event {
        InitEvent::StepSucceeded { message, .. } | InitEvent::RunCompleted { message, .. } => {
            Some(StatusLine::Succeeded(message.clone()))
        }
        InitEvent::RunFailed { error, .. } => Some(StatusLine::Failed(error.clone())),
        _ => None,
    }
}

/// Render events until the sender is dropped.
///
/// The spinner is created on the first progress message so it never draws
/// over interactive prompts. With `plain` set, progress is printed as lines
/// instead, leaving stderr to the log output.
pub async fn render_events(mut rx: Receiver<InitEvent>, plain: bool) {
    let mut spinner: Option<ProgressBar> = None;

    while let Some(event) = rx.recv().await {
        if let InitEvent::StageChanged { stage, .. } = &event {
            tracing::debug!(stage = ?stage, "stage changed");
        }

        if let InitEvent::Progress { message, .. } = &event {
            if plain {
                println!("{} {}", "⊙".blue(), message);
            } else {
                spinner.get_or_insert_with(new_spinner).set_message(message.clone());
            }
            continue;
        }

        if let Some(line) = status_line(&event) {
            let rendered = line.render();
            if let Some(pb) = spinner.as_ref().filter(|_| !event.is_terminal()) {
                pb.println(rendered);
                continue;
            }

            if let Some(pb) = spinner.take() {
                pb.finish_and_clear();
            }
            match line {
                StatusLine::Succeeded(_) => println!("{}", rendered),
                StatusLine::Failed(_) => eprintln!("{}", rendered),
            }
        }
    }

    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }
}

fn new_spinner() -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

#[cfg(test)]
mod tests {
    use super::*;
    use pl_protocol::run_models::InitStage;
    use uuid::Uuid;

    #[test]
    fn test_status_line_for_steps() {
        let run_id = Uuid::new_v4();

        assert_eq!(
            status_line(&InitEvent::StepSucceeded {
                run_id,
                message: "Installed edition: edition-node".to_string(),
            }),
            Some(StatusLine::Succeeded("Installed edition: edition-node".to_string()))
        );
        assert_eq!(
            status_line(&InitEvent::RunFailed {
                run_id,
                error: "boom".to_string(),
            }),
            Some(StatusLine::Failed("boom".to_string()))
        );
    }

    #[test]
    fn test_status_line_skips_progress() {
        let run_id = Uuid::new_v4();

        assert!(status_line(&InitEvent::RunStarted { run_id }).is_none());
        assert!(status_line(&InitEvent::StageChanged {
            run_id,
            stage: InitStage::Scaffolding,
        })
        .is_none());
        assert!(status_line(&InitEvent::Progress {
            run_id,
            message: "Installing starterkit demo".to_string(),
        })
        .is_none());
    }

    #[test]
    fn test_render_marks() {
        colored::control::set_override(false);

        assert_eq!(StatusLine::Succeeded("done".to_string()).render(), "✔ done");
        assert_eq!(StatusLine::Failed("broken".to_string()).render(), "✖ broken");
    }

    #[tokio::test]
    async fn test_render_events_drains_channel() {
        let (tx, rx) = tokio::sync::mpsc::channel(10);
        let run_id = Uuid::new_v4();
        tx.send(InitEvent::RunStarted { run_id }).await.unwrap();
        tx.send(InitEvent::RunCompleted {
            run_id,
            message: "done".to_string(),
        })
        .await
        .unwrap();
        drop(tx);

        render_events(rx, true).await;
    }
}
