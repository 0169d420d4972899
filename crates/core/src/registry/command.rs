//! Subprocess runner for package manager commands.
//!
//! Spawns a command, streams its stdout line by line and finishes with a
//! single exit record carrying the exit code and captured stderr.

use crate::registry::base::InstallError;
use std::path::PathBuf;
use std::pin::Pin;
use std::process::Stdio;
use tokio::io::{AsyncBufReadExt, AsyncReadExt, BufReader};
use tokio::process::Command;
use tokio_stream::Stream;

/// One item of command output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutput {
    /// A non-empty line written to stdout.
    Line(String),
    /// The process exited. `code` is `None` when killed by a signal.
    Exited { code: Option<i32>, stderr: String },
}

impl CommandOutput {
    pub fn is_success(&self) -> bool {
        matches!(self, CommandOutput::Exited { code: Some(0), .. })
    }
}

pub struct CommandRunner;

impl CommandRunner {
    /// Execute `command` with `args` in `working_dir`.
    ///
    /// The stream yields every non-empty stdout line, then exactly one
    /// `CommandOutput::Exited`. If the command cannot be spawned the stream
    /// yields a single `InstallError::RegistryUnavailable`.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use pl_core::registry::command::{CommandOutput, CommandRunner};
    /// use tokio_stream::StreamExt;
    ///
    /// #[tokio::main]
    /// async fn main() {
    ///     let mut stream = CommandRunner::execute("npm".to_string(), vec!["--version".to_string()], ".".into());
    ///     while let Some(Ok(output)) = stream.next().await {
    ///         if let CommandOutput::Line(line) = output {
    ///             println!("{line}");
    ///         }
    ///     }
    /// }
    /// ```
    pub fn execute(
        command: String,
        args: Vec<String>,
        working_dir: PathBuf,
    ) -> Pin<Box<dyn Stream<Item = Result<CommandOutput, InstallError>> + Send>> {
        let stream = async_stream::stream! {
            let mut cmd = Command::new(&command);
            cmd.args(&args);
            cmd.current_dir(&working_dir);
            cmd.stdin(Stdio::null());
            cmd.stdout(Stdio::piped());
            cmd.stderr(Stdio::piped());

            let mut child = match cmd.spawn() {
                Ok(child) => child,
                Err(e) => {
                    yield Err(InstallError::RegistryUnavailable(format!(
                        "Failed to spawn command '{}': {}",
                        command, e
                    )));
                    return;
                }
            };

            // Drain stderr concurrently so a chatty process cannot block on a full pipe.
            let stderr_task = child.stderr.take().map(|mut stderr| {
                tokio::spawn(async move {
                    let mut buf = String::new();
                    let _ = stderr.read_to_string(&mut buf).await;
                    buf
                })
            });

            if let Some(stdout) = child.stdout.take() {
                let mut lines = BufReader::new(stdout).lines();
                while let Ok(Some(line)) = lines.next_line().await {
                    if line.trim().is_empty() {
                        continue;
                    }
                    yield Ok(CommandOutput::Line(line));
                }
            }

            let code = match child.wait().await {
                Ok(status) => status.code(),
                Err(_) => None,
            };
            let stderr = match stderr_task {
                Some(task) => task.await.unwrap_or_default(),
                None => String::new(),
            };

            yield Ok(CommandOutput::Exited { code, stderr });
        };

        Box::pin(stream)
    }
}
