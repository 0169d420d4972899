//! Initialization orchestrator.
//!
//! The InitOrchestrator drives one initialization run from answers to a
//! written `patternlab-config.json`, reporting every stage over the event
//! channel.

use super::answers::{validate_answers, ValidatedAnswers};
use super::error::InitResult;
use super::prompt::Prompter;
use super::scaffold::scaffold;
use crate::config::resolver::resolve_with_layout;
use crate::config::writer::write_config;
use crate::registry::{InstallContext, PackageRegistry};
use crate::state::run::{
    complete_run, create_run, enter_stage, fail_run, log_to_run, start_run, succeed_step,
};
use pl_protocol::answers::{Answers, InitOptions};
use pl_protocol::config_models::{DirectoryLayout, ProjectConfig};
use pl_protocol::ipc::InitEvent;
use pl_protocol::run_models::{InitRun, InitStage};
use std::sync::Arc;
use tokio::sync::mpsc::Sender;

/// Runs the initialization pipeline.
///
/// Steps run strictly in order: collect answers, resolve the configuration,
/// scaffold, install the edition and starterkit when requested, then write
/// the configuration. The first failing step ends the run.
pub struct InitOrchestrator {
    default_config: ProjectConfig,
    registry: Arc<dyn PackageRegistry>,
    prompter: Arc<dyn Prompter>,
    layout: DirectoryLayout,
}

impl InitOrchestrator {
    /// Create an orchestrator.
    ///
    /// # Arguments
    ///
    /// * `default_config` - Baseline configuration; never modified by a run
    /// * `registry` - Installs editions and starterkits
    /// * `prompter` - Asked for answers when no project directory was given
    pub fn new(
        default_config: ProjectConfig,
        registry: Arc<dyn PackageRegistry>,
        prompter: Arc<dyn Prompter>,
    ) -> Self {
        Self {
            default_config,
            registry,
            prompter,
            layout: DirectoryLayout::default(),
        }
    }

    /// Use different names for the source, public and export directories.
    pub fn with_layout(mut self, layout: DirectoryLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Initialize a project and return `true` on success.
    ///
    /// Emits `RunStarted` first and either `RunCompleted` or `RunFailed`
    /// last. A closed receiver is not an error.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by any step, unchanged. Nothing done by
    /// earlier steps is rolled back.
    pub async fn run(&self, options: InitOptions, events_tx: Sender<InitEvent>) -> InitResult<bool> {
        let mut run = create_run();
        start_run(&mut run, &events_tx).await;

        match self.execute(&mut run, options, &events_tx).await {
            Ok(()) => Ok(true),
            Err(e) => {
                fail_run(&mut run, &events_tx, e.to_string()).await;
                Err(e)
            }
        }
    }

    async fn execute(
        &self,
        run: &mut InitRun,
        options: InitOptions,
        events_tx: &Sender<InitEvent>,
    ) -> InitResult<()> {
        let answers = self.collect_answers(options).await?;
        let ValidatedAnswers {
            project_dir,
            edition,
            starterkit,
        } = validate_answers(answers)?;

        let dir = project_dir.display().to_string();
        run.project_dir = Some(dir.clone());
        log_to_run(run, events_tx, format!("Setting up PatternLab project in {}", dir)).await;

        enter_stage(run, events_tx, InitStage::ResolvingConfig).await;
        let mut config = resolve_with_layout(&self.default_config, &project_dir, &self.layout);
        tracing::debug!(source_root = ?config.source_root(), "resolved configuration paths");

        enter_stage(run, events_tx, InitStage::Scaffolding).await;
        scaffold(
            &project_dir,
            &self.layout.source_dir,
            &self.layout.public_dir,
            &self.layout.export_dir,
        )
        .await?;

        if let Some(edition) = edition {
            enter_stage(run, events_tx, InitStage::InstallingEdition).await;
            log_to_run(run, events_tx, format!("Installing edition: {}", edition)).await;
            let fragment = self
                .registry
                .install_edition(&edition, InstallContext::new(&project_dir, &config))
                .await?;
            config.merge(fragment);
            succeed_step(run, events_tx, format!("Installed edition: {}", edition)).await;
        }

        if let Some(starterkit) = starterkit {
            enter_stage(run, events_tx, InitStage::InstallingStarterkit).await;
            log_to_run(run, events_tx, format!("Installing starterkit {}", starterkit)).await;
            self.registry
                .install_starterkit(&starterkit, InstallContext::new(&project_dir, &config))
                .await?;
            succeed_step(run, events_tx, format!("Installed starterkit: {}", starterkit)).await;
        }

        enter_stage(run, events_tx, InitStage::WritingConfig).await;
        let config_file = self.layout.resolve(&project_dir).config_file();
        write_config(&config_file, &config).await?;

        complete_run(
            run,
            events_tx,
            format!("PatternLab was successfully initialised in {}", dir),
        )
        .await;
        Ok(())
    }

    /// Options that name a non-blank project directory are taken as the answers.
    async fn collect_answers(&self, options: InitOptions) -> InitResult<Answers> {
        let answers = Answers::from(options.clone()).normalized();
        if answers.project_dir.is_some() {
            return Ok(answers);
        }
        self.prompter.ask(&options).await
    }
}
