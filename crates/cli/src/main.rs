use clap::{Parser, Subcommand};
use color_eyre::eyre::WrapErr;
use pl_core::config::load_default_config;
use pl_core::init::{DefaultsPrompter, InitOrchestrator, Prompter};
use pl_core::registry::NpmRegistry;
use pl_protocol::answers::InitOptions;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod progress;
mod prompt;

#[derive(Parser)]
#[command(author, version, about = "Pattern Lab project tooling", long_about = None)]
struct Cli {
    /// Show debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a new Pattern Lab project
    Init {
        /// Directory to initialize; skips the interactive questions
        #[arg(short = 'p', long)]
        project_dir: Option<PathBuf>,

        /// Edition package to install (e.g. @pattern-lab/edition-node)
        #[arg(short, long)]
        edition: Option<String>,

        /// Starterkit package to install (e.g. @pattern-lab/starterkit-mustache-demo)
        #[arg(short = 'k', long)]
        starterkit: Option<String>,

        /// JSON file replacing the built-in default configuration
        #[arg(long, value_name = "FILE")]
        defaults: Option<PathBuf>,

        /// Never prompt; use the given options and defaults
        #[arg(short, long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Init {
            project_dir,
            edition,
            starterkit,
            defaults,
            yes,
        } => {
            let options = InitOptions {
                project_dir,
                edition,
                starterkit,
            };
            run_init(options, defaults, yes, cli.verbose).await
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_level.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

async fn run_init(
    options: InitOptions,
    defaults: Option<PathBuf>,
    yes: bool,
    verbose: bool,
) -> color_eyre::Result<()> {
    let default_config = load_default_config(defaults.as_deref())
        .wrap_err("Failed to load the default configuration")?;

    let prompter: Arc<dyn Prompter> = if yes {
        Arc::new(DefaultsPrompter)
    } else {
        Arc::new(prompt::DialoguerPrompter::new())
    };
    let orchestrator = InitOrchestrator::new(default_config, Arc::new(NpmRegistry::new()), prompter);

    let (tx, rx) = mpsc::channel(100);
    let renderer = tokio::spawn(progress::render_events(rx, verbose));

    let result = orchestrator.run(options, tx).await;
    let _ = renderer.await;

    result.wrap_err("PatternLab initialization failed")?;
    Ok(())
}
