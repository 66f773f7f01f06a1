// Task Planner - command line entry point

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use task_planner::services::presentation::{render_plan_view, PlanAdapter, PlanController};
use task_planner::{AppState, ConfigService, SettingsUpdate};
use task_planner_core::AgentMode;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "task-planner", version, about = "LLM-backed task planner")]
struct Cli {
    /// Path to a JSON config file (defaults to ~/.task-planner/config.json)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the planner API server
    Serve {
        /// Address to listen on, overriding the config
        #[arg(long)]
        bind: Option<String>,
    },
    /// Request a plan from the configured endpoint and print it
    Plan {
        /// Task description
        task: String,
        /// planner or normal
        #[arg(long, default_value = "planner")]
        mode: AgentMode,
        /// Show the code of every step
        #[arg(long)]
        expand: bool,
    },
}

const DEFAULT_LOG_DIRECTIVE: &str = "task_planner=info";

/// `RUST_LOG` when it is set and parses, otherwise the default directive.
fn env_filter(rust_log: Option<&str>) -> EnvFilter {
    rust_log
        .filter(|directives| !directives.trim().is_empty())
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_DIRECTIVE))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(std::env::var("RUST_LOG").ok().as_deref()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut config_service = ConfigService::load(cli.config.as_deref())?;

    match cli.command {
        Command::Serve { bind } => {
            if bind.is_some() {
                config_service.update_config(SettingsUpdate {
                    bind_addr: bind,
                    ..Default::default()
                })?;
            }
            let config = config_service.get_config_clone();
            let listener = TcpListener::bind(&config.bind_addr).await?;
            info!(
                posture = ?config.posture,
                provider = %config.llm.provider,
                model = %config.llm.model,
                "starting task planner"
            );
            let state = Arc::new(AppState::from_config(config)?);
            task_planner::serve(listener, state).await?;
        }
        Command::Plan { task, mode, expand } => {
            let config = config_service.get_config();
            let controller = PlanController::new(PlanAdapter::from_config(&config.client)?);
            if let Err(err) = controller.generate(&task, mode).await {
                tracing::warn!(error = %err, "plan request did not complete");
            }

            let store = controller.store();
            let mut store = store.write().await;
            if expand {
                store.expand_all();
            }
            println!("{}", render_plan_view(&store));
        }
    }

    Ok(())
}
