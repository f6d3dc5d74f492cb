use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use designai_application::{ExportFormat, WorkspaceController};
use designai_core::clock::{Clock, SystemClock};
use designai_core::config::AppConfig;
use designai_infrastructure::{ConfigService, WorkspaceStorage};

mod commands;
mod repl;

#[derive(Parser)]
#[command(name = "designai")]
#[command(about = "DesignAI - local design generation workspace", long_about = None)]
struct Cli {
    /// Path to config.toml (defaults to the platform config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Directory for the persisted workspace documents
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Tracing filter, e.g. `debug` or `designai_infrastructure=trace`
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive workspace (default)
    Repl,
    /// Print the persisted workspace snapshot
    Status,
    /// Export the latest record
    Export {
        /// `html` or `json`
        #[arg(long, default_value = "html", value_parser = parse_export_format)]
        format: ExportFormat,
        /// Output file (defaults to design-export.<format> in the current directory)
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

fn parse_export_format(value: &str) -> Result<ExportFormat, String> {
    ExportFormat::from_str(value).map_err(|_| format!("unknown export format '{}'", value))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = load_config(cli.config.as_ref())?;
    init_tracing(cli.log_level.as_deref().unwrap_or(&config.debug.log_level));

    let storage = open_storage(cli.data_dir.or_else(|| config.storage.data_dir.clone()))?;
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let controller = WorkspaceController::from_config(storage, clock, &config);

    match cli.command.unwrap_or(Commands::Repl) {
        Commands::Repl => repl::run(controller).await?,
        Commands::Status => commands::status::run(&controller),
        Commands::Export { format, output } => {
            commands::export::run(controller, format, output)?
        }
    }

    Ok(())
}

fn load_config(path: Option<&PathBuf>) -> Result<AppConfig> {
    let service = match path {
        Some(path) => ConfigService::new(path),
        None => ConfigService::with_default_path()?,
    };
    service
        .get_config()
        .with_context(|| format!("Failed to load {}", service.path().display()))
}

/// Logs go to stderr so the REPL output stays readable. `RUST_LOG` wins over
/// the flag and the config file.
fn init_tracing(default_filter: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn open_storage(data_dir: Option<PathBuf>) -> Result<Arc<WorkspaceStorage>> {
    let storage = match data_dir {
        Some(dir) => WorkspaceStorage::at_dir(dir),
        None => WorkspaceStorage::default_location()?,
    };
    if !storage.is_durable() {
        tracing::warn!("storage directory is not writable, changes will not survive a restart");
    }
    Ok(Arc::new(storage))
}
