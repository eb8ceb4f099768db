use anyhow::Result;
use clap::{Parser, Subcommand};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

/// Environment variable holding the log filter directives.
const LOG_ENV: &str = "SIFT_LOG";

#[derive(Parser)]
#[command(name = "sift")]
#[command(about = "sift - browse analysis workflow sessions", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List analysis sessions, most recent first
    List {
        /// Project root (defaults to the nearest ancestor holding an analysis directory)
        #[arg(long)]
        project: Option<PathBuf>,
        /// Print the result envelope as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show one session with its artifacts
    Show {
        /// Session folder name, e.g. ANL-auth-flow-2026-01-05
        session_id: String,
        #[arg(long)]
        project: Option<PathBuf>,
        #[arg(long)]
        json: bool,
        /// Only print this artifact
        #[arg(long, value_enum)]
        section: Option<commands::show::Section>,
    },
    /// Render an arbitrary JSON file as a tree
    Render {
        /// Path to a JSON document
        file: PathBuf,
    },
    /// Print the effective configuration
    Config,
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .try_init();
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::List { project, json } => commands::list::run(project, json).await?,
        Commands::Show {
            session_id,
            project,
            json,
            section,
        } => commands::show::run(&session_id, project, json, section).await?,
        Commands::Render { file } => commands::render::run(&file)?,
        Commands::Config => commands::config::run()?,
    }

    Ok(())
}
