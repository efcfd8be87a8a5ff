use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use vitrine_core::AppConfig;

mod commands;

#[derive(Parser)]
#[command(name = "vitrine")]
#[command(version, about = "A terminal viewer for product landing pages")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Page file to show (shorthand for `run <page>`)
    page: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show a page (the default)
    Run {
        /// Page file (.toml or .json); falls back to the embedded sample
        page: Option<PathBuf>,
    },
    /// Validate a page file
    Check {
        /// Page file to validate
        page: PathBuf,
    },
    /// Write a starter page file
    Init {
        /// Destination path
        #[arg(default_value = "page.toml")]
        path: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = Arc::new(AppConfig::load()?);

    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| config.general.log_level.clone()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    match cli.command {
        Some(Commands::Run { page }) => commands::run::run(config, page).await,
        None => commands::run::run(config, cli.page).await,
        Some(Commands::Check { page }) => commands::check::run(&page),
        Some(Commands::Init { path }) => commands::init::run(&path),
    }
}
