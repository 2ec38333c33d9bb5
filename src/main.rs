//! # Backoffice Main Entry Point
//!
//! Runs the web server by default; `migrate`, `seed` and `dashboard` are
//! maintenance commands sharing the same configuration.

use anyhow::{Context, Result};
use backoffice::{
    client::ApiClient,
    config::{AppConfig, ConfigLoader},
    db, seeds,
    server::run_server,
    telemetry,
};
use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "backoffice", version, about = "Business management backoffice")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Serve the API and the management pages
    Serve,
    /// Apply pending migrations and exit
    Migrate,
    /// Apply migrations and seed reference data
    Seed,
    /// Print dashboard statistics from a running server
    Dashboard {
        /// Base URL of the server; defaults to BACKOFFICE_API_BASE_URL
        #[arg(long)]
        api_base: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration from layered env files and variables
    let config = ConfigLoader::new().load().context("Failed to load configuration")?;
    telemetry::init_tracing(&config).context("Failed to initialize tracing")?;

    tracing::info!(profile = %config.profile, "Loaded configuration");
    if let Ok(redacted) = config.redacted_json() {
        tracing::debug!(config = %redacted, "Effective configuration");
    }

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => serve(config).await,
        Command::Migrate => {
            let db = db::init_pool(&config).await?;
            db::run_migrations(&db).await?;
            db::close(db).await
        }
        Command::Seed => {
            let db = db::init_pool(&config).await?;
            db::run_migrations(&db).await?;
            let summary = seeds::seed_reference_data(&db).await?;
            tracing::info!(
                created = summary.created,
                existing = summary.existing,
                "Seed finished"
            );
            db::close(db).await
        }
        Command::Dashboard { api_base } => {
            let base = api_base.unwrap_or_else(|| config.api_base_url.clone());
            let client = ApiClient::new(&base)?;
            let dashboard = client.dashboard().await;
            println!("{}", serde_json::to_string_pretty(&dashboard.stats)?);
            Ok(())
        }
    }
}

async fn serve(config: AppConfig) -> Result<()> {
    let db = db::init_pool(&config).await?;
    if config.run_migrations {
        db::run_migrations(&db).await?;
    }
    if config.seed_on_startup {
        seeds::seed_reference_data(&db).await?;
    }
    run_server(config, db).await
}
