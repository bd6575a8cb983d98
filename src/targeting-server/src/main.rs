//! Ad targeting delivery server — decides which campaigns are eligible
//! for an incoming ad request.
//!
//! Main entry point that loads configuration, connects the store, and
//! starts the HTTP server.

use clap::Parser;
use std::sync::Arc;
use targeting_api::ApiServer;
use targeting_core::config::AppConfig;
use targeting_engine::Evaluator;
use targeting_store::{CampaignStore, MemoryStore, PostgresStore};
use tracing::{error, info};

#[derive(Parser, Debug)]
#[command(name = "targeting-server")]
#[command(about = "Ad targeting delivery server")]
#[command(version)]
struct Cli {
    /// HTTP port (overrides config)
    #[arg(long, env = "AD_TARGETING__API__HTTP_PORT")]
    http_port: Option<u16>,

    /// Postgres connection URL (overrides config)
    #[arg(long, env = "AD_TARGETING__DATABASE__URL")]
    database_url: Option<String>,

    /// Serve from an in-memory store pre-loaded with demo data
    /// instead of Postgres
    #[arg(long, default_value_t = false)]
    in_memory: bool,

    /// Seed the demo campaigns and rules into Postgres at startup
    #[arg(long, default_value_t = false)]
    seed: bool,
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to listen for shutdown signal");
    }
    info!("Shutdown signal received");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "targeting_server=info,tower_http=info".into()),
        )
        .json()
        .init();

    let cli = Cli::parse();

    info!("Targeting server starting up");

    // Load configuration
    let mut config = AppConfig::load().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Failed to load config, using defaults");
        AppConfig::default()
    });

    // Apply CLI overrides
    if let Some(port) = cli.http_port {
        config.api.http_port = port;
    }
    if let Some(url) = cli.database_url {
        config.database.url = url;
    }

    info!(
        http_port = config.api.http_port,
        metrics_port = config.metrics.port,
        in_memory = cli.in_memory,
        "Configuration loaded"
    );

    // Connect the store
    let store: Arc<dyn CampaignStore> = if cli.in_memory {
        info!("Using in-memory store with demo data");
        Arc::new(MemoryStore::with_demo_data())
    } else {
        let postgres = PostgresStore::connect(&config.database).await?;
        if cli.seed || config.database.seed_demo_data {
            postgres.seed_demo_data().await?;
        }
        Arc::new(postgres)
    };

    let evaluator = Arc::new(Evaluator::new(store));

    // Start API server
    let api_server = ApiServer::new(config.clone(), evaluator);

    // Start metrics exporter
    if let Err(e) = api_server.start_metrics() {
        error!(error = %e, "Failed to start metrics exporter");
    }

    info!("Targeting server is ready to serve traffic");

    // Serve HTTP (blocks until shutdown)
    api_server.start_http(shutdown_signal()).await?;

    info!("Targeting server stopped");
    Ok(())
}
