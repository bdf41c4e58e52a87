use anyhow::Result;
use clap::Parser;
use domain::seeder::SeedOutcome;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use fleet_server::{create_router, setup_app_state};
use infrastructure::{ServerConfig, open_repositories};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Directory holding default.toml and the RUN_MODE overlay
    #[arg(long, default_value = "config")]
    config_dir: String,

    /// API Port (overrides the configured one)
    #[arg(long)]
    api_port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,fleet_server=debug,application=debug")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();
    info!("⚖️ BM Manager fleet server starting...");

    let mut config = ServerConfig::load(&args.config_dir)?;
    if let Some(port) = args.api_port {
        config.api_port = port;
    }

    let repos = open_repositories(&config.storage).await?;
    let state = setup_app_state(&repos, &config)?;

    match state.seeder.populate_if_empty().await {
        Ok(SeedOutcome::Seeded {
            stores,
            campaigns,
            alerts,
        }) => info!(stores, campaigns, alerts, "✅ Demo catalog seeded"),
        Ok(SeedOutcome::Skipped) => info!("Catalog already populated, skipping seed"),
        Err(e) => warn!("Initial seeding failed: {}", e),
    }

    let app = create_router(state, config.allowed_origins());
    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], config.api_port));
    info!("🚀 API Listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("🛑 Shutting down, closing storage");
    repos.close().await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
    }
}
