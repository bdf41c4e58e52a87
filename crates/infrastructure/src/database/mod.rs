mod alert_repository;
mod campaign_repository;
mod codec;
mod store_repository;
mod ticket_repository;

pub mod entities;

pub use alert_repository::SeaOrmAlertRepository;
pub use campaign_repository::SeaOrmCampaignRepository;
pub use store_repository::SeaOrmStoreRepository;
pub use ticket_repository::SeaOrmTicketRepository;

use crate::config::StorageConfig;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use std::time::Duration;
use tracing::info;

/// Opens the catalog database and brings its schema up to date.
pub async fn connect(storage: &StorageConfig) -> Result<DatabaseConnection, DbErr> {
    let url = storage.connection_url();
    let mut options = ConnectOptions::new(url.clone());
    options
        .connect_timeout(Duration::from_secs(10))
        .sqlx_logging(false);

    // Every pooled connection to `sqlite::memory:` is its own empty database
    if url.contains(":memory:") {
        options.max_connections(1).min_connections(1);
    }

    info!(backend = %backend_name(&url), "💾 Connecting to catalog storage");
    let db = Database::connect(options).await?;

    info!("Running database migrations...");
    Migrator::up(&db, None).await?;
    info!("✅ Migrations applied successfully");

    Ok(db)
}

fn backend_name(url: &str) -> &str {
    url.split_once(':').map(|(scheme, _)| scheme).unwrap_or("unknown")
}
