//! Repository bundle handed to the application services.

use crate::config::StorageConfig;
use crate::database::{
    self, SeaOrmAlertRepository, SeaOrmCampaignRepository, SeaOrmStoreRepository,
    SeaOrmTicketRepository,
};
use crate::memory::InMemoryCatalog;
use domain::alert::AlertRepository;
use domain::campaign::CampaignRepository;
use domain::store::StoreRepository;
use domain::ticket::TicketRepository;
use sea_orm::{DatabaseConnection, DbErr};
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub struct Repositories {
    pub stores: Arc<dyn StoreRepository>,
    pub campaigns: Arc<dyn CampaignRepository>,
    pub alerts: Arc<dyn AlertRepository>,
    pub tickets: Arc<dyn TicketRepository>,
    connection: Option<DatabaseConnection>,
}

impl Repositories {
    pub fn in_memory() -> Self {
        let catalog = Arc::new(InMemoryCatalog::new());
        Self {
            stores: catalog.clone(),
            campaigns: catalog.clone(),
            alerts: catalog.clone(),
            tickets: catalog,
            connection: None,
        }
    }

    pub fn sea_orm(db: DatabaseConnection) -> Self {
        Self {
            stores: Arc::new(SeaOrmStoreRepository::new(db.clone())),
            campaigns: Arc::new(SeaOrmCampaignRepository::new(db.clone())),
            alerts: Arc::new(SeaOrmAlertRepository::new(db.clone())),
            tickets: Arc::new(SeaOrmTicketRepository::new(db.clone())),
            connection: Some(db),
        }
    }

    /// Releases the database pool, if any.
    pub async fn close(self) -> Result<(), DbErr> {
        if let Some(db) = self.connection {
            db.close().await?;
            info!("Catalog storage closed");
        }
        Ok(())
    }
}

/// Builds the repositories named by `storage`, running migrations when backed by a database.
pub async fn open_repositories(storage: &StorageConfig) -> Result<Repositories, DbErr> {
    if storage.is_in_memory() {
        info!("💾 Using in-memory catalog storage");
        return Ok(Repositories::in_memory());
    }

    let db = database::connect(storage).await?;
    Ok(Repositories::sea_orm(db))
}
