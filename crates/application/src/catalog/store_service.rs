use std::sync::Arc;

use chrono::Utc;
use serde_json::{Map, Value};
use tracing::{debug, info};

use domain::policy::{Caller, WriteAction, WritePolicy};
use domain::store::{NewStore, Store, StoreRepository};
use domain::{DomainError, Result};

pub struct StoreService {
    stores: Arc<dyn StoreRepository>,
    policy: Arc<dyn WritePolicy>,
}

impl StoreService {
    pub fn new(stores: Arc<dyn StoreRepository>, policy: Arc<dyn WritePolicy>) -> Self {
        Self { stores, policy }
    }

    pub async fn list(&self) -> Result<Vec<Store>> {
        self.stores.find_all().await
    }

    pub async fn get(&self, id: &str) -> Result<Store> {
        self.stores
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Store", id))
    }

    /// Registers a store; its status is derived from the submitted devices.
    pub async fn create(&self, caller: &Caller, draft: NewStore) -> Result<Store> {
        self.policy.authorize(caller, WriteAction::CreateStore)?;

        let store = Store::create(draft, Utc::now())?;
        self.stores.save(&store).await?;

        info!(store_id = %store.id, status = %store.status.as_str(), devices = store.devices.len(), "Store created");
        Ok(store)
    }

    /// Merges `fields` into the stored document.
    ///
    /// Device counts follow the resulting device list in the same write.
    /// Status keeps its previous value until [`StoreService::recompute_status`].
    pub async fn update(&self, caller: &Caller, id: &str, fields: Map<String, Value>) -> Result<Store> {
        self.policy.authorize(caller, WriteAction::UpdateStore)?;

        let current = self.get(id).await?;
        let updated = current.apply_update(fields, Utc::now())?;
        self.stores.save(&updated).await?;

        debug!(store_id = %id, "Store updated");
        Ok(updated)
    }

    pub async fn recompute_status(&self, caller: &Caller, id: &str) -> Result<Store> {
        self.policy
            .authorize(caller, WriteAction::RecomputeStoreStatus)?;

        let mut store = self.get(id).await?;
        let previous = store.status;
        let status = store.recompute_status(Utc::now());
        self.stores.save(&store).await?;

        if previous != status {
            info!(store_id = %id, from = %previous.as_str(), to = %status.as_str(), "Store status changed");
        }
        Ok(store)
    }
}
