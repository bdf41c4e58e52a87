use std::sync::Arc;

use tracing::info;

use domain::Result;
use domain::policy::{Caller, WriteAction, WritePolicy};
use domain::seeder::{CatalogSeeder, SeedOutcome};
use domain::store::StoreRepository;

const LEGACY_TOKEN: &str = "Sucursal";
const CURRENT_TOKEN: &str = "Local";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NamingReport {
    pub renamed: usize,
    pub seed: SeedOutcome,
}

impl NamingReport {
    pub fn message(&self) -> String {
        format!("Updated {} stores with correct naming", self.renamed)
    }
}

/// One-off data migration renaming legacy `Sucursal` stores to `Local`,
/// followed by a populate-if-empty pass.
pub struct NamingMigration {
    stores: Arc<dyn StoreRepository>,
    seeder: Arc<dyn CatalogSeeder>,
    policy: Arc<dyn WritePolicy>,
}

impl NamingMigration {
    pub fn new(
        stores: Arc<dyn StoreRepository>,
        seeder: Arc<dyn CatalogSeeder>,
        policy: Arc<dyn WritePolicy>,
    ) -> Self {
        Self {
            stores,
            seeder,
            policy,
        }
    }

    pub async fn run(&self, caller: &Caller) -> Result<NamingReport> {
        self.policy.authorize(caller, WriteAction::MigrateStoreNames)?;

        let mut renamed = 0;
        for mut store in self.stores.find_all().await? {
            if !store.name.contains(LEGACY_TOKEN) {
                continue;
            }
            store.name = store.name.replace(LEGACY_TOKEN, CURRENT_TOKEN);
            self.stores.save(&store).await?;
            renamed += 1;
        }

        let seed = self.seeder.populate_if_empty().await?;
        info!(renamed, ?seed, "Store naming migration finished");

        Ok(NamingReport { renamed, seed })
    }
}
