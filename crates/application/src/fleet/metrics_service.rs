use std::sync::Arc;

use chrono::Utc;
use tracing::debug;

use domain::Result;
use domain::metrics::{FleetRollup, Metrics, SyntheticReadings};
use domain::store::StoreRepository;

/// Recomputes fleet metrics from the store collection on every call
pub struct FleetMetricsService {
    stores: Arc<dyn StoreRepository>,
    readings: Arc<dyn SyntheticReadings>,
}

impl FleetMetricsService {
    pub fn new(stores: Arc<dyn StoreRepository>, readings: Arc<dyn SyntheticReadings>) -> Self {
        Self { stores, readings }
    }

    pub async fn current(&self) -> Result<Metrics> {
        let stores = self.stores.find_all().await?;
        let rollup = FleetRollup::compute(&stores, Utc::now());

        debug!(
            stores = rollup.total_stores(),
            devices = rollup.total_devices,
            online = rollup.active_balances,
            "Fleet rollup computed"
        );

        Ok(Metrics::from_rollup(&rollup, self.readings.as_ref()))
    }
}
