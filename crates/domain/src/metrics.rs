//! Fleet-wide counters computed on demand from the store collection.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::store::{Store, StoreStatus};

/// A device counts as calibrated when its last calibration is at most this old
pub const CALIBRATION_WINDOW_DAYS: i64 = 90;

/// Figures derived from the stores in a single pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FleetRollup {
    pub total_devices: usize,
    pub active_balances: usize,
    pub calibrated_devices: usize,
    pub stores_online: usize,
    pub stores_partial: usize,
    pub stores_offline: usize,
}

impl FleetRollup {
    /// Store counts read each store's persisted `status`; it is not re-derived here.
    pub fn compute(stores: &[Store], now: DateTime<Utc>) -> Self {
        let mut rollup = Self::default();

        for store in stores {
            match store.status {
                StoreStatus::Online => rollup.stores_online += 1,
                StoreStatus::Partial => rollup.stores_partial += 1,
                StoreStatus::Offline => rollup.stores_offline += 1,
            }

            for device in &store.devices {
                rollup.total_devices += 1;
                if device.is_online() {
                    rollup.active_balances += 1;
                }
                if device.calibrated_within(now, CALIBRATION_WINDOW_DAYS) {
                    rollup.calibrated_devices += 1;
                }
            }
        }

        rollup
    }

    /// Share of calibrated devices in percent, one decimal; 0 for an empty fleet.
    pub fn calibration_percentage(&self) -> f64 {
        if self.total_devices == 0 {
            return 0.0;
        }
        round_to(
            self.calibrated_devices as f64 / self.total_devices as f64 * 100.0,
            1,
        )
    }

    pub fn total_stores(&self) -> usize {
        self.stores_online + self.stores_partial + self.stores_offline
    }
}

/// Demo-only figures with no derivable formula (kilograms weighed today,
/// firmware updates pending). Not business data.
pub trait SyntheticReadings: Send + Sync {
    fn total_kg_today(&self) -> f64;
    fn pending_updates(&self) -> u32;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    pub total_kg_today: f64,
    pub active_balances: usize,
    pub calibration_percentage: f64,
    pub pending_updates: u32,
    pub stores_online: usize,
    pub stores_partial: usize,
    pub stores_offline: usize,
}

impl Metrics {
    pub fn from_rollup(rollup: &FleetRollup, readings: &dyn SyntheticReadings) -> Self {
        Self {
            total_kg_today: round_to(readings.total_kg_today(), 2),
            active_balances: rollup.active_balances,
            calibration_percentage: rollup.calibration_percentage(),
            pending_updates: readings.pending_updates(),
            stores_online: rollup.stores_online,
            stores_partial: rollup.stores_partial,
            stores_offline: rollup.stores_offline,
        }
    }
}

pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
