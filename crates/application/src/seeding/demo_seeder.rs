use std::ops::RangeInclusive;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Duration, NaiveDate, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;

use domain::alert::{Alert, AlertRepository, AlertType};
use domain::campaign::{Campaign, CampaignRepository, CampaignStatus, NewCampaign};
use domain::device::{Device, DeviceDraft, DeviceStatus, DeviceType, LabelStatus};
use domain::metrics::round_to;
use domain::priority::Priority;
use domain::seeder::{CatalogSeeder, SeedOutcome};
use domain::store::{
    NetworkStatus, NewStore, SalesLevel, Store, StoreRepository, validate_santiago_coordinates,
};
use domain::{DomainError, Result};

use super::comunas::{Comuna, SANTIAGO_COMUNAS};

const DEVICES_PER_TYPE: [(DeviceType, RangeInclusive<u32>); 3] = [
    (DeviceType::AssistedScale, 3..=8),
    (DeviceType::SelfService, 2..=6),
    (DeviceType::AiVision, 1..=4),
];

const DEVICE_STATUS_WEIGHTS: [(DeviceStatus, u32); 3] = [
    (DeviceStatus::Online, 8),
    (DeviceStatus::Offline, 1),
    (DeviceStatus::Maintenance, 1),
];

const LABEL_STATUS_WEIGHTS: [(LabelStatus, u32); 3] = [
    (LabelStatus::Good, 8),
    (LabelStatus::Warning, 1),
    (LabelStatus::Replace, 1),
];

const NETWORK_WEIGHTS: [(NetworkStatus, u32); 2] =
    [(NetworkStatus::Connected, 9), (NetworkStatus::Unstable, 1)];

const SALES_WEIGHTS: [(SalesLevel, u32); 3] = [
    (SalesLevel::High, 3),
    (SalesLevel::Medium, 5),
    (SalesLevel::Low, 2),
];

const FIRMWARE_VERSIONS: [&str; 3] = ["v2.3.1", "v2.3.0", "v2.2.5"];

/// Stores receiving an alert; indices `i % 3 == 2` get none.
const ALERTED_STORES: usize = 10;
/// Stores the active demo campaign is applied to
const CAMPAIGN_REACH: usize = 18;

/// Random demonstration catalog: one store per Santiago comuna, four
/// campaigns and a handful of alerts.
pub struct DemoCatalogSeeder {
    stores: Arc<dyn StoreRepository>,
    campaigns: Arc<dyn CampaignRepository>,
    alerts: Arc<dyn AlertRepository>,
    rng: Mutex<StdRng>,
}

/// Generated records, not yet persisted
#[derive(Debug, Clone)]
pub struct DemoCatalog {
    pub stores: Vec<Store>,
    pub campaigns: Vec<Campaign>,
    pub alerts: Vec<Alert>,
}

impl DemoCatalogSeeder {
    pub fn new(
        stores: Arc<dyn StoreRepository>,
        campaigns: Arc<dyn CampaignRepository>,
        alerts: Arc<dyn AlertRepository>,
    ) -> Self {
        Self::with_rng(stores, campaigns, alerts, StdRng::from_entropy())
    }

    /// Reproducible catalog for tests
    pub fn with_seed(
        stores: Arc<dyn StoreRepository>,
        campaigns: Arc<dyn CampaignRepository>,
        alerts: Arc<dyn AlertRepository>,
        seed: u64,
    ) -> Self {
        Self::with_rng(stores, campaigns, alerts, StdRng::seed_from_u64(seed))
    }

    fn with_rng(
        stores: Arc<dyn StoreRepository>,
        campaigns: Arc<dyn CampaignRepository>,
        alerts: Arc<dyn AlertRepository>,
        rng: StdRng,
    ) -> Self {
        Self {
            stores,
            campaigns,
            alerts,
            rng: Mutex::new(rng),
        }
    }

    pub fn generate(&self, now: DateTime<Utc>) -> Result<DemoCatalog> {
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());

        let stores = SANTIAGO_COMUNAS
            .iter()
            .enumerate()
            .map(|(i, comuna)| generate_store(&mut *rng, i, comuna, now))
            .collect::<Result<Vec<_>>>()?;

        let campaigns = demo_campaigns(&stores)?;
        let alerts = demo_alerts(&mut *rng, &stores, now);

        Ok(DemoCatalog {
            stores,
            campaigns,
            alerts,
        })
    }
}

#[async_trait]
impl CatalogSeeder for DemoCatalogSeeder {
    async fn populate_if_empty(&self) -> Result<SeedOutcome> {
        // Check-then-insert; concurrent first starts are not guarded
        if self.stores.count().await? > 0 {
            info!("Catalog already populated, skipping demo seed");
            return Ok(SeedOutcome::Skipped);
        }

        let catalog = self.generate(Utc::now())?;

        self.stores.insert_many(&catalog.stores).await?;
        self.campaigns.insert_many(&catalog.campaigns).await?;
        self.alerts.insert_many(&catalog.alerts).await?;

        info!(
            stores = catalog.stores.len(),
            campaigns = catalog.campaigns.len(),
            alerts = catalog.alerts.len(),
            "🌱 Demo catalog seeded"
        );

        Ok(SeedOutcome::Seeded {
            stores: catalog.stores.len(),
            campaigns: catalog.campaigns.len(),
            alerts: catalog.alerts.len(),
        })
    }
}

fn weighted<T: Copy, R: Rng + ?Sized>(rng: &mut R, choices: &[(T, u32)]) -> T {
    let total: u32 = choices.iter().map(|(_, w)| w).sum();
    let mut pick = rng.gen_range(0..total);
    for (value, weight) in choices {
        if pick < *weight {
            return *value;
        }
        pick -= weight;
    }
    choices[choices.len() - 1].0
}

fn generate_device<R: Rng + ?Sized>(
    rng: &mut R,
    device_type: DeviceType,
    now: DateTime<Utc>,
) -> Result<Device> {
    let firmware = FIRMWARE_VERSIONS[rng.gen_range(0..FIRMWARE_VERSIONS.len())];

    Device::new(DeviceDraft {
        id: None,
        device_type,
        status: weighted(rng, &DEVICE_STATUS_WEIGHTS),
        firmware_version: firmware.to_string(),
        last_calibration: now - Duration::days(rng.gen_range(1..=90)),
        installation_date: now - Duration::days(rng.gen_range(180..=1095)),
        avg_consumption: round_to(rng.gen_range(0.5..=2.5), 2),
        label_status: weighted(rng, &LABEL_STATUS_WEIGHTS),
        printhead_life: rng.gen_range(60..=100),
    })
}

fn generate_store<R: Rng + ?Sized>(
    rng: &mut R,
    index: usize,
    comuna: &Comuna,
    now: DateTime<Utc>,
) -> Result<Store> {
    let mut devices = Vec::new();
    for (device_type, range) in DEVICES_PER_TYPE {
        for _ in 0..rng.gen_range(range) {
            devices.push(generate_device(rng, device_type, now)?);
        }
    }

    let latitude = comuna.latitude + rng.gen_range(-0.01..=0.01);
    let longitude = comuna.longitude + rng.gen_range(-0.01..=0.01);
    validate_santiago_coordinates(latitude, longitude)?;

    Store::create(
        NewStore {
            name: format!("Local {}", index + 1),
            comuna: comuna.name.to_string(),
            sap_code: format!("SAP-{}", 1000 + index),
            address: format!("Av. Principal {}, {}", 100 + index * 10, comuna.name),
            latitude,
            longitude,
            network_status: weighted(rng, &NETWORK_WEIGHTS),
            latency: rng.gen_range(10..=80),
            sales_level: weighted(rng, &SALES_WEIGHTS),
            devices,
        },
        now,
    )
}

fn date(year: i32, month: u32, day: u32) -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
        DomainError::InvalidCampaign(format!("invalid date {year}-{month}-{day}"))
    })
}

fn demo_campaigns(stores: &[Store]) -> Result<Vec<Campaign>> {
    let applied: Vec<String> = stores
        .iter()
        .take(CAMPAIGN_REACH)
        .map(|s| s.id.clone())
        .collect();

    let drafts = [
        (
            "Navidad 2024",
            date(2024, 12, 1)?,
            date(2024, 12, 31)?,
            CampaignStatus::Expired,
            "https://images.unsplash.com/photo-1512389142860-9c449e58a543?w=800",
            20,
            Vec::new(),
        ),
        (
            "Verano Saludable 2025",
            date(2025, 1, 15)?,
            date(2025, 3, 15)?,
            CampaignStatus::Active,
            "https://images.unsplash.com/photo-1610832958506-aa56368176cf?w=800",
            18,
            applied,
        ),
        (
            "Otoño Promociones",
            date(2025, 4, 1)?,
            date(2025, 5, 31)?,
            CampaignStatus::Scheduled,
            "https://images.unsplash.com/photo-1542838132-92c53300491e?w=800",
            0,
            Vec::new(),
        ),
        (
            "Modo Fiesta 18 de Septiembre",
            date(2025, 9, 15)?,
            date(2025, 9, 20)?,
            CampaignStatus::Scheduled,
            "https://images.unsplash.com/photo-1568213816046-0ee1c42bd559?w=800",
            0,
            Vec::new(),
        ),
    ];

    drafts
        .into_iter()
        .map(
            |(name, start_date, end_date, status, wallpaper_url, deployed_count, stores_applied)| {
                Campaign::create(NewCampaign {
                    name: name.to_string(),
                    start_date,
                    end_date,
                    status,
                    wallpaper_url: wallpaper_url.to_string(),
                    deployed_count,
                    total_balances: 20,
                    stores_applied,
                })
            },
        )
        .collect()
}

fn demo_alerts<R: Rng + ?Sized>(rng: &mut R, stores: &[Store], now: DateTime<Utc>) -> Vec<Alert> {
    stores
        .iter()
        .take(ALERTED_STORES)
        .enumerate()
        .filter_map(|(i, store)| match i % 3 {
            0 => Some(Alert::raise(
                store,
                AlertType::Calibration,
                "Calibración trimestral pendiente",
                Priority::Medium,
                now - Duration::days(rng.gen_range(1..=7)),
            )),
            1 => Some(Alert::raise(
                store,
                AlertType::Maintenance,
                "Mantenimiento preventivo requerido",
                Priority::High,
                now - Duration::days(rng.gen_range(1..=5)),
            )),
            _ => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;

    #[test]
    fn test_weighted_covers_every_bucket() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..500 {
            seen.insert(weighted(&mut rng, &DEVICE_STATUS_WEIGHTS));
        }
        assert_eq!(seen.len(), 3);

        let mut zero = StepRng::new(0, 0);
        assert_eq!(weighted(&mut zero, &SALES_WEIGHTS), SalesLevel::High);
    }
}
