mod common;

use std::collections::HashSet;
use std::sync::Arc;

use application::{DemoCatalogSeeder, NamingMigration};
use chrono::Utc;
use domain::alert::{AlertRepository, AlertType};
use domain::campaign::{CampaignRepository, CampaignStatus};
use domain::device::DeviceType;
use domain::policy::{AllowAllPolicy, Caller, ReadOnlyPolicy};
use domain::priority::Priority;
use domain::seeder::{CatalogSeeder, MockCatalogSeeder, SeedOutcome};
use domain::store::{
    SANTIAGO_LATITUDE, SANTIAGO_LONGITUDE, StoreRepository, StoreStatus,
};
use domain::DomainError;
use infrastructure::InMemoryCatalog;

fn seeder(catalog: &Arc<InMemoryCatalog>, seed: u64) -> DemoCatalogSeeder {
    DemoCatalogSeeder::with_seed(catalog.clone(), catalog.clone(), catalog.clone(), seed)
}

#[tokio::test]
async fn test_demo_catalog_shape() {
    let catalog = Arc::new(InMemoryCatalog::new());
    let outcome = seeder(&catalog, 42).populate_if_empty().await.unwrap();
    assert_eq!(
        outcome,
        SeedOutcome::Seeded {
            stores: 40,
            campaigns: 4,
            alerts: 7
        }
    );

    let stores = StoreRepository::find_all(catalog.as_ref()).await.unwrap();
    assert_eq!(stores.len(), 40);
    assert_eq!(stores[0].sap_code, "SAP-1000");
    assert_eq!(stores[0].name, "Local 1");
    assert_eq!(stores[0].comuna, "Las Condes");
    assert_eq!(stores[0].address, "Av. Principal 100, Las Condes");

    let now = Utc::now();
    for store in &stores {
        assert!(store.has_consistent_counts(), "{}", store.name);
        assert!((3..=8).contains(&store.device_counts.of(DeviceType::AssistedScale)));
        assert!((2..=6).contains(&store.device_counts.of(DeviceType::SelfService)));
        assert!((1..=4).contains(&store.device_counts.of(DeviceType::AiVision)));
        assert!(SANTIAGO_LATITUDE.contains(&store.latitude));
        assert!(SANTIAGO_LONGITUDE.contains(&store.longitude));
        assert!((10..=80).contains(&store.latency));
        assert_eq!(store.status, StoreStatus::from_devices(&store.devices));

        for device in &store.devices {
            assert!((60..=100).contains(&device.printhead_life));
            assert!((0.5..=2.5).contains(&device.avg_consumption));
            let calibration_age = (now - device.last_calibration).num_days();
            assert!((1..=90).contains(&calibration_age));
            let install_age = (now - device.installation_date).num_days();
            assert!((180..=1095).contains(&install_age));
        }
    }

    let campaigns = CampaignRepository::find_all(catalog.as_ref()).await.unwrap();
    let names: Vec<&str> = campaigns.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "Navidad 2024",
            "Verano Saludable 2025",
            "Otoño Promociones",
            "Modo Fiesta 18 de Septiembre"
        ]
    );
    let active = &campaigns[1];
    assert_eq!(active.status, CampaignStatus::Active);
    assert_eq!(active.deployed_count, 18);
    // Listing is ordered by SAP code, which follows seed order
    let first_ids: Vec<String> = stores.iter().take(18).map(|s| s.id.clone()).collect();
    assert_eq!(active.stores_applied, first_ids);
    assert_eq!(campaigns[0].status, CampaignStatus::Expired);

    let alerts = catalog.find_unresolved().await.unwrap();
    assert_eq!(alerts.len(), 7);
    let alerted: HashSet<&str> = alerts.iter().map(|a| a.store_id.as_str()).collect();
    for (i, store) in stores.iter().enumerate().take(10) {
        assert_eq!(alerted.contains(store.id.as_str()), i % 3 != 2, "store {i}");
    }
    for alert in &alerts {
        match alert.alert_type {
            AlertType::Calibration => {
                assert_eq!(alert.priority, Priority::Medium);
                assert_eq!(alert.message, "Calibración trimestral pendiente");
            }
            AlertType::Maintenance => {
                assert_eq!(alert.priority, Priority::High);
                assert_eq!(alert.message, "Mantenimiento preventivo requerido");
            }
            AlertType::Firmware => panic!("no firmware alerts are seeded"),
        }
        assert!(!alert.resolved);
    }
}

#[tokio::test]
async fn test_seeding_is_idempotent() {
    let catalog = Arc::new(InMemoryCatalog::new());
    seeder(&catalog, 1).populate_if_empty().await.unwrap();
    let first: Vec<String> = StoreRepository::find_all(catalog.as_ref())
        .await
        .unwrap()
        .into_iter()
        .map(|s| s.id)
        .collect();

    let outcome = seeder(&catalog, 2).populate_if_empty().await.unwrap();
    assert_eq!(outcome, SeedOutcome::Skipped);

    let second: Vec<String> = StoreRepository::find_all(catalog.as_ref())
        .await
        .unwrap()
        .into_iter()
        .map(|s| s.id)
        .collect();
    assert_eq!(first, second);
    assert_eq!(CampaignRepository::find_all(catalog.as_ref()).await.unwrap().len(), 4);
}

#[tokio::test]
async fn test_naming_migration_renames_legacy_stores() {
    let catalog = Arc::new(InMemoryCatalog::new());
    StoreRepository::insert_many(
        catalog.as_ref(),
        &[
            common::store("Sucursal 1", vec![]),
            common::store("Local 2", vec![]),
        ],
    )
    .await
    .unwrap();

    let mut seeder = MockCatalogSeeder::new();
    seeder
        .expect_populate_if_empty()
        .times(1)
        .returning(|| Ok(SeedOutcome::Skipped));

    let migration = NamingMigration::new(catalog.clone(), Arc::new(seeder), Arc::new(AllowAllPolicy));
    let report = migration.run(&Caller::anonymous()).await.unwrap();

    assert_eq!(report.renamed, 1);
    assert_eq!(report.message(), "Updated 1 stores with correct naming");
    let names: HashSet<String> = StoreRepository::find_all(catalog.as_ref())
        .await
        .unwrap()
        .into_iter()
        .map(|s| s.name)
        .collect();
    assert_eq!(names, HashSet::from(["Local 1".to_string(), "Local 2".to_string()]));
}

#[tokio::test]
async fn test_naming_migration_seeds_empty_catalog() {
    let catalog = Arc::new(InMemoryCatalog::new());
    let migration = NamingMigration::new(
        catalog.clone(),
        Arc::new(seeder(&catalog, 9)),
        Arc::new(AllowAllPolicy),
    );

    let report = migration.run(&Caller::anonymous()).await.unwrap();
    assert_eq!(report.renamed, 0);
    assert!(matches!(report.seed, SeedOutcome::Seeded { stores: 40, .. }));
}

#[tokio::test]
async fn test_naming_migration_requires_authorization() {
    let catalog = Arc::new(InMemoryCatalog::new());
    let mut seeder = MockCatalogSeeder::new();
    seeder.expect_populate_if_empty().never();

    let migration = NamingMigration::new(catalog, Arc::new(seeder), Arc::new(ReadOnlyPolicy));
    assert!(matches!(
        migration.run(&Caller::anonymous()).await,
        Err(DomainError::Unauthorized(_))
    ));
}
