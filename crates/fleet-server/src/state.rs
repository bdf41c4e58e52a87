use std::sync::Arc;

use application::{
    AdvisoryService, AdvisorySettings, AlertService, CampaignService, DemoCatalogSeeder,
    FleetMetricsService, NamingMigration, RandomReadings, StoreService, TicketService,
    WeightTrendGenerator,
};
use domain::advisory::TextGenerator;
use domain::policy::WritePolicy;
use domain::seeder::{CatalogSeeder, NoopSeeder};
use infrastructure::{Repositories, SeedMode};

/// Services shared by every request handler
pub struct AppState {
    pub stores: StoreService,
    pub campaigns: CampaignService,
    pub alerts: AlertService,
    pub tickets: TicketService,
    pub metrics: FleetMetricsService,
    pub weights: WeightTrendGenerator,
    pub advisories: AdvisoryService,
    pub naming: NamingMigration,
    pub seeder: Arc<dyn CatalogSeeder>,
}

impl AppState {
    pub fn new(
        repos: &Repositories,
        policy: Arc<dyn WritePolicy>,
        seeder: Arc<dyn CatalogSeeder>,
        generator: Arc<dyn TextGenerator>,
        advisory_settings: AdvisorySettings,
    ) -> Self {
        Self {
            stores: StoreService::new(repos.stores.clone(), policy.clone()),
            campaigns: CampaignService::new(repos.campaigns.clone(), policy.clone()),
            alerts: AlertService::new(repos.alerts.clone(), policy.clone()),
            tickets: TicketService::new(repos.tickets.clone(), policy.clone()),
            metrics: FleetMetricsService::new(
                repos.stores.clone(),
                Arc::new(RandomReadings::default()),
            ),
            weights: WeightTrendGenerator,
            advisories: AdvisoryService::new(repos.stores.clone(), generator, advisory_settings),
            naming: NamingMigration::new(repos.stores.clone(), seeder.clone(), policy),
            seeder,
        }
    }
}

pub fn seeder_for(mode: SeedMode, repos: &Repositories) -> Arc<dyn CatalogSeeder> {
    match mode {
        SeedMode::Demo => Arc::new(DemoCatalogSeeder::new(
            repos.stores.clone(),
            repos.campaigns.clone(),
            repos.alerts.clone(),
        )),
        SeedMode::None => Arc::new(NoopSeeder),
    }
}
