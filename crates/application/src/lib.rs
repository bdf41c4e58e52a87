//! Application layer - Use cases and business workflows

pub mod advisory;
pub mod catalog;
pub mod fleet;
pub mod seeding;

pub use advisory::{AdvisoryService, AdvisorySettings};
pub use catalog::{AlertService, CampaignService, StoreService, TicketService};
pub use fleet::{FleetMetricsService, RandomReadings, WeightTrendGenerator};
pub use seeding::{DemoCatalogSeeder, NamingMigration, NamingReport};
