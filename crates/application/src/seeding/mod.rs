//! Catalog population strategies and data migrations.

mod comunas;
mod demo_seeder;
mod naming;

pub use comunas::{Comuna, SANTIAGO_COMUNAS};
pub use demo_seeder::{DemoCatalog, DemoCatalogSeeder};
pub use naming::{NamingMigration, NamingReport};
