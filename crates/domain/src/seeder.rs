use async_trait::async_trait;

use crate::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    /// The store collection already had data
    Skipped,
    Seeded {
        stores: usize,
        campaigns: usize,
        alerts: usize,
    },
}

/// Initial population strategy, run at startup.
///
/// Implementations must be a no-op when the store collection is not empty.
#[cfg_attr(any(test, feature = "mocks"), mockall::automock)]
#[async_trait]
pub trait CatalogSeeder: Send + Sync {
    async fn populate_if_empty(&self) -> Result<SeedOutcome, DomainError>;
}

/// Seeder for deployments that import their catalog elsewhere
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSeeder;

#[async_trait]
impl CatalogSeeder for NoopSeeder {
    async fn populate_if_empty(&self) -> Result<SeedOutcome, DomainError> {
        Ok(SeedOutcome::Skipped)
    }
}
