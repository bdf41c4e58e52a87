use super::Store;
use crate::DomainError;
use async_trait::async_trait;

/// Persistence contract for the store collection.
///
/// Every write is a single-document upsert; there are no multi-document transactions.
#[cfg_attr(any(test, feature = "mocks"), mockall::automock)]
#[async_trait]
pub trait StoreRepository: Send + Sync {
    /// Number of stores in the collection
    async fn count(&self) -> Result<u64, DomainError>;

    /// All stores with their devices, ordered by SAP code
    async fn find_all(&self) -> Result<Vec<Store>, DomainError>;

    async fn find_by_id(&self, id: &str) -> Result<Option<Store>, DomainError>;

    /// Insert or replace one store document
    async fn save(&self, store: &Store) -> Result<(), DomainError>;

    /// Bulk insert used by seeding
    async fn insert_many(&self, stores: &[Store]) -> Result<(), DomainError>;
}
