use super::Alert;
use crate::DomainError;
use async_trait::async_trait;

#[cfg_attr(any(test, feature = "mocks"), mockall::automock)]
#[async_trait]
pub trait AlertRepository: Send + Sync {
    /// Alerts still open, newest first
    async fn find_unresolved(&self) -> Result<Vec<Alert>, DomainError>;

    async fn insert_many(&self, alerts: &[Alert]) -> Result<(), DomainError>;

    /// Sets the resolved flag. Returns `false` when no alert has this id.
    async fn mark_resolved(&self, id: &str) -> Result<bool, DomainError>;
}
