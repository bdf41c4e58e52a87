use super::Campaign;
use crate::DomainError;
use async_trait::async_trait;

#[cfg_attr(any(test, feature = "mocks"), mockall::automock)]
#[async_trait]
pub trait CampaignRepository: Send + Sync {
    /// All campaigns ordered by start date
    async fn find_all(&self) -> Result<Vec<Campaign>, DomainError>;

    async fn find_by_id(&self, id: &str) -> Result<Option<Campaign>, DomainError>;

    /// Insert or replace one campaign
    async fn save(&self, campaign: &Campaign) -> Result<(), DomainError>;

    async fn insert_many(&self, campaigns: &[Campaign]) -> Result<(), DomainError>;
}
