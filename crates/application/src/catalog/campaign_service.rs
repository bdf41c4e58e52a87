use std::sync::Arc;

use serde_json::{Map, Value};
use tracing::info;

use domain::campaign::{Campaign, CampaignRepository, NewCampaign};
use domain::policy::{Caller, WriteAction, WritePolicy};
use domain::{DomainError, Result};

pub struct CampaignService {
    campaigns: Arc<dyn CampaignRepository>,
    policy: Arc<dyn WritePolicy>,
}

impl CampaignService {
    pub fn new(campaigns: Arc<dyn CampaignRepository>, policy: Arc<dyn WritePolicy>) -> Self {
        Self { campaigns, policy }
    }

    pub async fn list(&self) -> Result<Vec<Campaign>> {
        self.campaigns.find_all().await
    }

    pub async fn create(&self, caller: &Caller, draft: NewCampaign) -> Result<Campaign> {
        self.policy.authorize(caller, WriteAction::CreateCampaign)?;

        let campaign = Campaign::create(draft)?;
        self.campaigns.save(&campaign).await?;

        info!(campaign_id = %campaign.id, name = %campaign.name, "Campaign created");
        Ok(campaign)
    }

    pub async fn update(
        &self,
        caller: &Caller,
        id: &str,
        fields: Map<String, Value>,
    ) -> Result<Campaign> {
        self.policy.authorize(caller, WriteAction::UpdateCampaign)?;

        let current = self
            .campaigns
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Campaign", id))?;

        let updated = current.apply_update(fields)?;
        self.campaigns.save(&updated).await?;
        Ok(updated)
    }
}
