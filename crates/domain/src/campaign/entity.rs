use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{DomainError, Result};
use crate::patch::merge_fields;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CampaignStatus {
    Active,
    Scheduled,
    Expired,
}

impl CampaignStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Scheduled => "scheduled",
            Self::Expired => "expired",
        }
    }
}

/// Wallpaper campaign pushed to the scale screens.
///
/// `deployed_count` and `stores_applied` are tracked independently; nothing
/// forces them to agree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Campaign {
    pub id: String,
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: CampaignStatus,
    pub wallpaper_url: String,
    #[serde(default)]
    pub deployed_count: u32,
    #[serde(default)]
    pub total_balances: u32,
    #[serde(default)]
    pub stores_applied: Vec<String>,
}

/// Campaign attributes supplied by a caller; the identifier is always generated.
#[derive(Debug, Clone, Deserialize)]
pub struct NewCampaign {
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: CampaignStatus,
    pub wallpaper_url: String,
    #[serde(default)]
    pub deployed_count: u32,
    #[serde(default)]
    pub total_balances: u32,
    #[serde(default)]
    pub stores_applied: Vec<String>,
}

impl Campaign {
    pub fn create(draft: NewCampaign) -> Result<Self> {
        let campaign = Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: draft.name,
            start_date: draft.start_date,
            end_date: draft.end_date,
            status: draft.status,
            wallpaper_url: draft.wallpaper_url,
            deployed_count: draft.deployed_count,
            total_balances: draft.total_balances,
            stores_applied: draft.stores_applied,
        };
        campaign.validate()?;
        Ok(campaign)
    }

    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(DomainError::InvalidCampaign(
                "name cannot be empty".to_string(),
            ));
        }
        if self.end_date < self.start_date {
            return Err(DomainError::InvalidCampaign(format!(
                "end_date {} is before start_date {}",
                self.end_date, self.start_date
            )));
        }
        Ok(())
    }

    /// Merges caller-supplied fields; the identifier cannot change.
    pub fn apply_update(&self, fields: Map<String, Value>) -> Result<Self> {
        let updated = merge_fields(self, fields, &["id"])?;
        updated.validate()?;
        Ok(updated)
    }
}
