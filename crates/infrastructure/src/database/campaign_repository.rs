use crate::database::codec::{db_error, from_count, from_json, parse_enum, to_count, to_json};
use crate::database::entities::campaigns;
use async_trait::async_trait;
use domain::DomainError;
use domain::campaign::{Campaign, CampaignRepository};
use sea_orm::sea_query::OnConflict;
use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder, Set};

pub struct SeaOrmCampaignRepository {
    db: DatabaseConnection,
}

impl SeaOrmCampaignRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn model_to_campaign(model: campaigns::Model) -> Result<Campaign, DomainError> {
        Ok(Campaign {
            status: parse_enum("status", &model.status)?,
            stores_applied: from_json("stores_applied", model.stores_applied)?,
            deployed_count: from_count("deployed_count", model.deployed_count)?,
            total_balances: from_count("total_balances", model.total_balances)?,
            id: model.id,
            name: model.name,
            start_date: model.start_date,
            end_date: model.end_date,
            wallpaper_url: model.wallpaper_url,
        })
    }

    fn campaign_to_active_model(campaign: &Campaign) -> Result<campaigns::ActiveModel, DomainError> {
        Ok(campaigns::ActiveModel {
            id: Set(campaign.id.clone()),
            name: Set(campaign.name.clone()),
            start_date: Set(campaign.start_date),
            end_date: Set(campaign.end_date),
            status: Set(campaign.status.as_str().to_string()),
            wallpaper_url: Set(campaign.wallpaper_url.clone()),
            deployed_count: Set(to_count(campaign.deployed_count)),
            total_balances: Set(to_count(campaign.total_balances)),
            stores_applied: Set(to_json("stores_applied", &campaign.stores_applied)?),
        })
    }
}

#[async_trait]
impl CampaignRepository for SeaOrmCampaignRepository {
    async fn find_all(&self) -> Result<Vec<Campaign>, DomainError> {
        let models = campaigns::Entity::find()
            .order_by_asc(campaigns::Column::StartDate)
            .all(&self.db)
            .await
            .map_err(db_error)?;

        models.into_iter().map(Self::model_to_campaign).collect()
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Campaign>, DomainError> {
        campaigns::Entity::find_by_id(id.to_string())
            .one(&self.db)
            .await
            .map_err(db_error)?
            .map(Self::model_to_campaign)
            .transpose()
    }

    async fn save(&self, campaign: &Campaign) -> Result<(), DomainError> {
        let active_model = Self::campaign_to_active_model(campaign)?;

        campaigns::Entity::insert(active_model)
            .on_conflict(
                OnConflict::column(campaigns::Column::Id)
                    .update_columns([
                        campaigns::Column::Name,
                        campaigns::Column::StartDate,
                        campaigns::Column::EndDate,
                        campaigns::Column::Status,
                        campaigns::Column::WallpaperUrl,
                        campaigns::Column::DeployedCount,
                        campaigns::Column::TotalBalances,
                        campaigns::Column::StoresApplied,
                    ])
                    .to_owned(),
            )
            .exec(&self.db)
            .await
            .map_err(db_error)?;

        Ok(())
    }

    async fn insert_many(&self, campaigns: &[Campaign]) -> Result<(), DomainError> {
        if campaigns.is_empty() {
            return Ok(());
        }

        let models = campaigns
            .iter()
            .map(Self::campaign_to_active_model)
            .collect::<Result<Vec<_>, _>>()?;

        campaigns::Entity::insert_many(models)
            .exec(&self.db)
            .await
            .map_err(db_error)?;

        Ok(())
    }
}
