use crate::database::codec::{
    db_error, from_count, from_json, parse_enum, to_count, to_json, to_offset,
};
use crate::database::entities::stores;
use async_trait::async_trait;
use chrono::Utc;
use domain::DomainError;
use domain::store::{DeviceCounts, Store, StoreRepository};
use sea_orm::sea_query::OnConflict;
use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait, QueryOrder, Set};

pub struct SeaOrmStoreRepository {
    db: DatabaseConnection,
}

impl SeaOrmStoreRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn model_to_store(model: stores::Model) -> Result<Store, DomainError> {
        Ok(Store {
            status: parse_enum("status", &model.status)?,
            network_status: parse_enum("network_status", &model.network_status)?,
            sales_level: parse_enum("sales_level", &model.sales_level)?,
            devices: from_json("devices", model.devices)?,
            device_counts: DeviceCounts {
                assisted: from_count("balances_assisted", model.balances_assisted)?,
                self_service: from_count("balances_self_service", model.balances_self_service)?,
                ai_vision: from_count("balances_ai_vision", model.balances_ai_vision)?,
            },
            last_update: model.last_update.with_timezone(&Utc),
            latency: from_count("latency", model.latency)?,
            id: model.id,
            name: model.name,
            comuna: model.comuna,
            sap_code: model.sap_code,
            address: model.address,
            latitude: model.latitude,
            longitude: model.longitude,
        })
    }

    fn store_to_active_model(store: &Store) -> Result<stores::ActiveModel, DomainError> {
        Ok(stores::ActiveModel {
            id: Set(store.id.clone()),
            name: Set(store.name.clone()),
            comuna: Set(store.comuna.clone()),
            sap_code: Set(store.sap_code.clone()),
            address: Set(store.address.clone()),
            latitude: Set(store.latitude),
            longitude: Set(store.longitude),
            status: Set(store.status.as_str().to_string()),
            balances_assisted: Set(to_count(store.device_counts.assisted)),
            balances_self_service: Set(to_count(store.device_counts.self_service)),
            balances_ai_vision: Set(to_count(store.device_counts.ai_vision)),
            last_update: Set(to_offset(store.last_update)),
            network_status: Set(store.network_status.as_str().to_string()),
            latency: Set(to_count(store.latency)),
            sales_level: Set(store.sales_level.as_str().to_string()),
            devices: Set(to_json("devices", &store.devices)?),
        })
    }
}

#[async_trait]
impl StoreRepository for SeaOrmStoreRepository {
    async fn count(&self) -> Result<u64, DomainError> {
        stores::Entity::find()
            .count(&self.db)
            .await
            .map_err(db_error)
    }

    async fn find_all(&self) -> Result<Vec<Store>, DomainError> {
        let models = stores::Entity::find()
            .order_by_asc(stores::Column::SapCode)
            .all(&self.db)
            .await
            .map_err(db_error)?;

        models.into_iter().map(Self::model_to_store).collect()
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Store>, DomainError> {
        let model = stores::Entity::find_by_id(id.to_string())
            .one(&self.db)
            .await
            .map_err(db_error)?;

        model.map(Self::model_to_store).transpose()
    }

    async fn save(&self, store: &Store) -> Result<(), DomainError> {
        let active_model = Self::store_to_active_model(store)?;

        stores::Entity::insert(active_model)
            .on_conflict(
                OnConflict::column(stores::Column::Id)
                    .update_columns([
                        stores::Column::Name,
                        stores::Column::Comuna,
                        stores::Column::SapCode,
                        stores::Column::Address,
                        stores::Column::Latitude,
                        stores::Column::Longitude,
                        stores::Column::Status,
                        stores::Column::BalancesAssisted,
                        stores::Column::BalancesSelfService,
                        stores::Column::BalancesAiVision,
                        stores::Column::LastUpdate,
                        stores::Column::NetworkStatus,
                        stores::Column::Latency,
                        stores::Column::SalesLevel,
                        stores::Column::Devices,
                    ])
                    .to_owned(),
            )
            .exec(&self.db)
            .await
            .map_err(db_error)?;

        Ok(())
    }

    async fn insert_many(&self, stores: &[Store]) -> Result<(), DomainError> {
        if stores.is_empty() {
            return Ok(());
        }

        let models = stores
            .iter()
            .map(Self::store_to_active_model)
            .collect::<Result<Vec<_>, _>>()?;

        stores::Entity::insert_many(models)
            .exec(&self.db)
            .await
            .map_err(db_error)?;

        Ok(())
    }
}
