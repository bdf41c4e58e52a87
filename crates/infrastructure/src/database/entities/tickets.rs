use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "tickets")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub device_id: String,
    pub store_name: String,
    pub store_comuna: String,
    pub store_address: String,
    pub sap_code: String,
    pub issue: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub reported_to: String,
    pub status: String,
    pub created_at: DateTimeWithTimeZone,
    pub assigned_to: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
