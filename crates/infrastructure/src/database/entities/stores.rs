use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "stores")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    pub comuna: String,
    pub sap_code: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
    pub status: String,
    pub balances_assisted: i64,
    pub balances_self_service: i64,
    pub balances_ai_vision: i64,
    pub last_update: DateTimeWithTimeZone,
    pub network_status: String,
    pub latency: i64,
    pub sales_level: String,
    pub devices: Json, // Embedded device documents
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
