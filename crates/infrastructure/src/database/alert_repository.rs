use crate::database::codec::{db_error, parse_enum, to_offset};
use crate::database::entities::alerts;
use async_trait::async_trait;
use chrono::Utc;
use domain::DomainError;
use domain::alert::{Alert, AlertRepository};
use sea_orm::sea_query::Expr;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set};

pub struct SeaOrmAlertRepository {
    db: DatabaseConnection,
}

impl SeaOrmAlertRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn model_to_alert(model: alerts::Model) -> Result<Alert, DomainError> {
        Ok(Alert {
            alert_type: parse_enum("alert_type", &model.alert_type)?,
            priority: parse_enum("priority", &model.priority)?,
            created_at: model.created_at.with_timezone(&Utc),
            id: model.id,
            store_id: model.store_id,
            store_name: model.store_name,
            message: model.message,
            resolved: model.resolved,
        })
    }

    fn alert_to_active_model(alert: &Alert) -> alerts::ActiveModel {
        alerts::ActiveModel {
            id: Set(alert.id.clone()),
            store_id: Set(alert.store_id.clone()),
            store_name: Set(alert.store_name.clone()),
            alert_type: Set(alert.alert_type.as_str().to_string()),
            message: Set(alert.message.clone()),
            priority: Set(alert.priority.as_str().to_string()),
            created_at: Set(to_offset(alert.created_at)),
            resolved: Set(alert.resolved),
        }
    }
}

#[async_trait]
impl AlertRepository for SeaOrmAlertRepository {
    async fn find_unresolved(&self) -> Result<Vec<Alert>, DomainError> {
        let models = alerts::Entity::find()
            .filter(alerts::Column::Resolved.eq(false))
            .order_by_desc(alerts::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(db_error)?;

        models.into_iter().map(Self::model_to_alert).collect()
    }

    async fn insert_many(&self, alerts: &[Alert]) -> Result<(), DomainError> {
        if alerts.is_empty() {
            return Ok(());
        }

        alerts::Entity::insert_many(alerts.iter().map(Self::alert_to_active_model))
            .exec(&self.db)
            .await
            .map_err(db_error)?;

        Ok(())
    }

    async fn mark_resolved(&self, id: &str) -> Result<bool, DomainError> {
        let result = alerts::Entity::update_many()
            .col_expr(alerts::Column::Resolved, Expr::value(true))
            .filter(alerts::Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(db_error)?;

        Ok(result.rows_affected > 0)
    }
}
