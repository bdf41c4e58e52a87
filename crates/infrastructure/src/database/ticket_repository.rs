use crate::database::codec::{db_error, parse_enum, to_offset};
use crate::database::entities::tickets;
use async_trait::async_trait;
use chrono::Utc;
use domain::DomainError;
use domain::ticket::{Ticket, TicketRepository};
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};

pub struct SeaOrmTicketRepository {
    db: DatabaseConnection,
}

impl SeaOrmTicketRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn model_to_ticket(model: tickets::Model) -> Result<Ticket, DomainError> {
        Ok(Ticket {
            reported_to: parse_enum("reported_to", &model.reported_to)?,
            status: parse_enum("status", &model.status)?,
            created_at: model.created_at.with_timezone(&Utc),
            id: model.id,
            device_id: model.device_id,
            store_name: model.store_name,
            store_comuna: model.store_comuna,
            store_address: model.store_address,
            sap_code: model.sap_code,
            issue: model.issue,
            description: model.description,
            assigned_to: model.assigned_to,
        })
    }
}

#[async_trait]
impl TicketRepository for SeaOrmTicketRepository {
    async fn insert(&self, ticket: &Ticket) -> Result<(), DomainError> {
        let active_model = tickets::ActiveModel {
            id: Set(ticket.id.clone()),
            device_id: Set(ticket.device_id.clone()),
            store_name: Set(ticket.store_name.clone()),
            store_comuna: Set(ticket.store_comuna.clone()),
            store_address: Set(ticket.store_address.clone()),
            sap_code: Set(ticket.sap_code.clone()),
            issue: Set(ticket.issue.clone()),
            description: Set(ticket.description.clone()),
            reported_to: Set(ticket.reported_to.as_str().to_string()),
            status: Set(ticket.status.as_str().to_string()),
            created_at: Set(to_offset(ticket.created_at)),
            assigned_to: Set(ticket.assigned_to.clone()),
        };

        active_model.insert(&self.db).await.map_err(db_error)?;
        Ok(())
    }

    async fn find_all(&self) -> Result<Vec<Ticket>, DomainError> {
        let models = tickets::Entity::find()
            .order_by_desc(tickets::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(db_error)?;

        models.into_iter().map(Self::model_to_ticket).collect()
    }
}
