use std::sync::Arc;

use chrono::Utc;
use serde_json::Value;
use tracing::info;

use domain::Result;
use domain::policy::{Caller, WriteAction, WritePolicy};
use domain::ticket::{Ticket, TicketRepository};

pub struct TicketService {
    tickets: Arc<dyn TicketRepository>,
    policy: Arc<dyn WritePolicy>,
}

impl TicketService {
    pub fn new(tickets: Arc<dyn TicketRepository>, policy: Arc<dyn WritePolicy>) -> Self {
        Self { tickets, policy }
    }

    /// Validates a raw ticket body and stores it as `Pending`.
    ///
    /// Nothing is written when the body does not match the ticket shape.
    pub async fn open(&self, caller: &Caller, payload: Value) -> Result<Ticket> {
        self.policy.authorize(caller, WriteAction::CreateTicket)?;

        let ticket = Ticket::from_payload(payload, Utc::now())?;
        self.tickets.insert(&ticket).await?;

        info!(
            ticket_id = %ticket.id,
            store = %ticket.store_name,
            reported_to = %ticket.reported_to.as_str(),
            "Ticket opened"
        );
        Ok(ticket)
    }

    pub async fn list(&self) -> Result<Vec<Ticket>> {
        self.tickets.find_all().await
    }
}
