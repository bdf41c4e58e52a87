use super::Ticket;
use crate::DomainError;
use async_trait::async_trait;

#[cfg_attr(any(test, feature = "mocks"), mockall::automock)]
#[async_trait]
pub trait TicketRepository: Send + Sync {
    async fn insert(&self, ticket: &Ticket) -> Result<(), DomainError>;

    /// All tickets, newest first
    async fn find_all(&self) -> Result<Vec<Ticket>, DomainError>;
}
