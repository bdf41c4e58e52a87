mod entity;
mod repository;

pub use entity::{NewTicket, Ticket, TicketDestination, TicketStatus};
pub use repository::TicketRepository;
#[cfg(any(test, feature = "mocks"))]
pub use repository::MockTicketRepository;
