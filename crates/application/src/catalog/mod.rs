//! Read/write use cases over the persisted collections.

mod alert_service;
mod campaign_service;
mod store_service;
mod ticket_service;

pub use alert_service::AlertService;
pub use campaign_service::CampaignService;
pub use store_service::StoreService;
pub use ticket_service::TicketService;
