pub mod alerts;
pub mod campaigns;
pub mod stores;
pub mod tickets;
