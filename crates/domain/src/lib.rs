//! Domain layer - Pure business logic with no external dependencies
//!
//! This crate contains:
//! - Entities (Device, Store, Campaign, Alert, Ticket, Advisory)
//! - Decision rules (store status derivation, fleet metrics roll-up)
//! - Repository, seeder, text-generation and write-policy interfaces (traits)
//!
//! Principles:
//! - No dependencies on infrastructure
//! - Business rules enforced at domain level
//! - Testable in isolation

pub mod advisory;
pub mod alert;
pub mod campaign;
pub mod device;
pub mod error;
pub mod metrics;
pub mod patch;
pub mod policy;
pub mod priority;
pub mod seeder;
pub mod store;
pub mod ticket;
pub mod weight;

// Re-export commonly used types
pub use advisory::{Advisory, AdvisoryCategory, TextGenerator};
pub use alert::{Alert, AlertRepository, AlertType};
pub use campaign::{Campaign, CampaignRepository, CampaignStatus, NewCampaign};
pub use device::{Device, DeviceDraft, DeviceStatus, DeviceType, LabelStatus};
pub use error::{DomainError, Result};
pub use metrics::{FleetRollup, Metrics, SyntheticReadings};
pub use policy::{AllowAllPolicy, Caller, ReadOnlyPolicy, WriteAction, WritePolicy};
pub use priority::Priority;
pub use seeder::{CatalogSeeder, NoopSeeder, SeedOutcome};
pub use store::{DeviceCounts, NewStore, Store, StoreRepository, StoreStatus};
pub use ticket::{NewTicket, Ticket, TicketDestination, TicketRepository, TicketStatus};
pub use weight::WeightSeries;
