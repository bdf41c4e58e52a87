mod service;

pub use service::{AdvisoryService, AdvisorySettings};
