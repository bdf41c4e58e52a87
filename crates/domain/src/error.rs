use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("{entity} not found")]
    NotFound { entity: &'static str, id: String },

    #[error("Invalid device: {0}")]
    InvalidDevice(String),

    #[error("Invalid store: {0}")]
    InvalidStore(String),

    #[error("Invalid campaign: {0}")]
    InvalidCampaign(String),

    #[error("Invalid payload: {0}")]
    InvalidPayload(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Upstream error: {0}")]
    Upstream(String),
}

impl DomainError {
    pub fn not_found(entity: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity,
            id: id.into(),
        }
    }

    /// Errors caused by the caller's input rather than by the system
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::NotFound { .. }
                | Self::InvalidDevice(_)
                | Self::InvalidStore(_)
                | Self::InvalidCampaign(_)
                | Self::InvalidPayload(_)
                | Self::Unauthorized(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, DomainError>;
