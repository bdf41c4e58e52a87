//! Authorization seam consulted before every mutating operation.

use crate::{DomainError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WriteAction {
    CreateStore,
    UpdateStore,
    RecomputeStoreStatus,
    CreateCampaign,
    UpdateCampaign,
    ResolveAlert,
    CreateTicket,
    MigrateStoreNames,
}

impl WriteAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CreateStore => "create_store",
            Self::UpdateStore => "update_store",
            Self::RecomputeStoreStatus => "recompute_store_status",
            Self::CreateCampaign => "create_campaign",
            Self::UpdateCampaign => "update_campaign",
            Self::ResolveAlert => "resolve_alert",
            Self::CreateTicket => "create_ticket",
            Self::MigrateStoreNames => "migrate_store_names",
        }
    }
}

/// Credentials presented with a request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Caller {
    pub api_key: Option<String>,
}

impl Caller {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn with_api_key(key: impl Into<String>) -> Self {
        Self {
            api_key: Some(key.into()),
        }
    }
}

pub trait WritePolicy: Send + Sync {
    fn authorize(&self, caller: &Caller, action: WriteAction) -> Result<()>;
}

/// Permits every write; the behavior when no credential is configured
#[derive(Debug, Clone, Copy, Default)]
pub struct AllowAllPolicy;

impl WritePolicy for AllowAllPolicy {
    fn authorize(&self, _caller: &Caller, _action: WriteAction) -> Result<()> {
        Ok(())
    }
}

/// Rejects every write
#[derive(Debug, Clone, Copy, Default)]
pub struct ReadOnlyPolicy;

impl WritePolicy for ReadOnlyPolicy {
    fn authorize(&self, _caller: &Caller, action: WriteAction) -> Result<()> {
        Err(DomainError::Unauthorized(format!(
            "{} is disabled",
            action.as_str()
        )))
    }
}
