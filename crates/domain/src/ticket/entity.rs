use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{DomainError, Result};

/// Who the ticket is escalated to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TicketDestination {
    Alcom,
    #[serde(alias = "Servicio Técnico")]
    TechnicalService,
}

impl TicketDestination {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Alcom => "Alcom",
            Self::TechnicalService => "TechnicalService",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TicketStatus {
    #[default]
    #[serde(alias = "Pendiente")]
    Pending,
    #[serde(alias = "En Proceso")]
    InProgress,
    #[serde(alias = "Resuelto")]
    Resolved,
}

impl TicketStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::InProgress => "InProgress",
            Self::Resolved => "Resolved",
        }
    }
}

/// Support ticket opened against a scale
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ticket {
    pub id: String,
    pub device_id: String,
    pub store_name: String,
    pub store_comuna: String,
    pub store_address: String,
    pub sap_code: String,
    pub issue: String,
    pub description: String,
    pub reported_to: TicketDestination,
    pub status: TicketStatus,
    pub created_at: DateTime<Utc>,
    pub assigned_to: Option<String>,
}

/// Ticket payload accepted from callers
#[derive(Debug, Clone, Deserialize)]
pub struct NewTicket {
    #[serde(default)]
    pub device_id: String,
    pub store_name: String,
    #[serde(default)]
    pub store_comuna: String,
    #[serde(default)]
    pub store_address: String,
    #[serde(default)]
    pub sap_code: String,
    pub issue: String,
    #[serde(default)]
    pub description: String,
    pub reported_to: TicketDestination,
    #[serde(default)]
    pub assigned_to: Option<String>,
}

impl Ticket {
    /// Opens a ticket in `Pending` state with a fresh id and timestamp.
    pub fn open(draft: NewTicket, now: DateTime<Utc>) -> Result<Self> {
        if draft.issue.trim().is_empty() {
            return Err(DomainError::InvalidPayload(
                "issue cannot be empty".to_string(),
            ));
        }
        if draft.store_name.trim().is_empty() {
            return Err(DomainError::InvalidPayload(
                "store_name cannot be empty".to_string(),
            ));
        }

        Ok(Self {
            id: uuid::Uuid::new_v4().to_string(),
            device_id: draft.device_id,
            store_name: draft.store_name,
            store_comuna: draft.store_comuna,
            store_address: draft.store_address,
            sap_code: draft.sap_code,
            issue: draft.issue,
            description: draft.description,
            reported_to: draft.reported_to,
            status: TicketStatus::Pending,
            created_at: now,
            assigned_to: draft.assigned_to,
        })
    }

    /// Validates a raw JSON body against the ticket shape and opens it.
    pub fn from_payload(payload: Value, now: DateTime<Utc>) -> Result<Self> {
        let draft: NewTicket = serde_json::from_value(payload)
            .map_err(|e| DomainError::InvalidPayload(format!("Error creating ticket: {e}")))?;
        Self::open(draft, now)
    }
}
