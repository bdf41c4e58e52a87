use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::priority::Priority;
use crate::store::Store;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertType {
    Calibration,
    Maintenance,
    Firmware,
}

impl AlertType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Calibration => "calibration",
            Self::Maintenance => "maintenance",
            Self::Firmware => "firmware",
        }
    }
}

/// Operational alert raised against a store.
///
/// `resolved` only ever moves from `false` to `true`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    pub id: String,
    pub store_id: String,
    pub store_name: String,
    #[serde(rename = "type")]
    pub alert_type: AlertType,
    pub message: String,
    pub priority: Priority,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub resolved: bool,
}

impl Alert {
    pub fn raise(
        store: &Store,
        alert_type: AlertType,
        message: impl Into<String>,
        priority: Priority,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            store_id: store.id.clone(),
            store_name: store.display_name(),
            alert_type,
            message: message.into(),
            priority,
            created_at,
            resolved: false,
        }
    }

    pub fn resolve(&mut self) {
        self.resolved = true;
    }
}
