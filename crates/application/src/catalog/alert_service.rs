use std::sync::Arc;

use tracing::info;

use domain::alert::{Alert, AlertRepository};
use domain::policy::{Caller, WriteAction, WritePolicy};
use domain::{DomainError, Result};

pub struct AlertService {
    alerts: Arc<dyn AlertRepository>,
    policy: Arc<dyn WritePolicy>,
}

impl AlertService {
    pub fn new(alerts: Arc<dyn AlertRepository>, policy: Arc<dyn WritePolicy>) -> Self {
        Self { alerts, policy }
    }

    /// Open alerts only, newest first
    pub async fn list_unresolved(&self) -> Result<Vec<Alert>> {
        self.alerts.find_unresolved().await
    }

    pub async fn resolve(&self, caller: &Caller, id: &str) -> Result<()> {
        self.policy.authorize(caller, WriteAction::ResolveAlert)?;

        if !self.alerts.mark_resolved(id).await? {
            return Err(DomainError::not_found("Alert", id));
        }

        info!(alert_id = %id, "Alert resolved");
        Ok(())
    }
}
