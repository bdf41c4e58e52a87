//! Process-local catalog used by tests and by `storage.url = "memory"`.

use async_trait::async_trait;
use dashmap::DashMap;
use domain::DomainError;
use domain::alert::{Alert, AlertRepository};
use domain::campaign::{Campaign, CampaignRepository};
use domain::store::{Store, StoreRepository};
use domain::ticket::{Ticket, TicketRepository};

#[derive(Default)]
pub struct InMemoryCatalog {
    stores: DashMap<String, Store>,
    campaigns: DashMap<String, Campaign>,
    alerts: DashMap<String, Alert>,
    tickets: DashMap<String, Ticket>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }
}

fn values<T: Clone>(map: &DashMap<String, T>) -> Vec<T> {
    map.iter().map(|entry| entry.value().clone()).collect()
}

#[async_trait]
impl StoreRepository for InMemoryCatalog {
    async fn count(&self) -> Result<u64, DomainError> {
        Ok(self.stores.len() as u64)
    }

    async fn find_all(&self) -> Result<Vec<Store>, DomainError> {
        let mut stores = values(&self.stores);
        stores.sort_by(|a, b| a.sap_code.cmp(&b.sap_code));
        Ok(stores)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Store>, DomainError> {
        Ok(self.stores.get(id).map(|s| s.value().clone()))
    }

    async fn save(&self, store: &Store) -> Result<(), DomainError> {
        self.stores.insert(store.id.clone(), store.clone());
        Ok(())
    }

    async fn insert_many(&self, stores: &[Store]) -> Result<(), DomainError> {
        for store in stores {
            self.stores.insert(store.id.clone(), store.clone());
        }
        Ok(())
    }
}

#[async_trait]
impl CampaignRepository for InMemoryCatalog {
    async fn find_all(&self) -> Result<Vec<Campaign>, DomainError> {
        let mut campaigns = values(&self.campaigns);
        campaigns.sort_by(|a, b| a.start_date.cmp(&b.start_date).then(a.id.cmp(&b.id)));
        Ok(campaigns)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Campaign>, DomainError> {
        Ok(self.campaigns.get(id).map(|c| c.value().clone()))
    }

    async fn save(&self, campaign: &Campaign) -> Result<(), DomainError> {
        self.campaigns.insert(campaign.id.clone(), campaign.clone());
        Ok(())
    }

    async fn insert_many(&self, campaigns: &[Campaign]) -> Result<(), DomainError> {
        for campaign in campaigns {
            self.campaigns.insert(campaign.id.clone(), campaign.clone());
        }
        Ok(())
    }
}

#[async_trait]
impl AlertRepository for InMemoryCatalog {
    async fn find_unresolved(&self) -> Result<Vec<Alert>, DomainError> {
        let mut alerts: Vec<Alert> = self
            .alerts
            .iter()
            .filter(|entry| !entry.resolved)
            .map(|entry| entry.value().clone())
            .collect();
        alerts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(alerts)
    }

    async fn insert_many(&self, alerts: &[Alert]) -> Result<(), DomainError> {
        for alert in alerts {
            self.alerts.insert(alert.id.clone(), alert.clone());
        }
        Ok(())
    }

    async fn mark_resolved(&self, id: &str) -> Result<bool, DomainError> {
        match self.alerts.get_mut(id) {
            Some(mut alert) => {
                alert.resolve();
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[async_trait]
impl TicketRepository for InMemoryCatalog {
    async fn insert(&self, ticket: &Ticket) -> Result<(), DomainError> {
        if self.tickets.contains_key(&ticket.id) {
            return Err(DomainError::Storage(format!(
                "Ticket {} already exists",
                ticket.id
            )));
        }
        self.tickets.insert(ticket.id.clone(), ticket.clone());
        Ok(())
    }

    async fn find_all(&self) -> Result<Vec<Ticket>, DomainError> {
        let mut tickets = values(&self.tickets);
        tickets.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(tickets)
    }
}
