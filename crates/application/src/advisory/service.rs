use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tracing::{debug, warn};

use domain::DomainError;
use domain::advisory::{
    Advisory, FleetSnapshot, SYSTEM_PROMPT, TextGenerator, fallback_advisories, parse_advisories,
};
use domain::store::StoreRepository;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdvisorySettings {
    /// Upper bound for a single generation attempt
    pub timeout: Duration,
    /// Attempts after the first one fails
    pub retries: u32,
}

impl Default for AdvisorySettings {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            retries: 0,
        }
    }
}

/// Produces five operational suggestions for the current fleet.
///
/// Never fails: any upstream, timeout, parse or storage problem yields the
/// fixed fallback list.
pub struct AdvisoryService {
    stores: Arc<dyn StoreRepository>,
    generator: Arc<dyn TextGenerator>,
    settings: AdvisorySettings,
}

impl AdvisoryService {
    pub fn new(
        stores: Arc<dyn StoreRepository>,
        generator: Arc<dyn TextGenerator>,
        settings: AdvisorySettings,
    ) -> Self {
        Self {
            stores,
            generator,
            settings,
        }
    }

    pub async fn advisories(&self) -> Vec<Advisory> {
        match self.try_generate().await {
            Ok(advisories) => advisories,
            Err(e) => {
                warn!(error = %e, "Advisory generation failed, serving fallback list");
                fallback_advisories(Utc::now())
            }
        }
    }

    async fn try_generate(&self) -> Result<Vec<Advisory>, DomainError> {
        let stores = self.stores.find_all().await?;
        let prompt = FleetSnapshot::from_stores(&stores).prompt();

        let attempts = self.settings.retries.saturating_add(1);
        let mut last_error = DomainError::Upstream("no generation attempted".to_string());

        for attempt in 1..=attempts {
            match self.attempt(&prompt).await {
                Ok(advisories) => return Ok(advisories),
                Err(e) => {
                    debug!(attempt, attempts, error = %e, "Advisory attempt failed");
                    last_error = e;
                }
            }
        }

        Err(last_error)
    }

    async fn attempt(&self, prompt: &str) -> Result<Vec<Advisory>, DomainError> {
        let reply = tokio::time::timeout(
            self.settings.timeout,
            self.generator.generate(SYSTEM_PROMPT, prompt),
        )
        .await
        .map_err(|_| {
            DomainError::Upstream(format!(
                "generation timed out after {:?}",
                self.settings.timeout
            ))
        })??;

        parse_advisories(&reply, Utc::now())
    }
}
