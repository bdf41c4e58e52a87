pub mod api;
pub mod error;
pub mod state;

use std::sync::Arc;
use std::time::Duration;

use application::AdvisorySettings;
use infrastructure::{OpenAiChatClient, Repositories, ServerConfig, write_policy};
use state::AppState;
use tracing::warn;

pub use api::create_router;

/// Wires services over already opened repositories.
pub fn setup_app_state(
    repos: &Repositories,
    config: &ServerConfig,
) -> anyhow::Result<Arc<AppState>> {
    let generator = OpenAiChatClient::new(&config.llm)?;
    if !generator.is_configured() {
        warn!("LLM API key not set; advisories will use the fallback list");
    }

    let settings = AdvisorySettings {
        timeout: Duration::from_secs(config.llm.timeout_secs.max(1)),
        retries: config.llm.retries,
    };

    Ok(Arc::new(AppState::new(
        repos,
        write_policy(config.write_api_key.as_deref()),
        state::seeder_for(config.seed.mode, repos),
        Arc::new(generator),
        settings,
    )))
}
