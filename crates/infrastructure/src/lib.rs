//! Infrastructure layer - storage, configuration and upstream clients

pub mod config;
pub mod database;
pub mod llm;
pub mod memory;
pub mod policy;
pub mod repositories;

pub use config::{LlmConfig, SeedMode, ServerConfig, StorageConfig};
pub use database::{
    SeaOrmAlertRepository, SeaOrmCampaignRepository, SeaOrmStoreRepository,
    SeaOrmTicketRepository,
};
pub use llm::OpenAiChatClient;
pub use memory::InMemoryCatalog;
pub use policy::{ApiKeyPolicy, write_policy};
pub use repositories::{Repositories, open_repositories};
