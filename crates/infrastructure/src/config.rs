use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct StorageConfig {
    /// sea-orm connection string, or `memory` for the in-process store
    pub url: String,
    /// Database appended to server URLs that do not name one
    pub database_name: Option<String>,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            url: "sqlite://balanza.db?mode=rwc".to_string(),
            database_name: None,
        }
    }
}

impl StorageConfig {
    pub fn is_in_memory(&self) -> bool {
        self.url.eq_ignore_ascii_case("memory")
    }

    pub fn connection_url(&self) -> String {
        let url = self.url.trim_end_matches('/');
        match self.database_name.as_deref() {
            Some(name) if !name.is_empty() && !url.starts_with("sqlite:") && !names_database(url) => {
                format!("{url}/{name}")
            }
            _ => url.to_string(),
        }
    }
}

fn names_database(url: &str) -> bool {
    url.split_once("://")
        .map(|(_, rest)| rest.contains('/'))
        .unwrap_or(true)
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct LlmConfig {
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
    pub timeout_secs: u64,
    /// Extra attempts after a failed generation
    pub retries: u32,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: "https://api.openai.com/v1".to_string(),
            model: "gpt-4o".to_string(),
            timeout_secs: 30,
            retries: 0,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SeedMode {
    /// Random demonstration catalog on first start
    #[default]
    Demo,
    None,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct SeedConfig {
    pub mode: SeedMode,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct ServerConfig {
    pub api_port: u16,
    pub storage: StorageConfig,
    /// `*` or a comma-separated list of origins
    pub cors_origins: String,
    pub llm: LlmConfig,
    pub seed: SeedConfig,
    /// When set, mutating endpoints require a matching `x-api-key` header
    pub write_api_key: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            api_port: 8001,
            storage: StorageConfig::default(),
            cors_origins: "*".to_string(),
            llm: LlmConfig::default(),
            seed: SeedConfig::default(),
            write_api_key: None,
        }
    }
}

impl ServerConfig {
    pub fn load(config_dir: &str) -> Result<Self, ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = Self::file_sources(config_dir, &run_mode)
            // Environment variables (e.g. BALANZA__STORAGE__URL=postgres://...)
            .add_source(Environment::with_prefix("BALANZA").separator("__"))
            // Plain deployment variables win over everything else
            .set_override_option("storage.url", std::env::var("DATABASE_URL").ok())?
            .set_override_option("storage.database_name", std::env::var("DB_NAME").ok())?
            .set_override_option("cors_origins", std::env::var("CORS_ORIGINS").ok())?
            .set_override_option("llm.api_key", std::env::var("LLM_API_KEY").ok())?
            .set_override_option("write_api_key", std::env::var("WRITE_API_KEY").ok())?
            .build()?;

        s.try_deserialize()
    }

    fn file_sources(config_dir: &str, run_mode: &str) -> ConfigBuilder<DefaultState> {
        Config::builder()
            .add_source(File::with_name(&format!("{}/default", config_dir)).required(false))
            .add_source(File::with_name(&format!("{}/{}", config_dir, run_mode)).required(false))
    }

    /// Allowed CORS origins, or `None` when any origin is accepted
    pub fn allowed_origins(&self) -> Option<Vec<String>> {
        let origins: Vec<String> = self
            .cors_origins
            .split(',')
            .map(str::trim)
            .filter(|o| !o.is_empty())
            .map(str::to_string)
            .collect();

        if origins.is_empty() || origins.iter().any(|o| o == "*") {
            None
        } else {
            Some(origins)
        }
    }
}
