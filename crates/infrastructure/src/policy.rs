use domain::DomainError;
use domain::policy::{AllowAllPolicy, Caller, WriteAction, WritePolicy};
use std::sync::Arc;

/// Requires callers of mutating operations to present a shared key
pub struct ApiKeyPolicy {
    key: String,
}

impl ApiKeyPolicy {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

impl WritePolicy for ApiKeyPolicy {
    fn authorize(&self, caller: &Caller, action: WriteAction) -> Result<(), DomainError> {
        match caller.api_key.as_deref() {
            Some(key) if key == self.key => Ok(()),
            Some(_) => Err(DomainError::Unauthorized(format!(
                "Invalid API key for {}",
                action.as_str()
            ))),
            None => Err(DomainError::Unauthorized(format!(
                "API key required for {}",
                action.as_str()
            ))),
        }
    }
}

/// Open writes unless a key is configured
pub fn write_policy(write_api_key: Option<&str>) -> Arc<dyn WritePolicy> {
    match write_api_key.map(str::trim).filter(|k| !k.is_empty()) {
        Some(key) => Arc::new(ApiKeyPolicy::new(key)),
        None => Arc::new(AllowAllPolicy),
    }
}
