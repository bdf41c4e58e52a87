use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{DomainError, Result};
use crate::priority::Priority;

/// Number of advisories returned on every request
pub const ADVISORY_COUNT: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdvisoryCategory {
    Maintenance,
    Supply,
    Fraud,
    Optimization,
    Seasonal,
}

impl AdvisoryCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Maintenance => "maintenance",
            Self::Supply => "supply",
            Self::Fraud => "fraud",
            Self::Optimization => "optimization",
            Self::Seasonal => "seasonal",
        }
    }
}

/// Human-readable operational suggestion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Advisory {
    pub id: String,
    pub title: String,
    pub content: String,
    pub category: AdvisoryCategory,
    pub priority: Priority,
    pub created_at: DateTime<Utc>,
}

/// Item shape requested from the text generator
#[derive(Debug, Clone, Deserialize)]
pub struct AdvisoryDraft {
    pub title: String,
    pub content: String,
    pub category: AdvisoryCategory,
    pub priority: Priority,
}

impl Advisory {
    pub fn from_draft(draft: AdvisoryDraft, created_at: DateTime<Utc>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            title: draft.title,
            content: draft.content,
            category: draft.category,
            priority: draft.priority,
            created_at,
        }
    }
}

/// Parses a generated reply into exactly [`ADVISORY_COUNT`] advisories.
///
/// Accepts a bare JSON array, optionally wrapped in a Markdown code fence.
/// Extra items are dropped; fewer items, blank fields or values outside the
/// category/priority enumerations are errors.
pub fn parse_advisories(text: &str, created_at: DateTime<Utc>) -> Result<Vec<Advisory>> {
    let body = strip_code_fence(text.trim());

    let drafts: Vec<AdvisoryDraft> = serde_json::from_str(body)
        .map_err(|e| DomainError::Upstream(format!("unparseable advisory list: {e}")))?;

    if drafts.len() < ADVISORY_COUNT {
        return Err(DomainError::Upstream(format!(
            "expected {ADVISORY_COUNT} advisories, got {}",
            drafts.len()
        )));
    }

    drafts
        .into_iter()
        .take(ADVISORY_COUNT)
        .map(|draft| {
            if draft.title.trim().is_empty() || draft.content.trim().is_empty() {
                return Err(DomainError::Upstream(
                    "advisory with empty title or content".to_string(),
                ));
            }
            Ok(Advisory::from_draft(draft, created_at))
        })
        .collect()
}

fn strip_code_fence(text: &str) -> &str {
    let Some(rest) = text.strip_prefix("```") else {
        return text;
    };
    // Drop an optional language tag such as ```json
    let rest = rest.split_once('\n').map(|(_, body)| body).unwrap_or("");
    rest.trim_end().strip_suffix("```").unwrap_or(rest).trim()
}
