mod entity;
mod fallback;
mod generator;
mod prompt;

pub use entity::{ADVISORY_COUNT, Advisory, AdvisoryCategory, AdvisoryDraft, parse_advisories};
pub use fallback::fallback_advisories;
pub use generator::TextGenerator;
#[cfg(any(test, feature = "mocks"))]
pub use generator::MockTextGenerator;
pub use prompt::{FleetSnapshot, SYSTEM_PROMPT};
