mod entity;
mod repository;

pub use entity::{Campaign, CampaignStatus, NewCampaign};
pub use repository::CampaignRepository;
#[cfg(any(test, feature = "mocks"))]
pub use repository::MockCampaignRepository;
