use serde::{Deserialize, Serialize};

/// Operating mode of a scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeviceType {
    /// Counter scale operated by staff
    #[serde(rename = "ASSISTED_SCALE", alias = "BMS_ASISTIDA")]
    AssistedScale,
    /// Customer-operated scale
    #[serde(rename = "SELF_SERVICE", alias = "AUTOSERVICIO")]
    SelfService,
    /// Camera-assisted scale with product recognition
    #[serde(rename = "AI_VISION", alias = "IA")]
    AiVision,
}

impl DeviceType {
    pub const ALL: [DeviceType; 3] = [Self::AssistedScale, Self::SelfService, Self::AiVision];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AssistedScale => "ASSISTED_SCALE",
            Self::SelfService => "SELF_SERVICE",
            Self::AiVision => "AI_VISION",
        }
    }
}
