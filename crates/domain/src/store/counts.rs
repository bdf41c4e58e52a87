use serde::{Deserialize, Serialize};

use crate::device::{Device, DeviceType};

/// Number of scales of each type attached to a store.
///
/// Serialized flat into the store document. Always derived with
/// [`DeviceCounts::tally`] so it matches the device collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceCounts {
    #[serde(rename = "balances_assisted", alias = "balances_bms", default)]
    pub assisted: u32,
    #[serde(
        rename = "balances_self_service",
        alias = "balances_autoservicio",
        default
    )]
    pub self_service: u32,
    #[serde(rename = "balances_ai_vision", alias = "balances_ia", default)]
    pub ai_vision: u32,
}

impl DeviceCounts {
    /// Field names (current and legacy) under which counts appear in a store document
    pub const FIELDS: [&'static str; 6] = [
        "balances_assisted",
        "balances_self_service",
        "balances_ai_vision",
        "balances_bms",
        "balances_autoservicio",
        "balances_ia",
    ];

    pub fn tally(devices: &[Device]) -> Self {
        devices.iter().fold(Self::default(), |mut counts, device| {
            match device.device_type {
                DeviceType::AssistedScale => counts.assisted += 1,
                DeviceType::SelfService => counts.self_service += 1,
                DeviceType::AiVision => counts.ai_vision += 1,
            }
            counts
        })
    }

    pub fn of(&self, device_type: DeviceType) -> u32 {
        match device_type {
            DeviceType::AssistedScale => self.assisted,
            DeviceType::SelfService => self.self_service,
            DeviceType::AiVision => self.ai_vision,
        }
    }

    pub fn total(&self) -> u32 {
        self.assisted + self.self_service + self.ai_vision
    }
}
