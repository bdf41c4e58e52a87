use serde::{Deserialize, Serialize};

use crate::device::Device;

/// Composite store health derived from its scales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreStatus {
    /// Every scale is online
    Online,
    /// A strict majority of scales is online
    Partial,
    /// Half or fewer of the scales are online, or the store has none
    Offline,
}

impl StoreStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Online => "online",
            Self::Partial => "partial",
            Self::Offline => "offline",
        }
    }

    /// Derives the status from the scales attached at this instant.
    pub fn from_devices(devices: &[Device]) -> Self {
        let online = devices.iter().filter(|d| d.is_online()).count();
        Self::from_counts(online, devices.len())
    }

    /// `online` of `total` scales reporting online.
    ///
    /// An empty store is `Offline`. Exactly half online is `Offline`.
    pub fn from_counts(online: usize, total: usize) -> Self {
        if total > 0 && online == total {
            Self::Online
        } else if online * 2 > total {
            Self::Partial
        } else {
            Self::Offline
        }
    }
}
