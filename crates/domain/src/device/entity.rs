use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{DeviceStatus, DeviceType, LabelStatus};
use crate::error::{DomainError, Result};

/// A single scale installed in a store.
///
/// Deserialization goes through [`DeviceDraft`], so every path that builds a
/// `Device` from external input is validated:
/// - `avg_consumption` must be finite and non-negative (kWh per day)
/// - `printhead_life` must be a percentage in `0..=100`
/// - type, status and label status are closed enumerations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "DeviceDraft")]
pub struct Device {
    pub id: String,
    #[serde(rename = "type")]
    pub device_type: DeviceType,
    pub status: DeviceStatus,
    pub firmware_version: String,
    pub last_calibration: DateTime<Utc>,
    pub installation_date: DateTime<Utc>,
    pub avg_consumption: f64,
    pub label_status: LabelStatus,
    pub printhead_life: u8,
}

/// Unvalidated device attributes as received from callers or generators
#[derive(Debug, Clone, Deserialize)]
pub struct DeviceDraft {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(rename = "type")]
    pub device_type: DeviceType,
    #[serde(default)]
    pub status: DeviceStatus,
    #[serde(default = "default_firmware")]
    pub firmware_version: String,
    pub last_calibration: DateTime<Utc>,
    pub installation_date: DateTime<Utc>,
    pub avg_consumption: f64,
    #[serde(default)]
    pub label_status: LabelStatus,
    pub printhead_life: i64,
}

fn default_firmware() -> String {
    "v2.3.1".to_string()
}

impl Device {
    pub fn new(draft: DeviceDraft) -> Result<Self> {
        Self::try_from(draft)
    }

    pub fn is_online(&self) -> bool {
        self.status.is_online()
    }

    /// Calibrated no more than `days` whole days before `now`
    pub fn calibrated_within(&self, now: DateTime<Utc>, days: i64) -> bool {
        (now - self.last_calibration).num_days() <= days
    }

    /// Down, under maintenance, or out of labels
    pub fn needs_attention(&self) -> bool {
        !self.is_online() || self.label_status == LabelStatus::Replace
    }
}

impl TryFrom<DeviceDraft> for Device {
    type Error = DomainError;

    fn try_from(draft: DeviceDraft) -> Result<Self> {
        if !draft.avg_consumption.is_finite() || draft.avg_consumption < 0.0 {
            return Err(DomainError::InvalidDevice(format!(
                "avg_consumption must be a non-negative number, got {}",
                draft.avg_consumption
            )));
        }

        let printhead_life = u8::try_from(draft.printhead_life)
            .ok()
            .filter(|life| *life <= 100)
            .ok_or_else(|| {
                DomainError::InvalidDevice(format!(
                    "printhead_life must be within 0..=100, got {}",
                    draft.printhead_life
                ))
            })?;

        let id = match draft.id {
            Some(id) if !id.trim().is_empty() => id,
            _ => uuid::Uuid::new_v4().to_string(),
        };

        Ok(Self {
            id,
            device_type: draft.device_type,
            status: draft.status,
            firmware_version: draft.firmware_version,
            last_calibration: draft.last_calibration,
            installation_date: draft.installation_date,
            avg_consumption: draft.avg_consumption,
            label_status: draft.label_status,
            printhead_life,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use serde_json::json;

    fn draft() -> DeviceDraft {
        let now = Utc::now();
        DeviceDraft {
            id: Some("scale-01".to_string()),
            device_type: DeviceType::SelfService,
            status: DeviceStatus::Online,
            firmware_version: "v2.3.1".to_string(),
            last_calibration: now - Duration::days(10),
            installation_date: now - Duration::days(400),
            avg_consumption: 1.25,
            label_status: LabelStatus::Good,
            printhead_life: 80,
        }
    }

    #[test]
    fn test_device_creation() {
        let device = Device::new(draft()).unwrap();
        assert_eq!(device.id, "scale-01");
        assert_eq!(device.device_type, DeviceType::SelfService);
        assert_eq!(device.printhead_life, 80);
        assert!(device.is_online());
    }

    #[test]
    fn test_missing_id_is_generated() {
        let mut d = draft();
        d.id = None;
        let device = Device::new(d).unwrap();
        assert!(!device.id.is_empty());
    }

    #[test]
    fn test_negative_consumption_rejected() {
        let mut d = draft();
        d.avg_consumption = -0.1;
        assert!(matches!(Device::new(d), Err(DomainError::InvalidDevice(_))));
    }

    #[test]
    fn test_nan_consumption_rejected() {
        let mut d = draft();
        d.avg_consumption = f64::NAN;
        assert!(Device::new(d).is_err());
    }

    #[test]
    fn test_printhead_life_bounds() {
        for life in [0, 100] {
            let mut d = draft();
            d.printhead_life = life;
            assert!(Device::new(d).is_ok(), "{life} should be accepted");
        }
        for life in [-1, 101, 300] {
            let mut d = draft();
            d.printhead_life = life;
            assert!(Device::new(d).is_err(), "{life} should be rejected");
        }
    }

    #[test]
    fn test_deserialization_validates() {
        let payload = json!({
            "type": "AI_VISION",
            "last_calibration": "2025-01-01T00:00:00Z",
            "installation_date": "2023-01-01T00:00:00Z",
            "avg_consumption": 1.0,
            "printhead_life": 150
        });
        assert!(serde_json::from_value::<Device>(payload).is_err());

        let payload = json!({
            "id": "d-1",
            "type": "IA",
            "status": "maintenance",
            "last_calibration": "2025-01-01T00:00:00Z",
            "installation_date": "2023-01-01T00:00:00Z",
            "avg_consumption": 1.0,
            "printhead_life": 75
        });
        let device: Device = serde_json::from_value(payload).unwrap();
        assert_eq!(device.device_type, DeviceType::AiVision);
        assert_eq!(device.status, DeviceStatus::Maintenance);
        assert_eq!(device.firmware_version, "v2.3.1");
        assert_eq!(device.label_status, LabelStatus::Good);
    }

    #[test]
    fn test_serialized_shape_round_trips() {
        let device = Device::new(draft()).unwrap();
        let value = serde_json::to_value(&device).unwrap();
        assert_eq!(value["type"], "SELF_SERVICE");
        let back: Device = serde_json::from_value(value).unwrap();
        assert_eq!(back, device);
    }

    #[test]
    fn test_calibration_window() {
        let now = Utc::now();
        let mut device = Device::new(draft()).unwrap();
        device.last_calibration = now - Duration::days(90);
        assert!(device.calibrated_within(now, 90));
        device.last_calibration = now - Duration::days(91);
        assert!(!device.calibrated_within(now, 90));
    }

    #[test]
    fn test_needs_attention() {
        let mut device = Device::new(draft()).unwrap();
        assert!(!device.needs_attention());
        device.label_status = LabelStatus::Replace;
        assert!(device.needs_attention());
        device.label_status = LabelStatus::Good;
        device.status = DeviceStatus::Maintenance;
        assert!(device.needs_attention());
    }
}
