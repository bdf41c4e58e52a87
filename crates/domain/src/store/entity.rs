use std::ops::RangeInclusive;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{DeviceCounts, StoreStatus};
use crate::device::Device;
use crate::error::{DomainError, Result};
use crate::patch::merge_fields;

pub const SANTIAGO_LATITUDE: RangeInclusive<f64> = -34.0..=-33.0;
pub const SANTIAGO_LONGITUDE: RangeInclusive<f64> = -72.0..=-70.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NetworkStatus {
    #[default]
    Connected,
    Unstable,
}

impl NetworkStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Connected => "connected",
            Self::Unstable => "unstable",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SalesLevel {
    #[default]
    High,
    Medium,
    Low,
}

impl SalesLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

/// A supermarket branch and the scales installed in it.
///
/// `status` is a snapshot taken when the store is created or explicitly
/// recomputed; it is not refreshed when devices change afterwards.
/// `device_counts` always matches `devices`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Store {
    pub id: String,
    pub name: String,
    pub comuna: String,
    pub sap_code: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
    pub status: StoreStatus,
    #[serde(flatten)]
    pub device_counts: DeviceCounts,
    pub last_update: DateTime<Utc>,
    #[serde(default)]
    pub network_status: NetworkStatus,
    #[serde(default)]
    pub latency: u32,
    #[serde(default)]
    pub sales_level: SalesLevel,
    #[serde(default)]
    pub devices: Vec<Device>,
}

/// Attributes supplied when a store is registered
#[derive(Debug, Clone, Deserialize)]
pub struct NewStore {
    pub name: String,
    pub comuna: String,
    pub sap_code: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub network_status: NetworkStatus,
    #[serde(default)]
    pub latency: u32,
    #[serde(default)]
    pub sales_level: SalesLevel,
    #[serde(default)]
    pub devices: Vec<Device>,
}

impl Store {
    /// Builds a store, deriving its status and per-type counts from `devices`.
    pub fn create(draft: NewStore, now: DateTime<Utc>) -> Result<Self> {
        for (field, value) in [
            ("name", &draft.name),
            ("comuna", &draft.comuna),
            ("sap_code", &draft.sap_code),
        ] {
            if value.trim().is_empty() {
                return Err(DomainError::InvalidStore(format!("{field} cannot be empty")));
            }
        }

        if !draft.latitude.is_finite() || !draft.longitude.is_finite() {
            return Err(DomainError::InvalidStore(
                "coordinates must be finite numbers".to_string(),
            ));
        }

        Ok(Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: draft.name,
            comuna: draft.comuna,
            sap_code: draft.sap_code,
            address: draft.address,
            latitude: draft.latitude,
            longitude: draft.longitude,
            status: StoreStatus::from_devices(&draft.devices),
            device_counts: DeviceCounts::tally(&draft.devices),
            last_update: now,
            network_status: draft.network_status,
            latency: draft.latency,
            sales_level: draft.sales_level,
            devices: draft.devices,
        })
    }

    /// Re-derives status and counts from the current devices.
    pub fn recompute_status(&mut self, now: DateTime<Utc>) -> StoreStatus {
        self.status = StoreStatus::from_devices(&self.devices);
        self.device_counts = DeviceCounts::tally(&self.devices);
        self.last_update = now;
        self.status
    }

    /// Merges caller-supplied fields into a copy of this store.
    ///
    /// The identifier cannot change and per-type counts are re-tallied from
    /// the resulting devices; supplied counts are ignored.
    pub fn apply_update(&self, fields: Map<String, Value>, now: DateTime<Utc>) -> Result<Self> {
        let mut protected = vec!["id"];
        protected.extend(DeviceCounts::FIELDS);

        let mut updated = merge_fields(self, fields, &protected)?;
        updated.device_counts = DeviceCounts::tally(&updated.devices);
        updated.last_update = now;
        Ok(updated)
    }

    pub fn has_consistent_counts(&self) -> bool {
        self.device_counts == DeviceCounts::tally(&self.devices)
    }

    /// Label used on alerts, e.g. `Local 3 - Vitacura`
    pub fn display_name(&self) -> String {
        format!("{} - {}", self.name, self.comuna)
    }
}

/// Rejects coordinates outside the Santiago metropolitan box used by seed data.
pub fn validate_santiago_coordinates(latitude: f64, longitude: f64) -> Result<()> {
    if !SANTIAGO_LATITUDE.contains(&latitude) || !SANTIAGO_LONGITUDE.contains(&longitude) {
        return Err(DomainError::InvalidStore(format!(
            "coordinates ({latitude}, {longitude}) are outside the Santiago region"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::{DeviceDraft, DeviceStatus, DeviceType, LabelStatus};
    use serde_json::json;

    fn device(device_type: DeviceType, status: DeviceStatus) -> Device {
        Device::new(DeviceDraft {
            id: None,
            device_type,
            status,
            firmware_version: "v2.3.1".into(),
            last_calibration: Utc::now(),
            installation_date: Utc::now(),
            avg_consumption: 1.2,
            label_status: LabelStatus::Good,
            printhead_life: 88,
        })
        .unwrap()
    }

    fn draft(devices: Vec<Device>) -> NewStore {
        NewStore {
            name: "Local 1".into(),
            comuna: "Providencia".into(),
            sap_code: "SAP-1000".into(),
            address: "Av. Principal 100, Providencia".into(),
            latitude: -33.4269,
            longitude: -70.6103,
            network_status: NetworkStatus::Connected,
            latency: 20,
            sales_level: SalesLevel::Medium,
            devices,
        }
    }

    fn fleet(online: usize, total: usize) -> Vec<Device> {
        (0..total)
            .map(|i| {
                let status = if i < online {
                    DeviceStatus::Online
                } else {
                    DeviceStatus::Offline
                };
                device(DeviceType::AssistedScale, status)
            })
            .collect()
    }

    #[test]
    fn test_create_derives_status() {
        let now = Utc::now();
        assert_eq!(
            Store::create(draft(fleet(6, 10)), now).unwrap().status,
            StoreStatus::Partial
        );
        assert_eq!(
            Store::create(draft(fleet(5, 10)), now).unwrap().status,
            StoreStatus::Offline
        );
        assert_eq!(
            Store::create(draft(fleet(10, 10)), now).unwrap().status,
            StoreStatus::Online
        );
        assert_eq!(
            Store::create(draft(vec![]), now).unwrap().status,
            StoreStatus::Offline
        );
    }

    #[test]
    fn test_create_tallies_counts() {
        let devices = vec![
            device(DeviceType::AssistedScale, DeviceStatus::Online),
            device(DeviceType::SelfService, DeviceStatus::Online),
            device(DeviceType::SelfService, DeviceStatus::Maintenance),
            device(DeviceType::AiVision, DeviceStatus::Online),
        ];
        let store = Store::create(draft(devices), Utc::now()).unwrap();
        assert_eq!(store.device_counts.assisted, 1);
        assert_eq!(store.device_counts.self_service, 2);
        assert_eq!(store.device_counts.ai_vision, 1);
        assert!(store.has_consistent_counts());
    }

    #[test]
    fn test_blank_name_rejected() {
        let mut d = draft(vec![]);
        d.name = "  ".into();
        assert!(matches!(
            Store::create(d, Utc::now()),
            Err(DomainError::InvalidStore(_))
        ));
    }

    #[test]
    fn test_recompute_status_follows_current_devices() {
        let mut store = Store::create(draft(fleet(10, 10)), Utc::now()).unwrap();
        store.devices = fleet(0, 3);
        assert_eq!(store.status, StoreStatus::Online);
        assert!(!store.has_consistent_counts());

        assert_eq!(store.recompute_status(Utc::now()), StoreStatus::Offline);
        assert_eq!(store.status, StoreStatus::Offline);
        assert_eq!(store.device_counts.assisted, 3);
        assert!(store.has_consistent_counts());
    }

    #[test]
    fn test_apply_update_merges_fields() {
        let store = Store::create(draft(fleet(4, 4)), Utc::now()).unwrap();
        let fields = json!({"name": "Local 99", "latency": 55, "id": "hijack"});
        let updated = store
            .apply_update(fields.as_object().cloned().unwrap(), Utc::now())
            .unwrap();
        assert_eq!(updated.id, store.id);
        assert_eq!(updated.name, "Local 99");
        assert_eq!(updated.latency, 55);
        assert_eq!(updated.devices, store.devices);
    }

    #[test]
    fn test_apply_update_recounts_devices_but_not_status() {
        let store = Store::create(draft(fleet(4, 4)), Utc::now()).unwrap();
        let devices = serde_json::to_value(vec![
            device(DeviceType::AiVision, DeviceStatus::Offline),
            device(DeviceType::AiVision, DeviceStatus::Offline),
        ])
        .unwrap();
        let fields = json!({"devices": devices, "balances_assisted": 40, "balances_bms": 7});
        let updated = store
            .apply_update(fields.as_object().cloned().unwrap(), Utc::now())
            .unwrap();
        assert_eq!(updated.device_counts.assisted, 0);
        assert_eq!(updated.device_counts.ai_vision, 2);
        assert!(updated.has_consistent_counts());
        assert_eq!(updated.status, StoreStatus::Online);
    }

    #[test]
    fn test_apply_update_rejects_bad_device() {
        let store = Store::create(draft(vec![]), Utc::now()).unwrap();
        let fields = json!({"devices": [{
            "type": "SELF_SERVICE",
            "last_calibration": "2025-01-01T00:00:00Z",
            "installation_date": "2023-01-01T00:00:00Z",
            "avg_consumption": -2.0,
            "printhead_life": 50
        }]});
        let result = store.apply_update(fields.as_object().cloned().unwrap(), Utc::now());
        assert!(matches!(result, Err(DomainError::InvalidPayload(_))));
    }

    #[test]
    fn test_document_uses_flat_counts_and_accepts_legacy_names() {
        let store = Store::create(draft(fleet(1, 2)), Utc::now()).unwrap();
        let mut value = serde_json::to_value(&store).unwrap();
        assert_eq!(value["balances_assisted"], 2);
        assert_eq!(value["status"], "partial");

        let object = value.as_object_mut().unwrap();
        let count = object.remove("balances_assisted").unwrap();
        object.insert("balances_bms".into(), count);
        let back: Store = serde_json::from_value(value).unwrap();
        assert_eq!(back.device_counts.assisted, 2);
    }

    #[test]
    fn test_display_name() {
        let store = Store::create(draft(vec![]), Utc::now()).unwrap();
        assert_eq!(store.display_name(), "Local 1 - Providencia");
    }

    #[test]
    fn test_santiago_box() {
        assert!(validate_santiago_coordinates(-33.4269, -70.6103).is_ok());
        assert!(validate_santiago_coordinates(-33.6875, -71.2148).is_ok());
        assert!(validate_santiago_coordinates(-32.9, -70.6).is_err());
        assert!(validate_santiago_coordinates(-33.5, -69.9).is_err());
    }
}
