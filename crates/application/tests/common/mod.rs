#![allow(dead_code)]

use chrono::{Duration, Utc};
use domain::device::{Device, DeviceDraft, DeviceStatus, DeviceType, LabelStatus};
use domain::store::{NewStore, Store};

pub fn device(status: DeviceStatus) -> Device {
    typed_device(DeviceType::AssistedScale, status)
}

pub fn typed_device(device_type: DeviceType, status: DeviceStatus) -> Device {
    Device::new(DeviceDraft {
        id: None,
        device_type,
        status,
        firmware_version: "v2.3.1".into(),
        last_calibration: Utc::now() - Duration::days(5),
        installation_date: Utc::now() - Duration::days(365),
        avg_consumption: 1.2,
        label_status: LabelStatus::Good,
        printhead_life: 90,
    })
    .unwrap()
}

pub fn new_store(name: &str, devices: Vec<Device>) -> NewStore {
    NewStore {
        name: name.into(),
        comuna: "Providencia".into(),
        sap_code: format!("SAP-{}", name.len()),
        address: "Av. Principal 110, Providencia".into(),
        latitude: -33.4269,
        longitude: -70.6103,
        network_status: Default::default(),
        latency: 30,
        sales_level: Default::default(),
        devices,
    }
}

pub fn store(name: &str, devices: Vec<Device>) -> Store {
    Store::create(new_store(name, devices), Utc::now()).unwrap()
}

/// `online` online devices out of `total`
pub fn devices(online: usize, total: usize) -> Vec<Device> {
    (0..total)
        .map(|i| {
            if i < online {
                device(DeviceStatus::Online)
            } else {
                device(DeviceStatus::Offline)
            }
        })
        .collect()
}
