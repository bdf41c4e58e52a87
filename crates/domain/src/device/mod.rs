mod device_type;
mod entity;
mod status;

pub use device_type::DeviceType;
pub use entity::{Device, DeviceDraft};
pub use status::{DeviceStatus, LabelStatus};
