mod entity;
mod repository;

pub use entity::{Alert, AlertType};
pub use repository::AlertRepository;
#[cfg(any(test, feature = "mocks"))]
pub use repository::MockAlertRepository;
