mod counts;
mod entity;
mod repository;
mod status;

pub use counts::DeviceCounts;
pub use entity::{
    NetworkStatus, NewStore, SANTIAGO_LATITUDE, SANTIAGO_LONGITUDE, SalesLevel, Store,
    validate_santiago_coordinates,
};
pub use repository::StoreRepository;
#[cfg(any(test, feature = "mocks"))]
pub use repository::MockStoreRepository;
pub use status::StoreStatus;
