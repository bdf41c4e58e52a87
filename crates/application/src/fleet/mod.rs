//! On-demand fleet figures: metrics roll-up and weight trends.

mod metrics_service;
mod readings;
mod weight_trend;

pub use metrics_service::FleetMetricsService;
pub use readings::RandomReadings;
pub use weight_trend::WeightTrendGenerator;
