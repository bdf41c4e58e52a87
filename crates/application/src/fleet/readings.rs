use std::ops::Range;

use rand::Rng;

use domain::metrics::SyntheticReadings;

/// Placeholder demo figures drawn uniformly at random on every call
#[derive(Debug, Clone)]
pub struct RandomReadings {
    kg_today: Range<f64>,
    pending_updates: Range<u32>,
}

impl Default for RandomReadings {
    fn default() -> Self {
        Self {
            kg_today: 15_000.0..25_000.0,
            pending_updates: 3..13,
        }
    }
}

impl SyntheticReadings for RandomReadings {
    fn total_kg_today(&self) -> f64 {
        rand::thread_rng().gen_range(self.kg_today.clone())
    }

    fn pending_updates(&self) -> u32 {
        rand::thread_rng().gen_range(self.pending_updates.clone())
    }
}
