use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// Daily weighed kilograms of one product over the last week
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightSeries {
    pub product: String,
    pub weights: Vec<f64>,
    pub dates: Vec<String>,
}

/// Typical daily volume of a tracked product
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProductBaseline {
    pub product: &'static str,
    pub base: f64,
    pub variance: f64,
}

pub const TREND_DAYS: usize = 7;

pub const PRODUCT_BASELINES: [ProductBaseline; 3] = [
    ProductBaseline {
        product: "Tomate",
        base: 450.0,
        variance: 80.0,
    },
    ProductBaseline {
        product: "Palta",
        base: 320.0,
        variance: 60.0,
    },
    ProductBaseline {
        product: "Plátano",
        base: 580.0,
        variance: 100.0,
    },
];

/// `dd/mm` labels for the week ending on `today`, oldest first
pub fn trend_dates(today: NaiveDate) -> Vec<String> {
    let start = today - Duration::days(TREND_DAYS as i64 - 1);
    (0..TREND_DAYS as i64)
        .map(|offset| (start + Duration::days(offset)).format("%d/%m").to_string())
        .collect()
}
