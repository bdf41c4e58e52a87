use chrono::{NaiveDate, Utc};
use rand::Rng;

use domain::metrics::round_to;
use domain::weight::{PRODUCT_BASELINES, TREND_DAYS, WeightSeries, trend_dates};

/// Illustrative weekly weight series, regenerated on each request
#[derive(Debug, Clone, Copy, Default)]
pub struct WeightTrendGenerator;

impl WeightTrendGenerator {
    pub fn weekly(&self) -> Vec<WeightSeries> {
        self.weekly_until(Utc::now().date_naive())
    }

    pub fn weekly_until(&self, today: NaiveDate) -> Vec<WeightSeries> {
        let dates = trend_dates(today);
        let mut rng = rand::thread_rng();

        PRODUCT_BASELINES
            .iter()
            .map(|baseline| WeightSeries {
                product: baseline.product.to_string(),
                weights: (0..TREND_DAYS)
                    .map(|_| {
                        let jitter = rng.gen_range(-baseline.variance..=baseline.variance);
                        round_to(baseline.base + jitter, 1)
                    })
                    .collect(),
                dates: dates.clone(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_products_seven_days() {
        let today = NaiveDate::from_ymd_opt(2025, 1, 7).unwrap();
        let series = WeightTrendGenerator.weekly_until(today);

        let products: Vec<&str> = series.iter().map(|s| s.product.as_str()).collect();
        assert_eq!(products, vec!["Tomate", "Palta", "Plátano"]);

        for (s, baseline) in series.iter().zip(PRODUCT_BASELINES.iter()) {
            assert_eq!(s.weights.len(), TREND_DAYS);
            assert_eq!(s.dates.first().map(String::as_str), Some("01/01"));
            assert_eq!(s.dates.last().map(String::as_str), Some("07/01"));
            for w in &s.weights {
                // rounding to one decimal can push a value 0.05 past the band
                assert!((w - baseline.base).abs() <= baseline.variance + 0.05);
            }
        }
    }
}
