use rand::Rng;
use crate::models::{GrowthPrediction, MonthlyGrowth};

pub const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun",
    "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Fabricate a twelve month growth outlook
pub fn predict_growth<R: Rng + ?Sized>(rng: &mut R) -> GrowthPrediction {
    let predictions: Vec<MonthlyGrowth> = MONTHS
        .iter()
        .map(|month| MonthlyGrowth {
            month: month.to_string(),
            growth_rate: rng.random_range(0.1..0.3),
            risk_increase: rng.random_range(0.05..0.2),
            maintenance_needed: rng.random_bool(0.5),
        })
        .collect();

    let total_growth: f64 = predictions.iter().map(|p| p.growth_rate).sum();
    let maintenance_schedule: Vec<String> = predictions
        .iter()
        .filter(|p| p.maintenance_needed)
        .map(|p| p.month.clone())
        .collect();

    GrowthPrediction {
        predictions,
        total_growth,
        maintenance_schedule,
    }
}
