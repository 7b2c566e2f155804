//! Seven-day generation/consumption forecast synthesis.

use chrono::{Days, NaiveDate};
use rand::Rng;
use serde::Serialize;

use crate::config::TariffConfig;
use crate::synth::{round1, round2};

/// Predicted energy balance for one upcoming day.
#[derive(Debug, Clone, Serialize)]
pub struct DayPrediction {
    /// Day offset, 1..=7.
    pub day: u32,
    /// Calendar date, `YYYY-MM-DD`.
    pub date: String,
    /// Predicted generation (kWh).
    pub predicted_solar: f64,
    /// Predicted consumption (kWh).
    pub predicted_consumption: f64,
    /// Cloud-cover discount applied to generation, 0.70..=1.00.
    pub weather_factor: f64,
    /// `(solar - consumption) * tariff`, in AED.
    pub net_savings: f64,
}

/// Synthesizes predictions for the seven days after `today`.
///
/// Each day draws a weather factor from 0.7–1.0 that discounts a 400–600 kWh
/// generation draw; consumption comes from the same 280–380 kWh band the
/// metrics snapshot uses.
pub fn predict_week(
    today: NaiveDate,
    tariff: &TariffConfig,
    rng: &mut impl Rng,
) -> Vec<DayPrediction> {
    (1..=7)
        .map(|day| {
            let weather_factor: f64 = rng.random_range(0.7..=1.0);
            let predicted_solar = rng.random_range(400.0..=600.0) * weather_factor;
            let predicted_consumption = rng.random_range(280.0..=380.0);
            let date = today
                .checked_add_days(Days::new(u64::from(day)))
                .unwrap_or(NaiveDate::MAX);

            DayPrediction {
                day,
                date: date.format("%Y-%m-%d").to_string(),
                predicted_solar: round1(predicted_solar),
                predicted_consumption: round1(predicted_consumption),
                weather_factor: round2(weather_factor),
                net_savings: round2(
                    (predicted_solar - predicted_consumption) * tariff.rate_aed_per_kwh,
                ),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 10).expect("valid date")
    }

    #[test]
    fn week_has_seven_consecutive_days() {
        let mut rng = StdRng::seed_from_u64(42);
        let week = predict_week(today(), &TariffConfig::default(), &mut rng);

        assert_eq!(week.len(), 7);
        for (i, p) in week.iter().enumerate() {
            assert_eq!(p.day, (i + 1) as u32);
        }
        assert_eq!(week[0].date, "2025-03-11");
        assert_eq!(week[6].date, "2025-03-17");
    }

    #[test]
    fn date_arithmetic_crosses_month_boundaries() {
        let mut rng = StdRng::seed_from_u64(0);
        let eom = NaiveDate::from_ymd_opt(2025, 1, 30).expect("valid date");
        let week = predict_week(eom, &TariffConfig::default(), &mut rng);
        assert_eq!(week[0].date, "2025-01-31");
        assert_eq!(week[1].date, "2025-02-01");
    }

    #[test]
    fn weather_factor_discounts_generation() {
        for seed in 0..30 {
            let mut rng = StdRng::seed_from_u64(seed);
            for p in predict_week(today(), &TariffConfig::default(), &mut rng) {
                assert!((0.7..=1.0).contains(&p.weather_factor));
                // 400..=600 kWh discounted by at most 0.7
                assert!((280.0..=600.0).contains(&p.predicted_solar));
                assert!((280.0..=380.0).contains(&p.predicted_consumption));
            }
        }
    }

    #[test]
    fn net_savings_uses_the_tariff() {
        let mut rng = StdRng::seed_from_u64(3);
        let tariff = TariffConfig::default();
        for p in predict_week(today(), &tariff, &mut rng) {
            let expected = (p.predicted_solar - p.predicted_consumption) * tariff.rate_aed_per_kwh;
            // rounded inputs vs. the unrounded product: stay within the
            // rounding slack
            assert!((p.net_savings - expected).abs() < 0.1);
        }
    }
}
