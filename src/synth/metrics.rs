//! Headline dashboard metrics synthesis.

use chrono::Timelike;
use rand::Rng;
use serde::Serialize;

use crate::config::{PlantConfig, TariffConfig};
use crate::synth::round1;

/// Instantaneous-reading tile (generation and consumption).
#[derive(Debug, Clone, Serialize)]
pub struct PowerTile {
    /// Instantaneous reading (kW).
    pub current: f64,
    /// Accumulated daily value (kWh).
    pub daily: f64,
    /// Display unit.
    pub unit: &'static str,
    /// Trend badge, e.g. `"+12%"`.
    pub change: &'static str,
}

/// Accumulating tile (cost savings and CO2 reduction).
#[derive(Debug, Clone, Serialize)]
pub struct TotalsTile {
    /// Today's total.
    pub daily: f64,
    /// 30-day extrapolation of today's total.
    pub monthly: f64,
    /// Display unit.
    pub unit: &'static str,
    /// Trend badge.
    pub change: &'static str,
}

/// The four headline tiles of the dashboard.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsSnapshot {
    pub solar_generation: PowerTile,
    pub energy_consumption: PowerTile,
    pub cost_savings: TotalsTile,
    pub co2_reduction: TotalsTile,
}

impl MetricsSnapshot {
    /// Samples a fresh snapshot.
    ///
    /// Instantaneous generation is drawn from 45–95 kW during the daylight
    /// window and pinned to zero at night. Daily totals are drawn from fixed
    /// kWh bands and converted to savings via the tariff (whole AED) and
    /// avoided CO2 (kg, one decimal); monthly figures extrapolate by 30.
    pub fn sample<T: Timelike>(
        now: &T,
        plant: &PlantConfig,
        tariff: &TariffConfig,
        rng: &mut impl Rng,
    ) -> Self {
        let hour = now.hour();
        let daylight = hour >= plant.sunrise_hour && hour <= plant.sunset_hour;
        let current_solar = if daylight {
            rng.random_range(45.0..=95.0)
        } else {
            0.0
        };
        let current_consumption = rng.random_range(25.0..=45.0);

        let daily_solar_kwh = rng.random_range(450.0..=650.0);
        let daily_consumption_kwh = rng.random_range(280.0..=380.0);

        let savings_aed = daily_solar_kwh * tariff.rate_aed_per_kwh;
        let co2_kg = daily_solar_kwh * tariff.co2_kg_per_kwh;

        Self {
            solar_generation: PowerTile {
                current: round1(current_solar),
                daily: round1(daily_solar_kwh),
                unit: "kW",
                change: "+12%",
            },
            energy_consumption: PowerTile {
                current: round1(current_consumption),
                daily: round1(daily_consumption_kwh),
                unit: "kW",
                change: "-8%",
            },
            cost_savings: TotalsTile {
                daily: savings_aed.round(),
                monthly: (savings_aed * 30.0).round(),
                unit: "AED",
                change: "+15%",
            },
            co2_reduction: TotalsTile {
                daily: round1(co2_kg),
                monthly: round1(co2_kg * 30.0),
                unit: "kg",
                change: "+22%",
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveTime;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    fn at(hour: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, 0, 0).expect("valid wall-clock hour")
    }

    fn sample_at(hour: u32, seed: u64) -> MetricsSnapshot {
        let mut rng = StdRng::seed_from_u64(seed);
        MetricsSnapshot::sample(
            &at(hour),
            &PlantConfig::default(),
            &TariffConfig::default(),
            &mut rng,
        )
    }

    #[test]
    fn daytime_readings_are_in_band() {
        for seed in 0..20 {
            let snap = sample_at(12, seed);
            assert!((45.0..=95.0).contains(&snap.solar_generation.current));
            assert!((25.0..=45.0).contains(&snap.energy_consumption.current));
            assert!((450.0..=650.0).contains(&snap.solar_generation.daily));
            assert!((280.0..=380.0).contains(&snap.energy_consumption.daily));
        }
    }

    #[test]
    fn night_generation_is_zero() {
        assert_eq!(sample_at(2, 3).solar_generation.current, 0.0);
        assert_eq!(sample_at(23, 3).solar_generation.current, 0.0);
    }

    #[test]
    fn window_edges_still_generate() {
        for seed in 0..10 {
            assert!(sample_at(6, seed).solar_generation.current >= 45.0);
            assert!(sample_at(18, seed).solar_generation.current >= 45.0);
        }
    }

    #[test]
    fn savings_follow_the_tariff() {
        let snap = sample_at(12, 9);

        // daily solar in 450..=650 kWh at 0.38 AED/kWh
        assert!((150.0..=260.0).contains(&snap.cost_savings.daily));
        assert_eq!(snap.cost_savings.daily, snap.cost_savings.daily.round());
        // monthly is 30x the unrounded daily figure, so allow the rounding gap
        assert!((snap.cost_savings.monthly - snap.cost_savings.daily * 30.0).abs() <= 15.0);
    }

    #[test]
    fn co2_uses_emissions_factor() {
        let snap = sample_at(12, 11);
        // 0.5 kg/kWh over 450..=650 kWh
        assert!((225.0..=325.0).contains(&snap.co2_reduction.daily));
        assert!((6750.0..=9750.0).contains(&snap.co2_reduction.monthly));
    }

    #[test]
    fn serializes_all_four_tiles() {
        let snap = sample_at(12, 1);
        let json = serde_json::to_value(&snap).expect("snapshot should serialize");
        assert_eq!(json["solar_generation"]["unit"], "kW");
        assert_eq!(json["cost_savings"]["unit"], "AED");
        assert_eq!(json["co2_reduction"]["change"], "+22%");
        assert!(json["energy_consumption"]["current"].is_f64());
    }
}
