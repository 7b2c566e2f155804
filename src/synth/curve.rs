//! Hourly generation/consumption curve synthesis.
//!
//! Shapes a plausible day of plant telemetry: a half-sine generation bell
//! between sunrise and sunset, and an occupancy-driven consumption swell on
//! top of an overnight baseline, both with bounded uniform jitter.

use rand::Rng;
use serde::Serialize;

use crate::config::PlantConfig;
use crate::synth::round1;

/// One hour of synthesized plant telemetry.
///
/// Serialized field names match the dashboard chart contract:
/// `solar_kw` → `solar`, `consumption_kw` → `consumption`.
#[derive(Debug, Clone, Serialize)]
pub struct HourlySample {
    /// Wall-clock label, `"HH:MM"` on the hour.
    pub time: String,
    /// Generation (kW), always >= 0.
    #[serde(rename = "solar")]
    pub solar_kw: f64,
    /// Consumption (kW), never below the configured floor.
    #[serde(rename = "consumption")]
    pub consumption_kw: f64,
}

/// Synthesizes one full day of hourly samples, hours 0..=23 in order.
///
/// Generation follows `peak * sin(pi * (h - sunrise) / (sunset - sunrise))`
/// inside the daylight window and is zero outside it. Consumption follows
/// `active + amp * sin(pi * (h - start) / (end - start))` inside the
/// active-load window and the idle baseline outside it. Both get uniform
/// jitter, a clamp (zero for generation, `min_load_kw` for consumption), and
/// one-decimal rounding.
pub fn generate_daily_curve(plant: &PlantConfig, rng: &mut impl Rng) -> Vec<HourlySample> {
    (0..24)
        .map(|hour| HourlySample {
            time: format!("{hour:02}:00"),
            solar_kw: solar_kw_at(hour, plant, rng),
            consumption_kw: consumption_kw_at(hour, plant, rng),
        })
        .collect()
}

fn solar_kw_at(hour: u32, plant: &PlantConfig, rng: &mut impl Rng) -> f64 {
    if hour < plant.sunrise_hour || hour > plant.sunset_hour {
        return 0.0;
    }

    let daylight_hours = (plant.sunset_hour - plant.sunrise_hour) as f64;
    let solar_factor =
        (std::f64::consts::PI * (hour - plant.sunrise_hour) as f64 / daylight_hours).sin();
    let base = plant.peak_solar_kw * solar_factor;
    let jitter = rng.random_range(-plant.solar_jitter_kw..=plant.solar_jitter_kw);

    round1((base + jitter).max(0.0))
}

fn consumption_kw_at(hour: u32, plant: &PlantConfig, rng: &mut impl Rng) -> f64 {
    let base = if hour >= plant.active_start_hour && hour <= plant.active_end_hour {
        let active_hours = (plant.active_end_hour - plant.active_start_hour) as f64;
        let swell =
            (std::f64::consts::PI * (hour - plant.active_start_hour) as f64 / active_hours).sin();
        plant.active_load_kw + plant.active_amp_kw * swell
    } else {
        plant.idle_load_kw
    };
    let jitter = rng.random_range(-plant.load_jitter_kw..=plant.load_jitter_kw);

    round1((base + jitter).max(plant.min_load_kw))
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    fn plant() -> PlantConfig {
        PlantConfig::default()
    }

    #[test]
    fn curve_has_24_ordered_hours() {
        let mut rng = StdRng::seed_from_u64(42);
        let curve = generate_daily_curve(&plant(), &mut rng);

        assert_eq!(curve.len(), 24);
        for (hour, sample) in curve.iter().enumerate() {
            assert_eq!(sample.time, format!("{hour:02}:00"));
        }
    }

    #[test]
    fn no_generation_outside_daylight_window() {
        let mut rng = StdRng::seed_from_u64(42);
        let curve = generate_daily_curve(&plant(), &mut rng);

        for (hour, sample) in curve.iter().enumerate() {
            if !(6..=18).contains(&hour) {
                assert_eq!(sample.solar_kw, 0.0, "hour {hour} should be dark");
            }
        }
    }

    #[test]
    fn generation_is_never_negative() {
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            for sample in generate_daily_curve(&plant(), &mut rng) {
                assert!(sample.solar_kw >= 0.0);
            }
        }
    }

    #[test]
    fn consumption_never_drops_below_floor() {
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            for sample in generate_daily_curve(&plant(), &mut rng) {
                assert!(sample.consumption_kw >= 5.0);
            }
        }
    }

    #[test]
    fn noon_generation_is_near_peak() {
        // At hour 12 the solar factor is exactly 1, so the sample is
        // 85 +/- the 10 kW jitter bound.
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let noon = &generate_daily_curve(&plant(), &mut rng)[12];
            assert!(
                (75.0..=95.0).contains(&noon.solar_kw),
                "noon sample {} out of range for seed {seed}",
                noon.solar_kw
            );
        }
    }

    #[test]
    fn dawn_and_dusk_generation_is_small() {
        // sin(0) == sin(pi) == 0, only jitter remains at the window edges.
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let curve = generate_daily_curve(&plant(), &mut rng);
            assert!(curve[6].solar_kw <= 10.0);
            assert!(curve[18].solar_kw <= 10.1);
        }
    }

    #[test]
    fn values_round_to_one_decimal() {
        let mut rng = StdRng::seed_from_u64(7);
        for sample in generate_daily_curve(&plant(), &mut rng) {
            assert_eq!(sample.solar_kw, round1(sample.solar_kw));
            assert_eq!(sample.consumption_kw, round1(sample.consumption_kw));
        }
    }

    #[test]
    fn repeated_generation_keeps_shape_but_not_values() {
        let mut rng = StdRng::seed_from_u64(1);
        let first = generate_daily_curve(&plant(), &mut rng);
        let second = generate_daily_curve(&plant(), &mut rng);

        assert_eq!(first.len(), second.len());
        let mut any_diff = false;
        for (a, b) in first.iter().zip(&second) {
            assert_eq!(a.time, b.time);
            if a.solar_kw != b.solar_kw || a.consumption_kw != b.consumption_kw {
                any_diff = true;
            }
        }
        assert!(any_diff, "fresh draws should perturb the magnitudes");
    }

    #[test]
    fn same_seed_is_deterministic() {
        let mut rng1 = StdRng::seed_from_u64(42);
        let mut rng2 = StdRng::seed_from_u64(42);
        let c1 = generate_daily_curve(&plant(), &mut rng1);
        let c2 = generate_daily_curve(&plant(), &mut rng2);

        for (a, b) in c1.iter().zip(&c2) {
            assert_eq!(a.solar_kw, b.solar_kw);
            assert_eq!(a.consumption_kw, b.consumption_kw);
        }
    }

    #[test]
    fn zero_jitter_reproduces_the_pure_bell() {
        let mut cfg = plant();
        cfg.solar_jitter_kw = 0.0;
        cfg.load_jitter_kw = 0.0;
        let mut rng = StdRng::seed_from_u64(0);
        let curve = generate_daily_curve(&cfg, &mut rng);

        assert_eq!(curve[12].solar_kw, 85.0);
        assert_eq!(curve[6].solar_kw, 0.0);
        assert_eq!(curve[0].consumption_kw, 15.0);
        // hour 14 is the midpoint of the 6..=22 window: 35 + 15 * sin(pi/2)
        assert_eq!(curve[14].consumption_kw, 50.0);
    }

    #[test]
    fn serializes_with_dashboard_field_names() {
        let sample = HourlySample {
            time: "12:00".to_string(),
            solar_kw: 84.3,
            consumption_kw: 41.7,
        };
        let json = serde_json::to_value(&sample).expect("sample should serialize");
        assert_eq!(json["time"], "12:00");
        assert_eq!(json["solar"], 84.3);
        assert_eq!(json["consumption"], 41.7);
    }
}
