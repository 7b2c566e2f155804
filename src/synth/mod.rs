//! Synthetic data generators behind the dashboard endpoints.
//!
//! Every generator is a pure function over an explicit clock value and an
//! explicit random source, so unit tests pin a date and a seeded `StdRng`
//! while the handlers pass `Local::now()` and the thread RNG.

pub mod anomaly;
pub mod curve;
pub mod forecast;
pub mod insights;
pub mod metrics;
pub mod status;
pub mod weather;

/// Rounds to one decimal place.
pub(crate) fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

/// Rounds to two decimal places.
pub(crate) fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}
