//! Demo backend for the SolarSense solar-IoT monitoring dashboard.
//!
//! Every endpoint returns synthetically generated data — there is no real
//! device telemetry behind it. The interesting part lives in [`synth`], which
//! shapes plausible daily generation/consumption curves and samples the rest
//! of the dashboard payloads from bounded random ranges.

pub mod api;
pub mod config;
/// Synthetic data generators for curves, metrics, insights, and forecasts.
pub mod synth;
