//! API response envelopes.
//!
//! Field names match the dashboard frontend's contract, carried over from
//! the original deployment (`data`/`last_updated`, insight `type` keys, ...).

use chrono::{DateTime, Local};
use serde::Serialize;

use crate::synth::anomaly::Anomaly;
use crate::synth::curve::HourlySample;
use crate::synth::forecast::DayPrediction;
use crate::synth::insights::{Insight, OptimizationSuggestion};

/// `GET /api/solar/energy-data` body.
#[derive(Debug, Serialize)]
pub struct EnergyDataResponse {
    /// 24 hourly samples, 00:00 through 23:00.
    pub data: Vec<HourlySample>,
    pub last_updated: DateTime<Local>,
}

/// `GET /api/ai/insights` body.
#[derive(Debug, Serialize)]
pub struct InsightsResponse {
    pub insights: Vec<Insight>,
    /// Sum of `potential_savings` over the selection (AED/month).
    pub total_potential_savings: u32,
    pub last_updated: DateTime<Local>,
}

/// `GET /api/ai/predictions` body.
#[derive(Debug, Serialize)]
pub struct PredictionsResponse {
    /// One entry per upcoming day, 1..=7.
    pub predictions: Vec<DayPrediction>,
    /// Model confidence (percent).
    pub confidence_level: f64,
    pub model_version: &'static str,
    pub last_updated: DateTime<Local>,
}

/// `GET /api/ai/anomalies` body.
#[derive(Debug, Serialize)]
pub struct AnomaliesResponse {
    pub anomalies: Vec<Anomaly>,
    pub total_count: usize,
    pub last_scan: DateTime<Local>,
}

/// `GET /api/ai/optimization-suggestions` body.
#[derive(Debug, Serialize)]
pub struct SuggestionsResponse {
    pub suggestions: Vec<OptimizationSuggestion>,
    /// Combined monthly savings across all suggestions (AED).
    pub total_potential_savings: u32,
    pub implementation_priority: &'static str,
    pub last_updated: DateTime<Local>,
}
