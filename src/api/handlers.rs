//! Request handlers for the API endpoints.
//!
//! Every handler is a thin shim: grab the wall clock and the thread RNG,
//! call the pure generator, wrap the result in its envelope.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use chrono::Local;
use rand::Rng;
use serde_json::{Value, json};

use super::AppState;
use super::types::{
    AnomaliesResponse, EnergyDataResponse, InsightsResponse, PredictionsResponse,
    SuggestionsResponse,
};
use crate::synth::curve::generate_daily_curve;
use crate::synth::insights::{
    SUGGESTIONS_TOTAL_SAVINGS, optimization_suggestions, select_insights, total_potential_savings,
};
use crate::synth::metrics::MetricsSnapshot;
use crate::synth::status::SystemStatus;
use crate::synth::weather::WeatherReport;
use crate::synth::{anomaly, forecast};

/// Forecast model version advertised by `/api/ai/predictions`.
const MODEL_VERSION: &str = "2.1.0";

/// `GET /health` → 200 + liveness JSON.
pub async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "solarsense-api",
    }))
}

/// `GET /api/solar/metrics` → 200 + headline tiles.
pub async fn get_metrics(State(state): State<Arc<AppState>>) -> Json<MetricsSnapshot> {
    let mut rng = rand::rng();
    Json(MetricsSnapshot::sample(
        &Local::now(),
        &state.config.plant,
        &state.config.tariff,
        &mut rng,
    ))
}

/// `GET /api/solar/energy-data` → 200 + 24 hourly samples.
pub async fn get_energy_data(State(state): State<Arc<AppState>>) -> Json<EnergyDataResponse> {
    let mut rng = rand::rng();
    Json(EnergyDataResponse {
        data: generate_daily_curve(&state.config.plant, &mut rng),
        last_updated: Local::now(),
    })
}

/// `GET /api/solar/weather` → 200 + current conditions.
pub async fn get_weather() -> Json<WeatherReport> {
    Json(WeatherReport::current())
}

/// `GET /api/solar/system-status` → 200 + component health.
pub async fn get_system_status() -> Json<SystemStatus> {
    Json(SystemStatus::current())
}

/// `GET /api/ai/insights` → 200 + 4–6 sampled insights.
pub async fn get_insights() -> Json<InsightsResponse> {
    let mut rng = rand::rng();
    let now = Local::now();
    let insights = select_insights(now, &mut rng);
    let total = total_potential_savings(&insights);
    Json(InsightsResponse {
        insights,
        total_potential_savings: total,
        last_updated: now,
    })
}

/// `GET /api/ai/predictions` → 200 + 7-day forecast.
pub async fn get_predictions(State(state): State<Arc<AppState>>) -> Json<PredictionsResponse> {
    let mut rng = rand::rng();
    let now = Local::now();
    Json(PredictionsResponse {
        predictions: forecast::predict_week(now.date_naive(), &state.config.tariff, &mut rng),
        confidence_level: rng.random_range(85.0..=95.0),
        model_version: MODEL_VERSION,
        last_updated: now,
    })
}

/// `GET /api/ai/anomalies` → 200 + scan results.
pub async fn get_anomalies() -> Json<AnomaliesResponse> {
    let mut rng = rand::rng();
    let now = Local::now();
    let anomalies = anomaly::scan(now, &mut rng);
    let total_count = anomalies.len();
    Json(AnomaliesResponse {
        anomalies,
        total_count,
        last_scan: now,
    })
}

/// `GET /api/ai/optimization-suggestions` → 200 + standing recommendations.
pub async fn get_optimization_suggestions() -> Json<SuggestionsResponse> {
    Json(SuggestionsResponse {
        suggestions: optimization_suggestions(),
        total_potential_savings: SUGGESTIONS_TOTAL_SAVINGS,
        implementation_priority: "High",
        last_updated: Local::now(),
    })
}
