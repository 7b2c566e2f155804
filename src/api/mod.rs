//! REST API serving the dashboard payloads.
//!
//! All routes are GET and regenerate their payload on every request:
//! - `/health` — liveness probe
//! - `/api/solar/*` — metrics, hourly energy data, weather, system status
//! - `/api/ai/*` — insights, predictions, anomalies, optimization suggestions

mod handlers;
mod types;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::config::DashboardConfig;

/// Immutable application state shared across all request handlers.
///
/// Holds only configuration — every payload is synthesized per request, so
/// there is nothing mutable to share and no locks are needed.
pub struct AppState {
    /// Service configuration.
    pub config: DashboardConfig,
}

/// Builds the axum router with all API routes.
///
/// CORS is wide open: the dashboard frontend is served from a different
/// origin in the demo setup.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/api/solar/metrics", get(handlers::get_metrics))
        .route("/api/solar/energy-data", get(handlers::get_energy_data))
        .route("/api/solar/weather", get(handlers::get_weather))
        .route("/api/solar/system-status", get(handlers::get_system_status))
        .route("/api/ai/insights", get(handlers::get_insights))
        .route("/api/ai/predictions", get(handlers::get_predictions))
        .route("/api/ai/anomalies", get(handlers::get_anomalies))
        .route(
            "/api/ai/optimization-suggestions",
            get(handlers::get_optimization_suggestions),
        )
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Binds to the given address and serves the API.
///
/// # Panics
///
/// Panics if the TCP listener cannot bind to `addr`.
pub async fn serve(state: Arc<AppState>, addr: SocketAddr) {
    let app = router(state);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind to {addr}: {e}"));
    tracing::info!("dashboard API listening on http://{addr}");
    axum::serve(listener, app)
        .await
        .unwrap_or_else(|e| panic!("server error: {e}"));
}
