//! Probabilistic anomaly-scan payload.

use chrono::{DateTime, Local};
use rand::Rng;
use rand::seq::IndexedRandom;
use serde::Serialize;

/// Chance that a scan reports any anomalies at all.
const ANOMALY_PROBABILITY: f64 = 0.3;

/// One entry of the anomaly pool, before selection.
#[derive(Debug, Clone)]
pub struct AnomalyTemplate {
    pub kind: &'static str,
    pub description: &'static str,
    pub severity: &'static str,
    pub confidence: f64,
}

/// A detected anomaly with its request-scoped id and timestamp.
#[derive(Debug, Clone, Serialize)]
pub struct Anomaly {
    /// Sequential id within this response, starting at 1.
    pub id: usize,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub description: &'static str,
    /// `low`, `medium`, or `high`.
    pub severity: &'static str,
    /// Detector confidence, 0.0..=1.0.
    pub confidence: f64,
    pub timestamp: DateTime<Local>,
}

const ANOMALY_POOL: &[AnomalyTemplate] = &[
    AnomalyTemplate {
        kind: "performance_drop",
        description: "Unusual drop in solar panel efficiency detected in Zone A",
        severity: "medium",
        confidence: 0.87,
    },
    AnomalyTemplate {
        kind: "consumption_spike",
        description: "Energy consumption 25% higher than expected for current time",
        severity: "low",
        confidence: 0.92,
    },
    AnomalyTemplate {
        kind: "inverter_issue",
        description: "Inverter voltage fluctuations outside normal range",
        severity: "high",
        confidence: 0.95,
    },
];

/// Runs one scan: with probability 0.3 it reports one or two distinct
/// anomalies from the pool, otherwise none.
pub fn scan(now: DateTime<Local>, rng: &mut impl Rng) -> Vec<Anomaly> {
    if rng.random::<f64>() >= ANOMALY_PROBABILITY {
        return Vec::new();
    }

    let count = rng.random_range(1..=2);
    ANOMALY_POOL
        .choose_multiple(rng, count)
        .enumerate()
        .map(|(i, t)| Anomaly {
            id: i + 1,
            kind: t.kind,
            description: t.description,
            severity: t.severity,
            confidence: t.confidence,
            timestamp: now,
        })
        .collect()
}
