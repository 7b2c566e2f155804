//! AI-style insight and optimization-suggestion payloads.
//!
//! Insights are drawn from a fixed editorial pool; the "AI" is a random
//! sample of 4–6 entries per request.

use chrono::{DateTime, Local};
use rand::Rng;
use rand::seq::IndexedRandom;
use serde::Serialize;

/// One entry of the editorial insight pool, before selection.
#[derive(Debug, Clone)]
pub struct InsightTemplate {
    pub kind: &'static str,
    pub title: &'static str,
    pub message: &'static str,
    pub priority: &'static str,
    pub action: &'static str,
    pub potential_savings: u32,
}

/// A selected insight with its request-scoped id and timestamp.
#[derive(Debug, Clone, Serialize)]
pub struct Insight {
    /// Sequential id within this response, starting at 1.
    pub id: usize,
    /// Insight category: `optimization`, `maintenance`, `insight`, or `success`.
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub title: &'static str,
    pub message: &'static str,
    pub priority: &'static str,
    pub action: &'static str,
    /// Estimated monthly savings (AED).
    pub potential_savings: u32,
    pub timestamp: DateTime<Local>,
}

/// The full editorial pool the dashboard samples from.
pub const INSIGHT_POOL: &[InsightTemplate] = &[
    InsightTemplate {
        kind: "optimization",
        title: "Energy Optimization Opportunity",
        message: "HVAC system running 15% above optimal levels. Adjusting setpoint could save AED 450/month.",
        priority: "medium",
        action: "Optimize HVAC",
        potential_savings: 450,
    },
    InsightTemplate {
        kind: "maintenance",
        title: "Predictive Maintenance Alert",
        message: "Solar panel efficiency decreased by 3% in Zone B. Cleaning recommended within 7 days.",
        priority: "high",
        action: "Schedule Cleaning",
        potential_savings: 200,
    },
    InsightTemplate {
        kind: "insight",
        title: "Peak Load Optimization",
        message: "Shifting 20% of non-critical loads to off-peak hours could reduce costs by AED 280/month.",
        priority: "low",
        action: "Configure Schedule",
        potential_savings: 280,
    },
    InsightTemplate {
        kind: "success",
        title: "Efficiency Achievement",
        message: "Solar self-consumption increased by 12% this month. Excellent progress toward sustainability goals.",
        priority: "info",
        action: "View Details",
        potential_savings: 0,
    },
    InsightTemplate {
        kind: "optimization",
        title: "Battery Storage Optimization",
        message: "Battery charging schedule can be optimized for 18% better efficiency during peak hours.",
        priority: "medium",
        action: "Optimize Battery",
        potential_savings: 320,
    },
    InsightTemplate {
        kind: "maintenance",
        title: "Inverter Performance Alert",
        message: "Inverter #3 showing 5% efficiency drop. Inspection recommended to prevent further degradation.",
        priority: "high",
        action: "Schedule Inspection",
        potential_savings: 150,
    },
    InsightTemplate {
        kind: "insight",
        title: "Weather-Based Optimization",
        message: "Upcoming cloudy period detected. Pre-charging batteries recommended for optimal energy management.",
        priority: "low",
        action: "Pre-charge Batteries",
        potential_savings: 100,
    },
];

/// Samples 4–6 distinct insights from the pool and stamps them with
/// sequential ids and the given timestamp.
pub fn select_insights(now: DateTime<Local>, rng: &mut impl Rng) -> Vec<Insight> {
    let count = rng.random_range(4..=6).min(INSIGHT_POOL.len());
    INSIGHT_POOL
        .choose_multiple(rng, count)
        .enumerate()
        .map(|(i, t)| Insight {
            id: i + 1,
            kind: t.kind,
            title: t.title,
            message: t.message,
            priority: t.priority,
            action: t.action,
            potential_savings: t.potential_savings,
            timestamp: now,
        })
        .collect()
}

/// Sum of the estimated savings across a selection.
pub fn total_potential_savings(insights: &[Insight]) -> u32 {
    insights.iter().map(|i| i.potential_savings).sum()
}

/// A standing optimization recommendation.
#[derive(Debug, Clone, Serialize)]
pub struct OptimizationSuggestion {
    pub category: &'static str,
    pub suggestion: &'static str,
    pub impact: &'static str,
    pub estimated_savings: &'static str,
}

/// Combined monthly savings across [`optimization_suggestions`], in AED.
pub const SUGGESTIONS_TOTAL_SAVINGS: u32 = 1250;

/// Returns the standing optimization recommendations.
pub fn optimization_suggestions() -> Vec<OptimizationSuggestion> {
    vec![
        OptimizationSuggestion {
            category: "Energy Management",
            suggestion: "Implement load balancing during peak solar hours",
            impact: "High",
            estimated_savings: "AED 380/month",
        },
        OptimizationSuggestion {
            category: "Maintenance",
            suggestion: "Schedule preventive cleaning every 6 weeks",
            impact: "Medium",
            estimated_savings: "AED 220/month",
        },
        OptimizationSuggestion {
            category: "System Upgrade",
            suggestion: "Add battery storage for better energy independence",
            impact: "High",
            estimated_savings: "AED 650/month",
        },
    ]
}
