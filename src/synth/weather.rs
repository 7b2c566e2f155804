//! Current-conditions weather payload.
//!
//! The demo serves a fixed Gulf-summer forecast; there is no upstream
//! weather provider.

use serde::Serialize;

/// Current weather conditions plus a short generation outlook.
#[derive(Debug, Clone, Serialize)]
pub struct WeatherReport {
    /// Ambient temperature (°C).
    pub temperature: i32,
    /// Sky condition label.
    pub condition: &'static str,
    /// Wind speed (km/h).
    pub wind_speed: i32,
    /// Cloud cover (%).
    pub cloud_cover: i32,
    /// UV index.
    pub uv_index: i32,
    /// Generation outlook for the day.
    pub forecast: GenerationOutlook,
}

/// Free-text outlook shown under the weather tile.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationOutlook {
    pub description: &'static str,
    pub peak_generation: &'static str,
}

impl WeatherReport {
    /// Returns the canned current-conditions report.
    pub fn current() -> Self {
        Self {
            temperature: 27,
            condition: "Partly Cloudy",
            wind_speed: 12,
            cloud_cover: 35,
            uv_index: 8,
            forecast: GenerationOutlook {
                description: "Excellent conditions for solar generation today.",
                peak_generation: "95 kW at 1:00 PM",
            },
        }
    }
}
