//! TOML-based service configuration.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::Deserialize;

/// Top-level dashboard configuration parsed from TOML.
///
/// All fields have defaults matching the demo deployment. Load from TOML with
/// [`DashboardConfig::from_toml_file`] or use [`DashboardConfig::default`]
/// for the built-in values.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DashboardConfig {
    /// HTTP listener parameters.
    pub server: ServerConfig,
    /// Plant curve-shape parameters.
    pub plant: PlantConfig,
    /// Tariff and emissions conversion rates.
    pub tariff: TariffConfig,
}

/// HTTP listener parameters.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    /// Bind address.
    pub host: String,
    /// Bind port.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
        }
    }
}

/// Parameters shaping the synthetic generation and consumption curves.
///
/// Defaults model an ~85 kW commercial rooftop array with a 6:00–18:00
/// daylight window and an occupancy-driven load between 6:00 and 22:00.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlantConfig {
    /// Peak generation at solar noon (kW).
    pub peak_solar_kw: f64,
    /// First hour with generation (inclusive, 0-23).
    pub sunrise_hour: u32,
    /// Last hour with generation (inclusive, 0-23).
    pub sunset_hour: u32,
    /// Half-width of the uniform jitter applied to generation (kW).
    pub solar_jitter_kw: f64,
    /// Overnight baseline consumption (kW).
    pub idle_load_kw: f64,
    /// Daytime baseline consumption (kW).
    pub active_load_kw: f64,
    /// Amplitude of the daytime consumption swell (kW).
    pub active_amp_kw: f64,
    /// First hour of the active-load window (inclusive, 0-23).
    pub active_start_hour: u32,
    /// Last hour of the active-load window (inclusive, 0-23).
    pub active_end_hour: u32,
    /// Half-width of the uniform jitter applied to consumption (kW).
    pub load_jitter_kw: f64,
    /// Hard floor on reported consumption (kW).
    pub min_load_kw: f64,
}

impl Default for PlantConfig {
    fn default() -> Self {
        Self {
            peak_solar_kw: 85.0,
            sunrise_hour: 6,
            sunset_hour: 18,
            solar_jitter_kw: 10.0,
            idle_load_kw: 15.0,
            active_load_kw: 35.0,
            active_amp_kw: 15.0,
            active_start_hour: 6,
            active_end_hour: 22,
            load_jitter_kw: 5.0,
            min_load_kw: 5.0,
        }
    }
}

/// Tariff and emissions conversion rates.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TariffConfig {
    /// Grid tariff (AED per kWh).
    pub rate_aed_per_kwh: f64,
    /// Avoided emissions factor (kg CO2 per kWh).
    pub co2_kg_per_kwh: f64,
}

impl Default for TariffConfig {
    fn default() -> Self {
        Self {
            rate_aed_per_kwh: 0.38,
            co2_kg_per_kwh: 0.5,
        }
    }
}

/// Configuration error with field path and constraint description.
#[derive(Debug)]
pub struct ConfigError {
    /// Dotted field path (e.g., `"plant.sunrise_hour"`).
    pub field: String,
    /// Human-readable constraint description.
    pub message: String,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "config error: {} — {}", self.field, self.message)
    }
}

impl DashboardConfig {
    /// Parses a configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the file cannot be read or the TOML is invalid.
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError {
            field: "config".to_string(),
            message: format!("cannot read \"{}\": {e}", path.display()),
        })?;
        Self::from_toml_str(&content)
    }

    /// Parses a configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the TOML is invalid or contains unknown fields.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(|e| ConfigError {
            field: "toml".to_string(),
            message: e.to_string(),
        })
    }

    /// Validates all fields and returns a list of errors.
    ///
    /// Returns an empty vector if configuration is valid.
    pub fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        let p = &self.plant;

        if p.sunrise_hour >= p.sunset_hour {
            errors.push(ConfigError {
                field: "plant.sunrise_hour".into(),
                message: format!(
                    "must be before sunset_hour ({} >= {})",
                    p.sunrise_hour, p.sunset_hour
                ),
            });
        }
        if p.sunset_hour > 23 {
            errors.push(ConfigError {
                field: "plant.sunset_hour".into(),
                message: "must be <= 23".into(),
            });
        }
        if p.active_start_hour >= p.active_end_hour {
            errors.push(ConfigError {
                field: "plant.active_start_hour".into(),
                message: format!(
                    "must be before active_end_hour ({} >= {})",
                    p.active_start_hour, p.active_end_hour
                ),
            });
        }
        if p.active_end_hour > 23 {
            errors.push(ConfigError {
                field: "plant.active_end_hour".into(),
                message: "must be <= 23".into(),
            });
        }
        if p.peak_solar_kw < 0.0 {
            errors.push(ConfigError {
                field: "plant.peak_solar_kw".into(),
                message: "must be >= 0".into(),
            });
        }
        if p.solar_jitter_kw < 0.0 {
            errors.push(ConfigError {
                field: "plant.solar_jitter_kw".into(),
                message: "must be >= 0".into(),
            });
        }
        if p.load_jitter_kw < 0.0 {
            errors.push(ConfigError {
                field: "plant.load_jitter_kw".into(),
                message: "must be >= 0".into(),
            });
        }
        if p.min_load_kw < 0.0 {
            errors.push(ConfigError {
                field: "plant.min_load_kw".into(),
                message: "must be >= 0".into(),
            });
        }

        let t = &self.tariff;
        if t.rate_aed_per_kwh < 0.0 {
            errors.push(ConfigError {
                field: "tariff.rate_aed_per_kwh".into(),
                message: "must be >= 0".into(),
            });
        }
        if t.co2_kg_per_kwh < 0.0 {
            errors.push(ConfigError {
                field: "tariff.co2_kg_per_kwh".into(),
                message: "must be >= 0".into(),
            });
        }

        errors
    }
}
