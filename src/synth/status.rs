//! System component health payload.

use serde::Serialize;

/// Health of one monitored subsystem.
#[derive(Debug, Clone, Serialize)]
pub struct ComponentStatus {
    /// Display name.
    pub name: &'static str,
    /// `"online"` or `"warning"`.
    pub status: &'static str,
    /// Short status detail shown next to the badge.
    pub value: &'static str,
}

/// Component list plus an overall health verdict.
#[derive(Debug, Clone, Serialize)]
pub struct SystemStatus {
    pub components: Vec<ComponentStatus>,
    pub overall_health: &'static str,
}

impl SystemStatus {
    /// Returns the canned component-health report.
    pub fn current() -> Self {
        Self {
            components: vec![
                ComponentStatus {
                    name: "Solar Inverters",
                    status: "online",
                    value: "4/4 Active",
                },
                ComponentStatus {
                    name: "IoT Sensors",
                    status: "online",
                    value: "28/30 Connected",
                },
                ComponentStatus {
                    name: "Data Collection",
                    status: "online",
                    value: "99.8% Uptime",
                },
                ComponentStatus {
                    name: "Security",
                    status: "warning",
                    value: "Certificate Expiring",
                },
            ],
            overall_health: "Excellent",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_lists_four_components() {
        let status = SystemStatus::current();
        assert_eq!(status.components.len(), 4);
        assert_eq!(status.overall_health, "Excellent");

        let warnings: Vec<_> = status
            .components
            .iter()
            .filter(|c| c.status == "warning")
            .collect();
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].name, "Security");
    }
}
