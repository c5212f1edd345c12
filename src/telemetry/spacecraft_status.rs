use strum_macros::{Display, EnumIter};

/// Discrete health classification of the spacecraft.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Display, EnumIter, serde::Serialize, serde::Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum SpacecraftStatus {
    Active,
    Maintenance,
    Critical,
}

impl SpacecraftStatus {
    const CRITICAL_FUEL: f64 = 10.0;
    const CRITICAL_HEALTH: f64 = 40.0;
    const MAINTENANCE_FUEL: f64 = 30.0;
    const MAINTENANCE_HEALTH: f64 = 70.0;

    /// Classifies fuel and system health, critical conditions take precedence over maintenance.
    pub fn classify(fuel: f64, system_health: f64) -> Self {
        if fuel < Self::CRITICAL_FUEL || system_health < Self::CRITICAL_HEALTH {
            SpacecraftStatus::Critical
        } else if fuel < Self::MAINTENANCE_FUEL || system_health < Self::MAINTENANCE_HEALTH {
            SpacecraftStatus::Maintenance
        } else {
            SpacecraftStatus::Active
        }
    }
}

impl From<&str> for SpacecraftStatus {
    fn from(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "active" => SpacecraftStatus::Active,
            "maintenance" => SpacecraftStatus::Maintenance,
            _ => SpacecraftStatus::Critical,
        }
    }
}
