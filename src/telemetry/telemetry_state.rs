use super::{spacecraft_status::SpacecraftStatus, telemetry_error::TelemetryError};
use crate::nav_control::Vec3D;
use chrono::{DateTime, Utc};

/// One snapshot of the spacecraft's physical and system state.
///
/// Percentages (`fuel`, `battery_level`, `system_health`) are in `[0, 100]`,
/// temperature in °C within `[-60, 100]`, radiation in mSv/h within `[0, 2000]`.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Telemetry {
    pub id: String,
    pub name: String,
    /// Position in km.
    pub position: Vec3D,
    /// Velocity in km/h.
    pub velocity: Vec3D,
    pub fuel: f64,
    pub temperature: f64,
    pub radiation: f64,
    pub battery_level: f64,
    pub system_health: f64,
    pub status: SpacecraftStatus,
    pub last_update: DateTime<Utc>,
}

impl Telemetry {
    pub const SPACECRAFT_ID: &'static str = "astromind-1";
    pub const SPACECRAFT_NAME: &'static str = "AstroMind Explorer";
    pub const PERCENT_RANGE: (f64, f64) = (0.0, 100.0);
    pub const TEMPERATURE_RANGE: (f64, f64) = (-60.0, 100.0);
    pub const RADIATION_RANGE: (f64, f64) = (0.0, 2000.0);

    /// The state the spacecraft is in before its first tick.
    pub fn initial(now: DateTime<Utc>) -> Self {
        Self {
            id: String::from(Self::SPACECRAFT_ID),
            name: String::from(Self::SPACECRAFT_NAME),
            position: Vec3D::zero(),
            velocity: Vec3D::zero(),
            fuel: 85.0,
            temperature: 23.0,
            radiation: 150.0,
            battery_level: 87.0,
            system_health: 94.0,
            status: SpacecraftStatus::Active,
            last_update: now,
        }
    }

    /// Checks every scalar against its documented range and both vectors for finiteness.
    ///
    /// # Errors
    /// The first offending field as a [`TelemetryError`].
    pub fn validate(&self) -> Result<(), TelemetryError> {
        if !self.position.is_finite() {
            return Err(TelemetryError::NonFiniteVector { field: "position" });
        }
        if !self.velocity.is_finite() {
            return Err(TelemetryError::NonFiniteVector { field: "velocity" });
        }
        TelemetryError::check_range("fuel", self.fuel, Self::PERCENT_RANGE)?;
        TelemetryError::check_range("temperature", self.temperature, Self::TEMPERATURE_RANGE)?;
        TelemetryError::check_range("radiation", self.radiation, Self::RADIATION_RANGE)?;
        TelemetryError::check_range("battery_level", self.battery_level, Self::PERCENT_RANGE)?;
        TelemetryError::check_range("system_health", self.system_health, Self::PERCENT_RANGE)
    }

    /// Re-derives `status` from the current fuel and health values.
    #[must_use]
    pub fn reclassified(mut self) -> Self {
        self.status = SpacecraftStatus::classify(self.fuel, self.system_health);
        self
    }
}

impl Default for Telemetry {
    fn default() -> Self { Self::initial(Utc::now()) }
}
