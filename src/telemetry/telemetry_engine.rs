use super::{spacecraft_status::SpacecraftStatus, telemetry_error::TelemetryError, telemetry_state::Telemetry};
use crate::nav_control::{Vec3D, common::math::{offset_uniform, symmetric_noise}};
use crate::{event, warn};
use chrono::{DateTime, Utc};
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Owns the single live telemetry record and advances it one stochastic tick at a time.
///
/// All randomness is drawn from the injected generator, so a seeded generator makes the
/// whole evolution reproducible.
#[derive(Debug)]
pub struct TelemetryEngine<R: Rng> {
    state: Telemetry,
    rng: R,
}

impl TelemetryEngine<StdRng> {
    /// Creates an engine with a deterministic generator.
    pub fn seeded(seed: u64) -> Self { Self::new(StdRng::seed_from_u64(seed)) }

    /// Creates an engine seeded from the operating system.
    pub fn from_os_rng() -> Self { Self::new(StdRng::from_os_rng()) }
}

impl<R: Rng> TelemetryEngine<R> {
    /// Position drift per tick as a fraction of velocity.
    const POS_VEL_FACTOR: f64 = 0.1;
    /// Noise spans (full width) per axis.
    const POS_NOISE: (f64, f64, f64) = (100.0, 100.0, 50.0);
    const VEL_NOISE: (f64, f64, f64) = (10.0, 10.0, 5.0);
    /// Velocity caps per axis, applied symmetrically.
    const VEL_CAP: (f64, f64, f64) = (1000.0, 1000.0, 500.0);

    const FUEL_VEL_DIVISOR: f64 = 10_000.0;
    const FUEL_IDLE_BURN: f64 = 0.1;

    const TEMP_NOISE: f64 = 5.0;
    const RAD_NOISE: f64 = 50.0;

    const BATTERY_NOISE: f64 = 2.0;
    /// Probability of the bright solar regime.
    const SOLAR_BRIGHT_P: f64 = 0.7;
    const SOLAR_EFFICIENCY: (f64, f64) = (1.2, 0.8);

    const HEALTH_STRESS_LEVEL: f64 = 20.0;
    const HEALTH_DECAY: f64 = 1.0;
    const HEALTH_FLOOR: f64 = 30.0;
    const HEALTH_REPAIR: f64 = 0.1;

    /// Thrust bands applied when the mission is activated, as `(base, span)` per axis.
    const THRUST: [(f64, f64); 3] = [(500.0, 200.0), (300.0, 200.0), (100.0, 100.0)];
    const COAST_DAMPING: f64 = 0.1;

    /// Creates an engine starting from [`Telemetry::initial`].
    pub fn new(rng: R) -> Self { Self { state: Telemetry::initial(Utc::now()), rng } }

    /// Creates an engine starting from a caller supplied state.
    ///
    /// The status is re-derived from the supplied fuel and health.
    ///
    /// # Errors
    /// A [`TelemetryError`] if any field lies outside its range or is not finite.
    pub fn with_state(state: Telemetry, rng: R) -> Result<Self, TelemetryError> {
        state.validate()?;
        Ok(Self { state: state.reclassified(), rng })
    }

    pub fn state(&self) -> &Telemetry { &self.state }

    /// Returns an owned copy of the current record.
    pub fn snapshot(&self) -> Telemetry { self.state.clone() }

    /// Advances the record by one tick stamped with the current time.
    pub fn tick(&mut self) -> &Telemetry { self.tick_at(Utc::now()) }

    /// Advances the record by one tick stamped with `now`.
    ///
    /// The steps are applied in a fixed order, and the status is classified last from the
    /// updated values.
    pub fn tick_at(&mut self, now: DateTime<Utc>) -> &Telemetry {
        let prev_status = self.state.status;
        self.update_position();
        self.update_velocity();
        self.update_fuel();
        self.update_environment();
        self.update_battery();
        self.update_health();
        self.state.status = SpacecraftStatus::classify(self.state.fuel, self.state.system_health);
        self.state.last_update = now;

        if prev_status != self.state.status {
            warn!("Spacecraft status changed from {prev_status} to {}", self.state.status);
        }
        event!(
            "Tick: fuel {:.2}%, battery {:.2}%, health {:.2}%",
            self.state.fuel,
            self.state.battery_level,
            self.state.system_health
        );
        &self.state
    }

    /// Switches between thrusting and coasting.
    ///
    /// Activation sets the velocity to a random value inside the fixed thrust bands,
    /// deactivation damps the current velocity instead of zeroing it.
    pub fn set_mission_active(&mut self, active: bool) {
        if active {
            let [x, y, z] = Self::THRUST.map(|(base, span)| offset_uniform(&mut self.rng, base, span));
            self.state.velocity = Vec3D::new(x, y, z);
        } else {
            self.state.velocity = self.state.velocity.scaled(Self::COAST_DAMPING);
        }
    }

    fn update_position(&mut self) {
        let vel = self.state.velocity.scaled(Self::POS_VEL_FACTOR);
        let noise = Vec3D::new(
            symmetric_noise(&mut self.rng, Self::POS_NOISE.0),
            symmetric_noise(&mut self.rng, Self::POS_NOISE.1),
            symmetric_noise(&mut self.rng, Self::POS_NOISE.2),
        );
        self.state.position = self.state.position + vel + noise;
    }

    fn update_velocity(&mut self) {
        let v = self.state.velocity
            + Vec3D::new(
                symmetric_noise(&mut self.rng, Self::VEL_NOISE.0),
                symmetric_noise(&mut self.rng, Self::VEL_NOISE.1),
                symmetric_noise(&mut self.rng, Self::VEL_NOISE.2),
            );
        self.state.velocity = Vec3D::new(
            v.x.clamp(-Self::VEL_CAP.0, Self::VEL_CAP.0),
            v.y.clamp(-Self::VEL_CAP.1, Self::VEL_CAP.1),
            v.z.clamp(-Self::VEL_CAP.2, Self::VEL_CAP.2),
        );
    }

    fn update_fuel(&mut self) {
        let burn = self.state.velocity.abs() / Self::FUEL_VEL_DIVISOR + Self::FUEL_IDLE_BURN;
        self.state.fuel = (self.state.fuel - burn).max(0.0);
    }

    fn update_environment(&mut self) {
        let temp = self.state.temperature + symmetric_noise(&mut self.rng, Self::TEMP_NOISE);
        self.state.temperature = temp.clamp(Telemetry::TEMPERATURE_RANGE.0, Telemetry::TEMPERATURE_RANGE.1);
        let rad = self.state.radiation + symmetric_noise(&mut self.rng, Self::RAD_NOISE);
        self.state.radiation = rad.clamp(Telemetry::RADIATION_RANGE.0, Telemetry::RADIATION_RANGE.1);
    }

    fn update_battery(&mut self) {
        let efficiency = if self.rng.random_bool(Self::SOLAR_BRIGHT_P) {
            Self::SOLAR_EFFICIENCY.0
        } else {
            Self::SOLAR_EFFICIENCY.1
        };
        let battery = self.state.battery_level + symmetric_noise(&mut self.rng, Self::BATTERY_NOISE) * efficiency;
        self.state.battery_level = battery.clamp(Telemetry::PERCENT_RANGE.0, Telemetry::PERCENT_RANGE.1);
    }

    fn update_health(&mut self) {
        let stressed =
            self.state.fuel < Self::HEALTH_STRESS_LEVEL || self.state.battery_level < Self::HEALTH_STRESS_LEVEL;
        self.state.system_health = if stressed {
            (self.state.system_health - Self::HEALTH_DECAY).max(Self::HEALTH_FLOOR)
        } else {
            (self.state.system_health + Self::HEALTH_REPAIR).min(Telemetry::PERCENT_RANGE.1)
        };
    }
}
