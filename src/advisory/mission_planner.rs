use crate::nav_control::{Route, RouteNode, Vec2D, Vec3D};
use crate::telemetry::Telemetry;
use chrono::{DateTime, TimeDelta, Utc};
use strum_macros::{Display, EnumIter};

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash, Display, EnumIter, serde::Serialize, serde::Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LaunchWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub optimal: DateTime<Utc>,
}

/// A coarse direct-transfer plan from the current position to a target.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MissionPlan {
    id: String,
    name: String,
    launch_window: LaunchWindow,
    trajectory: Route,
    fuel_requirement: f64,
    /// Transfer duration in hours.
    duration: f64,
    risk_level: RiskLevel,
    objectives: Vec<String>,
}

impl MissionPlan {
    pub fn id(&self) -> &str { &self.id }

    pub fn name(&self) -> &str { &self.name }

    pub fn launch_window(&self) -> LaunchWindow { self.launch_window }

    pub fn trajectory(&self) -> &Route { &self.trajectory }

    pub fn fuel_requirement(&self) -> f64 { self.fuel_requirement }

    pub fn duration(&self) -> f64 { self.duration }

    pub fn risk_level(&self) -> RiskLevel { self.risk_level }

    pub fn objectives(&self) -> &[String] { &self.objectives }
}

const BASE_CONSUMPTION: f64 = 0.1;
const VELOCITY_NORM: f64 = 1000.0;
/// Transfer speed used for duration estimates, in km/h.
const TRANSFER_SPEED: f64 = 10_000.0;
const HIGH_RISK_SHARE: f64 = 0.8;
const MEDIUM_RISK_SHARE: f64 = 0.6;
const WINDOW_LENGTH: TimeDelta = TimeDelta::hours(24);
const WINDOW_OPTIMAL: TimeDelta = TimeDelta::hours(2);
const OBJECTIVES: [&str; 3] =
    ["Navigate to target coordinates", "Maintain system integrity", "Optimize fuel consumption"];

/// Estimates the fuel percentage consumed over `mission_duration` hours.
///
/// Consumption grows with the current speed and with degraded system health.
pub fn predict_fuel_usage(telemetry: &Telemetry, mission_duration: f64) -> f64 {
    let velocity_factor = telemetry.velocity.abs() / VELOCITY_NORM;
    let efficiency_factor = telemetry.system_health / 100.0;
    (BASE_CONSUMPTION + velocity_factor) * mission_duration * (2.0 - efficiency_factor)
}

/// Builds a direct-transfer plan from `start_pos` to `target_pos`.
pub fn generate_mission_plan(
    start_pos: Vec3D,
    target_pos: Vec3D,
    telemetry: &Telemetry,
    now: DateTime<Utc>,
) -> MissionPlan {
    let distance = start_pos.euclid_distance(&target_pos);
    let duration = distance / TRANSFER_SPEED;
    let fuel_requirement = predict_fuel_usage(telemetry, duration);

    let risk_level = if fuel_requirement > telemetry.fuel * HIGH_RISK_SHARE {
        RiskLevel::High
    } else if fuel_requirement > telemetry.fuel * MEDIUM_RISK_SHARE {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    };

    let trajectory = Route::new(vec![
        RouteNode::new(Vec2D::new(start_pos.x, start_pos.y), 0.0, 0.0),
        RouteNode::new(Vec2D::new(target_pos.x, target_pos.y), distance, 0.0),
    ]);

    MissionPlan {
        id: format!("mission-{}", now.timestamp_millis()),
        name: format!("Navigation to Target {:.0}, {:.0}", target_pos.x, target_pos.y),
        launch_window: LaunchWindow { start: now, end: now + WINDOW_LENGTH, optimal: now + WINDOW_OPTIMAL },
        trajectory,
        fuel_requirement,
        duration,
        risk_level,
        objectives: OBJECTIVES.iter().map(ToString::to_string).collect(),
    }
}
