mod anomaly_detector;
mod mission_planner;
mod recommendation;
mod recommendation_engine;
#[cfg(test)]
mod tests;

pub use anomaly_detector::{Anomaly, AnomalyDetector, TelemetryHistory};
pub use mission_planner::{LaunchWindow, MissionPlan, RiskLevel, generate_mission_plan, predict_fuel_usage};
pub use recommendation::{AdvisoryAction, Priority, Recommendation, RecommendationType};
pub use recommendation_engine::analyze;
