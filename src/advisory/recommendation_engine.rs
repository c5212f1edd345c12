use super::recommendation::{AdvisoryAction, Priority, Recommendation, RecommendationType};
use crate::telemetry::Telemetry;

const FUEL_CRITICAL: f64 = 20.0;
const FUEL_LOW: f64 = 40.0;
const HEALTH_DEGRADED: f64 = 60.0;
const TEMP_HIGH: f64 = 80.0;
const TEMP_LOW: f64 = -50.0;
const RADIATION_HIGH: f64 = 1000.0;

/// Evaluates the advisory rules against one snapshot.
///
/// Rules fire independently and are emitted in a fixed order: fuel, system health,
/// temperature, radiation. The list is not sorted by priority. Every recommendation is
/// stamped with the snapshot's `last_update`, so repeated calls on the same snapshot return
/// equal lists.
pub fn analyze(telemetry: &Telemetry) -> Vec<Recommendation> {
    let stamp = telemetry.last_update;
    let mut recs = Vec::new();

    if telemetry.fuel < FUEL_CRITICAL {
        recs.push(Recommendation::new(
            RecommendationType::Fuel,
            Priority::Critical,
            format!(
                "Critical fuel level: {}%. Immediate refueling or mission abort required.",
                telemetry.fuel
            ),
            Some(AdvisoryAction::AbortMission),
            stamp,
        ));
    } else if telemetry.fuel < FUEL_LOW {
        recs.push(Recommendation::new(
            RecommendationType::Fuel,
            Priority::High,
            format!("Low fuel warning: {}%. Consider fuel-efficient maneuvers.", telemetry.fuel),
            Some(AdvisoryAction::OptimizeTrajectory),
            stamp,
        ));
    }

    if telemetry.system_health < HEALTH_DEGRADED {
        recs.push(Recommendation::new(
            RecommendationType::Maintenance,
            Priority::High,
            format!(
                "System health degraded: {}%. Diagnostic check recommended.",
                telemetry.system_health
            ),
            Some(AdvisoryAction::RunDiagnostics),
            stamp,
        ));
    }

    if telemetry.temperature > TEMP_HIGH || telemetry.temperature < TEMP_LOW {
        recs.push(Recommendation::new(
            RecommendationType::Maintenance,
            Priority::Medium,
            format!(
                "Temperature anomaly detected: {}°C. Monitor thermal systems.",
                telemetry.temperature
            ),
            Some(AdvisoryAction::ThermalRegulation),
            stamp,
        ));
    }

    if telemetry.radiation > RADIATION_HIGH {
        recs.push(Recommendation::new(
            RecommendationType::Navigation,
            Priority::High,
            format!(
                "High radiation detected: {} mSv/h. Consider course correction.",
                telemetry.radiation
            ),
            Some(AdvisoryAction::AvoidRadiation),
            stamp,
        ));
    }

    recs
}
