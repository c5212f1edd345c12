use super::{
    AdvisoryAction, Anomaly, AnomalyDetector, Priority, RecommendationType, RiskLevel, TelemetryHistory, analyze,
    generate_mission_plan, predict_fuel_usage,
};
use crate::nav_control::Vec3D;
use crate::telemetry::Telemetry;
use chrono::{TimeDelta, Utc};
use itertools::Itertools;

fn nominal() -> Telemetry { Telemetry::initial(Utc::now()) }

fn feed(detector: &mut AnomalyDetector, samples: impl IntoIterator<Item = Telemetry>) -> Vec<Anomaly> {
    samples.into_iter().map(|t| detector.observe(&t)).last().unwrap_or_default()
}

#[test]
fn test_nominal_snapshot_has_no_recommendations() {
    assert!(analyze(&nominal()).is_empty());
}

#[test]
fn test_critical_fuel_only() {
    let t = Telemetry { fuel: 15.0, system_health: 94.0, ..nominal() };
    let recs = analyze(&t);
    assert_eq!(recs.len(), 1);
    assert_eq!(recs[0].rec_type(), RecommendationType::Fuel);
    assert_eq!(recs[0].priority(), Priority::Critical);
    assert_eq!(recs[0].action(), Some(AdvisoryAction::AbortMission));
    assert!(recs.iter().all(|r| r.rec_type() != RecommendationType::Maintenance));
    assert_eq!(
        recs[0].message(),
        "Critical fuel level: 15%. Immediate refueling or mission abort required."
    );
}

#[test]
fn test_low_fuel_is_exclusive_with_critical_fuel() {
    let recs = analyze(&Telemetry { fuel: 35.5, ..nominal() });
    assert_eq!(recs.len(), 1);
    assert_eq!(recs[0].priority(), Priority::High);
    assert_eq!(recs[0].action(), Some(AdvisoryAction::OptimizeTrajectory));
    assert_eq!(recs[0].message(), "Low fuel warning: 35.5%. Consider fuel-efficient maneuvers.");
    assert!(analyze(&Telemetry { fuel: 40.0, ..nominal() }).is_empty());
}

#[test]
fn test_all_rules_fire_in_fixed_order() {
    let t = Telemetry { fuel: 5.0, system_health: 45.0, temperature: -55.0, radiation: 1200.0, ..nominal() };
    let recs = analyze(&t);
    let actions = recs.iter().filter_map(|r| r.action()).collect::<Vec<_>>();
    assert_eq!(
        actions,
        vec![
            AdvisoryAction::AbortMission,
            AdvisoryAction::RunDiagnostics,
            AdvisoryAction::ThermalRegulation,
            AdvisoryAction::AvoidRadiation,
        ]
    );
    assert_eq!(recs[2].priority(), Priority::Medium);
    assert_eq!(recs[3].rec_type(), RecommendationType::Navigation);
    assert_eq!(recs[3].message(), "High radiation detected: 1200 mSv/h. Consider course correction.");
    // unsorted by design, sorting is left to the caller
    let by_priority = recs.iter().map(|r| r.priority()).sorted().rev().collect::<Vec<_>>();
    assert_eq!(by_priority, vec![Priority::Critical, Priority::High, Priority::High, Priority::Medium]);
}

#[test]
fn test_temperature_thresholds_are_exclusive() {
    assert!(analyze(&Telemetry { temperature: 80.0, ..nominal() }).is_empty());
    assert!(analyze(&Telemetry { temperature: -50.0, ..nominal() }).is_empty());
    assert_eq!(analyze(&Telemetry { temperature: 80.5, ..nominal() }).len(), 1);
}

#[test]
fn test_analyze_is_idempotent() {
    let t = Telemetry { fuel: 12.0, system_health: 50.0, radiation: 1500.0, ..nominal() };
    assert_eq!(analyze(&t), analyze(&t));
    assert!(analyze(&t).iter().all(|r| r.timestamp() == t.last_update));
}

#[test]
fn test_action_tags_render_as_constants() {
    assert_eq!(AdvisoryAction::AbortMission.to_string(), "ABORT_MISSION");
    assert_eq!(AdvisoryAction::ThermalRegulation.to_string(), "THERMAL_REGULATION");
    assert_eq!(Priority::Critical.to_string(), "critical");
    assert!(Priority::Low < Priority::Medium && Priority::High < Priority::Critical);
}

#[test]
fn test_rapid_fuel_depletion() {
    let mut detector = AnomalyDetector::new();
    let fuels = [95.0, 90.0, 86.0, 82.0, 78.0, 75.0];
    let anomalies = feed(&mut detector, fuels.map(|fuel| Telemetry { fuel, ..nominal() }));
    assert_eq!(anomalies, vec![Anomaly::RapidFuelDepletion]);
    assert_eq!(anomalies[0].to_string(), "Rapid fuel depletion detected");
}

#[test]
fn test_small_fuel_drop_is_ignored() {
    let mut detector = AnomalyDetector::new();
    let fuels = [95.0, 90.0, 88.0, 86.0, 84.0, 82.0];
    assert!(feed(&mut detector, fuels.map(|fuel| Telemetry { fuel, ..nominal() })).is_empty());
}

#[test]
fn test_needs_more_than_five_samples() {
    let mut detector = AnomalyDetector::new();
    let fuels = [90.0, 85.0, 80.0, 75.0, 70.0];
    for fuel in fuels {
        assert!(detector.observe(&Telemetry { fuel, ..nominal() }).is_empty());
    }
    assert_eq!(detector.observe(&Telemetry { fuel: 65.0, ..nominal() }), vec![Anomaly::RapidFuelDepletion]);
}

#[test]
fn test_temperature_instability_and_health_degradation() {
    let mut detector = AnomalyDetector::new();
    let samples = [(20.0, 90.0), (20.0, 90.0), (-5.0, 88.0), (30.0, 80.0), (10.0, 76.0), (0.0, 74.0)]
        .map(|(temperature, system_health)| Telemetry { temperature, system_health, ..nominal() });
    assert_eq!(
        feed(&mut detector, samples),
        vec![Anomaly::TemperatureInstability, Anomaly::HealthDegradation]
    );
}

#[test]
fn test_history_is_bounded_fifo() {
    let mut detector = AnomalyDetector::new();
    for i in 0..150 {
        detector.observe(&Telemetry { fuel: f64::from(i), ..nominal() });
    }
    assert_eq!(detector.history().len(), TelemetryHistory::DEFAULT_CAPACITY);
    assert_eq!(detector.history().oldest().unwrap().fuel, 50.0);
    assert_eq!(detector.history().newest().unwrap().fuel, 149.0);
    let recent = detector.history().recent(3).map(|t| t.fuel).collect::<Vec<_>>();
    assert_eq!(recent, vec![147.0, 148.0, 149.0]);

    let mut small = TelemetryHistory::new(2);
    small.push(nominal());
    assert_eq!(small.recent(5).count(), 1);
}

#[test]
fn test_fuel_prediction() {
    let t = Telemetry { velocity: Vec3D::new(600.0, 0.0, 800.0), system_health: 50.0, ..nominal() };
    // (0.1 + 1.0) * 2h * 1.5
    assert!((predict_fuel_usage(&t, 2.0) - 3.3).abs() < 1e-9);
    assert_eq!(predict_fuel_usage(&nominal(), 0.0), 0.0);
}

#[test]
fn test_mission_plan() {
    let now = Utc::now();
    let t = Telemetry { velocity: Vec3D::new(0.0, 0.0, 0.0), system_health: 100.0, fuel: 50.0, ..nominal() };
    let plan = generate_mission_plan(Vec3D::zero(), Vec3D::new(30_000.0, 40_000.0, 0.0), &t, now);

    assert!((plan.duration() - 5.0).abs() < 1e-9);
    assert!((plan.fuel_requirement() - 0.5).abs() < 1e-9);
    assert_eq!(plan.risk_level(), RiskLevel::Low);
    assert_eq!(plan.name(), "Navigation to Target 30000, 40000");
    assert_eq!(plan.id(), format!("mission-{}", now.timestamp_millis()));
    assert_eq!(plan.launch_window().end - plan.launch_window().start, TimeDelta::hours(24));
    assert_eq!(plan.launch_window().optimal, now + TimeDelta::hours(2));
    assert_eq!(plan.trajectory().len(), 2);
    assert_eq!(plan.trajectory().cost(), 50_000.0);
    assert_eq!(plan.objectives().len(), 3);
}

#[test]
fn test_mission_plan_risk_levels() {
    let now = Utc::now();
    let fast = Telemetry { velocity: Vec3D::new(1000.0, 0.0, 0.0), system_health: 100.0, fuel: 10.0, ..nominal() };
    // 1.1 per hour: 7h -> 7.7 of 10 is medium, 8h -> 8.8 is high
    let medium = generate_mission_plan(Vec3D::zero(), Vec3D::new(70_000.0, 0.0, 0.0), &fast, now);
    let high = generate_mission_plan(Vec3D::zero(), Vec3D::new(80_000.0, 0.0, 0.0), &fast, now);
    assert_eq!(medium.risk_level(), RiskLevel::Medium);
    assert_eq!(high.risk_level(), RiskLevel::High);
}
