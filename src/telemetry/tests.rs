use super::{SpacecraftStatus, Telemetry, TelemetryEngine, TelemetryError, TelemetryTicker};
use crate::nav_control::Vec3D;
use chrono::{TimeDelta, Utc};
use rand::{SeedableRng, rngs::StdRng};
use std::time::Duration;
use strum::IntoEnumIterator;

fn assert_within_bounds(t: &Telemetry) {
    assert!((0.0..=100.0).contains(&t.fuel), "fuel {}", t.fuel);
    assert!((0.0..=100.0).contains(&t.battery_level), "battery {}", t.battery_level);
    assert!((0.0..=100.0).contains(&t.system_health), "health {}", t.system_health);
    assert!((-60.0..=100.0).contains(&t.temperature), "temperature {}", t.temperature);
    assert!((0.0..=2000.0).contains(&t.radiation), "radiation {}", t.radiation);
    assert!(t.velocity.x.abs() <= 1000.0 && t.velocity.y.abs() <= 1000.0);
    assert!(t.velocity.z.abs() <= 500.0);
    assert!(t.position.x.is_finite() && t.position.y.is_finite() && t.position.z.is_finite());
}

#[test]
fn test_status_precedence() {
    assert_eq!(SpacecraftStatus::classify(5.0, 90.0), SpacecraftStatus::Critical);
    assert_eq!(SpacecraftStatus::classify(50.0, 39.9), SpacecraftStatus::Critical);
    assert_eq!(SpacecraftStatus::classify(25.0, 90.0), SpacecraftStatus::Maintenance);
    assert_eq!(SpacecraftStatus::classify(50.0, 65.0), SpacecraftStatus::Maintenance);
    assert_eq!(SpacecraftStatus::classify(30.0, 70.0), SpacecraftStatus::Active);
    for status in SpacecraftStatus::iter() {
        assert_eq!(SpacecraftStatus::from(status.to_string().as_str()), status);
    }
    assert_eq!(SpacecraftStatus::Maintenance.to_string(), "maintenance");
}

#[test]
fn test_clamp_bounds_hold_for_any_seed() {
    for seed in 0..20 {
        let mut engine = TelemetryEngine::seeded(seed);
        if seed % 2 == 0 {
            engine.set_mission_active(true);
        }
        for i in 0..2_000 {
            assert_within_bounds(engine.tick());
            if i % 500 == 250 {
                engine.set_mission_active(i % 1000 == 250);
            }
        }
    }
}

#[test]
fn test_clamp_bounds_from_extreme_state() {
    let extreme = Telemetry {
        velocity: Vec3D::new(1000.0, -1000.0, 500.0),
        fuel: 0.05,
        temperature: 99.9,
        radiation: 1999.0,
        battery_level: 0.3,
        system_health: 30.2,
        ..Telemetry::default()
    };
    let mut engine = TelemetryEngine::with_state(extreme, StdRng::seed_from_u64(3)).unwrap();
    for _ in 0..500 {
        assert_within_bounds(engine.tick());
    }
    assert_eq!(engine.state().fuel, 0.0);
    assert_eq!(engine.state().system_health, 30.0);
    assert_eq!(engine.state().status, SpacecraftStatus::Critical);
}

#[test]
fn test_out_of_range_state_is_rejected() {
    let overfull = Telemetry { fuel: 150.0, system_health: 250.0, ..Telemetry::default() };
    assert_eq!(
        TelemetryEngine::with_state(overfull, StdRng::seed_from_u64(3)).unwrap_err(),
        TelemetryError::OutOfRange { field: "fuel", value: 150.0, min: 0.0, max: 100.0 }
    );

    let cases = [
        Telemetry { temperature: -60.5, ..Telemetry::default() },
        Telemetry { radiation: f64::NAN, ..Telemetry::default() },
        Telemetry { battery_level: -0.1, ..Telemetry::default() },
        Telemetry { system_health: f64::INFINITY, ..Telemetry::default() },
    ];
    for state in cases {
        let err = TelemetryEngine::with_state(state, StdRng::seed_from_u64(3)).unwrap_err();
        assert!(matches!(err, TelemetryError::OutOfRange { .. }), "{err}");
    }

    let drifting = Telemetry { velocity: Vec3D::new(f64::NAN, 0.0, 0.0), ..Telemetry::default() };
    assert_eq!(
        TelemetryEngine::with_state(drifting, StdRng::seed_from_u64(3)).unwrap_err(),
        TelemetryError::NonFiniteVector { field: "velocity" }
    );
    let lost = Telemetry { position: Vec3D::new(0.0, f64::NEG_INFINITY, 0.0), ..Telemetry::default() };
    assert_eq!(
        TelemetryEngine::with_state(lost, StdRng::seed_from_u64(3)).unwrap_err(),
        TelemetryError::NonFiniteVector { field: "position" }
    );
}

#[test]
fn test_boundary_state_is_accepted_and_reclassified() {
    let full = Telemetry {
        fuel: 100.0,
        temperature: -60.0,
        radiation: 2000.0,
        battery_level: 100.0,
        system_health: 35.0,
        status: SpacecraftStatus::Active,
        ..Telemetry::default()
    };
    let mut engine = TelemetryEngine::with_state(full, StdRng::seed_from_u64(11)).unwrap();
    assert_eq!(engine.state().status, SpacecraftStatus::Critical);
    for _ in 0..200 {
        assert_within_bounds(engine.tick());
    }
}

#[test]
fn test_fuel_never_regenerates() {
    let mut engine = TelemetryEngine::seeded(42);
    engine.set_mission_active(true);
    let mut last_fuel = engine.state().fuel;
    for _ in 0..300 {
        let fuel = engine.tick().fuel;
        assert!(fuel <= last_fuel - 0.1 || fuel == 0.0);
        last_fuel = fuel;
    }
}

#[test]
fn test_health_repairs_when_unstressed() {
    let start = Telemetry { system_health: 80.0, ..Telemetry::default() };
    let mut engine = TelemetryEngine::with_state(start, StdRng::seed_from_u64(5)).unwrap();
    engine.tick();
    assert!((engine.state().system_health - 80.1).abs() < 1e-9);
}

#[test]
fn test_health_decays_under_low_fuel() {
    let start = Telemetry { fuel: 15.0, system_health: 31.5, ..Telemetry::default() };
    let mut engine = TelemetryEngine::with_state(start, StdRng::seed_from_u64(5)).unwrap();
    engine.tick();
    assert!((engine.state().system_health - 30.5).abs() < 1e-9);
    engine.tick();
    assert_eq!(engine.state().system_health, 30.0);
    assert_eq!(engine.state().status, SpacecraftStatus::Critical);
}

#[test]
fn test_seeded_engines_are_deterministic() {
    let now = Utc::now();
    let mut a = TelemetryEngine::with_state(Telemetry::initial(now), StdRng::seed_from_u64(9)).unwrap();
    let mut b = TelemetryEngine::with_state(Telemetry::initial(now), StdRng::seed_from_u64(9)).unwrap();
    for i in 0..50 {
        let t = now + TimeDelta::seconds(2 * i);
        assert_eq!(a.tick_at(t), b.tick_at(t));
    }
    assert_eq!(a.snapshot().last_update, now + TimeDelta::seconds(98));
}

#[test]
fn test_mission_toggle() {
    let mut engine = TelemetryEngine::seeded(1);
    engine.set_mission_active(true);
    let v = engine.state().velocity;
    assert!((500.0..700.0).contains(&v.x));
    assert!((300.0..500.0).contains(&v.y));
    assert!((100.0..200.0).contains(&v.z));

    engine.set_mission_active(false);
    let damped = engine.state().velocity;
    assert!((damped.x - v.x * 0.1).abs() < 1e-9);
    assert!((damped.y - v.y * 0.1).abs() < 1e-9);
    assert!((damped.z - v.z * 0.1).abs() < 1e-9);
}

#[test]
fn test_initial_state() {
    let t = Telemetry::default();
    assert_eq!(t.id, "astromind-1");
    assert_eq!(t.name, "AstroMind Explorer");
    assert_eq!((t.fuel, t.battery_level, t.system_health), (85.0, 87.0, 94.0));
    assert_eq!(t.status, SpacecraftStatus::Active);
    let low = Telemetry { fuel: 5.0, system_health: 90.0, ..t }.reclassified();
    assert_eq!(low.status, SpacecraftStatus::Critical);
}

#[tokio::test]
async fn test_ticker_delivers_snapshots() {
    let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
    let mut ticker = TelemetryTicker::new(TelemetryEngine::seeded(17));
    assert!(!ticker.is_running());
    assert!(ticker.start(move |t| { let _ = tx.send(t); }, Duration::from_millis(10)));
    assert!(ticker.is_running());
    assert!(!ticker.start(|_| {}, Duration::from_millis(10)));

    let mut received = Vec::new();
    for _ in 0..3 {
        let snapshot = tokio::time::timeout(Duration::from_secs(5), rx.recv()).await.unwrap().unwrap();
        received.push(snapshot);
    }
    ticker.stop();
    ticker.stop();
    assert!(!ticker.is_running());
    assert!(received.iter().all(|t| t.fuel < 85.0));
    assert!(received.windows(2).all(|w| w[1].fuel < w[0].fuel));
    assert!(ticker.snapshot().await.fuel <= received[2].fuel);
}

#[tokio::test]
async fn test_ticker_restart_and_mission_toggle() {
    let mut ticker = TelemetryTicker::new(TelemetryEngine::seeded(23));
    ticker.set_mission_active(true).await;
    assert!(ticker.snapshot().await.velocity.x >= 500.0);

    let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
    assert!(ticker.start(move |t| { let _ = tx.send(t); }, Duration::from_millis(5)));
    ticker.stop();
    let (tx2, mut rx2) = tokio::sync::mpsc::unbounded_channel();
    assert!(ticker.start(move |t| { let _ = tx2.send(t); }, Duration::from_millis(5)));
    let snapshot = tokio::time::timeout(Duration::from_secs(5), rx2.recv()).await.unwrap();
    assert!(snapshot.is_some());
    ticker.stop();
    // the first observer is dropped together with its cancelled task, closing the channel
    while tokio::time::timeout(Duration::from_secs(5), rx.recv()).await.unwrap().is_some() {}
}
