#![allow(clippy::similar_names)]
use astromind_nav::{
    adv,
    advisory::{AnomalyDetector, analyze, generate_mission_plan},
    config::SimConfig,
    error, fatal, info, log, warn,
    nav_control::{ObstacleField, Pathfinder, Vec3D},
    telemetry::{TelemetryEngine, TelemetryTicker},
};
use chrono::Utc;
use rand::{Rng, SeedableRng, rngs::StdRng};
use tokio::sync::mpsc;

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() {
    let config = SimConfig::from_env();
    info!("Starting session: {config:?}");
    let mut rng = config.seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);

    plan_route(&config, &mut rng);
    run_telemetry(&config, StdRng::seed_from_u64(rng.random())).await;
}

fn plan_route(config: &SimConfig, rng: &mut StdRng) {
    let field = ObstacleField::generate(rng, config.field_width, config.field_height, config.obstacle_count)
        .unwrap_or_else(|e| fatal!("Cannot generate obstacle field: {e}"));
    let pathfinder = Pathfinder::new(field.obstacles(), config.grid_step, config.safety_margin)
        .unwrap_or_else(|e| fatal!("Invalid pathfinder configuration: {e}"))
        .with_bounds(field.bounds());
    let (start, goal) = (config.route_start(), config.route_goal());
    info!("Planning route {start} -> {goal} through {} asteroids", field.obstacles().len());
    for (label, point) in [("start", start), ("goal", goal)] {
        if let Some(obstacle) = field.first_collision(&point, config.safety_margin) {
            warn!("Route {label} {point} lies inside the safety zone of {}", obstacle.id());
        }
    }

    match pathfinder.find_path(start, goal) {
        Ok(route) if route.is_empty() => log!("No collision-free route exists in field {}", field.id()),
        Ok(route) => {
            log!("Route with {} waypoints, {:.1} km (direct {:.1} km)", route.len(), route.length(), start.euclid_distance(&goal));
            for (i, node) in route.nodes().iter().enumerate() {
                log!("  #{i:03} {} g={:.1} h={:.1}", node.pos(), node.g(), node.h());
            }
        }
        Err(e) => error!("Route search rejected: {e}"),
    }
}

async fn run_telemetry(config: &SimConfig, rng: StdRng) {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut ticker = TelemetryTicker::new(TelemetryEngine::new(rng));
    ticker.start(
        move |snapshot| {
            let _ = tx.send(snapshot);
        },
        config.tick_interval,
    );

    let mut detector = AnomalyDetector::new();
    let mut last = ticker.snapshot().await;
    for i in 0..config.ticks {
        if i == config.ticks / 2 {
            info!("Mission activated, engaging thrusters");
            ticker.set_mission_active(true).await;
        }
        let Some(telemetry) = rx.recv().await else {
            error!("Telemetry stream closed after {i} ticks");
            break;
        };
        log!(
            "[{}] pos {} vel {} fuel {:.1}% battery {:.1}% health {:.1}% temp {:.1}°C rad {:.0} mSv/h",
            telemetry.status,
            telemetry.position,
            telemetry.velocity,
            telemetry.fuel,
            telemetry.battery_level,
            telemetry.system_health,
            telemetry.temperature,
            telemetry.radiation
        );
        for rec in analyze(&telemetry) {
            let action = rec.action().map_or_else(String::new, |a| format!(" -> {a}"));
            adv!(rec.priority(), "{}: {}{action}", rec.rec_type(), rec.message());
        }
        for anomaly in detector.observe(&telemetry) {
            warn!("Anomaly: {anomaly}");
        }
        last = telemetry;
    }
    ticker.set_mission_active(false).await;
    ticker.stop();

    let target = Vec3D::new(config.field_width * 100.0, config.field_height * 100.0, 0.0);
    let plan = generate_mission_plan(last.position, target, &last, Utc::now());
    info!(
        "{} ({}): {:.2} h, fuel {:.2}%, risk {}",
        plan.name(),
        plan.id(),
        plan.duration(),
        plan.fuel_requirement(),
        plan.risk_level()
    );
}
