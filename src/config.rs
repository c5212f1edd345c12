use crate::nav_control::Vec2D;
use crate::warn;
use std::{env, str::FromStr, time::Duration};

/// Tunables of a simulation session, defaulting to the values of the operator display.
#[derive(Debug, Clone, PartialEq)]
pub struct SimConfig {
    pub tick_interval: Duration,
    /// Number of telemetry ticks the driver runs before shutting down.
    pub ticks: usize,
    pub seed: Option<u64>,
    pub field_width: f64,
    pub field_height: f64,
    pub obstacle_count: usize,
    pub grid_step: f64,
    pub safety_margin: f64,
}

impl SimConfig {
    const DEFAULT_TICK_MS: u64 = 2000;
    const DEFAULT_TICKS: usize = 10;
    const DEFAULT_FIELD: (f64, f64) = (800.0, 400.0);
    const DEFAULT_OBSTACLES: usize = 15;
    const DEFAULT_GRID_STEP: f64 = 20.0;
    const DEFAULT_SAFETY_MARGIN: f64 = 30.0;
    /// Distance of the route endpoints from the field corners.
    const CORNER_INSET: f64 = 50.0;

    /// Overlays `ASTRO_*` environment variables on the defaults.
    ///
    /// Unparsable values are reported and ignored.
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            tick_interval: Duration::from_millis(env_or("ASTRO_TICK_MS", Self::DEFAULT_TICK_MS)),
            ticks: env_or("ASTRO_TICKS", default.ticks),
            seed: env::var("ASTRO_SEED").ok().and_then(|v| parse_or_warn("ASTRO_SEED", &v)),
            obstacle_count: env_or("ASTRO_OBSTACLES", default.obstacle_count),
            grid_step: env_or("ASTRO_GRID_STEP", default.grid_step),
            safety_margin: env_or("ASTRO_SAFETY_MARGIN", default.safety_margin),
            ..default
        }
    }

    /// Route start near the top-left corner of the field.
    pub fn route_start(&self) -> Vec2D<f64> { Vec2D::new(Self::CORNER_INSET, Self::CORNER_INSET) }

    /// Route goal near the bottom-right corner of the field.
    pub fn route_goal(&self) -> Vec2D<f64> {
        Vec2D::new(self.field_width - Self::CORNER_INSET, self.field_height - Self::CORNER_INSET)
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            tick_interval: Duration::from_millis(Self::DEFAULT_TICK_MS),
            ticks: Self::DEFAULT_TICKS,
            seed: None,
            field_width: Self::DEFAULT_FIELD.0,
            field_height: Self::DEFAULT_FIELD.1,
            obstacle_count: Self::DEFAULT_OBSTACLES,
            grid_step: Self::DEFAULT_GRID_STEP,
            safety_margin: Self::DEFAULT_SAFETY_MARGIN,
        }
    }
}

fn env_or<T: FromStr>(key: &str, default: T) -> T {
    env::var(key).ok().and_then(|v| parse_or_warn(key, &v)).unwrap_or(default)
}

fn parse_or_warn<T: FromStr>(key: &str, value: &str) -> Option<T> {
    let parsed = value.trim().parse().ok();
    if parsed.is_none() {
        warn!("Ignoring unparsable {key}={value}");
    }
    parsed
}
