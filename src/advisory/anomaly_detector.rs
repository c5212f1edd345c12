use crate::telemetry::Telemetry;
use itertools::{Itertools, MinMaxResult};
use std::collections::VecDeque;
use strum_macros::{Display, EnumIter};

/// A trend anomaly found over the most recent telemetry window.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Display, EnumIter, serde::Serialize, serde::Deserialize)]
pub enum Anomaly {
    #[strum(to_string = "Rapid fuel depletion detected")]
    RapidFuelDepletion,
    #[strum(to_string = "Temperature instability detected")]
    TemperatureInstability,
    #[strum(to_string = "System health degradation detected")]
    HealthDegradation,
}

/// Bounded FIFO of telemetry snapshots, oldest evicted first.
#[derive(Debug, Clone)]
pub struct TelemetryHistory {
    snapshots: VecDeque<Telemetry>,
    capacity: usize,
}

impl TelemetryHistory {
    pub const DEFAULT_CAPACITY: usize = 100;

    pub fn new(capacity: usize) -> Self { Self { snapshots: VecDeque::with_capacity(capacity), capacity } }

    pub fn push(&mut self, snapshot: Telemetry) {
        self.snapshots.push_back(snapshot);
        while self.snapshots.len() > self.capacity {
            self.snapshots.pop_front();
        }
    }

    pub fn len(&self) -> usize { self.snapshots.len() }

    pub fn is_empty(&self) -> bool { self.snapshots.is_empty() }

    pub fn capacity(&self) -> usize { self.capacity }

    pub fn oldest(&self) -> Option<&Telemetry> { self.snapshots.front() }

    pub fn newest(&self) -> Option<&Telemetry> { self.snapshots.back() }

    /// The last `n` snapshots in chronological order.
    pub fn recent(&self, n: usize) -> impl Iterator<Item = &Telemetry> {
        self.snapshots.iter().skip(self.snapshots.len().saturating_sub(n))
    }
}

impl Default for TelemetryHistory {
    fn default() -> Self { Self::new(Self::DEFAULT_CAPACITY) }
}

/// Watches short-horizon trends across consecutive snapshots.
#[derive(Debug, Clone, Default)]
pub struct AnomalyDetector {
    history: TelemetryHistory,
}

impl AnomalyDetector {
    const WINDOW: usize = 5;
    const FUEL_DROP: f64 = 10.0;
    const TEMP_SPREAD: f64 = 30.0;
    const HEALTH_DROP: f64 = 15.0;

    pub fn new() -> Self { Self::default() }

    pub fn history(&self) -> &TelemetryHistory { &self.history }

    /// Records `telemetry` and checks the trend over the last five snapshots.
    ///
    /// Nothing is reported until more than five snapshots have been observed.
    pub fn observe(&mut self, telemetry: &Telemetry) -> Vec<Anomaly> {
        self.history.push(telemetry.clone());
        if self.history.len() <= Self::WINDOW {
            return Vec::new();
        }
        let window = self.history.recent(Self::WINDOW).collect::<Vec<_>>();
        let (Some(first), Some(last)) = (window.first(), window.last()) else {
            return Vec::new();
        };

        let mut anomalies = Vec::new();
        if first.fuel - last.fuel > Self::FUEL_DROP {
            anomalies.push(Anomaly::RapidFuelDepletion);
        }
        let temp_spread = match window.iter().map(|t| t.temperature).minmax_by(f64::total_cmp) {
            MinMaxResult::MinMax(min, max) => max - min,
            MinMaxResult::OneElement(_) | MinMaxResult::NoElements => 0.0,
        };
        if temp_spread > Self::TEMP_SPREAD {
            anomalies.push(Anomaly::TemperatureInstability);
        }
        if first.system_health - last.system_health > Self::HEALTH_DROP {
            anomalies.push(Anomaly::HealthDegradation);
        }
        anomalies
    }
}
