use super::{telemetry_engine::TelemetryEngine, telemetry_state::Telemetry};
use crate::{info, warn};
use rand::Rng;
use std::{sync::Arc, time::Duration};
use tokio::{
    sync::Mutex,
    task::JoinHandle,
    time::{self, MissedTickBehavior},
};
use tokio_util::sync::CancellationToken;

/// Drives a [`TelemetryEngine`] on a fixed cadence and hands every fresh snapshot to an observer.
///
/// The engine sits behind a single lock, so exactly one tick is in flight at a time and
/// readers never observe a half-updated record. At most one timer task runs per ticker.
pub struct TelemetryTicker<R: Rng + Send + 'static> {
    engine: Arc<Mutex<TelemetryEngine<R>>>,
    running: Option<(JoinHandle<()>, CancellationToken)>,
}

impl<R: Rng + Send + 'static> TelemetryTicker<R> {
    /// Default update cadence of the operator display.
    pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(2000);

    pub fn new(engine: TelemetryEngine<R>) -> Self { Self { engine: Arc::new(Mutex::new(engine)), running: None } }

    /// Shared handle to the engine for callers that need direct access.
    pub fn engine(&self) -> Arc<Mutex<TelemetryEngine<R>>> { Arc::clone(&self.engine) }

    pub fn is_running(&self) -> bool { self.running.as_ref().is_some_and(|(handle, _)| !handle.is_finished()) }

    /// Starts ticking every `interval`, the first snapshot is delivered one interval after the call.
    ///
    /// Must be called from within a tokio runtime.
    ///
    /// # Returns
    /// `false` without side effects if the ticker is already running.
    pub fn start<F>(&mut self, mut observer: F, interval: Duration) -> bool
    where F: FnMut(Telemetry) + Send + 'static {
        if self.is_running() {
            warn!("Telemetry ticker already running, ignoring start request");
            return false;
        }
        let c_tok = CancellationToken::new();
        let c_tok_clone = c_tok.clone();
        let engine = Arc::clone(&self.engine);
        let handle = tokio::spawn(async move {
            let mut ticker = time::interval_at(time::Instant::now() + interval, interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                tokio::select! {
                    () = c_tok_clone.cancelled() => break,
                    _ = ticker.tick() => {
                        let snapshot = {
                            let mut engine_lock = engine.lock().await;
                            engine_lock.tick().clone()
                        };
                        observer(snapshot);
                    }
                }
            }
        });
        info!("Telemetry ticker started with {}ms cadence", interval.as_millis());
        self.running = Some((handle, c_tok));
        true
    }

    /// Cancels the timer. Calling it on a stopped ticker does nothing.
    pub fn stop(&mut self) {
        if let Some((handle, c_tok)) = self.running.take() {
            c_tok.cancel();
            handle.abort();
            info!("Telemetry ticker stopped");
        }
    }

    /// Forwards the mission toggle to the engine.
    pub async fn set_mission_active(&self, active: bool) { self.engine.lock().await.set_mission_active(active); }

    /// Returns an owned copy of the current record.
    pub async fn snapshot(&self) -> Telemetry { self.engine.lock().await.snapshot() }
}

impl<R: Rng + Send + 'static> Drop for TelemetryTicker<R> {
    fn drop(&mut self) { self.stop(); }
}
