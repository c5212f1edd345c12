mod spacecraft_status;
mod telemetry_engine;
mod telemetry_error;
mod telemetry_state;
mod telemetry_ticker;
#[cfg(test)]
mod tests;

pub use spacecraft_status::SpacecraftStatus;
pub use telemetry_engine::TelemetryEngine;
pub use telemetry_error::TelemetryError;
pub use telemetry_state::Telemetry;
pub use telemetry_ticker::TelemetryTicker;
