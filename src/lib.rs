#![allow(clippy::similar_names, clippy::module_name_repetitions)]
//! Route planning through circular obstacle fields and stochastic spacecraft telemetry
//! with rule-based advisories.
//!
//! - [`nav_control`]: obstacle geometry and the A* [`nav_control::Pathfinder`].
//! - [`telemetry`]: the single-spacecraft [`telemetry::TelemetryEngine`] and its periodic driver.
//! - [`advisory`]: stateless recommendations, trend anomalies and mission planning.
pub mod advisory;
pub mod config;
#[doc(hidden)]
pub mod logger;
pub mod nav_control;
pub mod telemetry;
