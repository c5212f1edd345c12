use chrono::{DateTime, Utc};
use strum_macros::{Display, EnumIter};

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Display, EnumIter, serde::Serialize, serde::Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum RecommendationType {
    Navigation,
    Fuel,
    Maintenance,
    Mission,
}

/// Urgency of an advisory. Ordered from `Low` to `Critical` so callers can sort by it.
#[derive(
    Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash, Display, EnumIter, serde::Serialize, serde::Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
    Critical,
}

/// Operator action tag attached to a recommendation.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Display, EnumIter, serde::Serialize, serde::Deserialize)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AdvisoryAction {
    AbortMission,
    OptimizeTrajectory,
    RunDiagnostics,
    ThermalRegulation,
    AvoidRadiation,
}

/// A single advisory produced by analysing one telemetry snapshot.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Recommendation {
    rec_type: RecommendationType,
    priority: Priority,
    message: String,
    action: Option<AdvisoryAction>,
    timestamp: DateTime<Utc>,
}

impl Recommendation {
    pub fn new(
        rec_type: RecommendationType,
        priority: Priority,
        message: String,
        action: Option<AdvisoryAction>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self { rec_type, priority, message, action, timestamp }
    }

    pub fn rec_type(&self) -> RecommendationType { self.rec_type }

    pub fn priority(&self) -> Priority { self.priority }

    pub fn message(&self) -> &str { &self.message }

    pub fn action(&self) -> Option<AdvisoryAction> { self.action }

    pub fn timestamp(&self) -> DateTime<Utc> { self.timestamp }
}
