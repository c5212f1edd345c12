use thiserror::Error;

/// Caller-usage errors reported at the navigation boundary.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NavError {
    #[error("coordinate ({x}, {y}) is not finite")]
    NonFiniteCoordinate { x: f64, y: f64 },
    #[error("grid step must be finite and positive, got {0}")]
    InvalidGridStep(f64),
    #[error("safety margin must be finite and non-negative, got {0}")]
    InvalidSafetyMargin(f64),
    #[error("obstacle {id} has invalid radius {radius}")]
    InvalidRadius { id: String, radius: f64 },
}

impl NavError {
    pub(crate) fn check_point(point: super::Vec2D<f64>) -> Result<(), NavError> {
        if point.is_finite() {
            Ok(())
        } else {
            Err(NavError::NonFiniteCoordinate { x: point.x(), y: point.y() })
        }
    }
}
