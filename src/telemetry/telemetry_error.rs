use thiserror::Error;

/// Rejections of externally supplied telemetry records.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TelemetryError {
    #[error("{field} = {value} lies outside [{min}, {max}]")]
    OutOfRange { field: &'static str, value: f64, min: f64, max: f64 },
    #[error("{field} has a non-finite component")]
    NonFiniteVector { field: &'static str },
}

impl TelemetryError {
    pub(crate) fn check_range(field: &'static str, value: f64, (min, max): (f64, f64)) -> Result<(), TelemetryError> {
        if (min..=max).contains(&value) {
            Ok(())
        } else {
            Err(TelemetryError::OutOfRange { field, value, min, max })
        }
    }
}
