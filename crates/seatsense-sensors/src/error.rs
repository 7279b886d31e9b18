//! Error types for sensor construction.

/// Errors that can occur when building a rail scanner.
#[derive(Debug, thiserror::Error)]
pub enum SensorError {
    /// The calibration travel span is empty or inverted.
    #[error("invalid calibration span: start {start} must be below end {end}")]
    InvalidCalibrationSpan {
        /// Configured travel start.
        start: f32,
        /// Configured travel end.
        end: f32,
    },

    /// A speed or duration parameter is not strictly positive.
    #[error("invalid scanner parameter: {name} must be positive, got {value}")]
    NonPositiveParameter {
        /// Name of the offending parameter.
        name: &'static str,
        /// The rejected value.
        value: f32,
    },
}
