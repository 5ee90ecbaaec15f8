use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum NormalizeError {
    #[error("Invalid calibration: sensor_min ({min}) must be lower than sensor_max ({max})")]
    Configuration { min: f64, max: f64 },

    #[error("Invalid reading: {0}")]
    InvalidReading(String),
}
