//! Linear rescaling of raw moisture probe values into a 0-100% range.
//!
//! The probe reports higher values for drier soil, so `sensor_max` is the
//! fully dry reading and `sensor_min` the fully wet one.

use serde::Serialize;

use crate::{
    error::NormalizeError,
    normalized_reading::NormalizedReading,
    reading::Reading,
};

#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct Calibration {
    sensor_min: f64,
    sensor_max: f64,
}

impl Calibration {
    /// Capacitive probe calibrated against water (wet) and air (dry).
    pub const CAPACITIVE: Self = Self {
        sensor_min: 460.0,
        sensor_max: 1023.0,
    };

    /// Uncalibrated 10-bit ADC range.
    pub const FULL_SCALE: Self = Self {
        sensor_min: 0.0,
        sensor_max: 1023.0,
    };

    pub fn new(sensor_min: f64, sensor_max: f64) -> Result<Self, NormalizeError> {
        validate_bounds(sensor_min, sensor_max)?;
        Ok(Self {
            sensor_min,
            sensor_max,
        })
    }

    pub fn sensor_min(&self) -> f64 {
        self.sensor_min
    }

    pub fn sensor_max(&self) -> f64 {
        self.sensor_max
    }

    pub fn normalize(&self, raw: f64) -> Result<u8, NormalizeError> {
        normalize(raw, self.sensor_min, self.sensor_max)
    }

    pub fn apply(&self, reading: &Reading) -> Result<NormalizedReading, NormalizeError> {
        let moisture_percent = self.normalize(reading.raw_moisture)?;
        Ok(NormalizedReading::new(reading, moisture_percent))
    }
}

impl Default for Calibration {
    fn default() -> Self {
        Self::CAPACITIVE
    }
}

fn validate_bounds(min: f64, max: f64) -> Result<(), NormalizeError> {
    // NaN bounds fail the comparison as well
    if min.is_finite() && max.is_finite() && min < max {
        Ok(())
    } else {
        Err(NormalizeError::Configuration { min, max })
    }
}

/// Rescales `raw` to a moisture percentage, clamped to `[0, 100]`.
///
/// `percent = round((max - raw) / (max - min) * 100)`
pub fn normalize(raw: f64, min: f64, max: f64) -> Result<u8, NormalizeError> {
    validate_bounds(min, max)?;

    if !raw.is_finite() {
        return Err(NormalizeError::InvalidReading(format!(
            "raw moisture value {raw} is not a finite number"
        )));
    }

    let percent = ((max - raw) / (max - min) * 100.0).round();

    Ok(percent.clamp(0.0, 100.0) as u8)
}
