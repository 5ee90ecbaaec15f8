use jiff::Timestamp;
use schemars::JsonSchema;
use serde::Serialize;

use crate::{
    moisture_level::{MoistureLevel, color_bucket},
    reading::Reading,
};

#[derive(Serialize, JsonSchema, Debug, Clone, PartialEq)]
pub struct NormalizedReading {
    pub observed_at: Timestamp,
    pub raw_moisture: f64,
    /// Soil moisture in percent, 0 is fully dry and 100 fully wet.
    pub moisture_percent: u8,
    pub level: MoistureLevel,
    /// Temperature in degrees Celsius, as reported by the probe.
    pub temperature: Option<f64>,
}

impl NormalizedReading {
    pub fn new(reading: &Reading, moisture_percent: u8) -> Self {
        NormalizedReading {
            observed_at: reading.observed_at,
            raw_moisture: reading.raw_moisture,
            moisture_percent,
            level: color_bucket(moisture_percent),
            temperature: reading.raw_temperature,
        }
    }
}
