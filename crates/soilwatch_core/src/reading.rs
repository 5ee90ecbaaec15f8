use jiff::Timestamp;

use crate::error::NormalizeError;

/// A single sample from the feed, before normalization.
#[derive(Debug, Clone, PartialEq)]
pub struct Reading {
    pub raw_moisture: f64,
    pub raw_temperature: Option<f64>,
    pub observed_at: Timestamp,
}

impl Reading {
    /// Builds a reading from the textual feed fields.
    ///
    /// The moisture field is mandatory and must hold a finite number. A
    /// missing or malformed temperature field is not an error.
    pub fn parse(
        moisture: Option<&str>,
        temperature: Option<&str>,
        observed_at: Timestamp,
    ) -> Result<Self, NormalizeError> {
        let moisture = moisture.ok_or_else(|| {
            NormalizeError::InvalidReading(String::from("moisture field is missing"))
        })?;

        let raw_moisture = parse_raw_value(moisture).ok_or_else(|| {
            NormalizeError::InvalidReading(format!("moisture value {moisture:?} is not a number"))
        })?;

        Ok(Reading {
            raw_moisture,
            raw_temperature: temperature.and_then(parse_raw_value),
            observed_at,
        })
    }
}

pub fn parse_raw_value(value: &str) -> Option<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}
