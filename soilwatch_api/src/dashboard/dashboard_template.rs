use askama::Template;
use soilwatch_core::{
    calibration::Calibration,
    moisture_level::{CRITICAL_THRESHOLD, WARNING_THRESHOLD},
    normalized_reading::NormalizedReading,
    range_token::RangeToken,
};

use crate::config::DashboardSettings;

/// Dashboard page. The client script repeats the normalization with the same
/// calibration and thresholds on every poll.
#[derive(Template)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate<'a> {
    pub percent: u8,
    pub level: &'static str,
    pub color: &'static str,
    pub temperature: String,
    pub observed_at: String,
    pub sensor_min: f64,
    pub sensor_max: f64,
    pub critical_threshold: u8,
    pub warning_threshold: u8,
    pub poll_interval_ms: u128,
    pub channel_url: Option<&'a str>,
    pub ranges: Vec<&'static str>,
}

impl<'a> DashboardTemplate<'a> {
    pub fn new(
        reading: &NormalizedReading,
        calibration: &Calibration,
        settings: &'a DashboardSettings,
    ) -> Self {
        Self {
            percent: reading.moisture_percent,
            level: reading.level.as_str(),
            color: reading.level.color(),
            temperature: format_temperature(reading.temperature),
            observed_at: reading
                .observed_at
                .strftime("%Y-%m-%d %H:%M:%S UTC")
                .to_string(),
            sensor_min: calibration.sensor_min(),
            sensor_max: calibration.sensor_max(),
            critical_threshold: CRITICAL_THRESHOLD,
            warning_threshold: WARNING_THRESHOLD,
            poll_interval_ms: settings.poll_interval.as_millis(),
            channel_url: settings.channel_url.as_deref(),
            ranges: RangeToken::ALL.iter().map(RangeToken::as_str).collect(),
        }
    }
}

fn format_temperature(temperature: Option<f64>) -> String {
    match temperature {
        Some(temperature) => format!("{temperature:.1} °C"),
        None => String::from("--"),
    }
}
