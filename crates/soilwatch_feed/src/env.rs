//! Settings read from the process environment.
//!
//! Binaries load `./.env.local` with dotenvy before calling these.

use std::{str::FromStr, time::Duration};

use anyhow::Context;
use soilwatch_core::calibration::Calibration;

use crate::feed_client::FeedClientParams;

pub const FEED_URL_ENV_VAR: &str = "SOILWATCH_FEED_URL";
pub const API_KEY_ENV_VAR: &str = "SOILWATCH_API_KEY";
pub const SENSOR_MIN_ENV_VAR: &str = "SOILWATCH_SENSOR_MIN";
pub const SENSOR_MAX_ENV_VAR: &str = "SOILWATCH_SENSOR_MAX";
pub const REQUEST_TIMEOUT_ENV_VAR: &str = "SOILWATCH_REQUEST_TIMEOUT_SECS";

const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Non-empty value of `name`, if set.
pub fn var(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

pub fn parse_var<T>(name: &str, value: Option<String>, default: T) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match value {
        Some(value) => value
            .parse()
            .with_context(|| format!("{name} has an invalid value {value:?}")),
        None => Ok(default),
    }
}

pub fn feed_params_from_env() -> anyhow::Result<FeedClientParams> {
    let feed_url = var(FEED_URL_ENV_VAR).with_context(|| format!("{FEED_URL_ENV_VAR} is not set"))?;
    let timeout_secs = parse_var(
        REQUEST_TIMEOUT_ENV_VAR,
        var(REQUEST_TIMEOUT_ENV_VAR),
        DEFAULT_REQUEST_TIMEOUT_SECS,
    )?;

    Ok(FeedClientParams {
        feed_url,
        api_key: var(API_KEY_ENV_VAR),
        request_timeout: Duration::from_secs(timeout_secs),
    })
}

pub fn calibration_from_env() -> anyhow::Result<Calibration> {
    calibration_from_values(var(SENSOR_MIN_ENV_VAR), var(SENSOR_MAX_ENV_VAR))
}

fn calibration_from_values(min: Option<String>, max: Option<String>) -> anyhow::Result<Calibration> {
    let default = Calibration::default();
    let sensor_min = parse_var(SENSOR_MIN_ENV_VAR, min, default.sensor_min())?;
    let sensor_max = parse_var(SENSOR_MAX_ENV_VAR, max, default.sensor_max())?;

    Ok(Calibration::new(sensor_min, sensor_max)?)
}
