use soilwatch_core::{
    calibration::{Calibration, normalize},
    moisture_level::color_bucket,
};
use soilwatch_feed::env::calibration_from_env;

pub fn run(raw: f64, min: Option<f64>, max: Option<f64>) -> Result<(), anyhow::Error> {
    let defaults = match (min, max) {
        (Some(_), Some(_)) => Calibration::default(),
        _ => calibration_from_env()?,
    };

    let description = describe(
        raw,
        min.unwrap_or(defaults.sensor_min()),
        max.unwrap_or(defaults.sensor_max()),
    )?;

    println!("{description}");

    Ok(())
}

fn describe(raw: f64, min: f64, max: f64) -> Result<String, anyhow::Error> {
    let percent = normalize(raw, min, max)?;
    Ok(format!("{percent}% ({})", color_bucket(percent)))
}
