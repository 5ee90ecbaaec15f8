use std::time::Duration;

use indicatif::ProgressBar;
use jiff::Timestamp;
use soilwatch_core::range_token::RangeToken;
use soilwatch_feed::{
    env::{calibration_from_env, feed_params_from_env},
    feed_client::FeedClient,
};
use tracing::info;

use crate::table::readings_table;

fn spinner(message: &'static str) -> ProgressBar {
    let bar = ProgressBar::new_spinner();
    bar.enable_steady_tick(Duration::from_millis(100));
    bar.set_message(message);
    bar
}

pub async fn latest() -> Result<(), anyhow::Error> {
    let calibration = calibration_from_env()?;
    let client = FeedClient::new(feed_params_from_env()?)?;

    let bar = spinner("Fetching latest reading");
    let reading = client.latest_reading().await;
    bar.finish_and_clear();

    let normalized = calibration.apply(&reading?)?;

    println!("{}", readings_table(&[normalized]));

    Ok(())
}

pub async fn history(range: RangeToken) -> Result<(), anyhow::Error> {
    let calibration = calibration_from_env()?;
    let client = FeedClient::new(feed_params_from_env()?)?;
    let window = range.window_ending_at(Timestamp::now());

    info!("Fetching readings from {} to {}", window.start(), window.end());

    let bar = spinner("Fetching history");
    let points = client.history(&window, &calibration).await;
    bar.finish_and_clear();

    let points = points?;

    println!("{}", readings_table(&points));
    info!("{} readings over the last {}", points.len(), range);

    Ok(())
}
