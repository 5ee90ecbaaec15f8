use std::time::Duration;

use soilwatch_core::{
    calibration::Calibration, error::NormalizeError, normalized_reading::NormalizedReading,
    reading::Reading, time_range::TimeRange,
};
use thiserror::Error;
use tracing::{debug, warn};

use crate::feed::{FeedEntry, FeedResponse};

/// Format of the `start` and `end` query parameters.
const QUERY_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Error)]
pub enum FeedError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Upstream unavailable: {status} - {message}")]
    Upstream { status: u16, message: String },

    #[error("Feed contains no entries")]
    EmptyFeed,

    #[error(transparent)]
    Reading(#[from] NormalizeError),
}

#[derive(Debug, Clone)]
pub struct FeedClientParams {
    /// Full feeds endpoint, e.g. `https://api.thingspeak.com/channels/2907360/feeds.json`
    pub feed_url: String,
    pub api_key: Option<String>,
    pub request_timeout: Duration,
}

pub struct FeedClient {
    params: FeedClientParams,
    client: reqwest::Client,
}

impl FeedClient {
    pub fn new(params: FeedClientParams) -> Result<Self, FeedError> {
        let client = reqwest::Client::builder()
            .timeout(params.request_timeout)
            .build()?;

        Ok(Self { params, client })
    }

    pub fn feed_url(&self) -> &str {
        &self.params.feed_url
    }

    pub async fn latest_entry(&self) -> Result<FeedEntry, FeedError> {
        let response = self.fetch(vec![("results", String::from("1"))]).await?;

        // Entries come oldest first
        response.feeds.into_iter().last().ok_or(FeedError::EmptyFeed)
    }

    pub async fn latest_reading(&self) -> Result<Reading, FeedError> {
        let entry = self.latest_entry().await?;
        Ok(entry.to_reading()?)
    }

    pub async fn entries_between(&self, range: &TimeRange) -> Result<Vec<FeedEntry>, FeedError> {
        let query = vec![
            (
                "start",
                range.start().strftime(QUERY_TIMESTAMP_FORMAT).to_string(),
            ),
            ("end", range.end().strftime(QUERY_TIMESTAMP_FORMAT).to_string()),
            ("timezone", String::from("Etc/UTC")),
        ];

        let response = self.fetch(query).await?;

        Ok(response.feeds)
    }

    /// Normalized points for `range`. Samples without a numeric moisture value
    /// are skipped.
    pub async fn history(
        &self,
        range: &TimeRange,
        calibration: &Calibration,
    ) -> Result<Vec<NormalizedReading>, FeedError> {
        let entries = self.entries_between(range).await?;
        let total = entries.len();

        let points: Vec<NormalizedReading> = entries
            .iter()
            .filter(|entry| range.contains(entry.created_at))
            .filter_map(|entry| {
                match entry
                    .to_reading()
                    .and_then(|reading| calibration.apply(&reading))
                {
                    Ok(point) => Some(point),
                    Err(err) => {
                        warn!(entry_id = ?entry.entry_id, "Skipping feed entry: {}", err);
                        None
                    }
                }
            })
            .collect();

        debug!("FeedClient: kept {}/{} history entries", points.len(), total);

        Ok(points)
    }

    async fn fetch(&self, mut query: Vec<(&str, String)>) -> Result<FeedResponse, FeedError> {
        if let Some(api_key) = &self.params.api_key {
            query.push(("api_key", api_key.clone()));
        }

        debug!("FeedClient: GET {}", self.params.feed_url);

        let response = self
            .client
            .get(&self.params.feed_url)
            .query(&query)
            .send()
            .await?;

        self.handle_response(response).await
    }

    async fn handle_response(&self, response: reqwest::Response) -> Result<FeedResponse, FeedError> {
        if response.status().is_success() {
            let feed: FeedResponse = response.json().await?;
            Ok(feed)
        } else {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            Err(FeedError::Upstream { status, message })
        }
    }
}
