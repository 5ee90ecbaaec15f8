use jiff::Timestamp;
use serde::Deserialize;
use soilwatch_core::{error::NormalizeError, reading::Reading};

/// Body of `GET {feed_url}`. Channel metadata is ignored.
#[derive(Deserialize, Debug)]
pub struct FeedResponse {
    #[serde(default)]
    pub feeds: Vec<FeedEntry>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct FeedEntry {
    pub created_at: Timestamp,

    #[serde(default)]
    pub entry_id: Option<u64>,

    /// Raw moisture value
    #[serde(default)]
    pub field1: Option<String>,

    /// Raw temperature value
    #[serde(default)]
    pub field2: Option<String>,
}

impl FeedEntry {
    pub fn moisture(&self) -> Option<&str> {
        self.field1.as_deref()
    }

    pub fn temperature(&self) -> Option<&str> {
        self.field2.as_deref()
    }

    pub fn to_reading(&self) -> Result<Reading, NormalizeError> {
        Reading::parse(self.moisture(), self.temperature(), self.created_at)
    }
}
