use soilwatch_core::calibration::Calibration;
use soilwatch_feed::feed_client::FeedClient;

use crate::config::DashboardSettings;

pub struct AppState {
    pub feed_client: FeedClient,
    pub calibration: Calibration,
    pub dashboard: DashboardSettings,
}
