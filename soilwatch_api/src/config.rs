use std::{net::SocketAddr, time::Duration};

use soilwatch_feed::env::{parse_var, var};

pub const BIND_ADDR_ENV_VAR: &str = "SOILWATCH_BIND_ADDR";
pub const CHANNEL_URL_ENV_VAR: &str = "SOILWATCH_CHANNEL_URL";
pub const POLL_INTERVAL_ENV_VAR: &str = "SOILWATCH_POLL_INTERVAL_SECS";

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";
const DEFAULT_POLL_INTERVAL_SECS: u64 = 15;

#[derive(Debug, Clone)]
pub struct DashboardSettings {
    /// Public page of the upstream channel, linked from the dashboard.
    pub channel_url: Option<String>,
    /// How often the page re-polls `/moisture` and `/temperature`.
    pub poll_interval: Duration,
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            channel_url: None,
            poll_interval: Duration::from_secs(DEFAULT_POLL_INTERVAL_SECS),
        }
    }
}

pub struct ApiConfig {
    pub bind_addr: SocketAddr,
    pub dashboard: DashboardSettings,
}

impl ApiConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let default_addr: SocketAddr = DEFAULT_BIND_ADDR.parse()?;
        let bind_addr = parse_var(BIND_ADDR_ENV_VAR, var(BIND_ADDR_ENV_VAR), default_addr)?;
        let poll_interval_secs = parse_var(
            POLL_INTERVAL_ENV_VAR,
            var(POLL_INTERVAL_ENV_VAR),
            DEFAULT_POLL_INTERVAL_SECS,
        )?;

        Ok(ApiConfig {
            bind_addr,
            dashboard: DashboardSettings {
                channel_url: var(CHANNEL_URL_ENV_VAR),
                poll_interval: Duration::from_secs(poll_interval_secs.max(1)),
            },
        })
    }
}
