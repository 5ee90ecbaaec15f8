use std::fmt::Display;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Upper bound (inclusive) of the critical bucket.
pub const CRITICAL_THRESHOLD: u8 = 20;

/// Upper bound (inclusive) of the warning bucket.
pub const WARNING_THRESHOLD: u8 = 60;

#[derive(Deserialize, Serialize, JsonSchema, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MoistureLevel {
    Critical,
    Warning,
    Ok,
}

impl MoistureLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            MoistureLevel::Critical => "critical",
            MoistureLevel::Warning => "warning",
            MoistureLevel::Ok => "ok",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            MoistureLevel::Critical => "#F44336",
            MoistureLevel::Warning => "#FFC107",
            MoistureLevel::Ok => "#4CAF50",
        }
    }
}

impl Display for MoistureLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

pub fn color_bucket(percent: u8) -> MoistureLevel {
    if percent <= CRITICAL_THRESHOLD {
        MoistureLevel::Critical
    } else if percent <= WARNING_THRESHOLD {
        MoistureLevel::Warning
    } else {
        MoistureLevel::Ok
    }
}
