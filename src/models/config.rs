use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ZoomError;
use crate::models::version::{ApiVersion, DataType};

/// Snapshot of the configuration a client was built with
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    pub api_key: String,
    pub api_secret: String,
    pub data_type: DataType,
    pub token: String,
    pub version: ApiVersion,
    pub base_uri: String,
}

/// Request timeout in whole seconds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timeout(u64);

impl Timeout {
    pub fn from_secs(secs: u64) -> Self {
        Timeout(secs)
    }

    pub fn as_secs(self) -> u64 {
        self.0
    }

    pub fn as_duration(self) -> Duration {
        Duration::from_secs(self.0)
    }
}

impl From<u64> for Timeout {
    fn from(secs: u64) -> Self {
        Timeout(secs)
    }
}

impl From<u32> for Timeout {
    fn from(secs: u32) -> Self {
        Timeout(u64::from(secs))
    }
}

impl TryFrom<i64> for Timeout {
    type Error = ZoomError;

    fn try_from(secs: i64) -> Result<Self, Self::Error> {
        u64::try_from(secs)
            .map(Timeout)
            .map_err(|_| ZoomError::InvalidTimeout(secs.to_string()))
    }
}

impl TryFrom<i32> for Timeout {
    type Error = ZoomError;

    fn try_from(secs: i32) -> Result<Self, Self::Error> {
        Timeout::try_from(i64::from(secs))
    }
}

impl TryFrom<&str> for Timeout {
    type Error = ZoomError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let secs = value
            .trim()
            .parse::<i64>()
            .map_err(|_| ZoomError::InvalidTimeout(value.to_string()))?;
        Timeout::try_from(secs)
    }
}

impl TryFrom<String> for Timeout {
    type Error = ZoomError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Timeout::try_from(value.as_str())
    }
}
