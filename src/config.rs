use dotenv::dotenv;
use std::env;
use tracing::{debug, info};

use crate::client::ZoomClientBuilder;
use crate::error::{Result, ZoomError};
use crate::models::DataType;
use crate::ZoomClient;

pub const ENV_API_KEY: &str = "ZOOM_API_KEY";
pub const ENV_API_SECRET: &str = "ZOOM_API_SECRET";
pub const ENV_API_VERSION: &str = "ZOOM_API_VERSION";
pub const ENV_BASE_URI: &str = "ZOOM_BASE_URI";
pub const ENV_TIMEOUT: &str = "ZOOM_TIMEOUT";
pub const ENV_DATA_TYPE: &str = "ZOOM_DATA_TYPE";

/// Raw client options as read from the environment
///
/// Values are kept as strings so that validation happens in one place,
/// [`ZoomClientBuilder::build`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientSettings {
    pub api_key: String,
    pub api_secret: String,
    pub version: Option<String>,
    pub base_uri: Option<String>,
    pub timeout: Option<String>,
    pub data_type: Option<String>,
}

impl ClientSettings {
    /// Load settings from the process environment, reading `.env` first if present
    pub fn from_env() -> Result<Self> {
        if dotenv().is_ok() {
            debug!("Loaded .env file");
        }
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load settings through an arbitrary lookup
    ///
    /// Blank credentials and a blank base URI count as unset. Version, timeout
    /// and data type are passed on as found, so a blank value fails in `build`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let settings = Self {
            api_key: non_blank(ENV_API_KEY).ok_or(ZoomError::MissingSetting(ENV_API_KEY))?,
            api_secret: non_blank(ENV_API_SECRET)
                .ok_or(ZoomError::MissingSetting(ENV_API_SECRET))?,
            version: lookup(ENV_API_VERSION),
            base_uri: non_blank(ENV_BASE_URI),
            timeout: lookup(ENV_TIMEOUT),
            data_type: lookup(ENV_DATA_TYPE),
        };

        info!(
            "Zoom settings loaded (version: {}, base URI: {}, timeout: {})",
            settings.version.as_deref().unwrap_or("default"),
            settings.base_uri.as_deref().unwrap_or("default"),
            settings.timeout.as_deref().unwrap_or("none"),
        );

        Ok(settings)
    }

    /// Forward the raw values to a builder; conversion errors surface from `build`
    pub fn into_builder(self) -> Result<ZoomClientBuilder> {
        let mut builder = ZoomClient::builder(self.api_key, self.api_secret);

        if let Some(version) = self.version {
            builder = builder.version(version);
        }
        if let Some(base_uri) = self.base_uri {
            builder = builder.base_uri(base_uri);
        }
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(data_type) = self.data_type {
            builder = builder.data_type(data_type.parse::<DataType>()?);
        }

        Ok(builder)
    }

    pub fn build_client(self) -> Result<ZoomClient> {
        self.into_builder()?.build()
    }
}
