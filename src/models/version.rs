use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ZoomError;

/// Base URI of the legacy v1 API
pub const API_BASE_URI_V1: &str = "https://api.zoom.us/v1";
/// Base URI of the current v2 API
pub const API_BASE_URI_V2: &str = "https://api.zoom.us/v2";
/// EU-hosted v2 endpoint; only usable as an explicit base URI override
pub const API_BASE_URI_GDPR: &str = "https://eu01api-www4local.zoom.us/v2";

/// Zoom API version
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ApiVersion {
    V1,
    #[default]
    V2,
}

impl ApiVersion {
    pub fn as_u8(self) -> u8 {
        match self {
            ApiVersion::V1 => 1,
            ApiVersion::V2 => 2,
        }
    }

    /// Default endpoint for this version
    pub fn base_uri(self) -> &'static str {
        match self {
            ApiVersion::V1 => API_BASE_URI_V1,
            ApiVersion::V2 => API_BASE_URI_V2,
        }
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_u8())
    }
}

impl TryFrom<i64> for ApiVersion {
    type Error = ZoomError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(ApiVersion::V1),
            2 => Ok(ApiVersion::V2),
            other => Err(ZoomError::UnsupportedVersion(other.to_string())),
        }
    }
}

impl TryFrom<i32> for ApiVersion {
    type Error = ZoomError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        ApiVersion::try_from(i64::from(value))
    }
}

impl TryFrom<u8> for ApiVersion {
    type Error = ZoomError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        ApiVersion::try_from(i64::from(value))
    }
}

impl FromStr for ApiVersion {
    type Err = ZoomError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed
            .strip_prefix('v')
            .or_else(|| trimmed.strip_prefix('V'))
            .unwrap_or(trimmed);

        match digits {
            "1" => Ok(ApiVersion::V1),
            "2" => Ok(ApiVersion::V2),
            _ => Err(ZoomError::UnsupportedVersion(s.to_string())),
        }
    }
}

impl TryFrom<&str> for ApiVersion {
    type Error = ZoomError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl TryFrom<String> for ApiVersion {
    type Error = ZoomError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

// Serialized in numeric form, the same way the API paths spell it
impl Serialize for ApiVersion {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.as_u8())
    }
}

impl<'de> Deserialize<'de> for ApiVersion {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = i64::deserialize(deserializer)?;
        ApiVersion::try_from(value).map_err(serde::de::Error::custom)
    }
}

/// Response format requested from the API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataType {
    #[default]
    Json,
}

impl DataType {
    pub fn as_str(self) -> &'static str {
        match self {
            DataType::Json => "json",
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DataType {
    type Err = ZoomError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("json") {
            Ok(DataType::Json)
        } else {
            Err(ZoomError::UnsupportedDataType(s.to_string()))
        }
    }
}
