use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::error::{Result, ZoomError};

/// Date-time format Zoom expects in query and body parameters
pub const DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Check that every key is present in a JSON object
pub fn require_keys(value: &Value, keys: &[&str]) -> Result<()> {
    let missing: Vec<&str> = keys
        .iter()
        .copied()
        .filter(|key| value.get(key).is_none())
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(ZoomError::MissingKeys(missing.join(", ")))
    }
}

pub fn date_to_str(date: DateTime<Utc>) -> String {
    date.format(DATE_FORMAT).to_string()
}
