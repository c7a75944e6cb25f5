pub mod config;
pub mod version;

pub use config::{ClientConfig, Timeout};
pub use version::{ApiVersion, DataType, API_BASE_URI_GDPR, API_BASE_URI_V1, API_BASE_URI_V2};
