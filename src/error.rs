use std::convert::Infallible;

use thiserror::Error;

/// Errors raised while configuring the client or talking to the Zoom API
#[derive(Error, Debug)]
pub enum ZoomError {
    #[error("API version not supported: {0}")]
    UnsupportedVersion(String),

    #[error("data type not supported: {0}")]
    UnsupportedDataType(String),

    #[error("missing required setting: {0}")]
    MissingSetting(&'static str),

    #[error("timeout value must be an integer number of seconds, got {0:?}")]
    InvalidTimeout(String),

    #[error("unknown component: {0}")]
    UnknownComponent(String),

    #[error("missing required keys: {0}")]
    MissingKeys(String),

    #[error("failed to sign token: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
}

impl ZoomError {
    /// True for errors caused by an unusable client configuration
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            ZoomError::UnsupportedVersion(_)
                | ZoomError::UnsupportedDataType(_)
                | ZoomError::MissingSetting(_)
        )
    }

    /// True for errors caused by a malformed option value
    pub fn is_value(&self) -> bool {
        matches!(self, ZoomError::InvalidTimeout(_))
    }
}

// Lets the builder accept already-typed values through the same TryInto bounds
impl From<Infallible> for ZoomError {
    fn from(never: Infallible) -> Self {
        match never {}
    }
}

/// Result type for the zoom_client crate
pub type Result<T> = std::result::Result<T, ZoomError>;
