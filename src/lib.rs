//! Zoom API Client
//!
//! This library provides a Rust client for the Zoom REST API. A single
//! [`ZoomClient`] resolves its configuration, signs a JWT from the API key and
//! secret, and exposes one request helper per API resource group.
//!
//! # Modules
//!
//! - `client`: ZoomClient and its builder
//! - `components`: the per-resource request helpers
//! - `auth`: JWT generation for the Zoom API
//! - `config`: loading client options from the environment
//! - `models`: API versions, data types and the config snapshot
//! - `util`: request parameter helpers
//!
//! # Authentication
//!
//! Requests against API v2 carry the token as a bearer credential. API v1
//! requests carry the key and secret as query parameters instead. Components
//! read the current credentials at call time, so [`ZoomClient::refresh_token`]
//! takes effect for every component immediately.
//!
//! ```no_run
//! use zoom_client::{ApiVersion, ZoomClient};
//!
//! # async fn run() -> zoom_client::Result<()> {
//! let client = ZoomClient::builder("KEY", "SECRET")
//!     .version(ApiVersion::V2)
//!     .timeout(30)
//!     .build()?;
//!
//! let response = client.user().get_request("users/me", &[("status", "active")]).await?;
//! println!("{}", response.status());
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod client;
pub mod components;
pub mod config;
pub mod error;
pub mod models;
pub mod util;

#[cfg(test)]
mod client_mock;

// Re-export the main API types for ease of use
pub use auth::{JwtGenerator, TokenGenerator, ZoomAuth};
pub use client::{ClientScope, ZoomClient, ZoomClientBuilder};
pub use components::{Component, ComponentKind, Components};
pub use config::ClientSettings;
pub use error::{Result, ZoomError};
pub use models::{
    ApiVersion, ClientConfig, DataType, Timeout, API_BASE_URI_GDPR, API_BASE_URI_V1,
    API_BASE_URI_V2,
};
