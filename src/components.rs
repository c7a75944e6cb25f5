//! Per-resource request helpers.
//!
//! Every Zoom resource group (meetings, users, reports, ...) is served by the
//! same [`Component`] type. A component knows its base URI, API version and data
//! type, and reads the current credentials from a handle shared with the
//! [`ZoomClient`](crate::ZoomClient), so a token refresh on the client is seen
//! by every component without rebuilding it.

use std::collections::BTreeMap;
use std::fmt;
use std::ops::Index;
use std::str::FromStr;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use reqwest::{Client, Method, RequestBuilder, Response};
use serde::Serialize;
use tracing::{debug, info};

use crate::error::{Result, ZoomError};
use crate::models::{ApiVersion, DataType, Timeout};

/// Resource groups exposed by the client
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ComponentKind {
    Contacts,
    Group,
    LiveStream,
    Meeting,
    Metric,
    PastMeeting,
    Phone,
    Recording,
    Report,
    Room,
    User,
    Webinar,
}

impl ComponentKind {
    pub const ALL: [ComponentKind; 12] = [
        ComponentKind::Contacts,
        ComponentKind::Group,
        ComponentKind::LiveStream,
        ComponentKind::Meeting,
        ComponentKind::Metric,
        ComponentKind::PastMeeting,
        ComponentKind::Phone,
        ComponentKind::Recording,
        ComponentKind::Report,
        ComponentKind::Room,
        ComponentKind::User,
        ComponentKind::Webinar,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ComponentKind::Contacts => "contacts",
            ComponentKind::Group => "group",
            ComponentKind::LiveStream => "live_stream",
            ComponentKind::Meeting => "meeting",
            ComponentKind::Metric => "metric",
            ComponentKind::PastMeeting => "past_meeting",
            ComponentKind::Phone => "phone",
            ComponentKind::Recording => "recording",
            ComponentKind::Report => "report",
            ComponentKind::Room => "room",
            ComponentKind::User => "user",
            ComponentKind::Webinar => "webinar",
        }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ComponentKind {
    type Err = ZoomError;

    fn from_str(s: &str) -> Result<Self> {
        ComponentKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| ZoomError::UnknownComponent(s.to_string()))
    }
}

#[derive(Debug, Clone)]
pub(crate) struct Credentials {
    pub api_key: String,
    pub api_secret: String,
    pub token: String,
}

/// Credentials shared between the client and all of its components
#[derive(Debug, Clone)]
pub(crate) struct SharedCredentials(Arc<RwLock<Credentials>>);

impl SharedCredentials {
    pub fn new(credentials: Credentials) -> Self {
        SharedCredentials(Arc::new(RwLock::new(credentials)))
    }

    // A panic while holding the lock cannot leave the strings half-written
    pub fn read(&self) -> RwLockReadGuard<'_, Credentials> {
        self.0.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn write(&self) -> RwLockWriteGuard<'_, Credentials> {
        self.0.write().unwrap_or_else(PoisonError::into_inner)
    }
}

/// HTTP request helper for one resource group
#[derive(Debug, Clone)]
pub struct Component {
    kind: ComponentKind,
    http: Client,
    base_uri: String,
    version: ApiVersion,
    data_type: DataType,
    timeout: Option<Timeout>,
    credentials: SharedCredentials,
}

impl Component {
    pub(crate) fn new(
        kind: ComponentKind,
        http: Client,
        base_uri: String,
        version: ApiVersion,
        data_type: DataType,
        timeout: Option<Timeout>,
        credentials: SharedCredentials,
    ) -> Self {
        Self {
            kind,
            http,
            base_uri,
            version,
            data_type,
            timeout,
            credentials,
        }
    }

    pub fn kind(&self) -> ComponentKind {
        self.kind
    }

    pub fn name(&self) -> &'static str {
        self.kind.as_str()
    }

    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    pub fn version(&self) -> ApiVersion {
        self.version
    }

    pub fn data_type(&self) -> DataType {
        self.data_type
    }

    /// Timeout in seconds, if one was configured
    pub fn timeout(&self) -> Option<u64> {
        self.timeout.map(Timeout::as_secs)
    }

    /// The token that the next request will carry
    pub fn token(&self) -> String {
        self.credentials.read().token.clone()
    }

    /// Full URL for an endpoint under this component's base URI
    pub fn url_for(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.base_uri.trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        )
    }

    pub async fn get_request<Q>(&self, endpoint: &str, params: &Q) -> Result<Response>
    where
        Q: Serialize + ?Sized,
    {
        self.send(self.request(Method::GET, endpoint).query(params))
            .await
    }

    pub async fn delete_request<Q>(&self, endpoint: &str, params: &Q) -> Result<Response>
    where
        Q: Serialize + ?Sized,
    {
        self.send(self.request(Method::DELETE, endpoint).query(params))
            .await
    }

    pub async fn post_request<B>(&self, endpoint: &str, data: &B) -> Result<Response>
    where
        B: Serialize + ?Sized,
    {
        self.send(self.request(Method::POST, endpoint).json(data))
            .await
    }

    pub async fn patch_request<B>(&self, endpoint: &str, data: &B) -> Result<Response>
    where
        B: Serialize + ?Sized,
    {
        self.send(self.request(Method::PATCH, endpoint).json(data))
            .await
    }

    pub async fn put_request<B>(&self, endpoint: &str, data: &B) -> Result<Response>
    where
        B: Serialize + ?Sized,
    {
        self.send(self.request(Method::PUT, endpoint).json(data))
            .await
    }

    /// Build a request carrying the credentials current at call time
    fn request(&self, method: Method, endpoint: &str) -> RequestBuilder {
        let url = self.url_for(endpoint);
        info!("Making {} request for {} component", method, self.kind);
        debug!("API URL: {}", url);

        let request = self.http.request(method, &url);
        let credentials = self.credentials.read();

        match self.version {
            ApiVersion::V1 => request.query(&[
                ("api_key", credentials.api_key.as_str()),
                ("api_secret", credentials.api_secret.as_str()),
                ("data_type", self.data_type.as_str()),
            ]),
            ApiVersion::V2 => request
                .header("Content-Type", "application/json")
                .bearer_auth(&credentials.token),
        }
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response> {
        let response = request.send().await?;
        info!("Response received with status: {}", response.status());
        Ok(response)
    }
}

/// The fixed set of components a client exposes, keyed by kind
#[derive(Debug, Clone)]
pub struct Components {
    inner: BTreeMap<ComponentKind, Component>,
}

impl Components {
    pub(crate) fn from_map(inner: BTreeMap<ComponentKind, Component>) -> Self {
        Self { inner }
    }

    pub fn get(&self, name: &str) -> Option<&Component> {
        name.parse::<ComponentKind>()
            .ok()
            .and_then(|kind| self.inner.get(&kind))
    }

    pub fn get_kind(&self, kind: ComponentKind) -> Option<&Component> {
        self.inner.get(&kind)
    }

    pub fn keys(&self) -> impl Iterator<Item = ComponentKind> + '_ {
        self.inner.keys().copied()
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.keys().map(ComponentKind::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (ComponentKind, &Component)> + '_ {
        self.inner.iter().map(|(kind, component)| (*kind, component))
    }

    pub fn values(&self) -> impl Iterator<Item = &Component> + '_ {
        self.inner.values()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl Index<ComponentKind> for Components {
    type Output = Component;

    fn index(&self, kind: ComponentKind) -> &Component {
        &self.inner[&kind]
    }
}

impl Index<&str> for Components {
    type Output = Component;

    fn index(&self, name: &str) -> &Component {
        match self.get(name) {
            Some(component) => component,
            None => panic!("no component named {name:?}"),
        }
    }
}
