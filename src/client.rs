use std::collections::BTreeMap;
use std::ops::{Deref, DerefMut};

use reqwest::Client;
use tracing::{debug, info};

use crate::auth::{JwtGenerator, TokenGenerator};
use crate::components::{Component, ComponentKind, Components, Credentials, SharedCredentials};
use crate::error::{Result, ZoomError};
use crate::models::{ApiVersion, ClientConfig, DataType, Timeout};

/// Client for the Zoom API
pub struct ZoomClient {
    version: ApiVersion,
    base_uri: String,
    data_type: DataType,
    timeout: Option<Timeout>,
    credentials: SharedCredentials,
    token_generator: Box<dyn TokenGenerator>,
    components: Components,
}

/// Collects construction options for a [`ZoomClient`]
///
/// Option values that fail conversion are held until [`build`](Self::build),
/// which reports the version error first and the timeout error second.
pub struct ZoomClientBuilder {
    api_key: String,
    api_secret: String,
    version: Result<ApiVersion>,
    base_uri: Option<String>,
    timeout: Result<Option<Timeout>>,
    data_type: DataType,
    token_generator: Box<dyn TokenGenerator>,
}

impl ZoomClientBuilder {
    fn new(api_key: String, api_secret: String) -> Self {
        Self {
            api_key,
            api_secret,
            version: Ok(ApiVersion::default()),
            base_uri: None,
            timeout: Ok(None),
            data_type: DataType::default(),
            token_generator: Box::new(JwtGenerator),
        }
    }

    /// API version; accepts an [`ApiVersion`], an integer or a string such as `"v1"`
    pub fn version<V>(mut self, version: V) -> Self
    where
        V: TryInto<ApiVersion>,
        V::Error: Into<ZoomError>,
    {
        self.version = version.try_into().map_err(Into::into);
        self
    }

    /// Base URI used verbatim by every component, whatever the version
    pub fn base_uri(mut self, base_uri: impl Into<String>) -> Self {
        self.base_uri = Some(base_uri.into());
        self
    }

    /// Request timeout in whole seconds
    pub fn timeout<T>(mut self, timeout: T) -> Self
    where
        T: TryInto<Timeout>,
        T::Error: Into<ZoomError>,
    {
        self.timeout = timeout.try_into().map(Some).map_err(Into::into);
        self
    }

    pub fn data_type(mut self, data_type: DataType) -> Self {
        self.data_type = data_type;
        self
    }

    pub fn token_generator(mut self, generator: impl TokenGenerator + 'static) -> Self {
        self.token_generator = Box::new(generator);
        self
    }

    pub fn build(self) -> Result<ZoomClient> {
        let version = self.version?;
        let timeout = self.timeout?;

        let base_uri = self
            .base_uri
            .unwrap_or_else(|| version.base_uri().to_string());

        let token = self
            .token_generator
            .generate(&self.api_key, &self.api_secret)?;

        let credentials = SharedCredentials::new(Credentials {
            api_key: self.api_key,
            api_secret: self.api_secret,
            token,
        });

        let mut http = Client::builder();
        if let Some(timeout) = timeout {
            http = http.timeout(timeout.as_duration());
        }
        let http = http.build()?;

        let components = ComponentKind::ALL
            .into_iter()
            .map(|kind| {
                let component = Component::new(
                    kind,
                    http.clone(),
                    base_uri.clone(),
                    version,
                    self.data_type,
                    timeout,
                    credentials.clone(),
                );
                (kind, component)
            })
            .collect::<BTreeMap<_, _>>();

        info!(
            "Zoom client configured for API v{} at {} with {} components",
            version,
            base_uri,
            components.len()
        );

        Ok(ZoomClient {
            version,
            base_uri,
            data_type: self.data_type,
            timeout,
            credentials,
            token_generator: self.token_generator,
            components: Components::from_map(components),
        })
    }
}

impl ZoomClient {
    /// Create a client with the default options: API v2, JSON, no timeout
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Result<Self> {
        Self::builder(api_key, api_secret).build()
    }

    pub fn builder(api_key: impl Into<String>, api_secret: impl Into<String>) -> ZoomClientBuilder {
        ZoomClientBuilder::new(api_key.into(), api_secret.into())
    }

    /// Snapshot of the current configuration, including the current token
    pub fn config(&self) -> ClientConfig {
        let credentials = self.credentials.read();
        ClientConfig {
            api_key: credentials.api_key.clone(),
            api_secret: credentials.api_secret.clone(),
            data_type: self.data_type,
            token: credentials.token.clone(),
            version: self.version,
            base_uri: self.base_uri.clone(),
        }
    }

    pub fn components(&self) -> &Components {
        &self.components
    }

    pub fn component(&self, kind: ComponentKind) -> &Component {
        &self.components[kind]
    }

    pub fn version(&self) -> ApiVersion {
        self.version
    }

    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// Timeout in seconds, if one was configured
    pub fn timeout(&self) -> Option<u64> {
        self.timeout.map(Timeout::as_secs)
    }

    pub fn api_key(&self) -> String {
        self.credentials.read().api_key.clone()
    }

    /// Replace the API key.
    ///
    /// The token is not regenerated until [`refresh_token`](Self::refresh_token).
    pub fn set_api_key(&mut self, api_key: impl Into<String>) {
        self.credentials.write().api_key = api_key.into();
    }

    pub fn api_secret(&self) -> String {
        self.credentials.read().api_secret.clone()
    }

    /// Replace the API secret.
    ///
    /// The token is not regenerated until [`refresh_token`](Self::refresh_token).
    pub fn set_api_secret(&mut self, api_secret: impl Into<String>) {
        self.credentials.write().api_secret = api_secret.into();
    }

    /// Generate a new token from the current key and secret
    pub fn refresh_token(&mut self) -> Result<()> {
        let (api_key, api_secret) = {
            let credentials = self.credentials.read();
            (credentials.api_key.clone(), credentials.api_secret.clone())
        };

        let token = self.token_generator.generate(&api_key, &api_secret)?;
        self.credentials.write().token = token;

        info!("Refreshed Zoom API token");
        Ok(())
    }

    /// Borrow the client for a scope; dropping the guard releases nothing
    pub fn scope(&mut self) -> ClientScope<'_> {
        debug!("Entering Zoom client scope");
        ClientScope { client: self }
    }

    pub fn contacts(&self) -> &Component {
        self.component(ComponentKind::Contacts)
    }

    pub fn group(&self) -> &Component {
        self.component(ComponentKind::Group)
    }

    pub fn live_stream(&self) -> &Component {
        self.component(ComponentKind::LiveStream)
    }

    pub fn meeting(&self) -> &Component {
        self.component(ComponentKind::Meeting)
    }

    pub fn metric(&self) -> &Component {
        self.component(ComponentKind::Metric)
    }

    pub fn past_meeting(&self) -> &Component {
        self.component(ComponentKind::PastMeeting)
    }

    pub fn phone(&self) -> &Component {
        self.component(ComponentKind::Phone)
    }

    pub fn recording(&self) -> &Component {
        self.component(ComponentKind::Recording)
    }

    pub fn report(&self) -> &Component {
        self.component(ComponentKind::Report)
    }

    pub fn room(&self) -> &Component {
        self.component(ComponentKind::Room)
    }

    pub fn user(&self) -> &Component {
        self.component(ComponentKind::User)
    }

    pub fn webinar(&self) -> &Component {
        self.component(ComponentKind::Webinar)
    }
}

impl std::fmt::Debug for ZoomClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ZoomClient")
            .field("version", &self.version)
            .field("base_uri", &self.base_uri)
            .field("data_type", &self.data_type)
            .field("timeout", &self.timeout)
            .field("components", &self.components.len())
            .finish_non_exhaustive()
    }
}

/// Scoped borrow of a [`ZoomClient`], see [`ZoomClient::scope`]
pub struct ClientScope<'a> {
    client: &'a mut ZoomClient,
}

impl Deref for ClientScope<'_> {
    type Target = ZoomClient;

    fn deref(&self) -> &ZoomClient {
        self.client
    }
}

impl DerefMut for ClientScope<'_> {
    fn deref_mut(&mut self) -> &mut ZoomClient {
        self.client
    }
}

impl Drop for ClientScope<'_> {
    fn drop(&mut self) {
        debug!("Leaving Zoom client scope");
    }
}
