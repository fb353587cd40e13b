//! Client configuration types.

use std::time::Duration;

use evercam_core::{Credentials, Endpoint, Error, Result};

/// Default API host.
pub const DEFAULT_HOST: &str = "api.evercam.io";

/// Default URL scheme.
pub const DEFAULT_SCHEME: &str = "https";

/// Default API version segment.
pub const DEFAULT_VERSION: &str = "1";

/// Default transport timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Connection configuration for an [`crate::Api`] instance.
///
/// Immutable once built. Credentials are validated at build time, never at
/// first call.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    credentials: Credentials,
    scheme: String,
    host: String,
    port: Option<u16>,
    version: String,
    timeout: Duration,
}

impl ApiConfig {
    /// Create a new configuration builder.
    #[must_use]
    pub fn builder() -> ApiConfigBuilder {
        ApiConfigBuilder::default()
    }

    /// The configured credentials.
    #[must_use]
    pub const fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// The endpoint URL builder for these connection settings.
    #[must_use]
    pub fn endpoint(&self) -> Endpoint {
        Endpoint::new(
            self.scheme.as_str(),
            self.host.as_str(),
            self.port,
            self.version.as_str(),
        )
    }

    /// Transport timeout, passed through to the transport untouched.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }
}

/// Builder for [`ApiConfig`].
#[derive(Debug, Clone, Default)]
pub struct ApiConfigBuilder {
    api_id: Option<String>,
    api_key: Option<String>,
    scheme: Option<String>,
    host: Option<String>,
    port: Option<u16>,
    version: Option<String>,
    timeout: Option<Duration>,
}

impl ApiConfigBuilder {
    /// Set the API id (required).
    #[must_use]
    pub fn api_id(mut self, api_id: impl Into<String>) -> Self {
        self.api_id = Some(api_id.into());
        self
    }

    /// Set the API key (required).
    #[must_use]
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Override the URL scheme (default `"https"`).
    #[must_use]
    pub fn scheme(mut self, scheme: impl Into<String>) -> Self {
        self.scheme = Some(scheme.into());
        self
    }

    /// Override the API host (default `"api.evercam.io"`).
    #[must_use]
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    /// Set an explicit port (default: none, the scheme's port).
    #[must_use]
    pub const fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// Override the API version segment (default `"1"`).
    #[must_use]
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Override the transport timeout (default 30 s).
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build the configuration, validating the credentials.
    ///
    /// # Errors
    ///
    /// Fails with a configuration error when `api_id` or `api_key` is
    /// missing or empty.
    pub fn build(self) -> Result<ApiConfig> {
        let api_id = self
            .api_id
            .ok_or_else(|| Error::configuration("No API id specified."))?;
        let api_key = self
            .api_key
            .ok_or_else(|| Error::configuration("No API key specified."))?;
        let credentials = Credentials::new(api_id, api_key)?;

        Ok(ApiConfig {
            credentials,
            scheme: self.scheme.unwrap_or_else(|| DEFAULT_SCHEME.to_owned()),
            host: self.host.unwrap_or_else(|| DEFAULT_HOST.to_owned()),
            port: self.port,
            version: self.version.unwrap_or_else(|| DEFAULT_VERSION.to_owned()),
            timeout: self.timeout.unwrap_or(DEFAULT_TIMEOUT),
        })
    }
}
