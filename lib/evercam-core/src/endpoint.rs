//! Endpoint URL construction.

use url::Url;

use crate::Result;

/// Builds fully qualified, versioned endpoint URLs from short path suffixes.
///
/// Pure functions of the connection settings and the input path; no network
/// or state access.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    scheme: String,
    host: String,
    port: Option<u16>,
    version: String,
}

impl Endpoint {
    /// Create an endpoint builder from connection settings.
    #[must_use]
    pub fn new(
        scheme: impl Into<String>,
        host: impl Into<String>,
        port: Option<u16>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            scheme: scheme.into(),
            host: host.into(),
            port,
            version: version.into(),
        }
    }

    /// The base URL: `{scheme}://{host}` plus `:{port}` when a port is set.
    #[must_use]
    pub fn base_url(&self) -> String {
        match self.port {
            Some(port) => format!("{}://{}:{port}", self.scheme, self.host),
            None => format!("{}://{}", self.scheme, self.host),
        }
    }

    /// The versioned path for an API call suffix.
    ///
    /// A suffix that already carries an extension (any literal `.` in it)
    /// is used as-is; otherwise `.json` is appended.
    #[must_use]
    pub fn api_path(&self, suffix: &str) -> String {
        if suffix.contains('.') {
            format!("/v{}{suffix}", self.version)
        } else {
            format!("/v{}{suffix}.json", self.version)
        }
    }

    /// The fully qualified URL for an API call suffix.
    #[must_use]
    pub fn endpoint_url(&self, suffix: &str) -> String {
        format!("{}{}", self.base_url(), self.api_path(suffix))
    }

    /// [`Self::endpoint_url`] parsed into a [`Url`].
    pub fn url(&self, suffix: &str) -> Result<Url> {
        Url::parse(&self.endpoint_url(suffix)).map_err(Into::into)
    }
}
