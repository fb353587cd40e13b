//! Error types for the Evercam client.

use derive_more::{Display, Error, From};

/// Main error type for Evercam API operations.
///
/// The first three variants are the contract surface of the client: their
/// `Display` output is exactly the message text the remote interaction
/// produced, so callers may match on either the variant or the rendered
/// message.
#[derive(Debug, Display, Error, From)]
pub enum Error {
    /// Client construction problem: missing credentials or an unsupported
    /// HTTP verb.
    #[display("{_0}")]
    #[from(skip)]
    Configuration(#[error(not(source))] String),

    /// The server answered with a success status but the payload was
    /// missing, unparseable, or structurally wrong.
    #[display("{_0}")]
    #[from(skip)]
    InvalidResponse(#[error(not(source))] String),

    /// The remote API reported an error, either through a `"message"`
    /// envelope or a bare non-2xx status.
    #[display("{_0}")]
    #[from(skip)]
    Api(#[error(not(source))] String),

    /// Network/connection errors.
    #[display("connection error: {_0}")]
    #[from(skip)]
    Connection(#[error(not(source))] String),

    /// TLS/SSL errors.
    #[display("TLS error: {_0}")]
    #[from(skip)]
    Tls(#[error(not(source))] String),

    /// Request timeout.
    #[display("request timeout")]
    #[from(skip)]
    Timeout,

    /// Invalid request configuration.
    #[display("invalid request: {_0}")]
    #[from(skip)]
    InvalidRequest(#[error(not(source))] String),

    /// Form URL-encoded serialization error.
    #[display("form serialization error: {_0}")]
    #[from]
    FormSerialization(serde_urlencoded::ser::Error),

    /// URL parsing error.
    #[display("invalid URL: {_0}")]
    #[from]
    InvalidUrl(url::ParseError),

    /// Too many redirects.
    #[display("too many redirects ({count} exceeded max of {max})")]
    #[from(skip)]
    TooManyRedirects {
        /// Number of redirects followed.
        count: usize,
        /// Maximum allowed redirects.
        max: usize,
    },

    /// Invalid redirect response.
    #[display("invalid redirect: {_0}")]
    #[from(skip)]
    InvalidRedirect(#[error(not(source))] String),
}

/// Result type alias using [`crate::Error`].
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a configuration error.
    #[must_use]
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    /// Create an invalid-response error.
    #[must_use]
    pub fn invalid_response(message: impl Into<String>) -> Self {
        Self::InvalidResponse(message.into())
    }

    /// Create an API error.
    #[must_use]
    pub fn api(message: impl Into<String>) -> Self {
        Self::Api(message.into())
    }

    /// Create a connection error.
    #[must_use]
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection(message.into())
    }

    /// Create a TLS error.
    #[must_use]
    pub fn tls(message: impl Into<String>) -> Self {
        Self::Tls(message.into())
    }

    /// Create an invalid request error.
    #[must_use]
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest(message.into())
    }

    /// Returns `true` if this is a configuration error.
    #[must_use]
    pub const fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration(_))
    }

    /// Returns `true` if this is an invalid-response error.
    #[must_use]
    pub const fn is_invalid_response(&self) -> bool {
        matches!(self, Self::InvalidResponse(_))
    }

    /// Returns `true` if this is an error reported by the remote API.
    #[must_use]
    pub const fn is_api(&self) -> bool {
        matches!(self, Self::Api(_))
    }

    /// Returns `true` if this is a timeout error.
    #[must_use]
    pub const fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout)
    }

    /// Returns `true` if this is a connection error.
    #[must_use]
    pub const fn is_connection(&self) -> bool {
        matches!(self, Self::Connection(_))
    }
}
