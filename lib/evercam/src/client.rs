//! The Evercam API client and its request pipeline.
//!
//! [`Api`] composes the endpoint builder, credential injection, and a
//! [`Transport`] into the one calling convention every resource method
//! reduces to: build the URL, inject credentials, dispatch, interpret.

use bytes::Bytes;
use serde_json::Value;
use tracing::{error, info};

use evercam_core::{ApiResponse, Endpoint, Error, Params, Result, Verb};

use crate::config::{ApiConfig, ApiConfigBuilder};
use crate::route::{Extract, Route};
use crate::transport::{HyperTransport, Transport};

/// Client for the Evercam API.
///
/// Cheap to clone; safe to share across tasks. The configuration is
/// immutable after construction and each call performs exactly one logical
/// network round trip.
///
/// # Example
///
/// ```ignore
/// let api = Api::builder()
///     .api_id("my-api-id")
///     .api_key("my-api-key")
///     .build()?;
///
/// let logs = api.get_logs("front-door", LogOptions::default()).await?;
/// ```
#[derive(Debug, Clone)]
pub struct Api<T = HyperTransport> {
    config: ApiConfig,
    endpoint: Endpoint,
    transport: T,
}

impl Api<HyperTransport> {
    /// Create a client from a finished configuration, using the default
    /// hyper transport.
    #[must_use]
    pub fn new(config: ApiConfig) -> Self {
        let transport = HyperTransport::new(config.timeout());
        Self::with_transport(config, transport)
    }

    /// Create a builder for the client.
    #[must_use]
    pub fn builder() -> ApiBuilder {
        ApiBuilder::default()
    }
}

impl<T: Transport> Api<T> {
    /// Create a client with a custom transport implementation.
    #[must_use]
    pub fn with_transport(config: ApiConfig, transport: T) -> Self {
        let endpoint = config.endpoint();
        Self {
            config,
            endpoint,
            transport,
        }
    }

    /// The client configuration.
    #[must_use]
    pub const fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Make a call against an arbitrary API path.
    ///
    /// Credentials are injected into `params` automatically; `path` is the
    /// short suffix (e.g. `"/cameras/front-door"`), versioned and given a
    /// `.json` extension by the endpoint builder. The raw response is
    /// returned uninterpreted.
    pub async fn call(&self, path: &str, verb: Verb, params: Params) -> Result<ApiResponse> {
        let values = self.config.credentials().inject(&params);
        let url = self.endpoint.url(path)?;
        info!("{verb} {url}");
        self.transport.dispatch(verb, url, &values).await
    }

    /// [`Self::call`] followed by JSON interpretation.
    pub async fn fetch_json(
        &self,
        path: &str,
        verb: Verb,
        params: Params,
    ) -> Result<Option<Value>> {
        self.call(path, verb, params).await?.json()
    }

    /// [`Self::call`] followed by raw-body interpretation.
    pub async fn fetch_raw(&self, path: &str, verb: Verb, params: Params) -> Result<Bytes> {
        self.call(path, verb, params).await?.raw()
    }

    /// Ping the API, confirming connectivity and credential validity.
    pub async fn test(&self) -> Result<Option<Value>> {
        self.fetch_json("/test", Verb::Get, Params::new()).await
    }

    /// Run one table-driven resource route: call, interpret, check the
    /// envelope key, extract.
    pub(crate) async fn resource(&self, route: Route, params: Params) -> Result<Value> {
        let payload = self.fetch_json(&route.path, route.verb, params).await?;

        let mut data = match payload {
            Some(Value::Object(map)) => map,
            _ => return Err(self.invalid_response()),
        };
        let Some(value) = data.remove(route.envelope) else {
            return Err(self.invalid_response());
        };

        match route.extract {
            Extract::Value => Ok(value),
            Extract::First => match value {
                Value::Array(mut items) if !items.is_empty() => Ok(items.remove(0)),
                _ => Err(self.invalid_response()),
            },
            Extract::Paged => {
                let pages = data.remove("pages").unwrap_or(Value::Null);
                let mut page = serde_json::Map::new();
                page.insert(route.envelope.to_owned(), value);
                page.insert("pages".to_owned(), pages);
                Ok(Value::Object(page))
            }
        }
    }

    fn invalid_response(&self) -> Error {
        let message = "Invalid response received from server.";
        error!("{message}");
        Error::invalid_response(message)
    }
}

/// Builder for [`Api`] with the default transport.
#[derive(Debug, Clone, Default)]
pub struct ApiBuilder {
    config: ApiConfigBuilder,
}

impl ApiBuilder {
    /// Set the API id (required).
    #[must_use]
    pub fn api_id(mut self, api_id: impl Into<String>) -> Self {
        self.config = self.config.api_id(api_id);
        self
    }

    /// Set the API key (required).
    #[must_use]
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.config = self.config.api_key(api_key);
        self
    }

    /// Override the URL scheme (default `"https"`).
    #[must_use]
    pub fn scheme(mut self, scheme: impl Into<String>) -> Self {
        self.config = self.config.scheme(scheme);
        self
    }

    /// Override the API host (default `"api.evercam.io"`).
    #[must_use]
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.config = self.config.host(host);
        self
    }

    /// Set an explicit port.
    #[must_use]
    pub fn port(mut self, port: u16) -> Self {
        self.config = self.config.port(port);
        self
    }

    /// Override the API version segment (default `"1"`).
    #[must_use]
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.config = self.config.version(version);
        self
    }

    /// Override the transport timeout (default 30 s).
    #[must_use]
    pub fn timeout(mut self, timeout: std::time::Duration) -> Self {
        self.config = self.config.timeout(timeout);
        self
    }

    /// Point the client at a base URL, typically a test server.
    ///
    /// Splits the URL into scheme, host, and port overrides.
    ///
    /// # Errors
    ///
    /// Fails when the URL cannot be parsed or has no host.
    pub fn base_url(mut self, base_url: impl AsRef<str>) -> Result<Self> {
        let url = url::Url::parse(base_url.as_ref())?;
        let host = url
            .host_str()
            .ok_or_else(|| Error::configuration("base URL has no host"))?
            .to_owned();
        self.config = self.config.scheme(url.scheme()).host(host);
        if let Some(port) = url.port() {
            self.config = self.config.port(port);
        }
        Ok(self)
    }

    /// Build the client, validating the configuration.
    ///
    /// # Errors
    ///
    /// Fails with a configuration error when credentials are missing. No
    /// network call is attempted.
    pub fn build(self) -> Result<Api<HyperTransport>> {
        Ok(Api::new(self.config.build()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> ApiConfig {
        ApiConfig::builder()
            .api_id("123456")
            .api_key("1a2b3c4d5e6a7b8c9d0e")
            .build()
            .expect("config")
    }

    /// Transport stub that returns a canned response and records nothing.
    #[derive(Clone)]
    struct Canned(u16, &'static str);

    impl Transport for Canned {
        async fn dispatch(
            &self,
            _verb: Verb,
            _url: url::Url,
            _params: &Params,
        ) -> Result<ApiResponse> {
            Ok(ApiResponse::new(self.0, self.1))
        }
    }

    #[tokio::test]
    async fn resource_extracts_envelope_value() {
        let api = Api::with_transport(config(), Canned(200, r#"{"logs": [{"action": "online"}]}"#));
        let route = Route::get("/cameras/test/logs", "logs");

        let logs = api.resource(route, Params::new()).await.expect("logs");

        assert_eq!(logs, serde_json::json!([{"action": "online"}]));
    }

    #[tokio::test]
    async fn resource_extracts_first_element() {
        let api = Api::with_transport(config(), Canned(200, r#"{"users": [{"id": "alice"}]}"#));
        let route = Route::get("/users/alice", "users").first();

        let user = api.resource(route, Params::new()).await.expect("user");

        assert_eq!(user, serde_json::json!({"id": "alice"}));
    }

    #[tokio::test]
    async fn resource_first_rejects_empty_array() {
        let api = Api::with_transport(config(), Canned(200, r#"{"users": []}"#));
        let route = Route::get("/users/alice", "users").first();

        let err = api
            .resource(route, Params::new())
            .await
            .expect_err("should fail");
        assert_eq!(err.to_string(), "Invalid response received from server.");
    }

    #[tokio::test]
    async fn resource_rejects_missing_envelope() {
        let api = Api::with_transport(config(), Canned(200, "{}"));
        let route = Route::get("/cameras/test/logs", "logs");

        let err = api
            .resource(route, Params::new())
            .await
            .expect_err("should fail");
        assert!(err.is_invalid_response());
        assert_eq!(err.to_string(), "Invalid response received from server.");
    }

    #[tokio::test]
    async fn resource_rejects_empty_payload() {
        let api = Api::with_transport(config(), Canned(200, ""));
        let route = Route::get("/cameras/test/logs", "logs");

        let err = api
            .resource(route, Params::new())
            .await
            .expect_err("should fail");
        assert_eq!(err.to_string(), "Invalid response received from server.");
    }

    #[tokio::test]
    async fn resource_paged_carries_pages() {
        let api = Api::with_transport(
            config(),
            Canned(200, r#"{"cameras": [{"id": "c1"}], "pages": 4}"#),
        );
        let route = Route::get("/public/cameras", "cameras").paged();

        let page = api.resource(route, Params::new()).await.expect("page");

        assert_eq!(
            page,
            serde_json::json!({"cameras": [{"id": "c1"}], "pages": 4})
        );
    }

    #[tokio::test]
    async fn resource_surfaces_api_errors() {
        let api = Api::with_transport(config(), Canned(400, r#"{"message": "Its Broken"}"#));
        let route = Route::get("/cameras/test/logs", "logs");

        let err = api
            .resource(route, Params::new())
            .await
            .expect_err("should fail");
        assert!(err.is_api());
        assert_eq!(
            err.to_string(),
            "Evercam API call returned an error. Message: Its Broken"
        );
    }
}
