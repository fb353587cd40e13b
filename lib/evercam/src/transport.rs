//! Transport dispatch.
//!
//! [`Transport`] is the pluggable capability that actually puts a request on
//! the wire; [`HyperTransport`] is the default implementation on top of
//! hyper-util with rustls. The pipeline hands the transport a verb, a fully
//! qualified URL, and the complete parameter mapping; placement of the
//! parameters (query string vs form body) is decided here, uniformly for
//! every call.

use std::future::Future;
use std::time::Duration;

use bytes::Bytes;
use http_body_util::{BodyExt, Full};
use hyper_rustls::HttpsConnector;
use hyper_util::{
    client::legacy::{Client, connect::HttpConnector},
    rt::TokioExecutor,
};
use url::Url;

use evercam_core::{ApiResponse, Error, Params, Result, Verb};

use crate::connector::https_connector;

/// Maximum number of redirects followed before giving up.
const MAX_REDIRECTS: usize = 10;

/// Capability for executing one HTTP round trip.
///
/// Implementations must follow redirects transparently and perform exactly
/// one logical network call per invocation; retrying is never the
/// transport's business.
pub trait Transport: Send + Sync {
    /// Dispatch a request and return the raw response.
    ///
    /// GET and DELETE send `params` as the URL query string; POST, PATCH,
    /// and PUT send them as an `application/x-www-form-urlencoded` body.
    ///
    /// # Errors
    ///
    /// Returns an error on connection, TLS, timeout, or redirect failures.
    fn dispatch(
        &self,
        verb: Verb,
        url: Url,
        params: &Params,
    ) -> impl Future<Output = Result<ApiResponse>> + Send;
}

/// Default transport: a pooled hyper-util client over rustls.
#[derive(Clone)]
pub struct HyperTransport {
    inner: Client<HttpsConnector<HttpConnector>, Full<Bytes>>,
    timeout: Duration,
    max_redirects: usize,
}

impl std::fmt::Debug for HyperTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HyperTransport")
            .field("timeout", &self.timeout)
            .field("max_redirects", &self.max_redirects)
            .finish_non_exhaustive()
    }
}

impl HyperTransport {
    /// Create a transport with the given request timeout.
    #[must_use]
    pub fn new(timeout: Duration) -> Self {
        let inner = Client::builder(TokioExecutor::new()).build(https_connector());
        Self {
            inner,
            timeout,
            max_redirects: MAX_REDIRECTS,
        }
    }

    /// Execute one request/response exchange, without redirect handling.
    async fn round_trip(
        &self,
        verb: Verb,
        url: &Url,
        form_body: Option<&str>,
    ) -> Result<Exchange> {
        let mut builder = http::Request::builder()
            .method(http::Method::from(verb))
            .uri(url.as_str());

        let body = match form_body {
            Some(form) => {
                builder = builder.header(
                    http::header::CONTENT_TYPE,
                    "application/x-www-form-urlencoded",
                );
                Full::new(Bytes::from(form.to_owned()))
            }
            None => Full::default(),
        };

        let request = builder
            .body(body)
            .map_err(|e| Error::invalid_request(e.to_string()))?;

        let response = tokio::time::timeout(self.timeout, self.inner.request(request))
            .await
            .map_err(|_| Error::Timeout)?
            .map_err(map_hyper_error)?;

        let status = response.status().as_u16();
        let location = response
            .headers()
            .get(http::header::LOCATION)
            .and_then(|value| value.to_str().ok())
            .map(ToOwned::to_owned);
        let body = response
            .into_body()
            .collect()
            .await
            .map_err(|e| Error::connection(e.to_string()))?
            .to_bytes();

        Ok(Exchange {
            status,
            location,
            body,
        })
    }

    /// Execute a request, following redirects until a final response.
    async fn execute(
        &self,
        mut verb: Verb,
        mut url: Url,
        mut form_body: Option<String>,
    ) -> Result<ApiResponse> {
        let mut redirects = 0;

        loop {
            let exchange = self.round_trip(verb, &url, form_body.as_deref()).await?;
            let status = exchange.status;

            if !is_redirect(status) {
                return Ok(ApiResponse::new(status, exchange.body));
            }

            if redirects >= self.max_redirects {
                return Err(Error::TooManyRedirects {
                    count: redirects,
                    max: self.max_redirects,
                });
            }

            let location = exchange.location.ok_or_else(|| {
                Error::InvalidRedirect("redirect response missing Location header".into())
            })?;
            url = resolve_redirect_url(&url, &location)?;

            // 301/302/303 re-issue as a bodyless GET; 307/308 preserve the
            // verb and body.
            if !matches!(status, 307 | 308) {
                verb = Verb::Get;
                form_body = None;
            }

            redirects += 1;
        }
    }
}

/// One buffered request/response exchange.
struct Exchange {
    status: u16,
    location: Option<String>,
    body: Bytes,
}

impl Transport for HyperTransport {
    async fn dispatch(&self, verb: Verb, url: Url, params: &Params) -> Result<ApiResponse> {
        let (url, form_body) = place_params(verb, url, params)?;
        self.execute(verb, url, form_body).await
    }
}

/// Attach parameters to the request: query string for GET/DELETE, form body
/// for the mutating verbs.
fn place_params(verb: Verb, mut url: Url, params: &Params) -> Result<(Url, Option<String>)> {
    if verb.sends_body() {
        let body = params.to_form_body()?;
        Ok((url, Some(body)))
    } else {
        if !params.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in params.to_pairs() {
                pairs.append_pair(&key, &value);
            }
        }
        Ok((url, None))
    }
}

/// Redirect statuses the transport follows automatically.
fn is_redirect(status: u16) -> bool {
    matches!(status, 301 | 302 | 303 | 307 | 308)
}

/// Resolve a `Location` value relative to the URL that produced it.
fn resolve_redirect_url(base_url: &Url, location: &str) -> Result<Url> {
    if let Ok(url) = Url::parse(location) {
        return Ok(url);
    }
    base_url.join(location).map_err(Error::InvalidUrl)
}

#[allow(clippy::needless_pass_by_value)]
fn map_hyper_error(err: hyper_util::client::legacy::Error) -> Error {
    let msg = err.to_string();

    if err.is_connect() {
        return Error::connection(msg);
    }

    if msg.contains("ssl") || msg.contains("tls") || msg.contains("certificate") {
        return Error::tls(msg);
    }

    Error::connection(msg)
}
