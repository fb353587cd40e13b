//! API credentials and credential injection.

use crate::{Error, Params, Result};

/// An Evercam API id/key pair.
///
/// Every request authenticates through `api_id` and `api_key` request
/// parameters; the API never reads credentials from headers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    api_id: String,
    api_key: String,
}

impl Credentials {
    /// Create a credential pair.
    ///
    /// # Errors
    ///
    /// Fails with a configuration error when either value is empty.
    pub fn new(api_id: impl Into<String>, api_key: impl Into<String>) -> Result<Self> {
        let api_id = api_id.into();
        let api_key = api_key.into();
        if api_id.is_empty() {
            return Err(Error::configuration("No API id specified."));
        }
        if api_key.is_empty() {
            return Err(Error::configuration("No API key specified."));
        }
        Ok(Self { api_id, api_key })
    }

    /// The API id.
    #[must_use]
    pub fn api_id(&self) -> &str {
        &self.api_id
    }

    /// The API key.
    #[must_use]
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Return a copy of `params` with `api_id` and `api_key` set from this
    /// pair, overwriting any caller-supplied values. The input is left
    /// untouched.
    #[must_use]
    pub fn inject(&self, params: &Params) -> Params {
        params
            .clone()
            .with("api_id", self.api_id.as_str())
            .with("api_key", self.api_key.as_str())
    }
}
