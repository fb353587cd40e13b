//! HTTP verb types.

use derive_more::Display;

/// HTTP verb used for an API request.
///
/// The Evercam API is driven entirely through these five verbs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display)]
pub enum Verb {
    /// GET - retrieve a resource.
    #[default]
    #[display("GET")]
    Get,
    /// POST - create a resource.
    #[display("POST")]
    Post,
    /// PATCH - partially update a resource.
    #[display("PATCH")]
    Patch,
    /// PUT - replace a resource.
    #[display("PUT")]
    Put,
    /// DELETE - remove a resource.
    #[display("DELETE")]
    Delete,
}

impl Verb {
    /// Returns `true` if request parameters travel in a form-encoded body
    /// rather than the query string.
    ///
    /// GET and DELETE send parameters as query pairs; the mutating verbs
    /// send them as an `application/x-www-form-urlencoded` body.
    #[must_use]
    pub const fn sends_body(&self) -> bool {
        matches!(self, Self::Post | Self::Patch | Self::Put)
    }
}

impl From<Verb> for http::Method {
    fn from(verb: Verb) -> Self {
        match verb {
            Verb::Get => Self::GET,
            Verb::Post => Self::POST,
            Verb::Patch => Self::PATCH,
            Verb::Put => Self::PUT,
            Verb::Delete => Self::DELETE,
        }
    }
}

impl TryFrom<http::Method> for Verb {
    type Error = crate::Error;

    fn try_from(method: http::Method) -> Result<Self, Self::Error> {
        match method {
            http::Method::GET => Ok(Self::Get),
            http::Method::POST => Ok(Self::Post),
            http::Method::PATCH => Ok(Self::Patch),
            http::Method::PUT => Ok(Self::Put),
            http::Method::DELETE => Ok(Self::Delete),
            other => Err(crate::Error::configuration(format!(
                "Unrecognised HTTP method '{other}' specified for request."
            ))),
        }
    }
}
