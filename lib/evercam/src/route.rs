//! The declarative resource route table.
//!
//! Every resource method is a row in a table of (path, verb, envelope key,
//! extraction shape); [`Route`] is that row and
//! [`crate::Api::resource`] is the single generic method the rows drive.

use evercam_core::Verb;

/// How the payload under the envelope key is turned into a return value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Extract {
    /// Return the value under the envelope key as-is.
    Value,
    /// Return the first element of the array under the envelope key; an
    /// empty or non-array value is an invalid response.
    First,
    /// Return the value under the envelope key together with the top-level
    /// `"pages"` value.
    Paged,
}

/// One row of the resource table.
#[derive(Debug, Clone)]
pub(crate) struct Route {
    pub(crate) path: String,
    pub(crate) verb: Verb,
    pub(crate) envelope: &'static str,
    pub(crate) extract: Extract,
}

impl Route {
    pub(crate) fn new(verb: Verb, path: impl Into<String>, envelope: &'static str) -> Self {
        Self {
            path: path.into(),
            verb,
            envelope,
            extract: Extract::Value,
        }
    }

    pub(crate) fn get(path: impl Into<String>, envelope: &'static str) -> Self {
        Self::new(Verb::Get, path, envelope)
    }

    pub(crate) fn post(path: impl Into<String>, envelope: &'static str) -> Self {
        Self::new(Verb::Post, path, envelope)
    }

    pub(crate) fn delete(path: impl Into<String>, envelope: &'static str) -> Self {
        Self::new(Verb::Delete, path, envelope)
    }

    /// Extract the first element instead of the whole value.
    pub(crate) fn first(mut self) -> Self {
        self.extract = Extract::First;
        self
    }

    /// Extract the value together with the `"pages"` counter.
    pub(crate) fn paged(mut self) -> Self {
        self.extract = Extract::Paged;
        self
    }
}
